//! UI events
//!
//! Events fed into the App state machine from terminal input and from the
//! permission backend.

use crossterm::event::KeyCode;
use permdeck_core::{AuthorizationStatus, Device};

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyCode),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// The OS reported a status for a device (initial load, refresh, or a
    /// granted request).
    StatusChanged {
        /// Device the report is about.
        device: Device,
        /// Reported status.
        status: AuthorizationStatus,
    },

    /// Something failed out-of-band (denied request, settings launch).
    Error {
        /// Human-readable message.
        message: String,
    },
}
