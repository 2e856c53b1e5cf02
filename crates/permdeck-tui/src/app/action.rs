//! UI actions
//!
//! Actions produced by the App state machine for the runtime to execute.

use permdeck_core::Device;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Request authorization for a device from the OS.
    Authorize {
        /// Device to request access to.
        device: Device,
    },

    /// Re-query the status of every device.
    Refresh,

    /// Open the host's privacy settings pane for a device.
    OpenSettings {
        /// Device whose pane to open.
        device: Device,
    },
}
