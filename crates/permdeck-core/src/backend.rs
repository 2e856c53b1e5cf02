//! Permission backend trait
//!
//! The seam between the application and the host operating system's privacy
//! APIs. Production code uses the platform backend from [`crate::sys`];
//! tests inject [`crate::SimulatedPermissions`].

use std::io;

use thiserror::Error;

use crate::device::{AuthorizationStatus, Device};

/// Errors from permission backend operations.
#[derive(Debug, Error)]
pub enum PermissionError {
    /// This platform has no user-visible privacy settings to open.
    #[error("system privacy settings are not available on this platform")]
    SettingsUnavailable,

    /// Launching the system settings application failed.
    #[error("failed to open system privacy settings: {0}")]
    Settings(#[from] io::Error),
}

/// Host permission API for capture devices.
///
/// `request` may present a system dialog and blocks the calling thread until
/// the OS reports an outcome, so callers run it off the UI thread. There is
/// no timeout: if the OS never answers, neither does the call.
pub trait DevicePermissions: Send + Sync {
    /// Current authorization status for a device, without prompting.
    fn status(&self, device: Device) -> AuthorizationStatus;

    /// Request authorization, presenting the system prompt if the status is
    /// still undetermined. Returns the resulting status.
    fn request(&self, device: Device) -> AuthorizationStatus;

    /// Open the host's privacy settings pane for a device, for the case
    /// where a denied or restricted grant can only be changed there.
    fn open_settings(&self, device: Device) -> Result<(), PermissionError>;
}
