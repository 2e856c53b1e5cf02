//! Fallback backend for platforms without runtime permission prompts
//!
//! Traditional Linux and Windows desktops gate capture devices through file
//! permissions, user groups, or sandbox portals rather than per-app runtime
//! prompts, so every status reports authorized and requests succeed
//! immediately.

use crate::{
    backend::{DevicePermissions, PermissionError},
    device::{AuthorizationStatus, Device},
};

/// Permission backend for platforms without a runtime permission model.
#[derive(Debug, Default)]
pub struct SystemPermissions;

impl SystemPermissions {
    /// Create the backend.
    pub const fn new() -> Self {
        Self
    }
}

impl DevicePermissions for SystemPermissions {
    fn status(&self, device: Device) -> AuthorizationStatus {
        tracing::debug!(%device, "no runtime permission model, reporting authorized");
        AuthorizationStatus::Authorized
    }

    fn request(&self, device: Device) -> AuthorizationStatus {
        tracing::debug!(%device, "no runtime permission model, request granted");
        AuthorizationStatus::Authorized
    }

    fn open_settings(&self, _device: Device) -> Result<(), PermissionError> {
        Err(PermissionError::SettingsUnavailable)
    }
}
