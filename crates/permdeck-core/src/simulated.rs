//! Simulated permission backend
//!
//! Deterministic in-memory stand-in for the OS permission API, used by tests
//! and by the `--simulate` flag. Every device starts not-determined; a
//! request grants access unless the device was scripted to answer otherwise.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use crate::{
    backend::{DevicePermissions, PermissionError},
    device::{AuthorizationStatus, Device},
};

/// In-memory permission backend with scriptable answers.
#[derive(Debug, Default)]
pub struct SimulatedPermissions {
    status: Mutex<HashMap<Device, AuthorizationStatus>>,
}

impl SimulatedPermissions {
    /// Create a backend where every device is not determined.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the user denying the next (and every later) request.
    pub fn deny(&self, device: Device) {
        self.set(device, AuthorizationStatus::Denied);
    }

    /// Script an out-of-band grant, as if flipped in system settings.
    pub fn grant(&self, device: Device) {
        self.set(device, AuthorizationStatus::Authorized);
    }

    /// Script system policy restricting the device.
    pub fn restrict(&self, device: Device) {
        self.set(device, AuthorizationStatus::Restricted);
    }

    fn set(&self, device: Device, status: AuthorizationStatus) {
        self.lock().insert(device, status);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Device, AuthorizationStatus>> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DevicePermissions for SimulatedPermissions {
    fn status(&self, device: Device) -> AuthorizationStatus {
        self.lock().get(&device).copied().unwrap_or(AuthorizationStatus::NotDetermined)
    }

    fn request(&self, device: Device) -> AuthorizationStatus {
        let mut status = self.lock();
        let current =
            status.get(&device).copied().unwrap_or(AuthorizationStatus::NotDetermined);
        match current {
            // The prompt is only ever shown once; a scripted answer sticks.
            AuthorizationStatus::NotDetermined => {
                status.insert(device, AuthorizationStatus::Authorized);
                AuthorizationStatus::Authorized
            },
            answered => answered,
        }
    }

    fn open_settings(&self, _device: Device) -> Result<(), PermissionError> {
        Ok(())
    }
}
