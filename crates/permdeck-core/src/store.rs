//! Permission state store
//!
//! Tracks the currently selected device and the last-known authorization
//! status per device. Constructor-injected rather than process-global so
//! each test case can own its own store.

use std::collections::HashMap;

use crate::device::{AuthorizationStatus, Device};

/// Last-known authorization state per device, plus the current selection.
///
/// The status map is populated lazily as the OS reports each device; a device
/// with no entry has simply not been queried yet and is treated as
/// unauthorized by consumers.
#[derive(Debug, Clone)]
pub struct PermissionsStore {
    /// Currently selected device.
    current: Device,
    /// Last-known status per device. At most one entry per device.
    status: HashMap<Device, AuthorizationStatus>,
}

impl PermissionsStore {
    /// Create a store with the given initial selection and no known statuses.
    pub fn new(current: Device) -> Self {
        Self { current, status: HashMap::new() }
    }

    /// Currently selected device.
    pub const fn current(&self) -> Device {
        self.current
    }

    /// Change the current selection.
    pub fn select(&mut self, device: Device) {
        self.current = device;
    }

    /// Record an OS status report for a device, replacing any prior entry.
    pub fn record(&mut self, device: Device, status: AuthorizationStatus) {
        self.status.insert(device, status);
    }

    /// Last-known status for a device. `None` if never reported.
    pub fn status_of(&self, device: Device) -> Option<AuthorizationStatus> {
        self.status.get(&device).copied()
    }

    /// Whether a device is known to be authorized. Absent entries are not.
    pub fn is_authorized(&self, device: Device) -> bool {
        self.status_of(device).is_some_and(AuthorizationStatus::is_authorized)
    }

    /// Number of devices currently known to be authorized.
    pub fn authorized_count(&self) -> usize {
        Device::ALL.into_iter().filter(|&d| self.is_authorized(d)).count()
    }
}

impl Default for PermissionsStore {
    fn default() -> Self {
        Self::new(Device::Camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_camera_with_no_statuses() {
        let store = PermissionsStore::default();
        assert_eq!(store.current(), Device::Camera);
        for device in Device::ALL {
            assert_eq!(store.status_of(device), None);
            assert!(!store.is_authorized(device));
        }
    }

    #[test]
    fn record_replaces_prior_entry() {
        let mut store = PermissionsStore::default();
        store.record(Device::Camera, AuthorizationStatus::NotDetermined);
        store.record(Device::Camera, AuthorizationStatus::Authorized);

        assert_eq!(store.status_of(Device::Camera), Some(AuthorizationStatus::Authorized));
        assert_eq!(store.authorized_count(), 1);
    }

    #[test]
    fn record_leaves_other_devices_untouched() {
        let mut store = PermissionsStore::default();
        store.record(Device::Microphone, AuthorizationStatus::Authorized);

        assert!(store.is_authorized(Device::Microphone));
        assert_eq!(store.status_of(Device::Camera), None);
        assert_eq!(store.status_of(Device::Screen), None);
    }

    #[test]
    fn non_authorized_statuses_do_not_grant() {
        let mut store = PermissionsStore::default();
        store.record(Device::Screen, AuthorizationStatus::Denied);
        store.record(Device::Camera, AuthorizationStatus::Restricted);

        assert!(!store.is_authorized(Device::Screen));
        assert!(!store.is_authorized(Device::Camera));
        assert_eq!(store.authorized_count(), 0);
    }

    #[test]
    fn select_changes_current_device() {
        let mut store = PermissionsStore::default();
        store.select(Device::Screen);
        assert_eq!(store.current(), Device::Screen);
    }
}
