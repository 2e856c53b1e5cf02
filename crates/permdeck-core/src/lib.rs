//! Capture-device authorization tracking.
//!
//! Domain types for the three capture capabilities (camera, microphone,
//! screen), a [`PermissionsStore`] holding the last-known authorization
//! status per device, and the [`DevicePermissions`] seam to the host
//! operating system's privacy APIs with per-platform backends.

mod backend;
mod device;
mod simulated;
mod store;
pub mod sys;

pub use backend::{DevicePermissions, PermissionError};
pub use device::{AuthorizationStatus, Device, ParseDeviceError};
pub use simulated::SimulatedPermissions;
pub use store::PermissionsStore;
