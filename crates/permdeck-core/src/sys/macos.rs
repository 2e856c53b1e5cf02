//! macOS permission backend
//!
//! Camera and microphone go through AVFoundation's `AVCaptureDevice`
//! authorization API; screen capture goes through the CoreGraphics
//! screen-capture access preflight/request pair. The AVFoundation request is
//! completion-handler based and may fire on an arbitrary dispatch queue, so
//! the result is bridged back over a channel to give the trait's synchronous
//! contract.

use std::{process::Command, sync::mpsc};

use av_foundation::{
    capture_device::{
        AVAuthorizationStatus, AVAuthorizationStatusAuthorized, AVAuthorizationStatusDenied,
        AVAuthorizationStatusRestricted, AVCaptureDevice,
    },
    media_format::{AVMediaType, AVMediaTypeAudio, AVMediaTypeVideo},
};
use block2::RcBlock;
use core_graphics::access::ScreenCaptureAccess;
use objc2::runtime::Bool;

use crate::{
    backend::{DevicePermissions, PermissionError},
    device::{AuthorizationStatus, Device},
};

/// System Settings deep-link per privacy pane.
const fn settings_pane(device: Device) -> &'static str {
    match device {
        Device::Camera => {
            "x-apple.systempreferences:com.apple.preference.security?Privacy_Camera"
        },
        Device::Microphone => {
            "x-apple.systempreferences:com.apple.preference.security?Privacy_Microphone"
        },
        Device::Screen => {
            "x-apple.systempreferences:com.apple.preference.security?Privacy_ScreenCapture"
        },
    }
}

/// AVFoundation media type for the prompt-based devices. Screen capture is
/// not an AVFoundation media type and takes the CoreGraphics path instead.
fn media_type(device: Device) -> Option<&'static AVMediaType> {
    match device {
        Device::Camera => Some(unsafe { AVMediaTypeVideo }),
        Device::Microphone => Some(unsafe { AVMediaTypeAudio }),
        Device::Screen => None,
    }
}

fn from_av_status(raw: AVAuthorizationStatus) -> AuthorizationStatus {
    if raw == AVAuthorizationStatusAuthorized {
        AuthorizationStatus::Authorized
    } else if raw == AVAuthorizationStatusDenied {
        AuthorizationStatus::Denied
    } else if raw == AVAuthorizationStatusRestricted {
        AuthorizationStatus::Restricted
    } else {
        AuthorizationStatus::NotDetermined
    }
}

/// Present the AVFoundation access prompt and wait for the user's answer.
fn request_av_access(media: &'static AVMediaType) -> bool {
    let (tx, rx) = mpsc::channel();
    let handler = RcBlock::new(move |granted: Bool| {
        let _ = tx.send(granted.as_bool());
    });
    unsafe {
        AVCaptureDevice::request_access_for_media_type(media, &handler);
    }
    // The completion handler fires on an arbitrary queue; no timeout by
    // contract, the OS owns the prompt's lifetime.
    rx.recv().unwrap_or(false)
}

/// Permission backend for macOS.
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
        tracing::debug!(%device, "macOS authorization status check");
        match media_type(device) {
            Some(media) => {
                let raw = unsafe { AVCaptureDevice::authorization_status_for_media_type(media) };
                from_av_status(raw)
            },
            None => {
                let access = ScreenCaptureAccess;
                // Preflight is a bare boolean; a false answer cannot be told
                // apart from "never asked".
                if access.preflight() {
                    AuthorizationStatus::Authorized
                } else {
                    AuthorizationStatus::NotDetermined
                }
            },
        }
    }

    fn request(&self, device: Device) -> AuthorizationStatus {
        tracing::debug!(%device, "macOS authorization request");
        let granted = match media_type(device) {
            Some(media) => request_av_access(media),
            None => {
                let access = ScreenCaptureAccess;
                access.request()
            },
        };
        if granted { AuthorizationStatus::Authorized } else { AuthorizationStatus::Denied }
    }

    fn open_settings(&self, device: Device) -> Result<(), PermissionError> {
        Command::new("open").arg(settings_pane(device)).spawn()?;
        Ok(())
    }
}
