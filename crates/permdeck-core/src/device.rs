//! Device kinds and authorization states
//!
//! The closed set of capture capabilities this application tracks, plus the
//! authorization states the host OS can report for them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A capture capability whose authorization is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Device {
    /// Access to the device camera.
    Camera,
    /// Access to the device microphone.
    Microphone,
    /// Access to screen capture.
    Screen,
}

impl Device {
    /// All devices in display order.
    pub const ALL: [Self; 3] = [Self::Camera, Self::Microphone, Self::Screen];

    /// Lowercase identifier used in messages and CLI arguments.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Microphone => "microphone",
            Self::Screen => "screen",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Camera => "Camera",
            Self::Microphone => "Microphone",
            Self::Screen => "Screen",
        }
    }

    /// Glyph rendered on the device card.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Camera => "◉",
            Self::Microphone => "∿",
            Self::Screen => "▭",
        }
    }

    /// Next device in display order, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::Camera => Self::Microphone,
            Self::Microphone => Self::Screen,
            Self::Screen => Self::Camera,
        }
    }

    /// Previous device in display order, wrapping around.
    pub const fn prev(self) -> Self {
        match self {
            Self::Camera => Self::Screen,
            Self::Microphone => Self::Camera,
            Self::Screen => Self::Microphone,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a device name fails.
#[derive(Debug, Clone, Error)]
#[error("unknown device {0:?}, expected camera, microphone or screen")]
pub struct ParseDeviceError(String);

impl FromStr for Device {
    type Err = ParseDeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camera" => Ok(Self::Camera),
            "microphone" => Ok(Self::Microphone),
            "screen" => Ok(Self::Screen),
            other => Err(ParseDeviceError(other.to_owned())),
        }
    }
}

/// Authorization state the host OS reports for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    /// The user has neither granted nor denied access.
    NotDetermined,
    /// The user has explicitly denied access.
    Denied,
    /// Access is restricted by system policy (e.g. parental controls).
    Restricted,
    /// The user has granted access.
    Authorized,
}

impl AuthorizationStatus {
    /// Whether this status grants access.
    pub const fn is_authorized(self) -> bool {
        matches!(self, Self::Authorized)
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotDetermined => "not determined",
            Self::Denied => "denied",
            Self::Restricted => "restricted",
            Self::Authorized => "authorized",
        };
        f.write_str(s)
    }
}
