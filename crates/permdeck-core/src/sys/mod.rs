//! Platform permission backends
//!
//! One implementation per platform, selected at compile time and re-exported
//! under a single name.
//!
//! - **macOS**: AVFoundation for camera/microphone, CoreGraphics for screen
//!   capture, `open x-apple.systempreferences:` deep-links for settings.
//! - **Other platforms**: no runtime permission prompts; everything reports
//!   authorized.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(not(target_os = "macos"))]
mod default;

#[cfg(target_os = "macos")]
pub use macos::SystemPermissions;

#[cfg(not(target_os = "macos"))]
pub use default::SystemPermissions;
