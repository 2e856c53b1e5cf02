//! Terminal UI for permdeck
//!
//! A thin shell over `permdeck-core`: the [`App`] state machine turns
//! terminal and backend events into actions, the [`ui`] module renders pure
//! widget trees, and the [`Runtime`] event loop wires both to the terminal
//! and the platform permission backend.

pub mod app;
pub mod runtime;
pub mod ui;

pub use app::{App, AppAction, AppEvent};
pub use runtime::{Runtime, RuntimeError};
