//! UI state machine
//!
//! Pure state machine that processes terminal and backend events, producing
//! actions for the runtime to execute. Completely decoupled from I/O.
//!
//! # Architecture
//!
//! The App wraps a [`PermissionsStore`] and manages UI-specific state like
//! the transient status message and terminal size. It translates key presses
//! into backend operations and backend reports into store updates.

mod action;
mod event;

pub use action::AppAction;
pub use event::AppEvent;
use permdeck_core::{Device, PermissionsStore};

/// UI state machine.
///
/// Holds the permissions store and transient UI state. Pure and testable:
/// [`App::handle`] performs no I/O.
#[derive(Debug, Clone)]
pub struct App {
    /// Selection and last-known statuses.
    store: PermissionsStore,
    /// Transient message for the status bar.
    status_message: Option<String>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App with the given device selected.
    pub fn new(initial: Device) -> Self {
        Self {
            store: PermissionsStore::new(initial),
            status_message: None,
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::StatusChanged { device, status } => {
                self.store.record(device, status);
                // A fresh OS report supersedes any transient message.
                self.status_message = None;
                vec![AppAction::Render]
            },
            AppEvent::Error { message } => {
                self.status_message = Some(message);
                vec![AppAction::Render]
            },
        }
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: crossterm::event::KeyCode) -> Vec<AppAction> {
        use crossterm::event::KeyCode;

        match key {
            KeyCode::Tab | KeyCode::Right => {
                self.store.select(self.store.current().next());
                vec![AppAction::Render]
            },
            KeyCode::BackTab | KeyCode::Left => {
                self.store.select(self.store.current().prev());
                vec![AppAction::Render]
            },
            KeyCode::Char('1') => self.select(Device::Camera),
            KeyCode::Char('2') => self.select(Device::Microphone),
            KeyCode::Char('3') => self.select(Device::Screen),
            KeyCode::Enter | KeyCode::Char('a') => {
                let device = self.store.current();
                self.status_message = Some(format!("Requesting {device} access..."));
                vec![AppAction::Authorize { device }, AppAction::Render]
            },
            KeyCode::Char('r') => {
                self.status_message = Some("Refreshing...".into());
                vec![AppAction::Refresh, AppAction::Render]
            },
            KeyCode::Char('o') => {
                vec![AppAction::OpenSettings { device: self.store.current() }]
            },
            KeyCode::Esc | KeyCode::Char('q') => vec![AppAction::Quit],
            _ => vec![],
        }
    }

    fn select(&mut self, device: Device) -> Vec<AppAction> {
        self.store.select(device);
        vec![AppAction::Render]
    }

    /// Permission state.
    pub const fn store(&self) -> &PermissionsStore {
        &self.store
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Terminal dimensions (columns, rows).
    pub const fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
