//! Async runtime
//!
//! Event loop that drives terminal I/O and coordinates between the App
//! state machine and the permission backend. Uses tokio::select! to handle
//! terminal events and backend reports concurrently.
//!
//! OS permission requests may block on a system dialog, so they run on
//! blocking tasks; their outcomes travel back to the UI loop over a channel
//! before any shared state is touched.

use std::{
    io::{self, Stdout, stdout},
    sync::Arc,
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use permdeck_core::{Device, DevicePermissions, SimulatedPermissions, sys::SystemPermissions};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::{
    app::{App, AppAction, AppEvent},
    ui,
};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown and the main event loop, and executes the
/// actions the App produces. Backend calls that can block run on
/// `spawn_blocking` and report back over the events channel.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    backend: Arc<dyn DevicePermissions>,
    events_tx: mpsc::Sender<AppEvent>,
    events_rx: mpsc::Receiver<AppEvent>,
}

impl Runtime {
    /// Create a runtime backed by the host operating system.
    pub fn new(initial: Device) -> Result<Self, RuntimeError> {
        Self::create(initial, Arc::new(SystemPermissions::new()))
    }

    /// Create a runtime backed by the in-memory simulated backend.
    pub fn simulated(initial: Device) -> Result<Self, RuntimeError> {
        Self::create(initial, Arc::new(SimulatedPermissions::new()))
    }

    fn create(
        initial: Device,
        backend: Arc<dyn DevicePermissions>,
    ) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let (events_tx, events_rx) = mpsc::channel(32);

        Ok(Self { terminal, app: App::new(initial), backend, events_tx, events_rx })
    }

    /// Run the main event loop.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;
        // Initial status load; further refreshes are user-triggered.
        self.spawn_refresh();

        let mut event_stream = EventStream::new();
        let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

        loop {
            let should_quit = tokio::select! {
                // Terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event)?,
                        Some(Err(e)) => return Err(RuntimeError::Io(e)),
                        None => true,
                    }
                }

                // Backend reports arriving on the UI loop
                maybe_report = self.events_rx.recv() => {
                    match maybe_report {
                        Some(event) => {
                            let actions = self.app.handle(event);
                            self.process_actions(actions)?
                        },
                        None => false,
                    }
                }

                // Periodic tick
                _ = tick_interval.tick() => {
                    let actions = self.app.handle(AppEvent::Tick);
                    self.process_actions(actions)?
                }
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a terminal event and return whether to quit.
    fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let app_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key.code),
            Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            _ => return Ok(false),
        };

        let actions = self.app.handle(app_event);
        self.process_actions(actions)
    }

    /// Execute actions produced by the app. Returns true if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, RuntimeError> {
        for action in actions {
            match action {
                AppAction::Render => self.render()?,
                AppAction::Quit => return Ok(true),
                AppAction::Authorize { device } => self.spawn_authorize(device),
                AppAction::Refresh => self.spawn_refresh(),
                AppAction::OpenSettings { device } => {
                    if let Err(e) = self.backend.open_settings(device) {
                        tracing::warn!(%device, error = %e, "failed to open settings");
                        let _ = self.events_tx.try_send(AppEvent::Error { message: e.to_string() });
                    }
                },
            }
        }
        Ok(false)
    }

    /// Request authorization off the UI loop and report the outcome back.
    ///
    /// A grant comes back as a status report; anything else only surfaces a
    /// message and leaves the store untouched.
    fn spawn_authorize(&self, device: Device) {
        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        tokio::task::spawn_blocking(move || {
            let status = backend.request(device);
            let event = if status.is_authorized() {
                AppEvent::StatusChanged { device, status }
            } else {
                AppEvent::Error { message: format!("{device} access {status}") }
            };
            if tx.blocking_send(event).is_err() {
                tracing::warn!(%device, "runtime gone before authorization outcome arrived");
            }
        });
    }

    /// Re-query every device's status off the UI loop.
    fn spawn_refresh(&self) {
        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        tokio::task::spawn_blocking(move || {
            for device in Device::ALL {
                let status = backend.status(device);
                if tx.blocking_send(AppEvent::StatusChanged { device, status }).is_err() {
                    return;
                }
            }
        });
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app);
        })?;
        Ok(())
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime").field("app", &self.app).finish_non_exhaustive()
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
