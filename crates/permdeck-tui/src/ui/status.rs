//! Status bar
//!
//! Displays the current device's status, the authorized count, and any
//! transient message.

use permdeck_core::{AuthorizationStatus, Device};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let store = app.store();
    let current = store.current();
    let status = store.status_of(current).unwrap_or(AuthorizationStatus::NotDetermined);

    let status_span = match status {
        AuthorizationStatus::NotDetermined => {
            Span::styled("not determined", Style::default().fg(Color::Yellow))
        },
        AuthorizationStatus::Denied => Span::styled("denied", Style::default().fg(Color::Red)),
        AuthorizationStatus::Restricted => {
            Span::styled("restricted", Style::default().fg(Color::Magenta))
        },
        AuthorizationStatus::Authorized => Span::styled(
            "authorized",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let counts = format!(" | {}/{} authorized", store.authorized_count(), Device::ALL.len());
    let message = app.status_message().map_or_else(String::new, |m| format!(" | {m}"));

    let status_line = Line::from(vec![
        Span::raw(" "),
        Span::raw(current.label()),
        Span::raw(": "),
        status_span,
        Span::styled(counts, Style::default().fg(Color::Gray)),
        Span::styled(message, Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
