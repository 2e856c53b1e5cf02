//! Device cards
//!
//! Renders the three device cards in fixed order. The selected card is drawn
//! full-intensity, the others dimmed; a green check badge sits on the
//! top-right corner of every card whose device is known to be authorized.

use permdeck_core::Device;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Check badge shown on authorized cards.
pub const BADGE: &str = "✓";

const CARD_WIDTH: u16 = 16;

/// Render the device card row.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CARD_WIDTH),
            Constraint::Length(CARD_WIDTH),
            Constraint::Length(CARD_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    for (device, card_area) in Device::ALL.into_iter().zip(chunks.iter()) {
        render_card(frame, app, device, *card_area);
    }
}

/// Render one device card.
fn render_card(frame: &mut Frame, app: &App, device: Device, area: Rect) {
    let selected = app.store().current() == device;
    let authorized = app.store().is_authorized(device);

    let (border_style, text_style) = if selected {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default().add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default().fg(Color::DarkGray))
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::styled(format!(" {} ", device.label()), text_style));

    if authorized {
        block = block
            .title_top(Line::styled(BADGE, Style::default().fg(Color::Green)).right_aligned());
    }

    let glyph = Paragraph::new(vec![
        Line::default(),
        Line::styled(device.glyph(), text_style),
    ])
    .centered()
    .block(block);

    frame.render_widget(glyph, area);
}
