//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod devices;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const CARDS_HEIGHT: u16 = 5;
    const ACTION_HEIGHT: u16 = 2;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CARDS_HEIGHT),
            Constraint::Length(ACTION_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [cards_area, action_area, _, status_area] = chunks.as_ref() else {
        return;
    };

    devices::render(frame, app, *cards_area);
    render_action(frame, app, *action_area);
    status::render(frame, app, *status_area);
}

/// Render the authorize action line and key hints.
fn render_action(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.store().current();

    let action_line = Line::from(vec![
        Span::raw(" ▶ "),
        Span::styled(
            format!("Authorize {}", current.label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (enter)", Style::default().fg(Color::DarkGray)),
    ]);

    let hints = Line::styled(
        " tab next · 1-3 select · a authorize · r refresh · o settings · q quit",
        Style::default().fg(Color::DarkGray),
    );

    let paragraph = Paragraph::new(vec![action_line, hints]);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use permdeck_core::{AuthorizationStatus, Device};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Style};

    use super::*;
    use crate::app::{App, AppEvent};

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 12;
    const CARD_WIDTH: u16 = 16;

    fn render_to_buffer(app: &App) -> Buffer {
        let backend = TestBackend::new(WIDTH, HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn authorized(app: &mut App, device: Device) {
        let _ = app.handle(AppEvent::StatusChanged {
            device,
            status: AuthorizationStatus::Authorized,
        });
    }

    /// First cell position of `needle`, scanning rows top-down.
    fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let chars: Vec<String> = needle.chars().map(String::from).collect();
        for y in 0..buf.area().height {
            let row: Vec<&str> =
                (0..buf.area().width).map(|x| buf.cell((x, y)).unwrap().symbol()).collect();
            if let Some(x) = row
                .windows(chars.len())
                .position(|w| w.iter().copied().eq(chars.iter().map(String::as_str)))
            {
                return Some((u16::try_from(x).unwrap(), y));
            }
        }
        None
    }

    /// Positions of every cell holding the badge glyph.
    fn badge_positions(buf: &Buffer) -> Vec<(u16, u16)> {
        let mut positions = Vec::new();
        for y in 0..buf.area().height {
            for x in 0..buf.area().width {
                if buf.cell((x, y)).unwrap().symbol() == devices::BADGE {
                    positions.push((x, y));
                }
            }
        }
        positions
    }

    fn style_at(buf: &Buffer, pos: (u16, u16)) -> Style {
        buf.cell(pos).unwrap().style()
    }

    /// Card column index (0 camera, 1 microphone, 2 screen) for a position.
    fn card_of(pos: (u16, u16)) -> u16 {
        pos.0 / CARD_WIDTH
    }

    fn is_dimmed(style: Style) -> bool {
        style.fg == Some(Color::DarkGray)
    }

    fn is_highlighted(style: Style) -> bool {
        style.add_modifier.contains(Modifier::BOLD) && style.fg != Some(Color::DarkGray)
    }

    #[test]
    fn cards_render_in_fixed_order() {
        let app = App::new(Device::Screen);
        let buf = render_to_buffer(&app);

        let camera = find(&buf, "Camera").unwrap();
        let microphone = find(&buf, "Microphone").unwrap();
        let screen = find(&buf, "Screen").unwrap();

        assert_eq!(camera.1, microphone.1);
        assert_eq!(microphone.1, screen.1);
        assert!(camera.0 < microphone.0);
        assert!(microphone.0 < screen.0);
    }

    #[test]
    fn scenario_no_statuses_selected_camera() {
        let app = App::new(Device::Camera);
        let buf = render_to_buffer(&app);

        assert!(badge_positions(&buf).is_empty());
        assert!(is_highlighted(style_at(&buf, find(&buf, "Camera").unwrap())));
        assert!(is_dimmed(style_at(&buf, find(&buf, "Microphone").unwrap())));
        assert!(is_dimmed(style_at(&buf, find(&buf, "Screen").unwrap())));
    }

    #[test]
    fn scenario_camera_authorized_selected_microphone() {
        let mut app = App::new(Device::Microphone);
        authorized(&mut app, Device::Camera);
        let buf = render_to_buffer(&app);

        let badges = badge_positions(&buf);
        assert_eq!(badges.len(), 1);
        // Badge sits on the top edge of the camera card.
        assert_eq!(card_of(badges[0]), 0);
        assert_eq!(badges[0].1, 0);

        assert!(is_dimmed(style_at(&buf, find(&buf, "Camera").unwrap())));
        assert!(is_highlighted(style_at(&buf, find(&buf, "Microphone").unwrap())));
        assert!(is_dimmed(style_at(&buf, find(&buf, "Screen").unwrap())));
    }

    #[test]
    fn scenario_two_authorized_selected_screen() {
        let mut app = App::new(Device::Screen);
        authorized(&mut app, Device::Camera);
        authorized(&mut app, Device::Microphone);
        let buf = render_to_buffer(&app);

        let badges = badge_positions(&buf);
        let cards: Vec<u16> = badges.iter().map(|&p| card_of(p)).collect();
        assert_eq!(cards, [0, 1]);

        assert!(is_dimmed(style_at(&buf, find(&buf, "Camera").unwrap())));
        assert!(is_dimmed(style_at(&buf, find(&buf, "Microphone").unwrap())));
        assert!(is_highlighted(style_at(&buf, find(&buf, "Screen").unwrap())));
    }

    #[test]
    fn exactly_one_card_is_highlighted() {
        for initial in Device::ALL {
            let app = App::new(initial);
            let buf = render_to_buffer(&app);

            let highlighted: Vec<Device> = Device::ALL
                .into_iter()
                .filter(|d| is_highlighted(style_at(&buf, find(&buf, d.label()).unwrap())))
                .collect();
            assert_eq!(highlighted, [initial]);
        }
    }

    #[test]
    fn granted_request_shows_badge_on_next_render() {
        let mut app = App::new(Device::Camera);
        let _ = app.handle(AppEvent::Key(crossterm::event::KeyCode::Enter));
        assert!(badge_positions(&render_to_buffer(&app)).is_empty());

        authorized(&mut app, Device::Camera);

        let buf = render_to_buffer(&app);
        let badges = badge_positions(&buf);
        assert_eq!(badges.len(), 1);
        assert_eq!(card_of(badges[0]), 0);
    }

    #[test]
    fn action_line_names_current_device() {
        let mut app = App::new(Device::Camera);
        let _ = app.handle(AppEvent::Key(crossterm::event::KeyCode::Tab));
        let buf = render_to_buffer(&app);
        assert!(find(&buf, "Authorize Microphone").is_some());
    }

    #[test]
    fn status_bar_reports_current_device_and_count() {
        let mut app = App::new(Device::Microphone);
        authorized(&mut app, Device::Camera);
        let buf = render_to_buffer(&app);

        let status = find(&buf, "Microphone: not determined").unwrap();
        assert_eq!(status.1, HEIGHT - 1);
        assert!(find(&buf, "1/3 authorized").is_some());
    }
}
