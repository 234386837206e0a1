//! Terminal UI rendering using ratatui.
//!
//! Each view is implemented in its own submodule with a `render` function.
//!
//! ## Submodules
//!
//! - [`dashboard`]: Sensor cards with current readings, gauges and recent alerts
//! - [`alerts`]: The alert log, newest first
//! - [`history`]: Sparklines and a table of recent snapshots
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ View Content                         │
//! │ (dashboard/alerts/history::render)   │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod alerts;
pub mod common;
pub mod dashboard;
pub mod history;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

/// Minimum terminal size for usable display
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

/// Rows of a list table that are not items: two borders and the header.
pub const TABLE_CHROME_ROWS: u16 = 3;

/// Screen row of the table header for views with a selectable list.
///
/// Rows above it: header bar, tabs, block border (plus the trend block in
/// the History view).
pub fn list_header_row(view: View) -> Option<u16> {
    match view {
        View::Dashboard => None,
        View::Alerts => Some(3),
        View::History => Some(3 + history::TRENDS_HEIGHT),
    }
}

/// Screen rows holding list items: the first row and how many are visible.
///
/// The table runs down to the row above the status bar, which holds its
/// bottom border.
pub fn list_body(view: View, screen_height: u16) -> Option<(u16, u16)> {
    if screen_height < MIN_HEIGHT {
        return None;
    }
    let first = list_header_row(view)? + 1;
    let bottom_border = screen_height - 2;
    Some((first, bottom_border.saturating_sub(first)))
}

/// Index of the first visible item when `selected` must stay on screen.
pub fn list_offset(selected: usize, visible: u16) -> usize {
    (selected + 1).saturating_sub(usize::from(visible.max(1)))
}

/// Draw one full frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5)
            .intersection(area);
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(10),   // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);

    match app.current_view {
        View::Dashboard => dashboard::render(frame, app, chunks[2]),
        View::Alerts => alerts::render(frame, app, chunks[2]),
        View::History => history::render(frame, app, chunks[2]),
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FileSource;
    use ratatui::{backend::TestBackend, Terminal};
    use sensorwatch_sim::{ManualClock, SequenceSource, Simulator};

    fn app_with_state(cycles: usize) -> App {
        let mut simulator = Simulator::new(SequenceSource::new(vec![0.05]), ManualClock::new(0));
        simulator.run_cycles(cycles);

        let mut app = App::new(Box::new(FileSource::new("/nonexistent.json")), Theme::dark());
        app.state = Some(simulator.into_state());
        app
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_view_renders() {
        let mut app = app_with_state(3);
        for view in View::ALL {
            app.set_view(view);
            let screen = draw(&app, 100, 30);
            assert!(screen.contains("SENSORWATCH"));
            assert!(screen.contains(view.label()));
        }
    }

    #[test]
    fn test_dashboard_shows_sensor_cards() {
        let app = app_with_state(1);
        let screen = draw(&app, 120, 30);
        assert!(screen.contains("Ultrasonic Sensor"));
        assert!(screen.contains("Fire Sensor"));
        assert!(screen.contains("Tilt Sensor"));
        assert!(screen.contains("Too close!"));
    }

    #[test]
    fn test_empty_state_renders() {
        let mut app = app_with_state(0);
        for view in View::ALL {
            app.set_view(view);
            draw(&app, 80, 24);
        }
        app.state = None;
        assert!(draw(&app, 80, 24).contains("Waiting"));
    }

    #[test]
    fn test_list_body_matches_layout() {
        assert_eq!(list_body(View::Dashboard, 30), None);
        assert_eq!(list_body(View::Alerts, 30), Some((4, 24)));
        assert_eq!(list_body(View::History, 30), Some((10, 18)));
        assert_eq!(list_body(View::Alerts, MIN_HEIGHT - 1), None);
    }

    #[test]
    fn test_list_offset_keeps_selection_visible() {
        assert_eq!(list_offset(0, 18), 0);
        assert_eq!(list_offset(17, 18), 0);
        assert_eq!(list_offset(19, 18), 2);
        assert_eq!(list_offset(3, 0), 3);
    }

    #[test]
    fn test_scrolled_history_shows_selected_row() {
        let mut app = app_with_state(25);
        app.set_view(View::History);
        app.select_last();
        let (first, visible) = list_body(View::History, 30).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let row_text = |y: u16| -> String {
            (0..100).map(|x| buffer[(x, y)].symbol().to_string()).collect()
        };

        // Selected row is the last visible one
        assert!(row_text(first + visible - 1).contains("▶"));
        assert!(!row_text(first).contains("▶"));
    }

    #[test]
    fn test_small_terminal_message() {
        let app = app_with_state(1);
        assert!(draw(&app, 40, 10).contains("Terminal too small"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app_with_state(1);
        app.toggle_help();
        assert!(draw(&app, 100, 30).contains("Keyboard Shortcuts"));
    }
}
