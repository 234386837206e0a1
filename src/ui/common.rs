//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::data::duration::format_timestamp;
use crate::data::Summary;

/// Sparkline characters (8 levels of height).
const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the header bar with the overall safety status.
///
/// Displays: status indicator, sensor counts by status, alert count, cycle.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref state) = app.state else {
        let line = Line::from(vec![
            Span::styled(
                " SENSORWATCH ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("| Waiting for sensors..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let summary = Summary::from_state(state);
    let counts = summary.counts;

    let count_span = |n: usize, style: Style| {
        if n > 0 {
            Span::styled(n.to_string(), style)
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        }
    };

    let line = Line::from(vec![
        Span::styled(" ● ", app.theme.status_style(summary.overall)),
        Span::styled("SENSORWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(summary.overall.label(), app.theme.status_style(summary.overall)),
        Span::raw(" │ "),
        count_span(counts.safe, Style::default().fg(app.theme.safe)),
        Span::raw(" safe "),
        count_span(counts.warning, Style::default().fg(app.theme.warning)),
        Span::raw(" warn "),
        count_span(
            counts.danger,
            Style::default().fg(app.theme.danger).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" danger │ "),
        Span::styled(
            summary.alerts.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" alerts │ cycle "),
        Span::raw(summary.cycle.to_string()),
        Span::raw(" @ "),
        Span::raw(format_timestamp(state.current().timestamp_ms)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|view| Line::from(format!(" {}:{} ", view.index() + 1, view.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.current_view.index())
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .padding("", "")
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: source, time since last update, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.current_view {
        View::Dashboard => "Tab:switch c:clear e:export ?:help q:quit",
        View::Alerts => "↑↓:select c:clear e:export Tab:switch ?:help q:quit",
        View::History => "↑↓:select e:export Tab:switch ?:help q:quit",
    };

    let status = match (&app.load_error, app.last_updated) {
        (Some(err), _) => format!(" Error: {} | r:retry q:quit", err),
        (None, Some(updated)) => format!(
            " {} | Updated {:.1}s ago | {}",
            app.source_description(),
            updated.elapsed().as_secs_f64(),
            controls,
        ),
        (None, None) => " Loading... | q:quit".to_string(),
    };

    let style = if app.load_error.is_some() {
        Style::default().fg(app.theme.danger)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    frame.render_widget(Paragraph::new(status).style(style), area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Navigation"),
        Line::from("  Tab ←/→ h/l  Switch views"),
        Line::from("  1-3          Jump to view"),
        Line::from("  ↑/↓ j/k      Navigate list"),
        Line::from("  PgUp/PgDn    Jump 10 items"),
        Line::from("  Home/End     Jump to first/last"),
        Line::from(""),
        section(" Sensors"),
        Line::from("  c            Clear alerts"),
        Line::from("  e            Export to JSON"),
        Line::from("  r            Poll now"),
        Line::from(""),
        section(" General"),
        Line::from("  ?            Toggle help"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 21u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Render sparkline levels (0-7) as block characters, keeping the last `width`.
pub fn render_sparkline(levels: &[u8], width: usize) -> String {
    if levels.is_empty() {
        return " ".repeat(width);
    }

    let skip = levels.len().saturating_sub(width);
    levels[skip..]
        .iter()
        .map(|&v| SPARKLINE_CHARS[usize::from(v.min(7))])
        .collect()
}
