//! History view rendering.
//!
//! Sparklines of each measurement over the history log, then the snapshots
//! themselves in chronological order.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use sensorwatch_sim::MAX_HISTORY;
use sensorwatch_types::SensorKind;

use crate::app::App;
use crate::data::duration::format_timestamp;
use crate::data::{Metric, Trend};

use super::common::render_sparkline;
use super::{list_offset, TABLE_CHROME_ROWS};

/// Height of the trend block: one row per metric plus borders.
pub const TRENDS_HEIGHT: u16 = Metric::ALL.len() as u16 + 2;

/// Render the History view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref state) = app.state else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(TRENDS_HEIGHT),
        Constraint::Min(4),
    ])
    .split(area);

    render_trends(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);

    if state.history().is_empty() {
        let hint = Paragraph::new(" No readings yet")
            .style(Style::default().add_modifier(Modifier::DIM));
        let inner = Rect::new(
            chunks[1].x + 1,
            chunks[1].y + 2,
            chunks[1].width.saturating_sub(2),
            1,
        )
        .intersection(chunks[1]);
        frame.render_widget(hint, inner);
    }
}

fn render_trends(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref state) = app.state else {
        return;
    };

    let lines: Vec<Line> = Metric::ALL
        .iter()
        .map(|metric| {
            let trend = Trend::from_history(*metric, state.history());
            let range = match (trend.min(), trend.max()) {
                (Some(min), Some(max)) => format!("{:.1}..{:.1}{}", min, max, metric.unit()),
                _ => "-".to_string(),
            };
            let latest = trend
                .latest()
                .map(|v| format!("{:.1}{}", v, metric.unit()))
                .unwrap_or_else(|| "-".to_string());

            Line::from(vec![
                Span::styled(format!("{:<12}", metric.label()), app.theme.header),
                Span::raw(render_sparkline(&trend.levels(), MAX_HISTORY)),
                Span::raw(format!("  now {:>8}", latest)),
                Span::styled(format!("  range {}", range), Style::default().add_modifier(Modifier::DIM)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(format!(" Trends (last {}) ", state.history().len()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref state) = app.state else {
        return;
    };
    let history = state.history();

    let header = Row::new(vec![
        "Time",
        "Distance",
        "Temp",
        "IR",
        "Angle",
        "Ultrasonic",
        "Fire",
        "Tilt",
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = history
        .iter()
        .map(|snapshot| {
            let mut cells = vec![
                Cell::from(format_timestamp(snapshot.timestamp_ms)),
                Cell::from(format!("{} cm", snapshot.ultrasonic.distance)),
                Cell::from(format!("{:.1}°C", snapshot.fire.temperature)),
                Cell::from(format!("{:.0}%", snapshot.fire.infrared_level)),
                Cell::from(format!("{:.1}°", snapshot.tilt.angle)),
            ];
            cells.extend(SensorKind::ALL.iter().map(|kind| {
                let status = snapshot.status(*kind);
                Cell::from(status.label()).style(app.theme.status_style(status))
            }));
            Row::new(cells)
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Length(7),
    ];

    let selected = app.selected_history_index.min(history.len().saturating_sub(1));
    let position_info = if history.is_empty() {
        String::new()
    } else {
        format!(" [{}/{}]", selected + 1, history.len())
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Snapshots ({}/{}){} ", history.len(), MAX_HISTORY, position_info))
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    if !history.is_empty() {
        let visible = area.height.saturating_sub(TABLE_CHROME_ROWS);
        table_state = table_state
            .with_offset(list_offset(selected, visible))
            .with_selected(Some(selected));
    }

    frame.render_stateful_widget(table, area, &mut table_state);
}
