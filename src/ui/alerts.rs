//! Alerts view rendering.
//!
//! The full alert log, newest first, with the selected alert's reference.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use sensorwatch_sim::MAX_ALERTS;

use crate::app::App;
use crate::data::duration::format_timestamp;

use super::{list_offset, TABLE_CHROME_ROWS};

/// Render the Alerts view showing the alert log in a table.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref state) = app.state else {
        return;
    };
    let alerts = state.alerts();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if alerts.is_empty() {
        let paragraph = Paragraph::new(" No alerts. Sensors in danger raise one alert per cycle.")
            .style(Style::default().fg(app.theme.safe))
            .block(block.title(" Alerts (0) "));
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec!["Time", "Sensor", "Severity", "Message"])
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = alerts
        .iter()
        .map(|alert| {
            Row::new(vec![
                Cell::from(format_timestamp(alert.timestamp_ms)),
                Cell::from(alert.kind.title()),
                Cell::from(alert.severity.to_string().to_uppercase())
                    .style(app.theme.severity_style(alert.severity)),
                Cell::from(alert.message.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(17),
        Constraint::Length(8),
        Constraint::Fill(1),
    ];

    let selected = app.selected_alert_index.min(alerts.len() - 1);
    let reference = alerts[selected].reference();
    let title = format!(
        " Alerts ({}/{}) [{}/{}] {} [c:clear] ",
        alerts.len(),
        MAX_ALERTS,
        selected + 1,
        alerts.len(),
        reference
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(title))
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let visible = area.height.saturating_sub(TABLE_CHROME_ROWS);
    let mut table_state = TableState::default()
        .with_offset(list_offset(selected, visible))
        .with_selected(Some(selected));

    frame.render_stateful_widget(table, area, &mut table_state);
}
