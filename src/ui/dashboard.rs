//! Dashboard view rendering.
//!
//! One card per sensor with its readings, status badge and a gauge, plus the
//! most recent alerts underneath.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use sensorwatch_sim::{
    FIRE_DANGER_TEMPERATURE_C, TILT_DANGER_DEG, ULTRASONIC_WARNING_CM,
};
use sensorwatch_types::{SensorKind, SensorSnapshot, Status};

use crate::app::App;
use crate::data::duration::format_timestamp;

/// Alerts listed under the cards.
const RECENT_ALERTS: usize = 5;

/// Full scale of each gauge.
const DISTANCE_SCALE_CM: f64 = 200.0;
const TEMPERATURE_FLOOR_C: f64 = 20.0;
const TEMPERATURE_SCALE_C: f64 = 15.0;
const TILT_SCALE_DEG: f64 = 15.0;

/// A gauge bar: title, ratio in [0, 1], label.
#[derive(Debug, Clone, PartialEq)]
pub struct CardGauge {
    pub title: &'static str,
    pub ratio: f64,
    pub label: String,
}

impl CardGauge {
    fn new(title: &'static str, ratio: f64, label: String) -> Self {
        Self {
            title,
            ratio: if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 },
            label,
        }
    }
}

/// Everything shown on one sensor card.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorCard {
    pub kind: SensorKind,
    pub status: Status,
    pub lines: Vec<(&'static str, String)>,
    pub gauges: Vec<CardGauge>,
}

impl SensorCard {
    pub fn from_snapshot(snapshot: &SensorSnapshot, kind: SensorKind) -> Self {
        let status = snapshot.status(kind);
        let (lines, gauges) = match kind {
            SensorKind::Ultrasonic => {
                let reading = &snapshot.ultrasonic;
                let distance = f64::from(reading.distance);
                (
                    vec![
                        ("Distance", format!("{} cm", reading.distance)),
                        (
                            "Object",
                            if reading.object_detected {
                                "Detected".to_string()
                            } else {
                                "None".to_string()
                            },
                        ),
                        ("Warn below", format!("{} cm", ULTRASONIC_WARNING_CM)),
                    ],
                    vec![CardGauge::new(
                        "Proximity",
                        1.0 - distance / DISTANCE_SCALE_CM,
                        format!("{} cm", reading.distance),
                    )],
                )
            }
            SensorKind::Fire => {
                let reading = &snapshot.fire;
                (
                    vec![
                        ("Temperature", format!("{:.1}°C", reading.temperature)),
                        ("Infrared", format!("{:.0}%", reading.infrared_level)),
                        ("Danger above", format!("{:.0}°C", FIRE_DANGER_TEMPERATURE_C)),
                    ],
                    vec![
                        CardGauge::new(
                            "Temperature",
                            (reading.temperature - TEMPERATURE_FLOOR_C) / TEMPERATURE_SCALE_C,
                            format!("{:.1}°C", reading.temperature),
                        ),
                        CardGauge::new(
                            "Infrared",
                            reading.infrared_level / 100.0,
                            format!("{:.0}%", reading.infrared_level),
                        ),
                    ],
                )
            }
            SensorKind::Tilt => {
                let reading = &snapshot.tilt;
                (
                    vec![
                        ("Angle", format!("{:.1}°", reading.angle)),
                        (
                            "Structure",
                            if reading.is_stable {
                                "Stable".to_string()
                            } else {
                                "Unstable".to_string()
                            },
                        ),
                        ("Danger above", format!("{:.0}°", TILT_DANGER_DEG)),
                    ],
                    vec![CardGauge::new(
                        "Tilt",
                        reading.angle.abs() / TILT_SCALE_DEG,
                        format!("{:.1}°", reading.angle),
                    )],
                )
            }
        };

        Self {
            kind,
            status,
            lines,
            gauges,
        }
    }
}

/// Render the Dashboard view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref state) = app.state else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border));
        frame.render_widget(Paragraph::new(" Waiting for the first reading...").block(block), area);
        return;
    };

    let rows = Layout::vertical([Constraint::Length(10), Constraint::Min(3)]).split(area);
    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(rows[0]);

    for (kind, column) in SensorKind::ALL.iter().zip(columns.iter()) {
        render_card(frame, app, &SensorCard::from_snapshot(state.current(), *kind), *column);
    }

    render_recent_alerts(frame, app, rows[1]);
}

fn render_card(frame: &mut Frame, app: &App, card: &SensorCard, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", card.kind.title()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.status_color(card.status)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(card.lines.len() as u16)];
    constraints.extend(card.gauges.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).split(inner);

    let badge = Line::from(vec![
        Span::styled(format!(" {} ", card.status.label()), app.theme.badge_style(card.status)),
    ]);
    frame.render_widget(Paragraph::new(badge), chunks[0]);

    let lines: Vec<Line> = card
        .lines
        .iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", name), Style::default().add_modifier(Modifier::DIM)),
                Span::raw(value.clone()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    for (gauge, chunk) in card.gauges.iter().zip(chunks.iter().skip(2)) {
        let widget = Gauge::default()
            .gauge_style(Style::default().fg(app.theme.status_color(card.status)))
            .ratio(gauge.ratio)
            .label(format!("{} {}", gauge.title, gauge.label));
        frame.render_widget(widget, *chunk);
    }
}

fn render_recent_alerts(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref state) = app.state else {
        return;
    };

    let title = format!(" Recent Alerts ({}) [c:clear] ", state.alerts().len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let lines: Vec<Line> = if state.alerts().is_empty() {
        vec![Line::from(Span::styled(
            "No alerts - all sensors within safe limits",
            Style::default().fg(app.theme.safe),
        ))]
    } else {
        state
            .alerts()
            .iter()
            .take(RECENT_ALERTS)
            .map(|alert| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", format_timestamp(alert.timestamp_ms)),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::styled(format!("[{}] ", alert.kind), app.theme.severity_style(alert.severity)),
                    Span::raw(alert.message.clone()),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorwatch_sim::classify;

    fn classified(distance: u32, temperature: f64, infrared: f64, angle: f64) -> SensorSnapshot {
        classify(
            SensorSnapshot::builder()
                .distance(distance)
                .temperature(temperature)
                .infrared_level(infrared)
                .angle(angle)
                .build(),
        )
    }

    #[test]
    fn test_ultrasonic_card() {
        let card = SensorCard::from_snapshot(&classified(15, 22.0, 10.0, 2.0), SensorKind::Ultrasonic);

        assert_eq!(card.status, Status::Danger);
        assert_eq!(card.lines[0], ("Distance", "15 cm".to_string()));
        assert_eq!(card.lines[1], ("Object", "Detected".to_string()));
        assert!((card.gauges[0].ratio - 0.925).abs() < 1e-9);
    }

    #[test]
    fn test_fire_card() {
        let card = SensorCard::from_snapshot(&classified(100, 32.0, 10.0, 2.0), SensorKind::Fire);

        assert_eq!(card.status, Status::Danger);
        assert_eq!(card.lines[0].1, "32.0°C");
        assert_eq!(card.lines[1].1, "10%");
        assert_eq!(card.gauges.len(), 2);
        assert!((card.gauges[0].ratio - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_tilt_card() {
        let card = SensorCard::from_snapshot(&classified(100, 22.0, 10.0, -20.0), SensorKind::Tilt);

        assert_eq!(card.status, Status::Danger);
        assert_eq!(card.lines[0].1, "-20.0°");
        assert_eq!(card.lines[1].1, "Unstable");
        // Beyond full scale is clamped
        assert_eq!(card.gauges[0].ratio, 1.0);
    }

    #[test]
    fn test_gauge_ratio_is_clamped() {
        assert_eq!(CardGauge::new("t", -0.5, String::new()).ratio, 0.0);
        assert_eq!(CardGauge::new("t", f64::NAN, String::new()).ratio, 0.0);
    }
}
