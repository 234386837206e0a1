//! Sparkline series extracted from the snapshot history.

use std::collections::VecDeque;

use sensorwatch_types::SensorSnapshot;

/// Highest sparkline level (8 bar heights, 0-7).
pub const MAX_LEVEL: u8 = 7;

/// A measurement tracked over the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Distance,
    Temperature,
    Infrared,
    Angle,
}

impl Metric {
    /// Metrics shown in the history view, one per row.
    pub const ALL: [Metric; 4] = [
        Metric::Distance,
        Metric::Temperature,
        Metric::Infrared,
        Metric::Angle,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Distance => "Distance",
            Metric::Temperature => "Temperature",
            Metric::Infrared => "Infrared",
            Metric::Angle => "Tilt",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Distance => "cm",
            Metric::Temperature => "°C",
            Metric::Infrared => "%",
            Metric::Angle => "°",
        }
    }

    /// Read this metric out of a snapshot.
    pub fn value(&self, snapshot: &SensorSnapshot) -> f64 {
        match self {
            Metric::Distance => f64::from(snapshot.ultrasonic.distance),
            Metric::Temperature => snapshot.fire.temperature,
            Metric::Infrared => snapshot.fire.infrared_level,
            Metric::Angle => snapshot.tilt.angle,
        }
    }
}

/// Raw values and sparkline levels for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub metric: Metric,
    /// Oldest first, same order as the history.
    pub values: Vec<f64>,
}

impl Trend {
    /// Collect `metric` from every snapshot in `history`.
    pub fn from_history(metric: Metric, history: &VecDeque<SensorSnapshot>) -> Self {
        Self {
            metric,
            values: history.iter().map(|s| metric.value(s)).collect(),
        }
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Sparkline levels (0-7) for the series.
    pub fn levels(&self) -> Vec<u8> {
        normalize(&self.values)
    }
}

/// Normalize values to the 0-7 range for sparkline display.
///
/// Returns an empty Vec with fewer than two values. A constant series maps
/// to level 0 throughout.
pub fn normalize(values: &[f64]) -> Vec<u8> {
    if values.len() < 2 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= f64::EPSILON {
        return vec![0; values.len()];
    }

    values
        .iter()
        .map(|&v| {
            let normalized = ((v - min) / range * f64::from(MAX_LEVEL)).round() as u8;
            normalized.min(MAX_LEVEL)
        })
        .collect()
}
