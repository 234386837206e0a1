//! Sensor kinds and the safety status scale.

use core::fmt;

/// Safety classification derived from a sensor measurement.
///
/// Ordered from least to most severe, so `max()` over several statuses
/// yields the worst one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    #[default]
    Safe,
    Warning,
    Danger,
}

impl Status {
    /// Returns a short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Safe => "SAFE",
            Status::Warning => "WARN",
            Status::Danger => "DANGER",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Safe => "safe",
            Status::Warning => "warning",
            Status::Danger => "danger",
        })
    }
}

/// The three simulated sensors.
///
/// [`SensorKind::ALL`] fixes the evaluation order used for classification
/// and alert emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SensorKind {
    Ultrasonic,
    Fire,
    Tilt,
}

impl SensorKind {
    /// All sensor kinds in evaluation order.
    pub const ALL: [SensorKind; 3] = [SensorKind::Ultrasonic, SensorKind::Fire, SensorKind::Tilt];

    /// Human readable sensor title.
    pub fn title(&self) -> &'static str {
        match self {
            SensorKind::Ultrasonic => "Ultrasonic Sensor",
            SensorKind::Fire => "Fire Sensor",
            SensorKind::Tilt => "Tilt Sensor",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SensorKind::Ultrasonic => "ultrasonic",
            SensorKind::Fire => "fire",
            SensorKind::Tilt => "tilt",
        })
    }
}
