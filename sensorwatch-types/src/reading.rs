//! Per-sensor measurements.

use crate::{SensorKind, Status};

/// Ultrasonic distance sensor measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UltrasonicReading {
    /// Distance to the nearest object in centimeters.
    pub distance: u32,
    /// Whether an object is considered present.
    pub object_detected: bool,
    pub status: Status,
}

/// Fire sensor measurement (temperature plus infrared).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireReading {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Infrared level in percent (0-100).
    pub infrared_level: f64,
    pub status: Status,
}

/// Tilt sensor measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TiltReading {
    /// Signed tilt angle in degrees.
    pub angle: f64,
    pub is_stable: bool,
    pub status: Status,
}

/// A reading from any one of the three sensors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum SensorReading {
    Ultrasonic(UltrasonicReading),
    Fire(FireReading),
    Tilt(TiltReading),
}

impl SensorReading {
    /// The sensor this reading came from.
    pub fn kind(&self) -> SensorKind {
        match self {
            SensorReading::Ultrasonic(_) => SensorKind::Ultrasonic,
            SensorReading::Fire(_) => SensorKind::Fire,
            SensorReading::Tilt(_) => SensorKind::Tilt,
        }
    }

    /// The derived status of this reading.
    pub fn status(&self) -> Status {
        match self {
            SensorReading::Ultrasonic(r) => r.status,
            SensorReading::Fire(r) => r.status,
            SensorReading::Tilt(r) => r.status,
        }
    }
}

impl From<UltrasonicReading> for SensorReading {
    fn from(r: UltrasonicReading) -> Self {
        SensorReading::Ultrasonic(r)
    }
}

impl From<FireReading> for SensorReading {
    fn from(r: FireReading) -> Self {
        SensorReading::Fire(r)
    }
}

impl From<TiltReading> for SensorReading {
    fn from(r: TiltReading) -> Self {
        SensorReading::Tilt(r)
    }
}
