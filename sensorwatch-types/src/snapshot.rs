//! SensorSnapshot - one reading of every sensor at a single instant.

use crate::{FireReading, SensorKind, SensorReading, Status, TiltReading, UltrasonicReading};

/// One reading of each sensor kind plus the time it was taken.
///
/// Snapshots are values: once produced they are never modified, only
/// replaced by the next one.
///
/// # Example
///
/// ```rust
/// use sensorwatch_types::{SensorKind, SensorSnapshot};
///
/// let snapshot = SensorSnapshot::initial(0);
/// let kinds: Vec<SensorKind> = snapshot.readings().iter().map(|r| r.kind()).collect();
/// assert_eq!(kinds, SensorKind::ALL);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSnapshot {
    pub ultrasonic: UltrasonicReading,
    pub fire: FireReading,
    pub tilt: TiltReading,
    /// Unix timestamp in milliseconds when the sample was taken.
    pub timestamp_ms: u64,
}

impl SensorSnapshot {
    /// The resting snapshot shown before the first sample arrives.
    pub fn initial(timestamp_ms: u64) -> Self {
        Self {
            ultrasonic: UltrasonicReading {
                distance: 100,
                object_detected: false,
                status: Status::Safe,
            },
            fire: FireReading {
                temperature: 22.0,
                infrared_level: 0.0,
                status: Status::Safe,
            },
            tilt: TiltReading {
                angle: 0.0,
                is_stable: true,
                status: Status::Safe,
            },
            timestamp_ms,
        }
    }

    /// Create a builder for constructing snapshots.
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::new()
    }

    /// All readings in evaluation order (ultrasonic, fire, tilt).
    pub fn readings(&self) -> [SensorReading; 3] {
        [
            SensorReading::Ultrasonic(self.ultrasonic),
            SensorReading::Fire(self.fire),
            SensorReading::Tilt(self.tilt),
        ]
    }

    /// Get the reading for a specific sensor.
    pub fn reading(&self, kind: SensorKind) -> SensorReading {
        match kind {
            SensorKind::Ultrasonic => self.ultrasonic.into(),
            SensorKind::Fire => self.fire.into(),
            SensorKind::Tilt => self.tilt.into(),
        }
    }

    /// Status of a specific sensor.
    pub fn status(&self, kind: SensorKind) -> Status {
        self.reading(kind).status()
    }

    /// Statuses in evaluation order.
    pub fn statuses(&self) -> [Status; 3] {
        [self.ultrasonic.status, self.fire.status, self.tilt.status]
    }

    /// The worst status across all sensors.
    pub fn overall_status(&self) -> Status {
        self.statuses().into_iter().max().unwrap_or_default()
    }
}

/// Builder for constructing `SensorSnapshot` instances.
///
/// Starts from an unclassified sample at the resting values of
/// [`SensorSnapshot::initial`]; every status is `Safe` and
/// `is_stable` is `true` unless set otherwise.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: SensorSnapshot,
}

impl SnapshotBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            snapshot: SensorSnapshot::initial(0),
        }
    }

    pub fn distance(mut self, cm: u32) -> Self {
        self.snapshot.ultrasonic.distance = cm;
        self
    }

    pub fn object_detected(mut self, detected: bool) -> Self {
        self.snapshot.ultrasonic.object_detected = detected;
        self
    }

    pub fn temperature(mut self, celsius: f64) -> Self {
        self.snapshot.fire.temperature = celsius;
        self
    }

    pub fn infrared_level(mut self, percent: f64) -> Self {
        self.snapshot.fire.infrared_level = percent;
        self
    }

    pub fn angle(mut self, degrees: f64) -> Self {
        self.snapshot.tilt.angle = degrees;
        self
    }

    pub fn is_stable(mut self, stable: bool) -> Self {
        self.snapshot.tilt.is_stable = stable;
        self
    }

    /// Set the timestamp (milliseconds since Unix epoch).
    pub fn timestamp_ms(mut self, ts: u64) -> Self {
        self.snapshot.timestamp_ms = ts;
        self
    }

    /// Build the snapshot.
    pub fn build(self) -> SensorSnapshot {
        self.snapshot
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
