//! Raw sensor sample generation.

use sensorwatch_types::{FireReading, SensorSnapshot, Status, TiltReading, UltrasonicReading};

use crate::source::{Clock, RandomSource};

/// Upper bound (exclusive) of the simulated distance in centimeters.
const DISTANCE_RANGE_CM: f64 = 200.0;
/// Draws above this report an object before classification (probability 0.3).
const OBJECT_DETECTED_ABOVE: f64 = 0.7;
/// Simulated temperature domain: `[BASE, BASE + SPAN)` °C.
const TEMPERATURE_BASE_C: f64 = 20.0;
const TEMPERATURE_SPAN_C: f64 = 15.0;
/// Simulated infrared domain in percent.
const INFRARED_RANGE: f64 = 100.0;
/// Simulated tilt domain: `[-SPAN/2, SPAN/2)` degrees.
const ANGLE_SPAN_DEG: f64 = 30.0;

/// Produces unclassified snapshots from a random source and a clock.
///
/// Each sample is independent of the previous one. Statuses are all `Safe`
/// and `is_stable` is `true` until [`classify`](crate::classify) runs.
#[derive(Debug, Clone)]
pub struct Sampler<R, C> {
    random: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> Sampler<R, C> {
    pub fn new(random: R, clock: C) -> Self {
        Self { random, clock }
    }

    /// Current time according to the sampler's clock.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Draw one raw snapshot.
    ///
    /// Draws are consumed in a fixed order: distance, object detection,
    /// temperature, infrared level, angle.
    pub fn sample(&mut self) -> SensorSnapshot {
        let distance = (self.random.next_unit() * DISTANCE_RANGE_CM).floor() as u32;
        let object_detected = self.random.next_unit() > OBJECT_DETECTED_ABOVE;
        let temperature = TEMPERATURE_BASE_C + self.random.next_unit() * TEMPERATURE_SPAN_C;
        let infrared_level = self.random.next_unit() * INFRARED_RANGE;
        let angle = (self.random.next_unit() - 0.5) * ANGLE_SPAN_DEG;

        SensorSnapshot {
            ultrasonic: UltrasonicReading {
                distance,
                object_detected,
                status: Status::Safe,
            },
            fire: FireReading {
                temperature,
                infrared_level,
                status: Status::Safe,
            },
            tilt: TiltReading {
                angle,
                is_stable: true,
                status: Status::Safe,
            },
            timestamp_ms: self.clock.now_ms(),
        }
    }
}
