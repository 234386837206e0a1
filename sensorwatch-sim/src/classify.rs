//! Safety classification of raw snapshots.
//!
//! Thresholds are fixed. Each sensor is checked danger-first, then warning,
//! in the order ultrasonic, fire, tilt.
//!
//! | Sensor     | danger                      | warning                     |
//! |------------|-----------------------------|-----------------------------|
//! | ultrasonic | distance < 20               | distance < 50               |
//! | fire       | temp > 30 or infrared > 60  | temp > 27 or infrared > 30  |
//! | tilt       | \|angle\| > 15              | \|angle\| > 8               |

use sensorwatch_types::{FireReading, SensorSnapshot, Status, TiltReading, UltrasonicReading};

/// Distances below this are dangerous (cm).
pub const ULTRASONIC_DANGER_CM: u32 = 20;
/// Distances below this are a warning (cm).
pub const ULTRASONIC_WARNING_CM: u32 = 50;
/// Temperatures above this are dangerous (°C).
pub const FIRE_DANGER_TEMPERATURE_C: f64 = 30.0;
/// Temperatures above this are a warning (°C).
pub const FIRE_WARNING_TEMPERATURE_C: f64 = 27.0;
/// Infrared levels above this are dangerous (%).
pub const FIRE_DANGER_INFRARED: f64 = 60.0;
/// Infrared levels above this are a warning (%).
pub const FIRE_WARNING_INFRARED: f64 = 30.0;
/// Absolute tilt above this is dangerous (degrees).
pub const TILT_DANGER_DEG: f64 = 15.0;
/// Absolute tilt above this is a warning (degrees).
pub const TILT_WARNING_DEG: f64 = 8.0;

/// Classify every reading of a snapshot.
///
/// Pure and idempotent: the result depends only on the measurement fields,
/// and classifying an already classified snapshot returns it unchanged.
///
/// Besides setting `status`, a non-safe ultrasonic reading forces
/// `object_detected = true` and a non-safe tilt reading forces
/// `is_stable = false`.
///
/// # Example
///
/// ```rust
/// use sensorwatch_sim::{classify, SensorSnapshot, Status};
///
/// let raw = SensorSnapshot::builder().distance(100).temperature(32.0).angle(20.0).build();
/// let classified = classify(raw);
///
/// assert_eq!(classified.statuses(), [Status::Safe, Status::Danger, Status::Danger]);
/// assert!(!classified.tilt.is_stable);
/// ```
pub fn classify(snapshot: SensorSnapshot) -> SensorSnapshot {
    SensorSnapshot {
        ultrasonic: classify_ultrasonic(snapshot.ultrasonic),
        fire: classify_fire(snapshot.fire),
        tilt: classify_tilt(snapshot.tilt),
        timestamp_ms: snapshot.timestamp_ms,
    }
}

fn classify_ultrasonic(reading: UltrasonicReading) -> UltrasonicReading {
    let status = if reading.distance < ULTRASONIC_DANGER_CM {
        Status::Danger
    } else if reading.distance < ULTRASONIC_WARNING_CM {
        Status::Warning
    } else {
        Status::Safe
    };

    UltrasonicReading {
        object_detected: reading.object_detected || status != Status::Safe,
        status,
        ..reading
    }
}

fn classify_fire(reading: FireReading) -> FireReading {
    let status = if reading.temperature > FIRE_DANGER_TEMPERATURE_C
        || reading.infrared_level > FIRE_DANGER_INFRARED
    {
        Status::Danger
    } else if reading.temperature > FIRE_WARNING_TEMPERATURE_C
        || reading.infrared_level > FIRE_WARNING_INFRARED
    {
        Status::Warning
    } else {
        Status::Safe
    };

    FireReading { status, ..reading }
}

fn classify_tilt(reading: TiltReading) -> TiltReading {
    let tilt = reading.angle.abs();
    let status = if tilt > TILT_DANGER_DEG {
        Status::Danger
    } else if tilt > TILT_WARNING_DEG {
        Status::Warning
    } else {
        Status::Safe
    };

    TiltReading {
        is_stable: reading.is_stable && status == Status::Safe,
        status,
        ..reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(distance: u32, temperature: f64, infrared: f64, angle: f64) -> SensorSnapshot {
        SensorSnapshot::builder()
            .distance(distance)
            .temperature(temperature)
            .infrared_level(infrared)
            .angle(angle)
            .build()
    }

    #[test]
    fn close_objects_are_dangerous_and_detected() {
        for distance in [0, 1, 10, 19] {
            let s = classify(snapshot(distance, 22.0, 0.0, 0.0));
            assert_eq!(s.ultrasonic.status, Status::Danger, "distance {distance}");
            assert!(s.ultrasonic.object_detected);
        }
    }

    #[test]
    fn nearby_objects_are_a_warning_and_detected() {
        for distance in [20, 35, 49] {
            let s = classify(snapshot(distance, 22.0, 0.0, 0.0));
            assert_eq!(s.ultrasonic.status, Status::Warning, "distance {distance}");
            assert!(s.ultrasonic.object_detected);
        }
    }

    #[test]
    fn distant_objects_keep_sampled_detection() {
        let undetected = classify(snapshot(50, 22.0, 0.0, 0.0));
        assert_eq!(undetected.ultrasonic.status, Status::Safe);
        assert!(!undetected.ultrasonic.object_detected);

        let detected = classify(
            SensorSnapshot::builder().distance(150).object_detected(true).build(),
        );
        assert_eq!(detected.ultrasonic.status, Status::Safe);
        assert!(detected.ultrasonic.object_detected);
    }

    #[test]
    fn fire_danger_on_temperature_or_infrared() {
        assert_eq!(classify(snapshot(100, 30.1, 0.0, 0.0)).fire.status, Status::Danger);
        assert_eq!(classify(snapshot(100, 22.0, 60.5, 0.0)).fire.status, Status::Danger);
        assert_eq!(classify(snapshot(100, 34.9, 99.0, 0.0)).fire.status, Status::Danger);
    }

    #[test]
    fn fire_warning_band() {
        assert_eq!(classify(snapshot(100, 27.5, 0.0, 0.0)).fire.status, Status::Warning);
        assert_eq!(classify(snapshot(100, 22.0, 31.0, 0.0)).fire.status, Status::Warning);
        // Boundaries are exclusive
        assert_eq!(classify(snapshot(100, 30.0, 60.0, 0.0)).fire.status, Status::Warning);
        assert_eq!(classify(snapshot(100, 27.0, 30.0, 0.0)).fire.status, Status::Safe);
    }

    #[test]
    fn extreme_tilt_is_dangerous_and_unstable() {
        for angle in [15.5, -15.5, 40.0] {
            let s = classify(snapshot(100, 22.0, 0.0, angle));
            assert_eq!(s.tilt.status, Status::Danger, "angle {angle}");
            assert!(!s.tilt.is_stable);
        }
    }

    #[test]
    fn moderate_tilt_is_a_warning_and_unstable() {
        for angle in [8.5, -8.5, 15.0, -15.0] {
            let s = classify(snapshot(100, 22.0, 0.0, angle));
            assert_eq!(s.tilt.status, Status::Warning, "angle {angle}");
            assert!(!s.tilt.is_stable);
        }
    }

    #[test]
    fn small_tilt_is_safe_and_stable() {
        let s = classify(snapshot(100, 22.0, 0.0, -8.0));
        assert_eq!(s.tilt.status, Status::Safe);
        assert!(s.tilt.is_stable);
    }

    /// Every threshold rule, checked against one raw/classified pair.
    fn assert_rules_hold(raw: &SensorSnapshot, out: &SensorSnapshot) {
        let d = raw.ultrasonic.distance;
        match out.ultrasonic.status {
            Status::Danger => assert!(d < ULTRASONIC_DANGER_CM),
            Status::Warning => assert!((ULTRASONIC_DANGER_CM..ULTRASONIC_WARNING_CM).contains(&d)),
            Status::Safe => assert!(d >= ULTRASONIC_WARNING_CM),
        }
        if d < ULTRASONIC_WARNING_CM {
            assert!(out.ultrasonic.object_detected);
        } else {
            assert_eq!(out.ultrasonic.object_detected, raw.ultrasonic.object_detected);
        }

        let (t, ir) = (raw.fire.temperature, raw.fire.infrared_level);
        let fire_danger = t > FIRE_DANGER_TEMPERATURE_C || ir > FIRE_DANGER_INFRARED;
        let fire_warning = t > FIRE_WARNING_TEMPERATURE_C || ir > FIRE_WARNING_INFRARED;
        let expected = if fire_danger {
            Status::Danger
        } else if fire_warning {
            Status::Warning
        } else {
            Status::Safe
        };
        assert_eq!(out.fire.status, expected);

        let angle = raw.tilt.angle.abs();
        match out.tilt.status {
            Status::Danger => assert!(angle > TILT_DANGER_DEG),
            Status::Warning => assert!(angle > TILT_WARNING_DEG && angle <= TILT_DANGER_DEG),
            Status::Safe => assert!(angle <= TILT_WARNING_DEG),
        }
        if out.tilt.status == Status::Safe {
            assert_eq!(out.tilt.is_stable, raw.tilt.is_stable);
        } else {
            assert!(!out.tilt.is_stable);
        }

        assert_eq!(classify(out.clone()), *out);
    }

    #[test]
    fn rules_hold_for_seeded_samples() {
        use crate::{ManualClock, RngSource, Sampler};
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let random = RngSource::new(StdRng::seed_from_u64(17));
        let mut sampler = Sampler::new(random, ManualClock::new(0));
        for _ in 0..5_000 {
            let raw = sampler.sample();
            assert_rules_hold(&raw, &classify(raw.clone()));
        }
    }

    #[test]
    fn rules_hold_beyond_the_sampled_ranges() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..5_000 {
            let raw = SensorSnapshot::builder()
                .distance(rng.gen_range(0..300))
                .object_detected(rng.gen_bool(0.5))
                .temperature(rng.gen_range(-10.0..60.0))
                .infrared_level(rng.gen_range(0.0..100.0))
                .angle(rng.gen_range(-45.0..45.0))
                .is_stable(rng.gen_bool(0.5))
                .build();
            assert_rules_hold(&raw, &classify(raw.clone()));
        }
    }

    #[test]
    fn classify_is_idempotent() {
        let cases = [
            snapshot(15, 22.0, 10.0, 2.0),
            snapshot(100, 32.0, 10.0, 20.0),
            snapshot(30, 28.0, 45.0, -9.0),
            snapshot(199, 20.0, 0.0, 0.0),
        ];

        for raw in cases {
            let once = classify(raw);
            let twice = classify(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn classification_preserves_measurements_and_timestamp() {
        let raw = SensorSnapshot::builder()
            .distance(42)
            .temperature(28.25)
            .infrared_level(12.5)
            .angle(-3.0)
            .timestamp_ms(99)
            .build();

        let s = classify(raw);
        assert_eq!(s.ultrasonic.distance, 42);
        assert_eq!(s.fire.temperature, 28.25);
        assert_eq!(s.fire.infrared_level, 12.5);
        assert_eq!(s.tilt.angle, -3.0);
        assert_eq!(s.timestamp_ms, 99);
    }

    #[test]
    fn scenario_close_object_only() {
        let s = classify(snapshot(15, 22.0, 10.0, 2.0));
        assert_eq!(s.statuses(), [Status::Danger, Status::Safe, Status::Safe]);
    }

    #[test]
    fn scenario_fire_and_tilt() {
        let s = classify(snapshot(100, 32.0, 10.0, 20.0));
        assert_eq!(s.statuses(), [Status::Safe, Status::Danger, Status::Danger]);
    }
}
