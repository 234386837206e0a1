//! Alert derivation for classified snapshots.

use sensorwatch_types::{Alert, AlertId, SensorKind, SensorSnapshot, Severity, Status};

/// Monotonic source of alert identifiers.
#[derive(Debug, Clone)]
pub struct AlertSequence {
    next: u64,
}

impl AlertSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next identifier.
    pub fn next_id(&mut self) -> AlertId {
        let id = AlertId(self.next);
        self.next += 1;
        id
    }
}

impl Default for AlertSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit one alert per sensor whose status is `Danger`.
///
/// Alerts come out in sensor order (ultrasonic, fire, tilt) and carry the
/// snapshot's timestamp. Warnings never raise an alert, and there is no edge
/// detection: a sensor that stays dangerous raises a new alert every sample.
pub fn derive_alerts(snapshot: &SensorSnapshot, ids: &mut AlertSequence) -> Vec<Alert> {
    SensorKind::ALL
        .into_iter()
        .filter(|kind| snapshot.status(*kind) == Status::Danger)
        .map(|kind| Alert {
            id: ids.next_id(),
            kind,
            message: danger_message(snapshot, kind),
            severity: Severity::Danger,
            timestamp_ms: snapshot.timestamp_ms,
        })
        .collect()
}

fn danger_message(snapshot: &SensorSnapshot, kind: SensorKind) -> String {
    match kind {
        SensorKind::Ultrasonic => format!(
            "Object detected at {}cm - Too close!",
            snapshot.ultrasonic.distance
        ),
        SensorKind::Fire => format!(
            "Fire alert! Temperature: {:.1}°C, Infrared: {:.0}%",
            snapshot.fire.temperature, snapshot.fire.infrared_level
        ),
        SensorKind::Tilt => format!(
            "Critical tilt detected: {:.1}° - Structure unstable!",
            snapshot.tilt.angle
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;

    fn classified(distance: u32, temperature: f64, infrared: f64, angle: f64) -> SensorSnapshot {
        classify(
            SensorSnapshot::builder()
                .distance(distance)
                .temperature(temperature)
                .infrared_level(infrared)
                .angle(angle)
                .timestamp_ms(5_000)
                .build(),
        )
    }

    #[test]
    fn close_object_raises_one_alert() {
        let mut ids = AlertSequence::new();
        let alerts = derive_alerts(&classified(15, 22.0, 10.0, 2.0), &mut ids);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, SensorKind::Ultrasonic);
        assert_eq!(alerts[0].message, "Object detected at 15cm - Too close!");
        assert_eq!(alerts[0].severity, Severity::Danger);
        assert_eq!(alerts[0].timestamp_ms, 5_000);
    }

    #[test]
    fn fire_and_tilt_alerts_in_sensor_order() {
        let mut ids = AlertSequence::new();
        let alerts = derive_alerts(&classified(100, 32.0, 10.0, 20.0), &mut ids);

        let kinds: Vec<SensorKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![SensorKind::Fire, SensorKind::Tilt]);
        assert_eq!(alerts[0].message, "Fire alert! Temperature: 32.0°C, Infrared: 10%");
        assert_eq!(alerts[1].message, "Critical tilt detected: 20.0° - Structure unstable!");
    }

    #[test]
    fn messages_round_measurements() {
        let mut ids = AlertSequence::new();
        let alerts = derive_alerts(&classified(100, 31.26, 72.6, -17.44), &mut ids);

        assert_eq!(alerts[0].message, "Fire alert! Temperature: 31.3°C, Infrared: 73%");
        assert_eq!(alerts[1].message, "Critical tilt detected: -17.4° - Structure unstable!");
    }

    #[test]
    fn warnings_raise_no_alerts() {
        let mut ids = AlertSequence::new();
        let snapshot = classified(30, 28.0, 40.0, 10.0);
        assert_eq!(snapshot.statuses(), [Status::Warning; 3]);

        assert!(derive_alerts(&snapshot, &mut ids).is_empty());
    }

    #[test]
    fn every_danger_sample_raises_a_fresh_alert() {
        let mut ids = AlertSequence::new();
        let snapshot = classified(5, 22.0, 0.0, 0.0);

        let first = derive_alerts(&snapshot, &mut ids);
        let second = derive_alerts(&snapshot, &mut ids);

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_ne!(first[0].id, second[0].id);
        assert_eq!(first[0].message, second[0].message);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ids = AlertSequence::new();
        let alerts = derive_alerts(&classified(5, 35.0, 90.0, 30.0), &mut ids);

        assert_eq!(alerts.len(), 3);
        assert!(alerts.windows(2).all(|w| w[0].id < w[1].id));
    }
}
