//! Alert records emitted for dangerous readings.

use core::fmt;

use crate::SensorKind;

/// Unique alert identifier.
///
/// Identifiers come from a monotonically increasing sequence, so a larger id
/// always means a later alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AlertId(pub u64);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How serious an alert is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        })
    }
}

/// A record describing a dangerous sensor condition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    pub id: AlertId,
    pub kind: SensorKind,
    pub message: String,
    pub severity: Severity,
    /// Timestamp of the snapshot that raised the alert (ms since Unix epoch).
    pub timestamp_ms: u64,
}

impl Alert {
    /// Stable textual reference, e.g. `alert-1700000000000-fire-12`.
    pub fn reference(&self) -> String {
        format!("alert-{}-{}-{}", self.timestamp_ms, self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_includes_time_kind_and_sequence() {
        let alert = Alert {
            id: AlertId(12),
            kind: SensorKind::Fire,
            message: "Fire alert!".to_string(),
            severity: Severity::Danger,
            timestamp_ms: 1_700_000_000_000,
        };

        assert_eq!(alert.reference(), "alert-1700000000000-fire-12");
    }

    #[test]
    fn alert_ids_order_by_sequence() {
        assert!(AlertId(1) < AlertId(2));
    }
}
