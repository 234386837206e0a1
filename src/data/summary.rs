//! Status counts across the three sensors.

use serde::{Deserialize, Serialize};

use sensorwatch_sim::DashboardState;
use sensorwatch_types::{SensorSnapshot, Status};

/// How many sensors are in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub safe: usize,
    pub warning: usize,
    pub danger: usize,
}

impl StatusCounts {
    pub fn from_snapshot(snapshot: &SensorSnapshot) -> Self {
        let mut counts = Self::default();
        for status in snapshot.statuses() {
            match status {
                Status::Safe => counts.safe += 1,
                Status::Warning => counts.warning += 1,
                Status::Danger => counts.danger += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.safe + self.warning + self.danger
    }

    /// Worst status present.
    pub fn overall(&self) -> Status {
        if self.danger > 0 {
            Status::Danger
        } else if self.warning > 0 {
            Status::Warning
        } else {
            Status::Safe
        }
    }
}

/// Headline numbers for a dashboard state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub overall: Status,
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub alerts: usize,
    pub history: usize,
    pub cycle: u64,
}

impl Summary {
    pub fn from_state(state: &DashboardState) -> Self {
        let counts = StatusCounts::from_snapshot(state.current());
        Self {
            overall: counts.overall(),
            counts,
            alerts: state.alerts().len(),
            history: state.history().len(),
            cycle: state.cycle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorwatch_sim::{classify, derive_alerts, AlertSequence};

    #[test]
    fn test_counts_initial_snapshot() {
        let counts = StatusCounts::from_snapshot(&SensorSnapshot::initial(0));
        assert_eq!(counts.safe, 3);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.overall(), Status::Safe);
    }

    #[test]
    fn test_counts_mixed() {
        // distance 35 → warning, 32°C → danger, 2° → safe
        let snapshot = classify(
            SensorSnapshot::builder().distance(35).temperature(32.0).angle(2.0).build(),
        );
        let counts = StatusCounts::from_snapshot(&snapshot);

        assert_eq!(
            counts,
            StatusCounts {
                safe: 1,
                warning: 1,
                danger: 1
            }
        );
        assert_eq!(counts.overall(), Status::Danger);
    }

    #[test]
    fn test_summary_from_state() {
        let snapshot = classify(SensorSnapshot::builder().distance(15).build());
        let alerts = derive_alerts(&snapshot, &mut AlertSequence::new());
        let state = DashboardState::default().update(snapshot, alerts);

        let summary = Summary::from_state(&state);
        assert_eq!(summary.overall, Status::Danger);
        assert_eq!(summary.counts.danger, 1);
        assert_eq!(summary.alerts, 1);
        assert_eq!(summary.history, 1);
        assert_eq!(summary.cycle, 1);
    }
}
