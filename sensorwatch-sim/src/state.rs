//! Dashboard state and its reducer.

use std::collections::VecDeque;

use sensorwatch_types::{Alert, SensorSnapshot};
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::error::StateError;

/// Maximum number of alerts kept (newest first).
pub const MAX_ALERTS: usize = 10;

/// Maximum number of snapshots kept in the history (oldest first).
pub const MAX_HISTORY: usize = 20;

/// Everything the presentation layer needs to render the dashboard.
///
/// The state is a value: [`update`](Self::update) and
/// [`clear_alerts`](Self::clear_alerts) consume it and return its successor,
/// so a published state is never modified in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    current: SensorSnapshot,
    /// Newest first, at most `MAX_ALERTS`.
    alerts: Vec<Alert>,
    /// Oldest first, at most `MAX_HISTORY`.
    history: VecDeque<SensorSnapshot>,
    /// Number of completed update cycles.
    #[serde(default)]
    cycle: u64,
}

impl DashboardState {
    /// Start from `current` with empty alert and history logs.
    pub fn new(current: SensorSnapshot) -> Self {
        Self {
            current,
            alerts: Vec::new(),
            history: VecDeque::with_capacity(MAX_HISTORY),
            cycle: 0,
        }
    }

    /// The most recent snapshot.
    pub fn current(&self) -> &SensorSnapshot {
        &self.current
    }

    /// Alert log, newest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// History log, oldest first.
    pub fn history(&self) -> &VecDeque<SensorSnapshot> {
        &self.history
    }

    /// Number of completed update cycles.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Fold a classified snapshot and its alerts into the state.
    ///
    /// New alerts are prepended and the log is cut back to `MAX_ALERTS`,
    /// dropping the oldest. The snapshot is appended to the history, which
    /// is cut back to the most recent `MAX_HISTORY` entries.
    pub fn update(mut self, snapshot: SensorSnapshot, new_alerts: Vec<Alert>) -> Self {
        if !new_alerts.is_empty() {
            let mut alerts = new_alerts;
            alerts.extend(self.alerts);
            alerts.truncate(MAX_ALERTS);
            self.alerts = alerts;
        }

        self.history.push_back(snapshot.clone());
        while self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }

        self.current = snapshot;
        self.cycle += 1;
        self
    }

    /// Empty the alert log. Current snapshot and history are untouched.
    pub fn clear_alerts(mut self) -> Self {
        self.alerts.clear();
        self
    }

    /// Check a state that did not come from [`update`](Self::update), such as
    /// one read from a file.
    ///
    /// Every snapshot must already be classified, and both logs must be
    /// within their caps.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.history.len() > MAX_HISTORY {
            return Err(StateError::HistoryTooLong(self.history.len()));
        }
        if self.alerts.len() > MAX_ALERTS {
            return Err(StateError::TooManyAlerts(self.alerts.len()));
        }
        if !is_classified(&self.current) {
            return Err(StateError::CurrentUnclassified);
        }
        if let Some(index) = self.history.iter().position(|s| !is_classified(s)) {
            return Err(StateError::HistoryUnclassified(index));
        }
        Ok(())
    }
}

fn is_classified(snapshot: &SensorSnapshot) -> bool {
    classify(snapshot.clone()) == *snapshot
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(SensorSnapshot::initial(0))
    }
}
