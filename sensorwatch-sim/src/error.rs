//! Error types for the simulator task.

use thiserror::Error;

/// Errors from starting or commanding the simulator.
///
/// The sampling pipeline itself is infallible; these only concern the
/// background task around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The background task has exited (stopped or dropped).
    #[error("Simulator is not running")]
    Stopped,

    /// A zero sampling interval was requested.
    #[error("Sampling interval must be greater than zero")]
    InvalidInterval,
}

/// Ways a deserialized [`DashboardState`](crate::DashboardState) can disagree
/// with what the simulator produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("current snapshot has statuses that do not match its readings")]
    CurrentUnclassified,

    #[error("history entry {0} has statuses that do not match its readings")]
    HistoryUnclassified(usize),

    #[error("history holds {0} snapshots (at most {max})", max = crate::MAX_HISTORY)]
    HistoryTooLong(usize),

    #[error("alert log holds {0} alerts (at most {max})", max = crate::MAX_ALERTS)]
    TooManyAlerts(usize),
}
