//! Live data source backed by a running simulator task.
//!
//! States arrive through the task's watch channel; commands go back through
//! the [`SimulatorHandle`].

use anyhow::Result;
use tokio::sync::watch;

use sensorwatch_sim::{DashboardState, SimulatorHandle};

use super::DataSource;

/// A data source that receives dashboard states from a [`SimulatorHandle`].
///
/// Dropping the source drops the handle, which stops the simulator.
///
/// Clearing alerts queues a command for the task and also hands the next
/// [`poll`](DataSource::poll) a cleared copy of the latest state, so the
/// dashboard does not wait for the task to republish.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use sensorwatch::{ChannelSource, DataSource};
/// use sensorwatch_sim::Simulator;
///
/// # tokio_test::block_on(async {
/// let handle = Simulator::seeded(1).start(Duration::from_secs(2)).unwrap();
/// let mut source = ChannelSource::new(handle, "seed 1");
///
/// // The resting state is available immediately
/// assert!(source.poll().is_some());
/// # });
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    handle: SimulatorHandle,
    receiver: watch::Receiver<DashboardState>,
    description: String,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
    /// Cleared copy returned by the next poll
    pending_clear: Option<DashboardState>,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `handle` - Handle of a started simulator
    /// * `source_description` - Shown in the status bar (e.g. "every 2.0s")
    pub fn new(handle: SimulatorHandle, source_description: &str) -> Self {
        let description = format!("simulator: {}", source_description);
        Self {
            receiver: handle.subscribe(),
            handle,
            description,
            initial_returned: false,
            pending_clear: None,
        }
    }

    pub fn handle(&self) -> &SimulatorHandle {
        &self.handle
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<DashboardState> {
        // Return the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if let Some(state) = self.pending_clear.take() {
            return Some(state);
        }

        // Check if there's a new value without blocking
        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        if self.handle.is_running() {
            None
        } else {
            Some("Simulator is not running")
        }
    }

    fn clear_alerts(&mut self) -> Result<()> {
        self.handle.clear_alerts()?;
        self.pending_clear = Some(self.receiver.borrow().clone().clear_alerts());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorwatch_sim::{ManualClock, SequenceSource, Simulator, DEFAULT_INTERVAL};

    fn start_dangerous() -> ChannelSource {
        let handle = Simulator::new(SequenceSource::new(vec![0.05]), ManualClock::new(0))
            .start(DEFAULT_INTERVAL)
            .unwrap();
        ChannelSource::new(handle, "test")
    }

    #[tokio::test(start_paused = true)]
    async fn test_channel_source_poll() {
        let mut source = start_dangerous();
        assert_eq!(source.description(), "simulator: test");

        // Initially returns the resting state
        let state = source.poll().unwrap();
        assert_eq!(state.cycle(), 0);

        // No change, so poll returns None
        assert!(source.poll().is_none());

        // After one interval the first cycle has been published
        tokio::time::sleep(DEFAULT_INTERVAL + DEFAULT_INTERVAL / 2).await;
        let state = source.poll().unwrap();
        assert_eq!(state.cycle(), 1);
        assert_eq!(state.alerts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_channel_source_clear_alerts() {
        let mut source = start_dangerous();
        tokio::time::sleep(DEFAULT_INTERVAL + DEFAULT_INTERVAL / 2).await;
        assert_eq!(source.poll().unwrap().alerts().len(), 1);

        source.clear_alerts().unwrap();
        tokio::task::yield_now().await;
        tokio::time::sleep(DEFAULT_INTERVAL / 10).await;

        let state = source.poll().unwrap();
        assert!(state.alerts().is_empty());
        assert_eq!(state.cycle(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_channel_source_clear_is_visible_before_task_runs() {
        let mut source = start_dangerous();
        tokio::time::sleep(DEFAULT_INTERVAL + DEFAULT_INTERVAL / 2).await;
        assert_eq!(source.poll().unwrap().alerts().len(), 1);

        // No yield, so the task has not seen the command yet
        source.clear_alerts().unwrap();
        let state = source.poll().unwrap();
        assert!(state.alerts().is_empty());
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.cycle(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_channel_source_reports_stopped_simulator() {
        let mut source = start_dangerous();
        assert!(source.error().is_none());

        source.handle().stop();
        tokio::time::sleep(DEFAULT_INTERVAL / 10).await;

        assert_eq!(source.error(), Some("Simulator is not running"));
        assert!(source.clear_alerts().is_err());
    }
}
