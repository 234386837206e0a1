//! Periodic background execution of the simulator.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::SimError;
use crate::simulator::Simulator;
use crate::source::{Clock, RandomSource};
use crate::state::DashboardState;

/// Default time between sampling cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// Commands accepted by the running task between cycles.
#[derive(Debug)]
enum Command {
    ClearAlerts,
}

impl<R, C> Simulator<R, C>
where
    R: RandomSource + Send + 'static,
    C: Clock + Send + 'static,
{
    /// Start running one cycle every `interval` on a tokio task.
    ///
    /// The first cycle runs one interval after start; until then subscribers
    /// see the resting snapshot. Cycles never overlap, and commands sent
    /// through the handle are applied between cycles.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(self, interval: Duration) -> Result<SimulatorHandle, SimError> {
        if interval.is_zero() {
            return Err(SimError::InvalidInterval);
        }

        let (state_tx, state_rx) = watch::channel(self.state().clone());
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);

        info!(interval_ms = interval.as_millis() as u64, "starting simulator");
        let task = tokio::spawn(run(self, interval, state_tx, command_rx, stop_rx));

        Ok(SimulatorHandle {
            state_rx,
            command_tx,
            stop_tx,
            task,
        })
    }
}

async fn run<R, C>(
    mut simulator: Simulator<R, C>,
    interval: Duration,
    state_tx: watch::Sender<DashboardState>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    mut stop_rx: watch::Receiver<bool>,
) where
    R: RandomSource,
    C: Clock,
{
    let mut timer = tokio::time::interval_at(Instant::now() + interval, interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = timer.tick() => {
                simulator.step();
                state_tx.send_replace(simulator.state().clone());
            }
            command = commands.recv() => match command {
                Some(Command::ClearAlerts) => {
                    simulator.clear_alerts();
                    state_tx.send_replace(simulator.state().clone());
                }
                // Every handle is gone
                None => break,
            },
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
            }
        }
    }

    debug!(cycles = simulator.state().cycle(), "simulator task exiting");
    info!("simulator stopped");
}

/// Handle for observing and controlling a running simulator.
///
/// Dropping the handle stops the task.
#[derive(Debug)]
pub struct SimulatorHandle {
    state_rx: watch::Receiver<DashboardState>,
    command_tx: mpsc::UnboundedSender<Command>,
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SimulatorHandle {
    /// Subscribe to state updates. The receiver always holds the latest state.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state_rx.clone()
    }

    /// Clone of the most recently published state.
    pub fn state(&self) -> DashboardState {
        self.state_rx.borrow().clone()
    }

    /// Ask the task to empty the alert log before its next cycle.
    pub fn clear_alerts(&self) -> Result<(), SimError> {
        if !self.is_running() {
            return Err(SimError::Stopped);
        }
        self.command_tx
            .send(Command::ClearAlerts)
            .map_err(|_| SimError::Stopped)
    }

    /// Stop all future cycles.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// Whether the background task is still alive.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}
