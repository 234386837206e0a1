//! The Simulator: one sampler, one dashboard state, one cycle at a time.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sensorwatch_types::{Alert, SensorSnapshot};
use tracing::{debug, info, warn};

use crate::alerts::{derive_alerts, AlertSequence};
use crate::classify::classify;
use crate::sampler::Sampler;
use crate::source::{Clock, RandomSource, RngSource, SystemClock};
use crate::state::DashboardState;

/// Simulator backed by `StdRng` and the system clock.
pub type DefaultSimulator = Simulator<RngSource<StdRng>, SystemClock>;

/// Owns the dashboard state and runs sample → classify → alerts → update.
///
/// # Example
///
/// ```rust
/// use sensorwatch_sim::Simulator;
///
/// let mut simulator = Simulator::seeded(7);
/// simulator.run_cycles(25);
///
/// assert_eq!(simulator.state().cycle(), 25);
/// assert_eq!(simulator.state().history().len(), 20);
/// ```
#[derive(Debug)]
pub struct Simulator<R, C> {
    sampler: Sampler<R, C>,
    state: DashboardState,
    ids: AlertSequence,
}

impl DefaultSimulator {
    /// Deterministic simulator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::new(StdRng::seed_from_u64(seed)), SystemClock)
    }

    /// Simulator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(RngSource::new(StdRng::from_entropy()), SystemClock)
    }
}

impl<R: RandomSource, C: Clock> Simulator<R, C> {
    /// Create a simulator showing the resting snapshot, stamped with the
    /// clock's current time.
    pub fn new(random: R, clock: C) -> Self {
        let initial = SensorSnapshot::initial(clock.now_ms());
        Self {
            sampler: Sampler::new(random, clock),
            state: DashboardState::new(initial),
            ids: AlertSequence::new(),
        }
    }

    /// The current dashboard state.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Run one full cycle and return the alerts it raised.
    pub fn step(&mut self) -> Vec<Alert> {
        let snapshot = classify(self.sampler.sample());
        let alerts = derive_alerts(&snapshot, &mut self.ids);

        for alert in &alerts {
            warn!(kind = %alert.kind, id = %alert.id, "{}", alert.message);
        }

        let [ultrasonic, fire, tilt] = snapshot.statuses();
        debug!(
            cycle = self.state.cycle() + 1,
            %ultrasonic,
            %fire,
            %tilt,
            alerts = alerts.len(),
            "sensor cycle"
        );

        self.state = std::mem::take(&mut self.state).update(snapshot, alerts.clone());
        alerts
    }

    /// Run `n` cycles back to back, without any timer.
    pub fn run_cycles(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Empty the alert log.
    pub fn clear_alerts(&mut self) {
        info!(cleared = self.state.alerts().len(), "clearing alerts");
        self.state = std::mem::take(&mut self.state).clear_alerts();
    }

    /// Consume the simulator, returning its final state.
    pub fn into_state(self) -> DashboardState {
        self.state
    }
}
