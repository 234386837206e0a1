//! # sensorwatch-sim
//!
//! Sensor sampler, safety classifier and dashboard state reducer.
//!
//! Every cycle runs the same pipeline:
//!
//! ```text
//! Sampler::sample() ──▶ classify() ──▶ derive_alerts() ──▶ DashboardState::update()
//!   (random + clock)     (thresholds)    (danger only)       (bounded logs)
//! ```
//!
//! The [`Simulator`] owns one [`DashboardState`] and drives the pipeline.
//! With the `tokio` feature (enabled by default) it can be started as a
//! periodic background task controlled through a [`SimulatorHandle`].
//!
//! ## Quick Start
//!
//! ```rust
//! use sensorwatch_sim::{ManualClock, SequenceSource, Simulator};
//!
//! // Every draw returns 0.05: distance 10cm (danger), tilt -13.5° (warning)
//! let mut simulator = Simulator::new(SequenceSource::new(vec![0.05]), ManualClock::new(0));
//!
//! let alerts = simulator.step();
//! assert_eq!(alerts.len(), 1);
//! assert_eq!(alerts[0].message, "Object detected at 10cm - Too close!");
//! assert_eq!(simulator.state().history().len(), 1);
//! ```
//!
//! ## Background task
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use sensorwatch_sim::Simulator;
//!
//! #[tokio::main]
//! async fn main() {
//!     let handle = Simulator::from_entropy()
//!         .start(Duration::from_secs(2))
//!         .expect("non-zero interval");
//!
//!     let mut updates = handle.subscribe();
//!     while updates.changed().await.is_ok() {
//!         let state = updates.borrow_and_update().clone();
//!         println!("cycle {}: {}", state.cycle(), state.current().overall_status());
//!     }
//! }
//! ```

mod alerts;
mod classify;
mod error;
mod sampler;
mod simulator;
mod source;
mod state;

#[cfg(feature = "tokio")]
mod runner;

pub use alerts::{derive_alerts, AlertSequence};
pub use classify::*;
pub use error::{SimError, StateError};
pub use sampler::Sampler;
pub use simulator::{DefaultSimulator, Simulator};
pub use source::{Clock, ManualClock, RandomSource, RngSource, SequenceSource, SystemClock};
pub use state::{DashboardState, MAX_ALERTS, MAX_HISTORY};

#[cfg(feature = "tokio")]
pub use runner::{SimulatorHandle, DEFAULT_INTERVAL};

// Re-export types for convenience
pub use sensorwatch_types::{
    Alert, AlertId, FireReading, SensorKind, SensorReading, SensorSnapshot, Severity, Status,
    TiltReading, UltrasonicReading,
};
