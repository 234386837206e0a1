//! # sensorwatch-types
//!
//! Core types for the simulated sensor dashboard. This crate defines the
//! readings produced by the three mock sensors, the safety [`Status`] derived
//! from them, the [`SensorSnapshot`] that groups one reading of each kind, and
//! the [`Alert`] records emitted for dangerous conditions.
//!
//! ## Features
//!
//! - `serde`: JSON serialization via serde (used for state export)
//!
//! ## Example
//!
//! ```rust
//! use sensorwatch_types::{SensorKind, SensorSnapshot, Status};
//!
//! let snapshot = SensorSnapshot::builder()
//!     .distance(15)
//!     .temperature(22.0)
//!     .infrared_level(10.0)
//!     .angle(2.0)
//!     .timestamp_ms(1_700_000_000_000)
//!     .build();
//!
//! assert_eq!(snapshot.reading(SensorKind::Ultrasonic).kind(), SensorKind::Ultrasonic);
//! // Statuses are left as `Safe` until the snapshot is classified.
//! assert_eq!(snapshot.overall_status(), Status::Safe);
//! ```
//!
//! ## Schema Version
//!
//! The current schema version is **1**. Exported dashboard state carries the
//! version so that readers can reject files they do not understand.

mod alert;
mod reading;
mod snapshot;
mod status;
mod version;

pub use alert::*;
pub use reading::*;
pub use snapshot::*;
pub use status::*;
pub use version::*;

/// Current schema version.
///
/// Increment this when making breaking changes to the exported state format.
pub const SCHEMA_VERSION: u32 = 1;
