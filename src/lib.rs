//! # sensorwatch
//!
//! A terminal dashboard for three simulated IoT sensors (ultrasonic distance,
//! fire/temperature and tilt), with safety alerts and a rolling history.
//!
//! Readings come from the [`sensorwatch_sim`] crate, either live from a
//! background simulator task or from an exported state file, and are shown
//! in an interactive terminal UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(derived) │    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── ChannelSource (simulator) | FileSource     │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, clear and export actions
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) over a running
//!   simulator or an exported file
//! - **[`data`]**: Status summaries, trend sparklines and the export file format
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`config`]**: Layered settings from a TOML file and `SENSORWATCH_*` variables
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Live dashboard, one reading every 2 seconds
//! sensorwatch
//!
//! # Faster, reproducible readings
//! sensorwatch --interval 500ms --seed 42
//!
//! # Run 50 cycles without a terminal and write the state
//! sensorwatch --export state.json --cycles 50
//!
//! # Browse an exported state
//! sensorwatch --file state.json
//! ```
//!
//! ### As a library with a live simulator
//!
//! ```
//! use std::time::Duration;
//! use sensorwatch::{App, ChannelSource, Theme};
//! use sensorwatch_sim::Simulator;
//!
//! # tokio_test::block_on(async {
//! let handle = Simulator::seeded(7).start(Duration::from_secs(2)).unwrap();
//! let source = ChannelSource::new(handle, "every 2s");
//! let app = App::new(Box::new(source), Theme::dark());
//! # });
//! ```
//!
//! ### As a library with file source
//!
//! ```
//! use sensorwatch::{App, FileSource, Theme};
//!
//! let source = Box::new(FileSource::new("sensorwatch_export.json"));
//! let app = App::new(source, Theme::dark());
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use config::{Overrides, Settings, ThemeChoice};
pub use data::{ExportedState, StatusCounts, Summary};
pub use source::{ChannelSource, DataSource, FileSource};
pub use ui::Theme;
