//! Data processing for dashboard states.
//!
//! Everything here is derived from a [`DashboardState`](sensorwatch_sim::DashboardState)
//! and feeds the UI or the export file.
//!
//! ## Submodules
//!
//! - [`duration`]: Parsing and formatting of durations and timestamps (e.g., "2s", "500ms")
//! - [`export`]: The versioned JSON file format ([`ExportedState`])
//! - [`summary`]: Status counts for the header and export ([`StatusCounts`], [`Summary`])
//! - [`trend`]: Sparkline series built from the history log ([`Trend`])
//!
//! ## Data Flow
//!
//! ```text
//! DashboardState
//!        │
//!        ├──▶ Summary::from_state()   (header, export summary)
//!        │
//!        ├──▶ Trend::from_history()   (history sparklines)
//!        │
//!        └──▶ ExportedState::new()    (JSON file)
//! ```

pub mod duration;
pub mod export;
pub mod summary;
pub mod trend;

pub use export::ExportedState;
pub use summary::{StatusCounts, Summary};
pub use trend::{Metric, Trend};
