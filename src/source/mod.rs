//! Data source abstraction for receiving dashboard states.
//!
//! The TUI never talks to the simulator directly. It polls a [`DataSource`],
//! which is either a live simulator task or an exported state file.

mod channel;
mod file;

pub use channel::ChannelSource;
pub use file::FileSource;

use std::fmt::Debug;

use anyhow::Result;
use sensorwatch_sim::DashboardState;

/// Trait for receiving dashboard states from various sources.
///
/// # Example
///
/// ```
/// use sensorwatch::{DataSource, FileSource};
///
/// let mut source = FileSource::new("sensorwatch_export.json");
/// if let Some(state) = source.poll() {
///     println!("{} alerts", state.alerts().len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest state.
    ///
    /// Returns `Some(state)` if new data is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<DashboardState>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Check if the source has encountered an error.
    ///
    /// Returns the error message if an error occurred during the last poll.
    fn error(&self) -> Option<&str>;

    /// Empty the alert log.
    ///
    /// The cleared state is returned by a later [`poll`](Self::poll).
    fn clear_alerts(&mut self) -> Result<()>;
}
