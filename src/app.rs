//! Application state and navigation logic.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{info, warn};

use sensorwatch_sim::{Clock, DashboardState, SystemClock};

use crate::data::ExportedState;
use crate::source::DataSource;
use crate::ui::Theme;

/// Default file written by the export key.
pub const DEFAULT_EXPORT_PATH: &str = "sensorwatch_export.json";

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Sensor cards with current readings and recent alerts.
    Dashboard,
    /// Full alert log, newest first.
    Alerts,
    /// Snapshot history with sparklines.
    History,
}

impl View {
    pub const ALL: [View; 3] = [View::Dashboard, View::Alerts, View::History];

    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Dashboard => View::Alerts,
            View::Alerts => View::History,
            View::History => View::Dashboard,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Dashboard => View::History,
            View::Alerts => View::Dashboard,
            View::History => View::Alerts,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Alerts => "Alerts",
            View::History => "History",
        }
    }

    /// Position in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            View::Dashboard => 0,
            View::Alerts => 1,
            View::History => 2,
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub state: Option<DashboardState>,
    pub last_updated: Option<Instant>,
    pub load_error: Option<String>,

    // Navigation state
    pub selected_alert_index: usize,
    pub selected_history_index: usize,

    // UI
    pub theme: Theme,
    /// Rows in the terminal, for mapping mouse clicks to list items
    pub terminal_height: u16,
    pub export_path: PathBuf,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source and theme.
    pub fn new(source: Box<dyn DataSource>, theme: Theme) -> Self {
        Self {
            running: true,
            current_view: View::Dashboard,
            show_help: false,
            source,
            state: None,
            last_updated: None,
            load_error: None,
            selected_alert_index: 0,
            selected_history_index: 0,
            theme,
            terminal_height: 0,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    /// Poll the data source for new data.
    ///
    /// Returns Ok(true) if new data was received, Ok(false) if no new data.
    pub fn reload_data(&mut self) -> Result<bool> {
        let polled = self.source.poll();

        // Keep showing the last good state alongside the error
        if let Some(err) = self.source.error() {
            self.load_error = Some(err.to_string());
        } else {
            self.load_error = None;
        }

        let Some(state) = polled else {
            return Ok(false);
        };

        self.state = Some(state);
        self.last_updated = Some(Instant::now());
        self.clamp_selection();
        Ok(true)
    }

    fn clamp_selection(&mut self) {
        let (alerts, history) = self.list_lengths();
        self.selected_alert_index = self.selected_alert_index.min(alerts.saturating_sub(1));
        self.selected_history_index = self.selected_history_index.min(history.saturating_sub(1));
    }

    fn list_lengths(&self) -> (usize, usize) {
        self.state
            .as_ref()
            .map(|s| (s.alerts().len(), s.history().len()))
            .unwrap_or((0, 0))
    }

    /// Item count and selected index of the current view's list.
    pub fn list_position(&self) -> Option<(usize, usize)> {
        let (alerts, history) = self.list_lengths();
        match self.current_view {
            View::Dashboard => None,
            View::Alerts => Some((alerts, self.selected_alert_index)),
            View::History => Some((history, self.selected_history_index)),
        }
    }

    /// Switch to the next view (cycles through Dashboard → Alerts → History).
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        let (alerts, history) = self.list_lengths();
        match self.current_view {
            View::Dashboard => {}
            View::Alerts => {
                self.selected_alert_index =
                    (self.selected_alert_index + n).min(alerts.saturating_sub(1));
            }
            View::History => {
                self.selected_history_index =
                    (self.selected_history_index + n).min(history.saturating_sub(1));
            }
        }
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        match self.current_view {
            View::Dashboard => {}
            View::Alerts => self.selected_alert_index = self.selected_alert_index.saturating_sub(n),
            View::History => {
                self.selected_history_index = self.selected_history_index.saturating_sub(n)
            }
        }
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        match self.current_view {
            View::Dashboard => {}
            View::Alerts => self.selected_alert_index = 0,
            View::History => self.selected_history_index = 0,
        }
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        let (alerts, history) = self.list_lengths();
        match self.current_view {
            View::Dashboard => {}
            View::Alerts => self.selected_alert_index = alerts.saturating_sub(1),
            View::History => self.selected_history_index = history.saturating_sub(1),
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Ask the source to empty the alert log and pick up the result.
    ///
    /// Sources hand back the cleared state on the next poll, so the log is
    /// empty on screen as soon as the message appears.
    pub fn clear_alerts(&mut self) {
        match self.source.clear_alerts() {
            Ok(()) => {
                info!("alerts cleared from the dashboard");
                self.selected_alert_index = 0;
                let _ = self.reload_data();
                self.set_status_message("Alerts cleared".to_string());
            }
            Err(e) => {
                warn!(error = %e, "failed to clear alerts");
                self.set_status_message(format!("Clear failed: {}", e));
            }
        }
    }

    /// Export the current state to `export_path` and report the outcome.
    pub fn export(&mut self) {
        let path = self.export_path.clone();
        match self.export_state(&path) {
            Ok(()) => self.set_status_message(format!("Exported to {}", path.display())),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "export failed");
                self.set_status_message(format!("Export failed: {}", e));
            }
        }
    }

    /// Export current state to a file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let Some(ref state) = self.state else {
            anyhow::bail!("No data to export");
        };

        ExportedState::new(state.clone(), SystemClock.now_ms()).write_to(path)?;
        info!(path = %path.display(), cycle = state.cycle(), "exported dashboard state");
        Ok(())
    }
}
