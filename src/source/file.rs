//! File-based data source.
//!
//! Polls an exported state file written by `--export` or the `e` key.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Result;
use tracing::warn;

use sensorwatch_sim::DashboardState;

use super::DataSource;
use crate::data::ExportedState;

/// A data source that reads dashboard states from an exported JSON file.
///
/// The source tracks the file's modification time and only returns
/// new data when the file has been updated. Clearing alerts only affects the
/// cached copy; the file is never written.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
    cached_state: Option<DashboardState>,
    /// Set when the cached state changed locally and has not been polled yet
    local_update: bool,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
            cached_state: None,
            local_update: false,
        }
    }

    /// Returns the path being monitored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file's modification time.
    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    /// Read and parse the file.
    fn read_file(&mut self) -> Option<DashboardState> {
        let error = match fs::read_to_string(&self.path) {
            Ok(content) => match ExportedState::from_json(&content) {
                Ok(exported) => {
                    self.last_error = None;
                    return Some(exported.state);
                }
                Err(e) => format!("Parse error: {}", e),
            },
            Err(e) => format!("Read error: {}", e),
        };

        if self.last_error.as_deref() != Some(error.as_str()) {
            warn!(path = %self.path.display(), "{}", error);
        }
        self.last_error = Some(error);
        None
    }
}

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<DashboardState> {
        let current_modified = self.get_modified_time();

        // Check if file has been modified since last read
        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, don't update
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(state) = self.read_file() {
                self.last_modified = current_modified;
                self.cached_state = Some(state.clone());
                self.local_update = false;
                return Some(state);
            }
        }

        if self.local_update {
            self.local_update = false;
            return self.cached_state.clone();
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn clear_alerts(&mut self) -> Result<()> {
        if let Some(state) = self.cached_state.take() {
            self.cached_state = Some(state.clear_alerts());
            self.local_update = true;
        }
        Ok(())
    }
}
