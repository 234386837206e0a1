//! Exported dashboard state files.
//!
//! Written by the `e` key and by headless `--export`, read back by
//! [`FileSource`](crate::source::FileSource).

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use sensorwatch_sim::DashboardState;
use sensorwatch_types::SchemaVersion;

use super::summary::Summary;

/// Versioned wrapper around a dashboard state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedState {
    pub version: SchemaVersion,
    /// When the file was written (ms since Unix epoch).
    pub exported_at_ms: u64,
    /// Derived from `state`; ignored when reading.
    #[serde(default)]
    pub summary: Summary,
    pub state: DashboardState,
}

impl ExportedState {
    pub fn new(state: DashboardState, exported_at_ms: u64) -> Self {
        Self {
            version: SchemaVersion::current(),
            exported_at_ms,
            summary: Summary::from_state(&state),
            state,
        }
    }

    /// Parse an exported file, rejecting unknown major versions and states
    /// the simulator could not have produced.
    pub fn from_json(json: &str) -> Result<Self> {
        let exported: Self = serde_json::from_str(json)?;
        if !exported.version.is_compatible() {
            bail!(
                "Unsupported schema version {}.{} (expected {}.x)",
                exported.version.major,
                exported.version.minor,
                SchemaVersion::current().major
            );
        }
        if let Err(e) = exported.state.validate() {
            bail!("Invalid dashboard state: {}", e);
        }
        Ok(exported)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content)
    }
}
