//! Layered settings: defaults, optional TOML file, `SENSORWATCH_*` environment
//! variables, then command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::data::duration::parse_duration;

/// Prefix for environment overrides, e.g. `SENSORWATCH_INTERVAL=1s`.
pub const ENV_PREFIX: &str = "SENSORWATCH";

/// Which color theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Time between sampling cycles, e.g. "2s".
    pub interval: String,
    /// Seed for a reproducible sequence of readings.
    pub seed: Option<u64>,
    pub theme: ThemeChoice,
    /// Where tracing output goes. No file means no logging.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: "2s".to_string(),
            seed: None,
            theme: ThemeChoice::Auto,
            log_file: None,
        }
    }
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub interval: Option<String>,
    pub seed: Option<u64>,
    pub theme: Option<ThemeChoice>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from an optional config file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to load configuration")?;

        config.try_deserialize().context("Invalid configuration")
    }

    /// Apply command-line overrides on top of loaded settings.
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(interval) = overrides.interval {
            self.interval = interval;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self
    }

    /// The sampling interval, validated to be non-zero.
    pub fn interval(&self) -> Result<Duration> {
        let interval = parse_duration(&self.interval)
            .with_context(|| format!("Invalid interval: {}", self.interval))?;
        if interval.is_zero() {
            bail!("Interval must be greater than zero");
        }
        Ok(interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.interval().unwrap(), Duration::from_secs(2));
        assert_eq!(settings.seed, None);
        assert_eq!(settings.theme, ThemeChoice::Auto);
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn test_load_from_file() {
        let file = config_file(
            r#"
interval = "500ms"
seed = 42
theme = "light"
log_file = "/tmp/sensorwatch.log"
"#,
        );

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.interval().unwrap(), Duration::from_millis(500));
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/sensorwatch.log")));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = config_file("seed = 7\n");

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.interval, "2s");
        assert_eq!(settings.theme, ThemeChoice::Auto);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/sensorwatch.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_theme_is_an_error() {
        let file = config_file("theme = \"neon\"\n");
        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings {
            seed: Some(1),
            ..Settings::default()
        }
        .apply(Overrides {
            interval: Some("1s".to_string()),
            theme: Some(ThemeChoice::Dark),
            ..Overrides::default()
        });

        assert_eq!(settings.interval().unwrap(), Duration::from_secs(1));
        assert_eq!(settings.seed, Some(1));
        assert_eq!(settings.theme, ThemeChoice::Dark);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let settings = Settings {
            interval: "0ms".to_string(),
            ..Settings::default()
        };
        assert!(settings.interval().is_err());
    }
}
