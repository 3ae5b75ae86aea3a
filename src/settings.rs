//! Settings loaded from an optional config file and the environment.
//!
//! Precedence, lowest to highest: built-in defaults, the TOML file given with
//! `--config`, `AIRWATCH_*` environment variables, then command-line flags.
//!
//! ```toml
//! file = "readings.json"
//! refresh = "10s"
//! theme = "dark"
//! utc = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::data::duration::parse_duration;
use crate::data::DisplayZone;

/// Theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// JSON file of readings; the built-in sample is used when unset.
    pub file: Option<PathBuf>,
    /// File poll interval, e.g. "1s" or "10m".
    pub refresh: String,
    pub theme: ThemeChoice,
    /// Show times in UTC instead of local time.
    pub utc: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: None,
            refresh: "1s".to_string(),
            theme: ThemeChoice::Auto,
            utc: false,
        }
    }
}

impl Settings {
    /// Load settings from an optional file plus `AIRWATCH_*` variables.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix("AIRWATCH"))
            .build()
            .context("failed to load settings")?;

        config.try_deserialize().context("invalid settings")
    }

    /// Parsed refresh interval.
    pub fn refresh_interval(&self) -> Result<Duration> {
        parse_duration(&self.refresh)
            .with_context(|| format!("invalid refresh interval {:?}", self.refresh))
    }

    pub fn zone(&self) -> DisplayZone {
        if self.utc {
            DisplayZone::Utc
        } else {
            DisplayZone::Local
        }
    }
}
