//! TUI configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_rewind::DisplayOrder;
use tracing::{debug, info, instrument};

/// Settings for a TUI session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File that receives tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Initial order of the move list.
    #[serde(default)]
    display_order: DisplayOrder,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_rewind.log")
}

fn default_log_filter() -> String {
    "info,strictly_rewind=debug".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            display_order: DisplayOrder::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config file: {}", e)))?;
        info!(order = ?config.display_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if cli.descending {
            self.display_order = DisplayOrder::Descending;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display_order = \"descending\"").unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.display_order(), DisplayOrder::Descending);
        assert_eq!(config.log_file(), &default_log_file());
        assert_eq!(config.log_filter(), &default_log_filter());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display_order = \"sideways\"").unwrap();

        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse"));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["strictly_rewind", "--descending", "--log-file", "x.log"]);
        let config = TuiConfig::default().with_cli(&cli);

        assert_eq!(*config.display_order(), DisplayOrder::Descending);
        assert_eq!(config.log_file(), &PathBuf::from("x.log"));
    }
}
