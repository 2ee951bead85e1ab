//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal client.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// File receiving log output while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show the move history panel.
    #[serde(default = "default_true")]
    show_history: bool,

    /// Show the key help footer.
    #[serde(default = "default_true")]
    show_help: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_history: true,
            show_help: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
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

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
        assert!(*config.show_history());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AppConfig::from_toml("log_filter = \"debug\"\nshow_help = false\n").unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert!(!*config.show_help());
        assert!(*config.show_history());
    }

    #[test]
    fn test_bad_toml_reports_location() {
        let err = AppConfig::from_toml("show_history = \"yes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_setters_chain() {
        let config = AppConfig::default()
            .with_show_history(false)
            .with_log_filter("warn".to_string());
        assert!(!*config.show_history());
        assert_eq!(config.log_filter(), "warn");
    }
}
