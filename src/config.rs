//! Engine configuration loaded from TOML.

use crate::{Board, BoardError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for callers that build boards from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of new boards (3, 5, 7, ...).
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_board_size() -> usize {
    3
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl EngineConfig {
    /// Creates a configuration for the given board size.
    #[instrument]
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            log_filter: default_log_filter(),
        }
    }

    /// Replaces the board size, keeping the other settings.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if
    /// the board size is not valid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.new_board()?;
        Ok(config)
    }

    /// Builds an empty board of the configured size.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn new_board(&self) -> Result<Board, ConfigError> {
        Board::new(self.board_size).map_err(ConfigError::from)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_board_size())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<BoardError> for ConfigError {
    #[track_caller]
    fn from(err: BoardError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(*config.board_size(), 3);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_board_size_from_toml() {
        let config = EngineConfig::from_toml("board_size = 7\nlog_filter = \"debug\"").unwrap();
        assert_eq!(config.new_board().unwrap().size(), 7);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_invalid_board_size_rejected() {
        let err = EngineConfig::from_toml("board_size = 4").unwrap_err();
        assert!(err.message.contains("Board size 4"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = EngineConfig::from_toml("board_size = [").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "board_size = 5\n").unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.board_size(), 5);
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file("/nonexistent/engine.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
