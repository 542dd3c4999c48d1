//! Configuration system for the QueenStep visualizer.
//!
//! Load visualizer settings from TOML or YAML files to control the board
//! size, pacing, and stop policy without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use queenstep_config::VisualizerConfig;
//!
//! let config = VisualizerConfig::from_toml_str(r#"
//!     board_size = 6
//!     delay_ms = 120
//!     stop_at_first = false
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 6);
//! assert_eq!(config.delay_ms, 120);
//! assert!(!config.stop_at_first);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use queenstep_config::VisualizerConfig;
//!
//! let config = VisualizerConfig::load("queenstep.toml").unwrap_or_default();
//! assert_eq!(config.board_size, 8);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use queenstep_core::{MAX_BOARD_SIZE, MAX_TICK_DELAY, MIN_BOARD_SIZE};

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Visualizer settings.
///
/// Defaults match the stock run: an 8-board, 60 ms between ticks, pausing
/// on the first solution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct VisualizerConfig {
    /// Number of rows and columns on the board.
    pub board_size: usize,

    /// Delay between controller ticks, in milliseconds.
    pub delay_ms: u64,

    /// Pause the run when the first solution appears.
    pub stop_at_first: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            delay_ms: 60,
            stop_at_first: true,
        }
    }
}

impl VisualizerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Sets the tick delay in milliseconds.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Sets the stop-at-first-solution policy.
    pub fn with_stop_at_first(mut self, stop_at_first: bool) -> Self {
        self.stop_at_first = stop_at_first;
        self
    }

    /// The tick delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Checks the configured values against the supported ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Invalid(format!(
                "board_size {} out of range ({MIN_BOARD_SIZE} to {MAX_BOARD_SIZE})",
                self.board_size
            )));
        }
        if self.delay() > MAX_TICK_DELAY {
            return Err(ConfigError::Invalid(format!(
                "delay_ms {} out of range (0 to {})",
                self.delay_ms,
                MAX_TICK_DELAY.as_millis()
            )));
        }
        Ok(())
    }
}
