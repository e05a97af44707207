//! Reader configuration.
//!
//! Preferences for the reader itself (panel width, mouse support, scroll
//! step, a default article path). The article appearance settings are
//! deliberately not persisted here; they live only in memory for the
//! lifetime of the process.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Width of the settings panel in terminal columns
    #[serde(default = "default_panel_width")]
    pub panel_width: u16,

    /// Whether to capture mouse events
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Rows scrolled per mouse-wheel notch
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,

    /// Article opened when none is given on the command line
    #[serde(default)]
    pub article: Option<PathBuf>,
}

fn default_panel_width() -> u16 {
    38
}

fn default_true() -> bool {
    true
}

fn default_scroll_step() -> u16 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel_width: default_panel_width(),
            mouse: true,
            scroll_step: default_scroll_step(),
            article: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panel_width < 24 {
            return Err(ConfigError::ValidationError(
                "panel_width must be at least 24 columns".to_string(),
            ));
        }
        if self.panel_width > 120 {
            return Err(ConfigError::ValidationError(
                "panel_width must be <= 120".to_string(),
            ));
        }
        if self.scroll_step == 0 {
            return Err(ConfigError::ValidationError(
                "scroll_step must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
