//! Front-end configuration, loadable from TOML
//!
//! Board size and win length are fixed rules of the game and are not
//! part of this file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Longest accepted pause before the computer replies
const MAX_AI_DELAY_MS: u64 = 10_000;

/// Presentation settings for the desktop app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pause between the human's move and the computer's reply
    pub ai_delay_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ai_delay_ms: 400,
            window_width: 720.0,
            window_height: 620.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.window_width) || !positive(self.window_height) {
            return Err(ConfigError::Validation(
                "window_width and window_height must be finite and > 0".into(),
            ));
        }
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ai_delay_ms must be <= {MAX_AI_DELAY_MS}"
            )));
        }
        Ok(())
    }

    /// Default configuration rendered as TOML, as a starting point for
    /// `gomoku.toml`.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }

    #[inline]
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}
