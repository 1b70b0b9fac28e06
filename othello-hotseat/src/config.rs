//! Session settings, loadable from TOML.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Upper bound on the frame rate; anything faster just burns CPU.
pub const MAX_FPS: u32 = 240;

/// Settings for one hotseat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Frames per second: how often the board is redrawn and passes are checked.
    pub fps: u32,
    /// Width of one board square, in terminal columns.
    pub cell_width: u16,
    /// Height of one board square, in terminal rows.
    pub cell_height: u16,
    /// How long the winner stays on screen before the session ends.
    pub result_hold_ms: u64,
    /// Mark the active player's legal moves on the board.
    pub show_hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            fps: 30,
            cell_width: 5,
            cell_height: 2,
            result_hold_ms: 3000,
            show_hints: true,
        }
    }
}

impl SessionConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SessionConfig = toml::from_str(&content)?;
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
        if self.fps == 0 || self.fps > MAX_FPS {
            let message = format!("fps must be in 1..={}", MAX_FPS);
            return Err(ConfigError::Validation(message));
        }
        if self.cell_width == 0 {
            return Err(ConfigError::Validation("cell_width must be > 0".into()));
        }
        if self.cell_height == 0 {
            return Err(ConfigError::Validation("cell_height must be > 0".into()));
        }
        Ok(())
    }

    /// Time between frames.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn result_hold(&self) -> Duration {
        Duration::from_millis(self.result_hold_ms)
    }
}
