//! Sync configuration.
//!
//! T011: Implement SyncConfig loading from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sync::RepetitionEncoding;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings for pushing plan workouts to the device calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// How repeated blocks are written to the wire
    pub repetition_encoding: RepetitionEncoding,
    /// Sport type stamped on every pushed workout
    pub workout_type: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            repetition_encoding: RepetitionEncoding::default(),
            workout_type: "Bike".to_string(),
        }
    }
}

impl SyncConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
