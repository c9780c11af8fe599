//! Workspace configuration.

pub mod declaration_config;
pub mod synthetic_config;

pub use declaration_config::DeclarationConfig;
pub use synthetic_config::SyntheticConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration for the Quarry metadata engine.
///
/// Every section is optional; missing sections fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuarryConfig {
    pub declarations: DeclarationConfig,
    pub synthetic: SyntheticConfig,
}

impl QuarryConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a configuration from a TOML file on disk.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
