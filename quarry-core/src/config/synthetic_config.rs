//! Synthetic target subsystem configuration.

use serde::{Deserialize, Serialize};

/// Configuration for synthetic target generation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Enable synthetic target generation. Default: true.
    pub enabled: Option<bool>,
    /// Maximum number of cached handler results per cache plane.
    /// Default: 10_000.
    pub cache_capacity: Option<u64>,
}

impl SyntheticConfig {
    /// Returns whether synthetic generation is enabled, defaulting to true.
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Returns the effective cache capacity, defaulting to 10,000.
    pub fn effective_cache_capacity(&self) -> u64 {
        self.cache_capacity.unwrap_or(10_000)
    }
}
