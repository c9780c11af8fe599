//! Declaration file discovery configuration.

use serde::{Deserialize, Serialize};

/// Configuration for locating declaration files in the workspace.
///
/// Consumed by the external file walker; kept here so every subsystem shares
/// one source of truth for what counts as a declaration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeclarationConfig {
    /// File name patterns recognized as declaration files.
    /// Empty means the built-in default of BUILD and BUILD.*.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Path prefixes excluded from declaration discovery.
    #[serde(default)]
    pub ignores: Vec<String>,
}

impl DeclarationConfig {
    /// Returns the effective declaration file patterns.
    pub fn effective_patterns(&self) -> Vec<String> {
        if self.patterns.is_empty() {
            vec!["BUILD".to_string(), "BUILD.*".to_string()]
        } else {
            self.patterns.clone()
        }
    }

    /// Whether a path is excluded by the configured ignore prefixes.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignores.iter().any(|prefix| path.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns() {
        let config = DeclarationConfig::default();
        assert_eq!(config.effective_patterns(), vec!["BUILD", "BUILD.*"]);
    }

    #[test]
    fn test_explicit_patterns_win() {
        let config = DeclarationConfig {
            patterns: vec!["TARGETS".to_string()],
            ignores: Vec::new(),
        };
        assert_eq!(config.effective_patterns(), vec!["TARGETS"]);
    }

    #[test]
    fn test_ignore_prefixes() {
        let config = DeclarationConfig {
            patterns: Vec::new(),
            ignores: vec!["vendor/".to_string()],
        };
        assert!(config.is_ignored("vendor/lib/BUILD"));
        assert!(!config.is_ignored("src/BUILD"));
    }
}
