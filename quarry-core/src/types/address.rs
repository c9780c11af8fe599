//! Workspace addresses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identity of a target within the workspace.
///
/// `spec_path` is the workspace-relative directory of the declaration that
/// produced the target, with `""` meaning the workspace root. `generated`
/// distinguishes generated targets that share a directory and name with
/// their generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    pub spec_path: String,
    pub name: String,
    pub generated: Option<String>,
}

impl Address {
    /// Create an address for a declared or synthesized target.
    pub fn new(spec_path: &str, name: &str) -> Self {
        Self {
            spec_path: spec_path.to_string(),
            name: name.to_string(),
            generated: None,
        }
    }

    /// Create an address for a generated target.
    pub fn generated(spec_path: &str, name: &str, generated: &str) -> Self {
        Self {
            spec_path: spec_path.to_string(),
            name: name.to_string(),
            generated: Some(generated.to_string()),
        }
    }

    /// Whether the address points at the workspace root directory.
    pub fn is_root(&self) -> bool {
        self.spec_path.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.spec_path.is_empty() {
            write!(f, "//:{}", self.name)?;
        } else {
            write!(f, "{}:{}", self.spec_path, self.name)?;
        }
        if let Some(generated) = &self.generated {
            write!(f, "#{}", generated)?;
        }
        Ok(())
    }
}
