//! Raw target declarations and per-path address maps.
//!
//! A declaration is the parsed-but-unresolved form of a target: the target
//! type alias, the target name, and the field values exactly as written.
//! Resolution against the registries happens downstream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DeclError;
use crate::types::collections::FxHashMap;

/// Returns the directory component of a declaration path (`""` for a path
/// at the workspace root).
pub fn directory_of(path: &str) -> &str {
    path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

/// One raw target declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDeclaration {
    /// Alias of the target type being declared.
    pub type_alias: String,
    /// Target name, unique within its directory.
    pub name: String,
    /// Field values exactly as written, keyed by field alias.
    #[serde(default)]
    pub fields: FxHashMap<String, Value>,
}

impl TargetDeclaration {
    /// Create a declaration with no field values.
    pub fn new(type_alias: &str, name: &str) -> Self {
        Self {
            type_alias: type_alias.to_string(),
            name: name.to_string(),
            fields: FxHashMap::default(),
        }
    }

    /// Add a raw field value.
    pub fn with_field(mut self, alias: &str, value: Value) -> Self {
        self.fields.insert(alias.to_string(), value);
        self
    }
}

/// All declarations owned by one declaration path, keyed by target name.
#[derive(Debug, Clone)]
pub struct AddressMap {
    /// The declaration path (file path or synthetic path) that owns these
    /// declarations.
    pub path: String,
    by_name: FxHashMap<String, TargetDeclaration>,
}

impl AddressMap {
    /// Build an address map, rejecting duplicate target names.
    pub fn new(path: &str, declarations: Vec<TargetDeclaration>) -> Result<Self, DeclError> {
        let mut by_name = FxHashMap::default();
        for declaration in declarations {
            let name = declaration.name.clone();
            if by_name.insert(name.clone(), declaration).is_some() {
                return Err(DeclError::DuplicateTargetName {
                    path: path.to_string(),
                    name,
                });
            }
        }
        Ok(Self {
            path: path.to_string(),
            by_name,
        })
    }

    /// The directory this map's targets live in.
    pub fn directory(&self) -> &str {
        directory_of(&self.path)
    }

    /// Look up a declaration by target name.
    pub fn get(&self, name: &str) -> Option<&TargetDeclaration> {
        self.by_name.get(name)
    }

    /// Whether a target name is declared here.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Target names, sorted for deterministic output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Declarations in target-name order.
    pub fn declarations(&self) -> Vec<&TargetDeclaration> {
        let mut declarations: Vec<&TargetDeclaration> = self.by_name.values().collect();
        declarations.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        declarations
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
