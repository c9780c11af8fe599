//! Field type registry: definitions, single-parent refinement, and the
//! capability relation.
//!
//! Registration resolves everything inheritable (alias, kind, constraints,
//! default) and records the full ancestor chain, so capability checks are a
//! scan over a short inline array instead of a tree walk per query.

use smallvec::SmallVec;

use quarry_core::errors::RegistryError;
use quarry_core::types::identifiers::FieldTypeId;

use super::validate::{expected_description, validate_default, validate_raw};
use super::validate::{ValueConstraints, ValueRejection};
use super::value::{FieldValue, ValueKind};

/// How a field type's default is derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DefaultSpec {
    /// Inherit the nearest ancestor's default. Root definitions with no
    /// explicit default behave as [`DefaultSpec::Absent`].
    #[default]
    Inherit,
    /// No default: omitting the field from a declaration is an error.
    Absent,
    /// An explicit default, validated at registration.
    Value(FieldValue),
}

/// Definition of a field type, registered via [`FieldTypeRegistry::register`].
///
/// Root definitions need an alias and a kind; refinements name a parent and
/// inherit whatever they do not override. The value kind is always
/// inherited: declaring a conflicting kind is a registration error.
#[derive(Debug, Clone, Default)]
pub struct FieldTypeDef {
    pub alias: Option<String>,
    pub kind: Option<ValueKind>,
    pub default: DefaultSpec,
    pub constraints: Option<ValueConstraints>,
    pub parent: Option<FieldTypeId>,
    pub help: Option<String>,
}

impl FieldTypeDef {
    /// Start a root field type definition.
    pub fn new(alias: &str, kind: ValueKind) -> Self {
        Self {
            alias: Some(alias.to_string()),
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Start a definition refining an existing field type.
    pub fn extending(parent: FieldTypeId) -> Self {
        Self {
            parent: Some(parent),
            ..Default::default()
        }
    }

    /// Override the build-file alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Set an explicit default.
    pub fn with_default(mut self, value: FieldValue) -> Self {
        self.default = DefaultSpec::Value(value);
        self
    }

    /// Mark the field required: omitting it from a declaration is an error.
    pub fn required(mut self) -> Self {
        self.default = DefaultSpec::Absent;
        self
    }

    /// Restrict string values to a closed set of choices.
    pub fn with_choices(mut self, choices: &[&str]) -> Self {
        let constraints = self.constraints.get_or_insert_with(ValueConstraints::default);
        constraints.choices = Some(choices.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Set the acceptance rule for integer values.
    pub fn with_numbers(mut self, rule: super::validate::NumberRule) -> Self {
        let constraints = self.constraints.get_or_insert_with(ValueConstraints::default);
        constraints.numbers = rule;
        self
    }

    /// Attach help text shown in documentation surfaces.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }
}

/// A registered field type with everything inheritable resolved.
#[derive(Debug, Clone)]
pub struct FieldType {
    /// Build-file-facing name.
    pub alias: String,
    /// Shape of raw input this field accepts.
    pub kind: ValueKind,
    /// Effective default; `None` marks the field required.
    pub default: Option<FieldValue>,
    /// Effective validation constraints.
    pub constraints: ValueConstraints,
    pub parent: Option<FieldTypeId>,
    pub help: Option<String>,
    /// Ancestor chain, self-first up to the root.
    ancestors: SmallVec<[FieldTypeId; 4]>,
}

impl FieldType {
    /// Whether omitting this field from a declaration is an error.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// The ancestor chain, self-first.
    pub fn ancestors(&self) -> &[FieldTypeId] {
        &self.ancestors
    }
}

/// Registry of field types.
///
/// Populated during startup via `&mut self` registration; every resolution
/// and query path borrows it immutably.
#[derive(Debug, Default)]
pub struct FieldTypeRegistry {
    entries: Vec<FieldType>,
}

impl FieldTypeRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a field type and return its id.
    ///
    /// Resolves inherited properties against the parent, validates the
    /// effective default against the effective constraints, and records the
    /// ancestor chain. Alias collisions are not checked here: aliases only
    /// need to be unique within a target type's field set.
    pub fn register(&mut self, def: FieldTypeDef) -> Result<FieldTypeId, RegistryError> {
        let FieldTypeDef {
            alias,
            kind,
            default,
            constraints,
            parent,
            help,
        } = def;

        let parent_entry = match parent {
            Some(parent_id) => Some(self.get(parent_id).cloned().ok_or_else(|| {
                RegistryError::UnknownParent {
                    alias: alias.clone().unwrap_or_default(),
                    parent: parent_id.0,
                }
            })?),
            None => None,
        };

        let alias = match (alias, &parent_entry) {
            (Some(alias), _) => alias,
            (None, Some(parent)) => parent.alias.clone(),
            (None, None) => return Err(RegistryError::MissingAlias),
        };

        let kind = match (kind, &parent_entry) {
            (Some(kind), Some(parent)) => {
                if kind != parent.kind {
                    return Err(RegistryError::KindMismatch {
                        alias,
                        declared: kind.describe().to_string(),
                        inherited: parent.kind.describe().to_string(),
                    });
                }
                kind
            }
            (Some(kind), None) => kind,
            (None, Some(parent)) => parent.kind,
            (None, None) => return Err(RegistryError::MissingValueKind { alias }),
        };

        // Constraints replace rather than merge: a refinement that sets any
        // constraint owns the whole constraint set.
        let constraints = match (constraints, &parent_entry) {
            (Some(constraints), _) => constraints,
            (None, Some(parent)) => parent.constraints.clone(),
            (None, None) => ValueConstraints::default(),
        };

        let default = match default {
            DefaultSpec::Inherit => parent_entry.as_ref().and_then(|p| p.default.clone()),
            DefaultSpec::Absent => None,
            DefaultSpec::Value(value) => Some(value),
        };
        // The effective default must satisfy the effective constraints even
        // when both were inherited from different ancestors.
        if let Some(value) = &default {
            validate_default(kind, &constraints, value).map_err(|rejection| {
                RegistryError::InvalidDefault {
                    alias: alias.clone(),
                    expected: rejection.expected,
                    given: rejection.given,
                }
            })?;
        }

        let id = FieldTypeId(self.entries.len() as u32);
        let mut ancestors: SmallVec<[FieldTypeId; 4]> = SmallVec::new();
        ancestors.push(id);
        if let Some(parent) = &parent_entry {
            ancestors.extend_from_slice(&parent.ancestors);
        }

        self.entries.push(FieldType {
            alias,
            kind,
            default,
            constraints,
            parent,
            help,
            ancestors,
        });
        Ok(id)
    }

    /// Look up a registered field type.
    pub fn get(&self, id: FieldTypeId) -> Option<&FieldType> {
        self.entries.get(id.0 as usize)
    }

    /// Whether concrete type `concrete` satisfies a query for `query`:
    /// true iff they are the same type or `query` is an ancestor of
    /// `concrete`.
    pub fn satisfies(&self, concrete: FieldTypeId, query: FieldTypeId) -> bool {
        self.get(concrete)
            .map_or(false, |entry| entry.ancestors.contains(&query))
    }

    /// Validate a raw value against a field type's effective kind and
    /// constraints.
    pub fn validate_value(
        &self,
        id: FieldTypeId,
        raw: &serde_json::Value,
    ) -> Result<FieldValue, ValueRejection> {
        match self.get(id) {
            Some(entry) => validate_raw(entry.kind, &entry.constraints, raw),
            None => Err(ValueRejection {
                expected: "a registered field type".to_string(),
                given: format!("field type id {}", id.0),
            }),
        }
    }

    /// Render the expected shape of a field, constraints included.
    pub fn expected_shape(&self, id: FieldTypeId) -> Option<String> {
        self.get(id)
            .map(|entry| expected_description(entry.kind, &entry.constraints))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
