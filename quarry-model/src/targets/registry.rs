//! Target type registry: alias-unique compositions of field types.

use quarry_core::errors::RegistryError;
use quarry_core::types::collections::FxHashMap;
use quarry_core::types::identifiers::{FieldTypeId, TargetTypeId};

use crate::fields::FieldTypeRegistry;

/// A registered target type: an alias plus its ordered core fields.
#[derive(Debug, Clone)]
pub struct TargetType {
    pub alias: String,
    /// Core field types in declaration order. Order matters: it is the tie
    /// break when a capability query matches more than one field.
    pub fields: Vec<FieldTypeId>,
}

/// Registry of target types.
///
/// Populated during startup via `&mut self` definition; resolution borrows
/// it immutably.
#[derive(Debug, Default)]
pub struct TargetTypeRegistry {
    entries: Vec<TargetType>,
    by_alias: FxHashMap<String, TargetTypeId>,
}

impl TargetTypeRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_alias: FxHashMap::default(),
        }
    }

    /// Register a target type composed of the given field types, in order.
    ///
    /// Field aliases may repeat freely across target types, but within one
    /// target type every field must have a unique effective alias.
    pub fn define(
        &mut self,
        alias: &str,
        fields: &FieldTypeRegistry,
        field_types: &[FieldTypeId],
    ) -> Result<TargetTypeId, RegistryError> {
        if self.by_alias.contains_key(alias) {
            return Err(RegistryError::DuplicateTargetAlias {
                alias: alias.to_string(),
            });
        }

        let mut seen: FxHashMap<&str, FieldTypeId> = FxHashMap::default();
        for &field_id in field_types {
            let entry = fields
                .get(field_id)
                .ok_or_else(|| RegistryError::UnknownFieldType {
                    target_type: alias.to_string(),
                    id: field_id.0,
                })?;
            if seen.insert(entry.alias.as_str(), field_id).is_some() {
                return Err(RegistryError::DuplicateFieldAlias {
                    target_type: alias.to_string(),
                    alias: entry.alias.clone(),
                });
            }
        }

        let id = TargetTypeId(self.entries.len() as u32);
        self.entries.push(TargetType {
            alias: alias.to_string(),
            fields: field_types.to_vec(),
        });
        self.by_alias.insert(alias.to_string(), id);
        Ok(id)
    }

    /// Look up a registered target type.
    pub fn get(&self, id: TargetTypeId) -> Option<&TargetType> {
        self.entries.get(id.0 as usize)
    }

    /// Look up a target type by alias.
    pub fn get_by_alias(&self, alias: &str) -> Option<(TargetTypeId, &TargetType)> {
        let id = *self.by_alias.get(alias)?;
        self.get(id).map(|entry| (id, entry))
    }

    /// Registered aliases, sorted for deterministic error messages.
    pub fn known_aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.by_alias.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
