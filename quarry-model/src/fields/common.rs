//! Stock field types most target types carry.

use quarry_core::errors::RegistryError;
use quarry_core::types::identifiers::FieldTypeId;

use super::registry::{FieldTypeDef, FieldTypeRegistry};
use super::value::{FieldValue, ValueKind};

/// Ids of the stock fields shared by most target types.
#[derive(Debug, Clone, Copy)]
pub struct CommonFields {
    pub tags: FieldTypeId,
    pub description: FieldTypeId,
}

impl CommonFields {
    /// Register the stock `tags` and `description` fields.
    pub fn register(registry: &mut FieldTypeRegistry) -> Result<Self, RegistryError> {
        let tags = registry.register(
            FieldTypeDef::new("tags", ValueKind::StringSequence)
                .with_default(FieldValue::StringList(Vec::new()))
                .with_help("Arbitrary strings used to filter targets."),
        )?;
        let description = registry.register(
            FieldTypeDef::new("description", ValueKind::String)
                .with_default(FieldValue::None)
                .with_help("A human-readable description of the target."),
        )?;
        Ok(Self { tags, description })
    }

    /// The stock field ids in declaration order.
    pub fn ids(&self) -> [FieldTypeId; 2] {
        [self.tags, self.description]
    }
}
