//! Resolved target instances and the capability query protocol.

use quarry_core::errors::QueryError;
use quarry_core::types::address::Address;
use quarry_core::types::identifiers::{FieldTypeId, TargetTypeId};

use crate::fields::{FieldTypeRegistry, FieldValue};

/// A resolved field on a target: the concrete field type and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    pub field_type: FieldTypeId,
    pub value: FieldValue,
}

/// An immutable resolved target.
///
/// Constructed once by declaration resolution and never mutated afterwards;
/// queries hand out references to the existing resolved fields.
#[derive(Debug, Clone)]
pub struct Target {
    address: Address,
    type_id: TargetTypeId,
    fields: Vec<ResolvedField>,
}

impl Target {
    pub(crate) fn new(address: Address, type_id: TargetTypeId, fields: Vec<ResolvedField>) -> Self {
        Self {
            address,
            type_id,
            fields,
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn type_id(&self) -> TargetTypeId {
        self.type_id
    }

    /// The resolved fields in core-field order.
    pub fn fields(&self) -> &[ResolvedField] {
        &self.fields
    }

    /// Whether some field on this target satisfies a query for `query`.
    ///
    /// A field satisfies the query when its concrete type is `query` itself
    /// or a descendant of it, so querying a base field type sees every
    /// refinement.
    pub fn has_field(&self, registry: &FieldTypeRegistry, query: FieldTypeId) -> bool {
        self.fields
            .iter()
            .any(|field| registry.satisfies(field.field_type, query))
    }

    /// The resolved field satisfying a query for `query`.
    ///
    /// When more than one core field satisfies the query (refinements
    /// composed under distinct aliases), the first in core-field order wins.
    pub fn get(
        &self,
        registry: &FieldTypeRegistry,
        query: FieldTypeId,
    ) -> Result<&ResolvedField, QueryError> {
        self.fields
            .iter()
            .find(|field| registry.satisfies(field.field_type, query))
            .ok_or_else(|| QueryError::FieldNotPresent {
                address: self.address.clone(),
                alias: registry
                    .get(query)
                    .map(|entry| entry.alias.clone())
                    .unwrap_or_default(),
            })
    }

    /// The value of the field satisfying `query`, if any field does.
    pub fn get_value(&self, registry: &FieldTypeRegistry, query: FieldTypeId) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| registry.satisfies(field.field_type, query))
            .map(|field| &field.value)
    }
}
