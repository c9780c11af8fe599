//! # quarry-model
//!
//! Target metadata model for the Quarry engine: field type registry with
//! single-parent refinement, target type composition, declaration
//! resolution, and the capability query protocol that lets plugins operate
//! on "any target with field X" instead of concrete target types.

pub mod fields;
pub mod resolve;
pub mod targets;

pub use fields::{
    CommonFields, DefaultSpec, FieldType, FieldTypeDef, FieldTypeRegistry, FieldValue, NumberRule,
    ValueConstraints, ValueKind,
};
pub use resolve::resolve_declaration;
pub use targets::{filter_by_field, ResolvedField, Target, TargetType, TargetTypeRegistry};
