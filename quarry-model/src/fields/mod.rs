//! Field types: value kinds, validation, registration, ancestry.
//!
//! Architecture:
//! - `value`: the kinds raw input may take and the validated value type
//! - `validate`: constraint checks turning raw input into a value or a
//!   rejection
//! - `registry`: field type definitions, single-parent refinement, and the
//!   capability relation
//! - `common`: stock fields most target types carry

pub mod common;
pub mod registry;
pub mod validate;
pub mod value;

pub use common::CommonFields;
pub use registry::{DefaultSpec, FieldType, FieldTypeDef, FieldTypeRegistry};
pub use validate::{NumberRule, ValueConstraints, ValueRejection};
pub use value::{FieldValue, ValueKind};
