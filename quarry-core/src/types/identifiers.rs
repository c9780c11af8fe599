//! Dense identifiers issued by the registries.
//!
//! Ids are indices into the issuing registry and are only meaningful
//! together with it.

use serde::{Deserialize, Serialize};

/// Identifier of a registered field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldTypeId(pub u32);

/// Identifier of a registered target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetTypeId(pub u32);
