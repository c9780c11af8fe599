//! Field and target type registration errors.

use super::error_code::QuarryErrorCode;

/// Errors raised while populating the field and target type registries.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Field type definition has no alias and no parent to inherit one from")]
    MissingAlias,

    #[error("Field type '{alias}' has no value kind and no parent to inherit one from")]
    MissingValueKind { alias: String },

    #[error("Unknown parent field type id {parent} for field type '{alias}'")]
    UnknownParent { alias: String, parent: u32 },

    #[error("Field type '{alias}' declares kind {declared} but its parent has kind {inherited}")]
    KindMismatch {
        alias: String,
        declared: String,
        inherited: String,
    },

    #[error("Invalid default for field type '{alias}': expected {expected}, got {given}")]
    InvalidDefault {
        alias: String,
        expected: String,
        given: String,
    },

    #[error("Target type '{target_type}' contains two field types with alias '{alias}'")]
    DuplicateFieldAlias { target_type: String, alias: String },

    #[error("Target type alias '{alias}' is already registered")]
    DuplicateTargetAlias { alias: String },

    #[error("Unknown field type id {id} in target type '{target_type}'")]
    UnknownFieldType { target_type: String, id: u32 },
}

impl QuarryErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAlias => "REGISTRY_MISSING_ALIAS",
            Self::MissingValueKind { .. } => "REGISTRY_MISSING_VALUE_KIND",
            Self::UnknownParent { .. } => "REGISTRY_UNKNOWN_PARENT",
            Self::KindMismatch { .. } => "REGISTRY_KIND_MISMATCH",
            Self::InvalidDefault { .. } => "REGISTRY_INVALID_DEFAULT",
            Self::DuplicateFieldAlias { .. } => "REGISTRY_DUPLICATE_FIELD_ALIAS",
            Self::DuplicateTargetAlias { .. } => "REGISTRY_DUPLICATE_TARGET_ALIAS",
            Self::UnknownFieldType { .. } => "REGISTRY_UNKNOWN_FIELD_TYPE",
        }
    }
}
