//! Declaration resolution errors.

use super::error_code::QuarryErrorCode;
use crate::types::address::Address;

/// Errors raised while resolving a raw declaration into a target.
///
/// Each carries the address of the declaration being resolved so callers
/// collecting errors across a whole universe can report precisely.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Unrecognized target type '{alias}' at {address}. Known target types: {known}")]
    UnrecognizedTargetType {
        address: Address,
        alias: String,
        known: String,
    },

    #[error("Unrecognized field '{alias}' for target {address} of type '{target_type}'")]
    UnrecognizedField {
        address: Address,
        target_type: String,
        alias: String,
    },

    #[error("Invalid value for field '{alias}' of target {address}: expected {expected}, got {given}")]
    InvalidFieldValue {
        address: Address,
        alias: String,
        expected: String,
        given: String,
    },

    #[error("Missing required field '{alias}' for target {address} of type '{target_type}'")]
    MissingRequiredField {
        address: Address,
        target_type: String,
        alias: String,
    },
}

impl ResolveError {
    /// The address of the declaration that failed to resolve.
    pub fn address(&self) -> &Address {
        match self {
            Self::UnrecognizedTargetType { address, .. } => address,
            Self::UnrecognizedField { address, .. } => address,
            Self::InvalidFieldValue { address, .. } => address,
            Self::MissingRequiredField { address, .. } => address,
        }
    }
}

impl QuarryErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnrecognizedTargetType { .. } => "RESOLVE_UNRECOGNIZED_TARGET_TYPE",
            Self::UnrecognizedField { .. } => "RESOLVE_UNRECOGNIZED_FIELD",
            Self::InvalidFieldValue { .. } => "RESOLVE_INVALID_FIELD_VALUE",
            Self::MissingRequiredField { .. } => "RESOLVE_MISSING_REQUIRED_FIELD",
        }
    }
}
