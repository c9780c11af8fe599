//! Capability query errors.

use super::error_code::QuarryErrorCode;
use crate::types::address::Address;

/// Errors raised by the capability query protocol.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// No field on the target satisfies the queried field type.
    #[error("Target {address} has no field satisfying '{alias}'")]
    FieldNotPresent { address: Address, alias: String },
}

impl QuarryErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FieldNotPresent { .. } => "QUERY_FIELD_NOT_PRESENT",
        }
    }
}
