//! Declaration universe errors.

use super::error_code::QuarryErrorCode;
use crate::types::address::Address;

/// Errors raised while assembling the declaration universe.
///
/// These abort the merge: a universe with colliding paths or addresses has
/// no meaningful resolution order.
#[derive(Debug, thiserror::Error)]
pub enum DeclError {
    #[error("Declaration path '{path}' declares target name '{name}' more than once")]
    DuplicateTargetName { path: String, name: String },

    #[error("Declaration path '{path}' appears more than once in the declared inputs")]
    DuplicateDeclarationPath { path: String },

    #[error("Synthetic declaration path '{path}' from handler '{second}' collides with {first}")]
    DuplicateSyntheticPath {
        path: String,
        /// Description of the prior owner: another handler or a declared file.
        first: String,
        second: String,
    },

    #[error("Address {address} is declared by both '{first_path}' and '{second_path}'")]
    ConflictingAddress {
        address: Address,
        first_path: String,
        second_path: String,
    },
}

impl QuarryErrorCode for DeclError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateTargetName { .. } => "DECL_DUPLICATE_TARGET_NAME",
            Self::DuplicateDeclarationPath { .. } => "DECL_DUPLICATE_DECLARATION_PATH",
            Self::DuplicateSyntheticPath { .. } => "DECL_DUPLICATE_SYNTHETIC_PATH",
            Self::ConflictingAddress { .. } => "DECL_CONFLICTING_ADDRESS",
        }
    }
}
