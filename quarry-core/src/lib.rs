//! # quarry-core
//!
//! Foundation crate for the Quarry target metadata engine.
//! Defines addresses, raw declarations, identifiers, shared collections,
//! the error taxonomy, configuration, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::QuarryConfig;
pub use errors::error_code::QuarryErrorCode;
pub use errors::{QuarryError, QuarryResult};
pub use types::address::Address;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::declaration::{AddressMap, TargetDeclaration};
pub use types::identifiers::{FieldTypeId, TargetTypeId};
