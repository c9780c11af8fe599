//! Target types and resolved target instances.

pub mod query;
pub mod registry;
pub mod target;

pub use query::filter_by_field;
pub use registry::{TargetType, TargetTypeRegistry};
pub use target::{ResolvedField, Target};
