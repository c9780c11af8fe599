//! Collection type aliases used across the workspace.
//!
//! FxHash is a fast non-cryptographic hasher; callers must sort before
//! emitting anything order-sensitive since iteration order is arbitrary.

pub use rustc_hash::{FxHashMap, FxHashSet};
