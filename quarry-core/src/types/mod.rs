//! Core data types shared across the workspace.

pub mod address;
pub mod collections;
pub mod declaration;
pub mod identifiers;
