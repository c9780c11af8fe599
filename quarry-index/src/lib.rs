//! # quarry-index
//!
//! Workspace indexing for the Quarry engine: synthetic target generation
//! with per-directory and whole-workspace dispatch, the merge of declared
//! and synthetic declarations into one universe, and resolution of that
//! universe into an address-keyed target index.

pub mod index;
pub mod plugin;
pub mod synthetic;
pub mod universe;

pub use index::{index_workspace, resolve_universe, IndexOutcome, TargetIndex, WorkspaceOutcome};
pub use plugin::{Plugin, WorkspaceRegistry};
pub use synthetic::{
    dispatch_synthetic, Contribution, DispatchFailure, DispatchMode, DispatchOutcome,
    RequestScope, SyntheticAddressMap, SyntheticCache, SyntheticHandler, SyntheticRegistry,
    SyntheticRequest, PER_DIRECTORY_DEFAULT, SINGLE_REQUEST_FOR_ALL,
};
pub use universe::DeclarationUniverse;
