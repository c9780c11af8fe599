//! The resolved target index and the workspace indexing pipeline.

use quarry_core::errors::{DeclError, ResolveError};
use quarry_core::types::address::Address;
use quarry_core::types::collections::FxHashMap;
use quarry_core::types::declaration::AddressMap;
use quarry_core::types::identifiers::FieldTypeId;
use quarry_model::fields::FieldTypeRegistry;
use quarry_model::resolve::resolve_declaration;
use quarry_model::targets::{Target, TargetTypeRegistry};

use crate::synthetic::{dispatch_synthetic, DispatchFailure, SyntheticCache, SyntheticRegistry};
use crate::universe::DeclarationUniverse;

/// Resolved targets keyed by address.
#[derive(Debug, Default)]
pub struct TargetIndex {
    targets: FxHashMap<Address, Target>,
}

impl TargetIndex {
    pub fn get(&self, address: &Address) -> Option<&Target> {
        self.targets.get(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.targets.contains_key(address)
    }

    /// Addresses in sorted order.
    pub fn addresses(&self) -> Vec<&Address> {
        let mut addresses: Vec<&Address> = self.targets.keys().collect();
        addresses.sort_unstable();
        addresses
    }

    /// Targets in address order.
    pub fn targets(&self) -> Vec<&Target> {
        let mut targets: Vec<&Target> = self.targets.values().collect();
        targets.sort_unstable_by(|a, b| a.address().cmp(b.address()));
        targets
    }

    /// Targets carrying a field satisfying `query`, in address order.
    pub fn with_field(&self, registry: &FieldTypeRegistry, query: FieldTypeId) -> Vec<&Target> {
        self.targets()
            .into_iter()
            .filter(|target| target.has_field(registry, query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// The index along with the declarations that failed to resolve.
pub struct IndexOutcome {
    pub index: TargetIndex,
    /// Resolution failures in path-then-name order.
    pub errors: Vec<ResolveError>,
}

/// Resolve every declaration in the universe.
///
/// A failing declaration is reported and skipped; it never blocks the rest
/// of the universe from resolving.
pub fn resolve_universe(
    fields: &FieldTypeRegistry,
    targets: &TargetTypeRegistry,
    universe: &DeclarationUniverse,
) -> IndexOutcome {
    let mut resolved: FxHashMap<Address, Target> = FxHashMap::default();
    let mut errors = Vec::new();
    for (path, declaration) in universe.declarations() {
        match resolve_declaration(fields, targets, path, declaration) {
            Ok(target) => {
                // Addresses are unique once the universe merge succeeds.
                resolved.insert(target.address().clone(), target);
            }
            Err(error) => {
                tracing::warn!(path = path, error = %error, "declaration failed to resolve");
                errors.push(error);
            }
        }
    }
    IndexOutcome {
        index: TargetIndex { targets: resolved },
        errors,
    }
}

/// Everything a full workspace indexing run produced.
#[derive(Debug)]
pub struct WorkspaceOutcome {
    pub index: TargetIndex,
    pub resolve_errors: Vec<ResolveError>,
    pub dispatch_failures: Vec<DispatchFailure>,
}

/// Run the full pipeline: dispatch synthetic handlers, merge the universe,
/// resolve every declaration.
///
/// Dispatch failures and resolution failures are collected per scope and
/// per declaration. Only a universe-level collision aborts the run.
pub fn index_workspace(
    fields: &FieldTypeRegistry,
    targets: &TargetTypeRegistry,
    synthetic: &SyntheticRegistry,
    declared: Vec<AddressMap>,
    directories: &[String],
    cache: Option<&SyntheticCache>,
) -> Result<WorkspaceOutcome, DeclError> {
    let dispatch = dispatch_synthetic(synthetic, directories, cache);
    let universe = DeclarationUniverse::build(declared, &dispatch.contributions)?;
    let resolved = resolve_universe(fields, targets, &universe);
    tracing::debug!(
        maps = universe.len(),
        targets = resolved.index.len(),
        resolve_errors = resolved.errors.len(),
        dispatch_failures = dispatch.failures.len(),
        "workspace indexed"
    );
    Ok(WorkspaceOutcome {
        index: resolved.index,
        resolve_errors: resolved.errors,
        dispatch_failures: dispatch.failures,
    })
}
