//! Capability-based filtering across collections of targets.

use quarry_core::types::identifiers::FieldTypeId;

use super::target::Target;
use crate::fields::FieldTypeRegistry;

/// Filter targets to those carrying a field that satisfies `query`.
///
/// Preserves input order. This is the plugin-facing entry point for "run
/// over every target with field X" style operations.
pub fn filter_by_field<'a>(
    targets: &'a [Target],
    registry: &FieldTypeRegistry,
    query: FieldTypeId,
) -> Vec<&'a Target> {
    targets
        .iter()
        .filter(|target| target.has_field(registry, query))
        .collect()
}
