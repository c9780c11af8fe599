//! Property tests for the capability relation.
//!
//! The relation ("concrete satisfies query") must behave like descent in a
//! single-parent forest: reflexive, transitive, antisymmetric, and blind to
//! unrelated branches, for ANY forest shape, not just hand-crafted ones.

use proptest::prelude::*;

use quarry_core::types::identifiers::FieldTypeId;
use quarry_model::fields::{FieldTypeDef, FieldTypeRegistry, ValueKind};

// ─── Helpers ───────────────────────────────────────────────────────────────

/// Build a registry from parent pointers: `parents[i]` is the index of node
/// i's parent, or None for a root. Parent indices always precede children.
fn build_forest(parents: &[Option<usize>]) -> (FieldTypeRegistry, Vec<FieldTypeId>) {
    let mut registry = FieldTypeRegistry::new();
    let mut ids: Vec<FieldTypeId> = Vec::with_capacity(parents.len());
    for (i, parent) in parents.iter().enumerate() {
        let def = match parent {
            Some(p) => FieldTypeDef::extending(ids[*p]),
            None => FieldTypeDef::new(&format!("field_{}", i), ValueKind::String),
        };
        ids.push(registry.register(def).expect("forest registration"));
    }
    (registry, ids)
}

/// A deterministic 30-node forest: three roots, each node's parent chosen by
/// simple arithmetic so depths and branch widths vary.
fn wide_forest() -> Vec<Option<usize>> {
    (0..30)
        .map(|i| if i < 3 { None } else { Some((i - 3) / 3) })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// RELATION LAWS (SWEEPS)
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn property_satisfies_reflexive_on_every_node() {
    let (registry, ids) = build_forest(&wide_forest());
    for &id in &ids {
        assert!(registry.satisfies(id, id), "reflexivity failed for {:?}", id);
    }
}

#[test]
fn property_satisfies_transitive_over_all_triples() {
    let (registry, ids) = build_forest(&wide_forest());
    for &a in &ids {
        for &b in &ids {
            for &c in &ids {
                if registry.satisfies(a, b) && registry.satisfies(b, c) {
                    assert!(
                        registry.satisfies(a, c),
                        "transitivity failed: {:?} -> {:?} -> {:?}",
                        a,
                        b,
                        c
                    );
                }
            }
        }
    }
}

#[test]
fn property_satisfies_antisymmetric_over_all_pairs() {
    let (registry, ids) = build_forest(&wide_forest());
    for &a in &ids {
        for &b in &ids {
            if a != b {
                assert!(
                    !(registry.satisfies(a, b) && registry.satisfies(b, a)),
                    "antisymmetry failed for {:?} and {:?}",
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn property_deep_chain_satisfies_every_ancestor() {
    let depth = 64;
    let parents: Vec<Option<usize>> = (0..depth)
        .map(|i| if i == 0 { None } else { Some(i - 1) })
        .collect();
    let (registry, ids) = build_forest(&parents);

    let leaf = ids[depth - 1];
    for (i, &ancestor) in ids.iter().enumerate() {
        assert!(
            registry.satisfies(leaf, ancestor),
            "leaf should satisfy ancestor at depth {}",
            i
        );
        if i < depth - 1 {
            assert!(
                !registry.satisfies(ancestor, leaf),
                "ancestor at depth {} must not satisfy the leaf",
                i
            );
        }
    }
}

#[test]
fn property_separate_roots_never_satisfy_each_other() {
    let (registry, ids) = build_forest(&wide_forest());
    // Nodes 0..3 are roots; everything under different roots is unrelated.
    let root_of = |mut i: usize, parents: &[Option<usize>]| {
        while let Some(p) = parents[i] {
            i = p;
        }
        i
    };
    let parents = wide_forest();
    for i in 0..ids.len() {
        for j in 0..ids.len() {
            if root_of(i, &parents) != root_of(j, &parents) {
                assert!(
                    !registry.satisfies(ids[i], ids[j]),
                    "nodes under different roots must be unrelated: {} vs {}",
                    i,
                    j
                );
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RELATION LAWS (RANDOMIZED FORESTS)
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// The laws must hold for arbitrary forest shapes.
    #[test]
    fn property_relation_laws_hold_on_random_forests(
        raw_parents in proptest::collection::vec(proptest::option::of(0usize..16), 1..16)
    ) {
        // Clamp parent indices below the child index so the input is always
        // a valid forest.
        let parents: Vec<Option<usize>> = raw_parents
            .iter()
            .enumerate()
            .map(|(i, p)| if i == 0 { None } else { p.map(|p| p % i) })
            .collect();
        let (registry, ids) = build_forest(&parents);

        for &a in &ids {
            prop_assert!(registry.satisfies(a, a));
        }
        for &a in &ids {
            for &b in &ids {
                if a != b {
                    prop_assert!(!(registry.satisfies(a, b) && registry.satisfies(b, a)));
                }
                for &c in &ids {
                    if registry.satisfies(a, b) && registry.satisfies(b, c) {
                        prop_assert!(registry.satisfies(a, c));
                    }
                }
            }
        }
    }
}
