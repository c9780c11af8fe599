//! Merge of declared and synthetic address maps into one universe.
//!
//! The universe is keyed by declaration path. Synthetic paths must be novel,
//! and within a directory a declared target name silently shadows a
//! synthetic one. Any remaining address collision aborts the merge.

use std::collections::BTreeMap;

use quarry_core::errors::DeclError;
use quarry_core::types::address::Address;
use quarry_core::types::collections::{FxHashMap, FxHashSet};
use quarry_core::types::declaration::{directory_of, AddressMap, TargetDeclaration};

use crate::synthetic::Contribution;

/// Every address map in the workspace, declared and synthetic.
pub struct DeclarationUniverse {
    maps: BTreeMap<String, AddressMap>,
}

impl DeclarationUniverse {
    /// Merge declared maps with synthetic contributions.
    pub fn build(
        declared: Vec<AddressMap>,
        synthetic: &[Contribution],
    ) -> Result<Self, DeclError> {
        let mut maps: BTreeMap<String, AddressMap> = BTreeMap::new();
        for map in declared {
            let path = map.path.clone();
            if maps.insert(path.clone(), map).is_some() {
                return Err(DeclError::DuplicateDeclarationPath { path });
            }
        }

        // Synthetic paths must not collide with each other or with a
        // declared file.
        let mut synthetic_owner: FxHashMap<&str, &str> = FxHashMap::default();
        for contribution in synthetic {
            let path = contribution.map.path.as_str();
            if let Some(first) = synthetic_owner.get(path) {
                return Err(DeclError::DuplicateSyntheticPath {
                    path: path.to_string(),
                    first: format!("handler '{}'", first),
                    second: contribution.handler.clone(),
                });
            }
            if maps.contains_key(path) {
                return Err(DeclError::DuplicateSyntheticPath {
                    path: path.to_string(),
                    first: "a declared file".to_string(),
                    second: contribution.handler.clone(),
                });
            }
            synthetic_owner.insert(path, &contribution.handler);
        }

        let mut declared_names: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
        for map in maps.values() {
            let names = declared_names
                .entry(map.directory().to_string())
                .or_default();
            for name in map.names() {
                names.insert(name.to_string());
            }
        }

        for contribution in synthetic {
            let directory = directory_of(&contribution.map.path);
            let shadowing = declared_names.get(directory);
            let mut kept: Vec<TargetDeclaration> = Vec::new();
            for declaration in &contribution.map.declarations {
                if shadowing.map_or(false, |names| names.contains(&declaration.name)) {
                    tracing::debug!(
                        path = contribution.map.path.as_str(),
                        name = declaration.name.as_str(),
                        "synthetic target shadowed by declared target"
                    );
                    continue;
                }
                kept.push(declaration.clone());
            }
            if kept.is_empty() {
                continue;
            }
            // Rejects duplicate names within the handler's own output.
            let map = AddressMap::new(&contribution.map.path, kept)?;
            maps.insert(map.path.clone(), map);
        }

        // Two surviving maps in one directory must not declare the same
        // target name.
        let mut owners: FxHashMap<(String, String), &str> = FxHashMap::default();
        for map in maps.values() {
            for name in map.names() {
                let key = (map.directory().to_string(), name.to_string());
                if let Some(first_path) = owners.get(&key) {
                    return Err(DeclError::ConflictingAddress {
                        address: Address::new(&key.0, &key.1),
                        first_path: first_path.to_string(),
                        second_path: map.path.clone(),
                    });
                }
                owners.insert(key, &map.path);
            }
        }

        Ok(Self { maps })
    }

    /// Look up an address map by declaration path.
    pub fn get(&self, path: &str) -> Option<&AddressMap> {
        self.maps.get(path)
    }

    /// Address maps in path order.
    pub fn maps(&self) -> impl Iterator<Item = &AddressMap> {
        self.maps.values()
    }

    /// Every declaration with its owning path, in path-then-name order.
    pub fn declarations(&self) -> Vec<(&str, &TargetDeclaration)> {
        self.maps
            .values()
            .flat_map(|map| {
                map.declarations()
                    .into_iter()
                    .map(move |declaration| (map.path.as_str(), declaration))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
