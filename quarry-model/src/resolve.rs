//! Resolution of raw declarations into targets.

use quarry_core::errors::ResolveError;
use quarry_core::types::address::Address;
use quarry_core::types::declaration::{directory_of, TargetDeclaration};
use quarry_core::types::identifiers::FieldTypeId;

use crate::fields::registry::FieldType;
use crate::fields::validate::validate_raw;
use crate::fields::FieldTypeRegistry;
use crate::targets::{ResolvedField, Target, TargetTypeRegistry};

/// Resolve one raw declaration into an immutable target.
///
/// `declaration_path` is the declaration file (or synthetic path) that owns
/// the declaration; the target's address is that path's directory plus the
/// declared name. Resolution is identical for declared and synthetic input,
/// so downstream consumers cannot tell the origins apart.
///
/// Unknown field keys are a hard failure even when every required field is
/// present. An explicit null value behaves exactly like omission: the field
/// falls back to its default, or errors when required.
pub fn resolve_declaration(
    fields: &FieldTypeRegistry,
    targets: &TargetTypeRegistry,
    declaration_path: &str,
    declaration: &TargetDeclaration,
) -> Result<Target, ResolveError> {
    let address = Address::new(directory_of(declaration_path), &declaration.name);

    let Some((type_id, target_type)) = targets.get_by_alias(&declaration.type_alias) else {
        return Err(ResolveError::UnrecognizedTargetType {
            address,
            alias: declaration.type_alias.clone(),
            known: targets.known_aliases().join(", "),
        });
    };

    // Field ids were checked when the target type was defined.
    let core: Vec<(FieldTypeId, &FieldType)> = target_type
        .fields
        .iter()
        .filter_map(|&id| fields.get(id).map(|entry| (id, entry)))
        .collect();

    // Reject unknown keys first, in sorted order so the reported key is
    // stable regardless of map iteration order.
    let mut supplied: Vec<&str> = declaration.fields.keys().map(String::as_str).collect();
    supplied.sort_unstable();
    for key in supplied {
        if !core.iter().any(|(_, entry)| entry.alias == key) {
            return Err(ResolveError::UnrecognizedField {
                address,
                target_type: target_type.alias.clone(),
                alias: key.to_string(),
            });
        }
    }

    let mut resolved = Vec::with_capacity(core.len());
    for (field_id, field_type) in core {
        let raw = declaration
            .fields
            .get(&field_type.alias)
            .filter(|value| !value.is_null());
        let value = match raw {
            Some(raw) => validate_raw(field_type.kind, &field_type.constraints, raw).map_err(
                |rejection| ResolveError::InvalidFieldValue {
                    address: address.clone(),
                    alias: field_type.alias.clone(),
                    expected: rejection.expected,
                    given: rejection.given,
                },
            )?,
            None => match &field_type.default {
                Some(default) => default.clone(),
                None => {
                    return Err(ResolveError::MissingRequiredField {
                        address,
                        target_type: target_type.alias.clone(),
                        alias: field_type.alias.clone(),
                    })
                }
            },
        };
        resolved.push(ResolvedField {
            field_type: field_id,
            value,
        });
    }

    Ok(Target::new(address, type_id, resolved))
}
