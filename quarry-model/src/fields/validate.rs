//! Raw-input validation for field values.
//!
//! Validation is pure: a raw JSON value plus the field's effective kind and
//! constraints either produce a typed [`FieldValue`] or a rejection carrying
//! the expected shape and the offending input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::{FieldValue, ValueKind};

/// Numeric acceptance rule for integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumberRule {
    /// Any integer.
    #[default]
    Any,
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
}

impl NumberRule {
    /// Whether the rule accepts the given integer.
    pub fn accepts(&self, n: i64) -> bool {
        match self {
            Self::Any => true,
            Self::Positive => n > 0,
            Self::NonNegative => n >= 0,
        }
    }
}

/// Declarative constraints applied on top of a field's value kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueConstraints {
    /// Closed set of accepted strings. Applies to string kinds, per element
    /// for sequences.
    pub choices: Option<Vec<String>>,
    /// Acceptance rule for integer kinds.
    pub numbers: NumberRule,
}

/// A rejected value: the expected shape and the offending input.
#[derive(Debug, Clone)]
pub struct ValueRejection {
    pub expected: String,
    pub given: String,
}

/// Render the expected shape of a field, constraints included.
pub(crate) fn expected_description(kind: ValueKind, constraints: &ValueConstraints) -> String {
    let mut expected = kind.describe().to_string();
    if let Some(choices) = &constraints.choices {
        expected.push_str(&format!(" (one of: {})", choices.join(", ")));
    }
    match constraints.numbers {
        NumberRule::Positive => expected.push_str(" (positive)"),
        NumberRule::NonNegative => expected.push_str(" (non-negative)"),
        NumberRule::Any => {}
    }
    expected
}

fn reject(kind: ValueKind, constraints: &ValueConstraints, raw: &Value) -> ValueRejection {
    ValueRejection {
        expected: expected_description(kind, constraints),
        given: raw.to_string(),
    }
}

fn choice_allowed(constraints: &ValueConstraints, s: &str) -> bool {
    match &constraints.choices {
        Some(choices) => choices.iter().any(|c| c == s),
        None => true,
    }
}

/// Validate a raw JSON value against a kind and constraints.
///
/// A JSON null validates to [`FieldValue::None`] for every kind; resolution
/// treats an explicit null the same as an omitted field.
pub fn validate_raw(
    kind: ValueKind,
    constraints: &ValueConstraints,
    raw: &Value,
) -> Result<FieldValue, ValueRejection> {
    if raw.is_null() {
        return Ok(FieldValue::None);
    }
    match kind {
        ValueKind::Bool => raw
            .as_bool()
            .map(FieldValue::Bool)
            .ok_or_else(|| reject(kind, constraints, raw)),
        ValueKind::Int => {
            let n = raw.as_i64().ok_or_else(|| reject(kind, constraints, raw))?;
            if !constraints.numbers.accepts(n) {
                return Err(reject(kind, constraints, raw));
            }
            Ok(FieldValue::Int(n))
        }
        ValueKind::String => {
            let s = raw.as_str().ok_or_else(|| reject(kind, constraints, raw))?;
            if !choice_allowed(constraints, s) {
                return Err(reject(kind, constraints, raw));
            }
            Ok(FieldValue::String(s.to_string()))
        }
        ValueKind::StringSequence => {
            let items = raw
                .as_array()
                .ok_or_else(|| reject(kind, constraints, raw))?;
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                let s = item
                    .as_str()
                    .ok_or_else(|| reject(kind, constraints, raw))?;
                if !choice_allowed(constraints, s) {
                    return Err(reject(kind, constraints, raw));
                }
                out.push(s.to_string());
            }
            Ok(FieldValue::StringList(out))
        }
    }
}

/// Validate an explicit default value against a kind and constraints.
///
/// [`FieldValue::None`] always passes: it marks an optional field with no
/// value rather than a value of the wrong shape.
pub fn validate_default(
    kind: ValueKind,
    constraints: &ValueConstraints,
    value: &FieldValue,
) -> Result<(), ValueRejection> {
    let rejection = || ValueRejection {
        expected: expected_description(kind, constraints),
        given: value.describe(),
    };
    match (kind, value) {
        (_, FieldValue::None) => Ok(()),
        (ValueKind::Bool, FieldValue::Bool(_)) => Ok(()),
        (ValueKind::Int, FieldValue::Int(n)) => {
            if constraints.numbers.accepts(*n) {
                Ok(())
            } else {
                Err(rejection())
            }
        }
        (ValueKind::String, FieldValue::String(s)) => {
            if choice_allowed(constraints, s) {
                Ok(())
            } else {
                Err(rejection())
            }
        }
        (ValueKind::StringSequence, FieldValue::StringList(items)) => {
            if items.iter().all(|s| choice_allowed(constraints, s)) {
                Ok(())
            } else {
                Err(rejection())
            }
        }
        _ => Err(rejection()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_bool() {
        let constraints = ValueConstraints::default();
        let value = validate_raw(ValueKind::Bool, &constraints, &json!(true));
        assert_eq!(value.ok(), Some(FieldValue::Bool(true)));
        assert!(validate_raw(ValueKind::Bool, &constraints, &json!("yes")).is_err());
    }

    #[test]
    fn test_validate_int_rules() {
        let positive = ValueConstraints {
            numbers: NumberRule::Positive,
            ..Default::default()
        };
        assert!(validate_raw(ValueKind::Int, &positive, &json!(30)).is_ok());
        assert!(validate_raw(ValueKind::Int, &positive, &json!(0)).is_err());
        assert!(validate_raw(ValueKind::Int, &positive, &json!(-5)).is_err());

        let non_negative = ValueConstraints {
            numbers: NumberRule::NonNegative,
            ..Default::default()
        };
        assert!(validate_raw(ValueKind::Int, &non_negative, &json!(0)).is_ok());
    }

    #[test]
    fn test_validate_string_choices() {
        let constraints = ValueConstraints {
            choices: Some(vec!["sh".to_string(), "bash".to_string()]),
            ..Default::default()
        };
        assert!(validate_raw(ValueKind::String, &constraints, &json!("bash")).is_ok());
        let rejection = validate_raw(ValueKind::String, &constraints, &json!("zsh"))
            .err()
            .expect("zsh is not a valid choice");
        assert!(rejection.expected.contains("one of: sh, bash"));
        assert_eq!(rejection.given, "\"zsh\"");
    }

    #[test]
    fn test_validate_sequence_per_element() {
        let constraints = ValueConstraints {
            choices: Some(vec!["a".to_string(), "b".to_string()]),
            ..Default::default()
        };
        assert!(validate_raw(ValueKind::StringSequence, &constraints, &json!(["a", "b"])).is_ok());
        assert!(validate_raw(ValueKind::StringSequence, &constraints, &json!(["a", "c"])).is_err());
        assert!(validate_raw(ValueKind::StringSequence, &constraints, &json!(["a", 3])).is_err());
    }

    #[test]
    fn test_null_validates_to_none() {
        let constraints = ValueConstraints::default();
        for kind in [
            ValueKind::Bool,
            ValueKind::Int,
            ValueKind::String,
            ValueKind::StringSequence,
        ] {
            let value = validate_raw(kind, &constraints, &Value::Null);
            assert_eq!(value.ok(), Some(FieldValue::None));
        }
    }

    #[test]
    fn test_validate_default_none_always_passes() {
        let constraints = ValueConstraints {
            choices: Some(vec!["only".to_string()]),
            ..Default::default()
        };
        assert!(validate_default(ValueKind::String, &constraints, &FieldValue::None).is_ok());
    }

    #[test]
    fn test_validate_default_checks_shape_and_constraints() {
        let constraints = ValueConstraints {
            numbers: NumberRule::NonNegative,
            ..Default::default()
        };
        assert!(validate_default(ValueKind::Int, &constraints, &FieldValue::Int(0)).is_ok());
        assert!(validate_default(ValueKind::Int, &constraints, &FieldValue::Int(-1)).is_err());
        assert!(validate_default(
            ValueKind::Int,
            &constraints,
            &FieldValue::String("5".to_string())
        )
        .is_err());
    }
}
