//! Field value kinds and resolved values.

use serde::{Deserialize, Serialize};

/// The shape of raw input a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Bool,
    Int,
    String,
    StringSequence,
}

impl ValueKind {
    /// Human-readable shape description used in validation errors.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Bool => "a boolean",
            Self::Int => "an integer",
            Self::String => "a string",
            Self::StringSequence => "a sequence of strings",
        }
    }
}

/// A validated field value carried by a resolved target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldValue {
    /// Explicitly empty. Optional fields resolve to this when omitted.
    None,
    Bool(bool),
    Int(i64),
    String(String),
    StringList(Vec<String>),
}

impl FieldValue {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(items) => Some(items),
            _ => None,
        }
    }

    /// Compact rendering used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::String(s) => format!("\"{}\"", s),
            Self::StringList(items) => format!("[{}]", items.join(", ")),
        }
    }
}
