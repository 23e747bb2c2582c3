//! Field types, values and attachment targets for the metadata system

use serde::{Deserialize, Serialize};

/// Type of a metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Integer,
    Boolean,
    TextList,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::TextList => "text_list",
        }
    }
}

/// Value supplied at an attachment site (or declared as a schema default)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Text(&'static str),
    Integer(i64),
    Boolean(bool),
    TextList(&'static [&'static str]),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Text(_) => FieldType::Text,
            Self::Integer(_) => FieldType::Integer,
            Self::Boolean(_) => FieldType::Boolean,
            Self::TextList(_) => FieldType::TextList,
        }
    }
}

/// Owned version of FieldValue for scan reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValueOwned {
    Text(String),
    Integer(i64),
    Boolean(bool),
    TextList(Vec<String>),
}

impl FieldValueOwned {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&FieldValue> for FieldValueOwned {
    fn from(value: &FieldValue) -> Self {
        match *value {
            FieldValue::Text(s) => Self::Text(s.to_string()),
            FieldValue::Integer(v) => Self::Integer(v),
            FieldValue::Boolean(b) => Self::Boolean(b),
            FieldValue::TextList(items) => {
                Self::TextList(items.iter().map(|s| s.to_string()).collect())
            }
        }
    }
}

impl std::fmt::Display for FieldValueOwned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::TextList(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Element a metadata kind may be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementTarget {
    Type,
    Operation,
}

impl ElementTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Operation => "operation",
        }
    }
}

/// How long a metadata kind is kept around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// Compile-time marker only, never visible to a scan
    Source,
    #[default]
    Runtime,
}

impl Retention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Runtime => "runtime",
        }
    }
}
