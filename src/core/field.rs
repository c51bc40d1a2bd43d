//! Field values used by search and filter predicates

use crate::core::entity::EntityId;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Textual form used by search and filter comparisons
    ///
    /// Null has no textual form and never matches.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::String(s) => Some(Cow::Borrowed(s)),
            FieldValue::Integer(i) => Some(Cow::Owned(i.to_string())),
            FieldValue::Float(f) => Some(Cow::Owned(f.to_string())),
            FieldValue::Boolean(b) => Some(Cow::Owned(b.to_string())),
            FieldValue::Null => None,
        }
    }

    /// Case-insensitive substring match; `needle` must already be lowercase
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.as_text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    }

    /// Exact equality against a filter value
    pub fn equals_text(&self, expected: &str) -> bool {
        self.as_text().is_some_and(|text| text == expected)
    }
}

/// Conversion used by the record macro to expose struct fields
pub trait IntoFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl IntoFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl IntoFieldValue for EntityId {
    fn to_field_value(&self) -> FieldValue {
        match self {
            EntityId::Number(n) => FieldValue::Integer(*n),
            EntityId::Text(s) => FieldValue::String(s.clone()),
        }
    }
}

impl IntoFieldValue for u32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(i64::from(*self))
    }
}

impl IntoFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl IntoFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl IntoFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Null,
        }
    }
}
