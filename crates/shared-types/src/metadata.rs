// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Total normalization of heterogeneous inscription metadata
//!
//! Providers return inscription metadata in several shapes: a structured
//! object, a JSON-encoded string of that object, a plain string, or nothing
//! at all. [`MetadataSource`] makes that union explicit and
//! [`MetadataSource::normalize`] collapses every shape into one canonical
//! [`NormalizedMetadata`] record. Normalization is total: malformed input
//! degrades to defaults, it never fails.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Default display name when metadata carries none.
const DEFAULT_NAME: &str = "Unnamed";
/// Default description when metadata carries none.
const DEFAULT_DESCRIPTION: &str = "No description";
/// Trait type assigned to attribute entries without one.
const DEFAULT_TRAIT_TYPE: &str = "attribute";
/// Value assigned to attribute entries without a usable value.
const UNKNOWN_VALUE: &str = "unknown";

/// An attribute value, either textual or numeric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Textual attribute value
    Text(String),
    /// Numeric attribute value, kept as arbitrary-precision JSON number
    #[schema(value_type = f64)]
    Number(serde_json::Number),
}

impl AttributeValue {
    /// The placeholder value for entries with no usable value
    pub fn unknown() -> Self {
        Self::Text(UNKNOWN_VALUE.to_string())
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// A single display attribute of an inscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetadataAttribute {
    /// The trait this attribute describes
    pub trait_type: String,
    /// The trait's value
    pub value: AttributeValue,
}

/// Fully-populated display metadata for an inscription
///
/// Invariant: every field is always present. Construction goes through
/// [`MetadataSource::normalize`], which fills defaults for anything the raw
/// metadata does not provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedMetadata {
    /// Display name, `"Unnamed"` when absent
    pub name: String,
    /// Display description, `"No description"` when absent
    pub description: String,
    /// Display attributes, empty when absent or malformed
    pub attributes: Vec<MetadataAttribute>,
}

impl Default for NormalizedMetadata {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            attributes: Vec::new(),
        }
    }
}

/// The shapes raw inscription metadata arrives in
///
/// This is the tagged union behind the provider's loosely-typed `metadata`
/// field. Classification happens once, in [`MetadataSource::from_value`];
/// callers never shape-sniff JSON themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataSource {
    /// A structured JSON object
    Structured(serde_json::Map<String, Value>),
    /// A string, possibly a JSON encoding of the structured shape
    Text(String),
    /// Null, missing, or any shape that carries no usable metadata
    Absent,
}

impl MetadataSource {
    /// Classify a raw metadata value into its shape
    ///
    /// Arrays, booleans, and bare numbers carry nothing displayable and
    /// classify as [`MetadataSource::Absent`].
    pub fn from_value(value: Option<Value>) -> Self {
        match value {
            Some(Value::Object(map)) => Self::Structured(map),
            Some(Value::String(text)) => Self::Text(text),
            Some(_) | None => Self::Absent,
        }
    }

    /// Normalize this metadata into the canonical display record
    ///
    /// Total and deterministic: every input shape, including malformed
    /// JSON-encoded strings, produces a fully-populated record.
    pub fn normalize(self) -> NormalizedMetadata {
        match self {
            Self::Structured(map) => normalize_object(&map),
            Self::Text(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => normalize_object(&map),
                // Valid JSON that is not an object has no extractable fields.
                Ok(_) => NormalizedMetadata::default(),
                // Not JSON at all: the string itself is the description.
                Err(_) => NormalizedMetadata {
                    description: text,
                    ..NormalizedMetadata::default()
                },
            },
            Self::Absent => NormalizedMetadata::default(),
        }
    }
}

/// Extract `name`, `description`, and `attributes` from a structured object
fn normalize_object(map: &serde_json::Map<String, Value>) -> NormalizedMetadata {
    let attributes = match map.get("attributes") {
        Some(Value::Array(entries)) => entries.iter().map(normalize_attribute).collect(),
        _ => Vec::new(),
    };

    NormalizedMetadata {
        name: coerce_scalar(map.get("name")).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        description: coerce_scalar(map.get("description"))
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        attributes,
    }
}

/// Normalize a single attribute entry
///
/// Entries that already carry a string `trait_type` and a string-or-number
/// `value` pass through unchanged. Everything else is wrapped: a bare string
/// becomes its own trait type, a bare number becomes the value, and missing
/// pieces fall back to `"attribute"` / `"unknown"`.
fn normalize_attribute(entry: &Value) -> MetadataAttribute {
    if let Value::Object(fields) = entry
        && let Some(Value::String(trait_type)) = fields.get("trait_type")
        && let Some(value) = fields.get("value").and_then(attribute_value)
    {
        return MetadataAttribute {
            trait_type: trait_type.clone(),
            value,
        };
    }

    let trait_type = match entry {
        Value::String(text) => text.clone(),
        _ => DEFAULT_TRAIT_TYPE.to_string(),
    };
    let value = match entry {
        Value::Number(number) => AttributeValue::Number(number.clone()),
        _ => AttributeValue::unknown(),
    };

    MetadataAttribute { trait_type, value }
}

/// Read a JSON value as a string-or-number attribute value
fn attribute_value(value: &Value) -> Option<AttributeValue> {
    match value {
        Value::String(text) => Some(AttributeValue::Text(text.clone())),
        Value::Number(number) => Some(AttributeValue::Number(number.clone())),
        _ => None,
    }
}

/// String-coerce a scalar metadata field
///
/// Strings pass through unless empty; numbers and booleans render as text.
/// Empty strings, containers, and null all count as absent.
fn coerce_scalar(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    }
}
