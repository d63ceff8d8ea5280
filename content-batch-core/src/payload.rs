//! Decoded metadata documents.
//!
//! A [`Payload`] is the field-name → value mapping read from a per-item JSON
//! document. Values are kept as a tagged union so the validator can match on
//! the declared rule of each field without guessing at types.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// A single payload value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    /// A whole number above `i64::MAX`.
    Unsigned(u64),
    /// Anything else the document contained (floats, booleans, null, arrays, objects).
    Other(Value),
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => FieldValue::Integer(i),
                (None, Some(u)) => FieldValue::Unsigned(u),
                _ => FieldValue::Other(Value::Number(n)),
            },
            other => FieldValue::Other(other),
        }
    }
}

/// Field name → value mapping for one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload {
    fields: BTreeMap<String, FieldValue>,
}

/// Why a document could not be turned into a [`Payload`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON format: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("invalid JSON format: expected a JSON object")]
    NotAnObject,
}

impl Payload {
    /// Decodes one complete JSON document. Surrounding whitespace is ignored.
    pub fn from_json_str(text: &str) -> Result<Self, DecodeError> {
        match serde_json::from_str::<Value>(text.trim())? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(DecodeError::NotAnObject),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    /// Returns a copy of this payload with `key` set to the given text value.
    pub fn with_text(&self, key: &str, value: &str) -> Self {
        let mut tagged = self.clone();
        tagged.insert(key, FieldValue::Text(value.to_string()));
        tagged
    }

    /// Serialises the payload back into a JSON object.
    pub fn to_json(&self) -> Value {
        // A map of untagged scalars/values cannot fail to serialise.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Payload {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), FieldValue::from(v)))
                .collect(),
        }
    }
}
