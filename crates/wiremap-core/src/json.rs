//! JSON text boundary.
//!
//! Thin wrapper over serde_json: the codec itself is opaque to the rest of
//! the engine, which only ever sees decoded [`Plain`] values.

use crate::value::Plain;
use serde_json::Value as JsonValue;
use thiserror::Error as ThisError;

///
/// DecodeError
///

#[derive(Debug, ThisError)]
pub enum DecodeError {
    #[error("malformed json: {0}")]
    Malformed(String),
}

/// Decode a JSON document into a plain value.
pub fn decode(text: &str) -> Result<Plain, DecodeError> {
    let value: JsonValue =
        serde_json::from_str(text).map_err(|err| DecodeError::Malformed(err.to_string()))?;

    Ok(Plain::from(value))
}

/// Encode a plain value as a JSON document.
///
/// Infallible: every `Plain` variant has a JSON representation. Non-finite
/// floats encode as `null` per serde_json's own rules; the engine never
/// produces them itself.
#[must_use]
pub fn encode(plain: &Plain) -> String {
    JsonValue::from(plain).to_string()
}

// Decode shape → runtime value, recursively. Integers keep their decoded
// signedness; numbers that fit neither i64 nor u64 fall back to f64.
impl From<JsonValue> for Plain {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(v) => Self::Bool(v),
            JsonValue::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    n.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            JsonValue::String(v) => Self::Text(v),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Plain> for JsonValue {
    fn from(plain: &Plain) -> Self {
        match plain {
            Plain::Null => Self::Null,
            Plain::Bool(v) => Self::Bool(*v),
            Plain::Int(v) => Self::from(*v),
            Plain::Uint(v) => Self::from(*v),
            Plain::Float(v) => serde_json::Number::from_f64(*v).map_or(Self::Null, Self::Number),
            Plain::Text(v) => Self::String(v.clone()),
            Plain::List(items) => Self::Array(items.iter().map(Self::from).collect()),
            Plain::Map(entries) => Self::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

///
/// TESTS
///
