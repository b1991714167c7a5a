//! Closed sum type over the prediction-item shapes backends hand back.
//!
//! A backend client may return anything from a plain decoded JSON object to
//! an opaque record that only exposes a result accessor or a dictionary
//! conversion. A single normalization step converts every variant into a
//! `serde_json::Value` before the extraction pipeline runs, so capability
//! probing never leaks into the search code.

use std::fmt;

use serde_json::Value;

use super::AccessError;

/// Opaque backend record exposing a `res`-style result accessor.
///
/// `Display` supplies the plain string rendering the pipeline falls back to
/// when the accessor fails.
pub trait ResultAccess: fmt::Display {
    /// Produce the record's result payload.
    fn result(&self) -> Result<Value, AccessError>;
}

/// Opaque backend record exposing a dictionary conversion.
pub trait DictAccess: fmt::Display {
    /// Convert the record into a JSON mapping.
    fn to_dict(&self) -> Result<Value, AccessError>;
}

/// One prediction item as handed back by a backend client.
pub enum PredictionItem {
    /// Already-decoded JSON mapping
    Mapping(serde_json::Map<String, Value>),

    /// Already-decoded JSON sequence
    Sequence(Vec<Value>),

    /// Bare text payload
    Text(String),

    /// Opaque record with a result accessor
    WithResult(Box<dyn ResultAccess>),

    /// Opaque record with a dictionary conversion
    WithDict(Box<dyn DictAccess>),

    /// Anything else; only its string rendering is usable
    Opaque(String),
}

impl PredictionItem {
    /// Wrap an opaque record that exposes a result accessor.
    pub fn with_result(record: impl ResultAccess + 'static) -> Self {
        Self::WithResult(Box::new(record))
    }

    /// Wrap an opaque record that exposes a dictionary conversion.
    pub fn with_dict(record: impl DictAccess + 'static) -> Self {
        Self::WithDict(Box::new(record))
    }

    /// Normalize the item into a plain JSON value.
    ///
    /// Accessor failures degrade to the record's string rendering; this
    /// never errors.
    pub fn into_value(self) -> Value {
        match self {
            PredictionItem::Mapping(map) => Value::Object(map),
            PredictionItem::Sequence(items) => Value::Array(items),
            PredictionItem::Text(text) => Value::String(text),
            PredictionItem::WithResult(record) => match record.result() {
                Ok(value) => value,
                Err(_) => Value::String(record.to_string()),
            },
            PredictionItem::WithDict(record) => match record.to_dict() {
                Ok(value) => value,
                Err(_) => Value::String(record.to_string()),
            },
            PredictionItem::Opaque(rendering) => Value::String(rendering),
        }
    }
}

impl From<Value> for PredictionItem {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => PredictionItem::Mapping(map),
            Value::Array(items) => PredictionItem::Sequence(items),
            Value::String(text) => PredictionItem::Text(text),
            other => PredictionItem::Opaque(other.to_string()),
        }
    }
}

impl From<&Value> for PredictionItem {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}
