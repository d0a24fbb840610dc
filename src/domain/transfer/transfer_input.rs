//! Raw, untyped transfer request

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TransferField;
use crate::shared::errors::AppError;

/// A transfer request exactly as received: a JSON object that may lack any
/// of the expected keys or carry values of the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferInput {
    fields: Map<String, Value>,
}

impl TransferInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. Anything but an object is an input error.
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from(value)
    }

    /// Builder-style setter, mostly useful for callers assembling a request by hand.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Looks up `field`, falling back to its legacy key when allowed.
    /// `null` values count as absent.
    pub fn field(&self, field: TransferField, accept_legacy_keys: bool) -> Option<&Value> {
        let present = |key: &str| self.fields.get(key).filter(|value| !value.is_null());

        present(field.key()).or_else(|| {
            field
                .legacy_key()
                .filter(|_| accept_legacy_keys)
                .and_then(present)
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for TransferInput {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for TransferInput {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(AppError::InputError(format!(
                "transfer request must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
