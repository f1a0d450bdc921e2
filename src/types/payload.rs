//! Request payload sent to the prediction endpoint

use serde::Serialize;
use serde_json::{Map, Value};

use super::field::{FormFields, coerce_field_value};

/// JSON object of coerced form fields, in form order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestPayload(Map<String, Value>);

impl RequestPayload {
    /// Build a payload by coercing every field of a form field set.
    pub fn from_fields(fields: &FormFields) -> Self {
        Self(
            fields
                .iter()
                .map(|(name, raw)| (name.to_string(), Value::from(coerce_field_value(raw))))
                .collect(),
        )
    }

    /// Coerced value of a field
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<&FormFields> for RequestPayload {
    fn from(fields: &FormFields) -> Self {
        Self::from_fields(fields)
    }
}
