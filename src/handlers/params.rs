// src/handlers/params.rs
// DOCUMENTATION: Request parameter filtering
// PURPOSE: require/permit allow-listing over the untyped JSON body, applied
// before any domain object is constructed

use crate::errors::ApiError;
use serde_json::{Map, Value};

/// Untyped request parameters (a JSON object)
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: Map<String, Value>,
}

impl Params {
    /// Accept a request body; anything but a JSON object is malformed input
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        match body {
            Value::Object(values) => Ok(Params { values }),
            other => Err(ApiError::InvalidInput(format!(
                "expected a JSON object, got {}",
                kind(&other)
            ))),
        }
    }

    /// Nest a bare body under `key` unless the caller already did
    /// DOCUMENTATION: only `attributes` are carried into the wrapper, so
    /// `{"title": "x", "owner": "y"}` becomes `{"photo": {"title": "x"}}`
    pub fn wrap(self, key: &str, attributes: &[&str]) -> Self {
        if self.values.contains_key(key) {
            return self;
        }

        let wrapped: Map<String, Value> = self
            .values
            .into_iter()
            .filter(|(name, _)| attributes.contains(&name.as_str()))
            .collect();

        let mut values = Map::new();
        values.insert(key.to_string(), Value::Object(wrapped));
        Params { values }
    }

    /// Nested parameters under `key`
    /// DOCUMENTATION: absent, null, empty or non-object values are all
    /// reported as a missing parameter (HTTP 400 at the boundary)
    pub fn require(&self, key: &str) -> Result<Params, ApiError> {
        match self.values.get(key) {
            Some(Value::Object(nested)) if !nested.is_empty() => Ok(Params {
                values: nested.clone(),
            }),
            _ => Err(ApiError::ParameterMissing(key.to_string())),
        }
    }

    /// Keep only the allowed keys holding scalar values
    pub fn permit(&self, allowed: &[&str]) -> Params {
        let mut values = Map::new();

        for (key, value) in &self.values {
            if allowed.contains(&key.as_str()) && is_scalar(value) {
                values.insert(key.clone(), value.clone());
            } else {
                log::debug!("Unpermitted parameter: {}", key);
            }
        }

        Params { values }
    }

    /// `None` when the key was not sent, `Some(None)` when it was sent as null
    pub fn text(&self, key: &str) -> Option<Option<String>> {
        self.values.get(key).map(|value| match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
    }

    /// Integers and integer strings; anything else reads as null
    pub fn integer(&self, key: &str) -> Option<Option<i32>> {
        self.values.get(key).map(|value| match value {
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    #[cfg(test)]
    pub fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
