//! Step invocation input.
//!
//! The host parses a free-text or structured invocation against a step's
//! declared expression and field schema, then hands the step a flat
//! key/value record. [`StepInput`] wraps that record and provides typed,
//! non-panicking accessors.

use serde_json::{Map, Value};

/// Immutable record of one step invocation's parameters.
#[derive(Debug, Clone, Default)]
pub struct StepInput {
    data: Map<String, Value>,
}

impl StepInput {
    /// Wrap an already-parsed parameter map.
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Build an input from any JSON value. Non-object values produce an
    /// empty input, matching a host that delivered no step data.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(data) => Self { data },
            _ => Self::default(),
        }
    }

    /// An input with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Raw value for a key.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Whether a key is present.
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// String form of a scalar value. Strings are returned verbatim;
    /// numbers and booleans render to their display form. Missing keys
    /// and non-scalar values read as `None`.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.data.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Integer form of a value: a JSON integer, or a string that parses
    /// as one. Anything else reads as `None`.
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.data.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
