use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Semantic type tag of a JSON value.
///
/// Arrays get their own tag even though they are treated as opaque leaves by
/// the differ; only [`ValueType::Object`] is ever descended into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Null,
    Array,
    Object,
    String,
    Number,
    Boolean,
}

impl ValueType {
    /// The lowercase tag used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value into its [`ValueType`].
pub fn classify(value: &Value) -> ValueType {
    match value {
        Value::Null => ValueType::Null,
        Value::Bool(_) => ValueType::Boolean,
        Value::Number(_) => ValueType::Number,
        Value::String(_) => ValueType::String,
        Value::Array(_) => ValueType::Array,
        Value::Object(_) => ValueType::Object,
    }
}

/// Returns `true` only for the empty string `""`. Whitespace is not empty.
pub fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}
