use std::fmt::{self, Display, Formatter};

use serde_json::Value;

#[derive(Debug, thiserror::Error, Copy, Clone, Eq, PartialEq)]
pub enum DeltaError {
    #[error("{side} document must be a JSON object, found {found}")]
    NotAnObject { side: Side, found: ValueKind },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Side {
    Original,
    Updated,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::Original => f.write_str("original"),
            Side::Updated => f.write_str("updated"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "a boolean",
            ValueKind::Number => "a number",
            ValueKind::String => "a string",
            ValueKind::Array => "an array",
            ValueKind::Object => "an object",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn message() {
        let err = DeltaError::NotAnObject {
            side: Side::Updated,
            found: ValueKind::of(&json!([1, 2])),
        };
        assert_eq!(
            err.to_string(),
            "updated document must be a JSON object, found an array"
        );
    }
}
