use serde_json::Number;
use serde_json::Value;

use super::Observed;
use super::Validate;
use super::json_kind;
use crate::error::ValidationError;

/// A primitive value an exact-match validator compares against.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Expected {
    fn kind(&self) -> &'static str {
        match self {
            Expected::Null => "null",
            Expected::Bool(_) => "boolean",
            Expected::Number(_) => "number",
            Expected::String(_) => "string",
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Expected::Null => Value::Null,
            Expected::Bool(b) => Value::Bool(*b),
            Expected::Number(n) => Value::Number(n.clone()),
            Expected::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<bool> for Expected {
    fn from(value: bool) -> Self {
        Expected::Bool(value)
    }
}

impl From<&str> for Expected {
    fn from(value: &str) -> Self {
        Expected::String(value.to_string())
    }
}

impl From<String> for Expected {
    fn from(value: String) -> Self {
        Expected::String(value)
    }
}

impl From<u64> for Expected {
    fn from(value: u64) -> Self {
        Expected::Number(value.into())
    }
}

impl From<i64> for Expected {
    fn from(value: i64) -> Self {
        Expected::Number(value.into())
    }
}

impl From<()> for Expected {
    fn from(_: ()) -> Self {
        Expected::Null
    }
}

#[derive(Debug, Clone)]
pub struct ExactMatch {
    expected: Value,
    expected_kind: &'static str,
}

impl ExactMatch {
    pub fn new(expected: impl Into<Expected>) -> Self {
        let expected = expected.into();
        Self {
            expected_kind: expected.kind(),
            expected: expected.to_value(),
        }
    }
}

impl Validate for ExactMatch {
    fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError> {
        let value = match observed {
            Observed::Result(value) => *value,
            Observed::Error(_) => {
                return Err(ValidationError::WrongType {
                    expected: self.expected_kind,
                    actual: "error",
                });
            }
        };

        if value.is_object() || value.is_array() {
            return Err(ValidationError::WrongType {
                expected: self.expected_kind,
                actual: json_kind(value),
            });
        }

        if *value != self.expected {
            return Err(ValidationError::Mismatch {
                expected: self.expected.to_string(),
                actual: value.to_string(),
            });
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "exact"
    }
}
