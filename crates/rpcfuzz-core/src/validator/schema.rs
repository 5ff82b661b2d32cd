use jsonschema::JSONSchema;
use serde_json::Value;

use super::Observed;
use super::Validate;
use crate::error::ValidationError;

/// Validates a result against a JSON-Schema document.
///
/// The result is encoded back to JSON text and decoded again before
/// validation, so the schema sees exactly what any other validator would
/// have seen. A schema document that does not parse or compile is reported
/// as a validation failure when the validator runs.
#[derive(Debug, Clone)]
pub struct SchemaMatch {
    schema: Result<Value, String>,
}

impl SchemaMatch {
    pub fn new(schema: &str) -> Self {
        Self {
            schema: serde_json::from_str(schema).map_err(|err| err.to_string()),
        }
    }
}

impl Validate for SchemaMatch {
    fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError> {
        let value = observed.as_value().ok_or_else(|| ValidationError::WrongType {
            expected: "JSON value",
            actual: observed.kind(),
        })?;

        let text = serde_json::to_string(value)
            .map_err(|err| ValidationError::Serialization(err.to_string()))?;
        let document: Value = serde_json::from_str(&text)
            .map_err(|err| ValidationError::Serialization(err.to_string()))?;

        let schema = self
            .schema
            .as_ref()
            .map_err(|reason| ValidationError::SchemaUnusable(reason.clone()))?;
        let compiled = JSONSchema::compile(schema)
            .map_err(|err| ValidationError::SchemaUnusable(err.to_string()))?;

        let violations: Vec<String> = match compiled.validate(&document) {
            Ok(()) => return Ok(()),
            Err(errors) => errors.map(|err| err.to_string()).collect(),
        };

        let mut diagnostic = String::new();
        for violation in violations {
            diagnostic.push_str(&violation);
            diagnostic.push('\n');
        }
        Err(ValidationError::SchemaViolation(diagnostic))
    }

    fn kind(&self) -> &'static str {
        "schema"
    }
}
