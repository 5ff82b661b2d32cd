use thiserror::Error;

/// Why an observed value was rejected by a validator.
///
/// The `Display` text is the diagnostic that ends up in the run log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid result type. Expected {expected} but got {actual}")]
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Expected {expected} and got {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("The regex {pattern} failed to match result {value}")]
    NoMatch { pattern: String, value: String },

    #[error("The json document is not valid: {0}")]
    SchemaViolation(String),

    #[error("Unable to run json validation: {0}")]
    SchemaUnusable(String),

    #[error("Unable to marshal result back to json for validation: {0}")]
    Serialization(String),

    #[error("All validations failed")]
    AllFailed,

    #[error("{0}")]
    Custom(String),
}

/// Errors raised while constructing a validator.
#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Invalid validation pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Test case #{index} has an empty method name")]
    EmptyMethod { index: usize },
}
