//! Validation strategies applied to RPC call outcomes.
//!
//! Every strategy implements [`Validate`]. A [`Validator`] is the shared,
//! cloneable handle test cases hold; its constructors are the strategy
//! factories:
//!
//! - [`Validator::exact`]: strict equality against a primitive
//! - [`Validator::regex_string`]: regular expression over a string result
//! - [`Validator::error_message`]: regular expression over an error message
//! - [`Validator::json_schema`]: JSON-Schema document over the result
//! - [`Validator::chain`]: first success wins over a list of validators

mod chain;
mod exact;
mod pattern;
mod schema;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationError;
use crate::error::ValidatorError;

pub use chain::Chain;
pub use exact::Expected;
pub use exact::ExactMatch;
pub use pattern::ErrorMessageMatch;
pub use pattern::RegexString;
pub use schema::SchemaMatch;

/// The value handed to a validator: the decoded result of a call, or the
/// error the call produced.
#[derive(Debug, Clone, Copy)]
pub enum Observed<'a> {
    Result(&'a Value),
    Error(&'a (dyn std::error::Error + 'a)),
}

impl<'a> Observed<'a> {
    /// Type name used in "wrong type" diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Observed::Result(value) => json_kind(value),
            Observed::Error(_) => "error",
        }
    }

    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Observed::Result(value) => Some(*value),
            Observed::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&'a (dyn std::error::Error + 'a)> {
        match self {
            Observed::Result(_) => None,
            Observed::Error(err) => Some(*err),
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single validation strategy.
pub trait Validate {
    fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError>;

    /// Short label for logs and `Debug` output.
    fn kind(&self) -> &'static str {
        "custom"
    }
}

/// Cloneable handle to a validation strategy.
#[derive(Clone)]
pub struct Validator {
    inner: Arc<dyn Validate + Send + Sync>,
}

impl Validator {
    pub fn new<V>(strategy: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(strategy),
        }
    }

    /// Succeeds iff the result equals `expected` under strict equality.
    pub fn exact(expected: impl Into<Expected>) -> Self {
        Self::new(ExactMatch::new(expected))
    }

    /// Succeeds iff the result is a string matched anywhere by `pattern`.
    pub fn regex_string(pattern: &str) -> Result<Self, ValidatorError> {
        Ok(Self::new(RegexString::new(pattern)?))
    }

    /// Succeeds iff the call failed with a message matched by `pattern`.
    pub fn error_message(pattern: &str) -> Result<Self, ValidatorError> {
        Ok(Self::new(ErrorMessageMatch::new(pattern)?))
    }

    /// Succeeds iff the re-encoded result satisfies the schema document.
    pub fn json_schema(schema: &str) -> Self {
        Self::new(SchemaMatch::new(schema))
    }

    /// First validator to succeed wins; fails only when all of them fail.
    pub fn chain(validators: impl IntoIterator<Item = Validator>) -> Self {
        Self::new(Chain::new(validators))
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Observed<'_>) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self::new(FnValidator(f))
    }

    pub fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError> {
        self.inner.validate(observed)
    }

    pub fn kind(&self) -> &'static str {
        self.inner.kind()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.kind()).finish()
    }
}

struct FnValidator<F>(F);

impl<F> Validate for FnValidator<F>
where
    F: Fn(&Observed<'_>) -> Result<(), ValidationError>,
{
    fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError> {
        (self.0)(observed)
    }
}
