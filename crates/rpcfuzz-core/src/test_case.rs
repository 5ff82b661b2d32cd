use serde_json::Value;

use crate::error::ValidationError;
use crate::validator::Observed;
use crate::validator::Validator;

/// A single conformance check against one RPC method.
///
/// The runner only talks to cases through this trait, so variants with
/// their own setup or generated arguments can be added without touching it.
pub trait RpcTest {
    /// JSON-RPC method name.
    fn method(&self) -> &str;

    /// Positional parameters, sent as-is.
    fn args(&self) -> &[Value];

    fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError>;

    /// Whether a call error is the expected outcome. When set, the error is
    /// what gets validated and a successful call counts as a failure.
    fn expect_error(&self) -> bool;
}

/// A test case made of fixed data: method, arguments, validator and error
/// expectation.
#[derive(Debug, Clone)]
pub struct GenericTest {
    method: String,
    args: Vec<Value>,
    validator: Validator,
    is_error: bool,
}

impl GenericTest {
    pub fn new(method: impl Into<String>, validator: Validator) -> Self {
        Self {
            method: method.into(),
            args: Vec::new(),
            validator,
            is_error: false,
        }
    }

    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }

    pub fn expecting_error(mut self) -> Self {
        self.is_error = true;
        self
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

impl RpcTest for GenericTest {
    fn method(&self) -> &str {
        &self.method
    }

    fn args(&self) -> &[Value] {
        &self.args
    }

    fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError> {
        self.validator.validate(observed)
    }

    fn expect_error(&self) -> bool {
        self.is_error
    }
}
