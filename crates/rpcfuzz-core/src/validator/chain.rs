use tracing::trace;

use super::Observed;
use super::Validate;
use super::Validator;
use crate::error::ValidationError;

/// Accepts a value if any of its validators accepts it.
///
/// Validators run in order and the first success stops the chain. When every
/// branch fails the result is [`ValidationError::AllFailed`]; branch
/// diagnostics only show up in trace logs. An empty chain always fails.
#[derive(Debug, Clone)]
pub struct Chain {
    validators: Vec<Validator>,
}

impl Chain {
    pub fn new(validators: impl IntoIterator<Item = Validator>) -> Self {
        Self {
            validators: validators.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validate for Chain {
    fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError> {
        for (branch, validator) in self.validators.iter().enumerate() {
            match validator.validate(observed) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    trace!(branch, kind = validator.kind(), error = %err, "Chain branch rejected value");
                }
            }
        }
        Err(ValidationError::AllFailed)
    }

    fn kind(&self) -> &'static str {
        "chain"
    }
}
