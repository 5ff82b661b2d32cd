use regex::Regex;

use super::Observed;
use super::Validate;
use crate::error::ValidationError;
use crate::error::ValidatorError;

fn compile(pattern: &str) -> Result<Regex, ValidatorError> {
    Regex::new(pattern).map_err(|source| ValidatorError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Matches a string result against a regular expression (unanchored unless
/// the pattern anchors itself).
#[derive(Debug, Clone)]
pub struct RegexString {
    regex: Regex,
}

impl RegexString {
    pub fn new(pattern: &str) -> Result<Self, ValidatorError> {
        Ok(Self {
            regex: compile(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for RegexString {
    fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError> {
        let text = observed
            .as_value()
            .and_then(|value| value.as_str())
            .ok_or_else(|| ValidationError::WrongType {
                expected: "string",
                actual: observed.kind(),
            })?;

        if !self.regex.is_match(text) {
            return Err(ValidationError::NoMatch {
                pattern: self.pattern().to_string(),
                value: text.to_string(),
            });
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "regex"
    }
}

/// Matches the message of an error returned by the call.
#[derive(Debug, Clone)]
pub struct ErrorMessageMatch {
    regex: Regex,
}

impl ErrorMessageMatch {
    pub fn new(pattern: &str) -> Result<Self, ValidatorError> {
        Ok(Self {
            regex: compile(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for ErrorMessageMatch {
    fn validate(&self, observed: &Observed<'_>) -> Result<(), ValidationError> {
        let err = observed.as_error().ok_or_else(|| ValidationError::WrongType {
            expected: "error",
            actual: observed.kind(),
        })?;

        let message = err.to_string();
        if !self.regex.is_match(&message) {
            return Err(ValidationError::NoMatch {
                pattern: self.pattern().to_string(),
                value: message,
            });
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "error"
    }
}
