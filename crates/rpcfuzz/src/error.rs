//! Application errors with exit codes and suggestions.
//!
//! Setup errors abort the run before any case executes. Exit codes follow
//! UNIX sysexits.h where a category applies.

use rpcfuzz_client::ClientError;
use rpcfuzz_client::error_codes::ErrorCategory;
use rpcfuzz_core::RegistryError;
use rpcfuzz_core::ValidatorError;
use thiserror::Error;

use crate::account::AccountError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load private key: {0}")]
    InvalidKey(#[source] AccountError),

    #[error("Invalid contract address: {0}")]
    InvalidContractAddress(#[source] AccountError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Failed to build test catalog: {0}")]
    Validator(#[from] ValidatorError),

    #[error("Failed to build test catalog: {0}")]
    Registry(#[from] RegistryError),

    #[error("{failed} of {total} tests failed")]
    TestsFailed { failed: usize, total: usize },
}

impl AppError {
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            AppError::InvalidKey(_) | AppError::InvalidContractAddress(_) => {
                Some(ErrorCategory::InvalidInput)
            }
            AppError::Client(err) => err.category(),
            AppError::Validator(_) | AppError::Registry(_) | AppError::TestsFailed { .. } => None,
        }
    }

    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            AppError::InvalidKey(_) => Some(
                "Pass a 32-byte hex secp256k1 key with --private-key (0x prefix optional)."
                    .to_string(),
            ),
            AppError::InvalidContractAddress(_) => Some(
                "Pass the deployed test contract as 0x followed by 40 hex digits.".to_string(),
            ),
            AppError::Client(err) => err.suggestion(),
            AppError::TestsFailed { .. } => {
                Some("Re-run with --verbose to see every call and its result.".to_string())
            }
            AppError::Validator(_) | AppError::Registry(_) => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Client(err) if err.is_retryable())
    }

    /// Converts to UNIX sysexits.h-compliant exit code.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            Some(ErrorCategory::InvalidInput) => 64, // EX_USAGE
            Some(ErrorCategory::NotFound) => 69,     // EX_UNAVAILABLE
            Some(ErrorCategory::Busy) => 73,         // EX_CANTCREAT
            Some(ErrorCategory::External) => 74,     // EX_IOERR
            Some(ErrorCategory::Internal) => 74,     // EX_IOERR
            Some(ErrorCategory::Timeout) => 75,      // EX_TEMPFAIL
            None => 1,
        }
    }
}
