use serde_json::Value;
use thiserror::Error;

use crate::error_codes::{self, ErrorCategory};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to reach endpoint: {0}")]
    ConnectionFailed(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("RPC error ({code}): {message}")]
    RpcError {
        code: i32,
        message: String,
        data: Option<Value>,
    },

    #[error("Invalid response from endpoint: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// JSON-RPC error code, when the node answered with an error object.
    pub fn code(&self) -> Option<i32> {
        match self {
            ClientError::RpcError { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            ClientError::RpcError { code, .. } => Some(error_codes::category_for_code(*code)),
            ClientError::ConnectionFailed(err) if err.is_timeout() => Some(ErrorCategory::Timeout),
            ClientError::ConnectionFailed(_) | ClientError::HttpStatus { .. } => {
                Some(ErrorCategory::External)
            }
            ClientError::InvalidEndpoint { .. } => Some(ErrorCategory::InvalidInput),
            ClientError::InvalidResponse(_) => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::RpcError { code, .. } => error_codes::is_retryable(*code),
            ClientError::ConnectionFailed(err) => err.is_timeout() || err.is_connect(),
            ClientError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            ClientError::InvalidEndpoint { .. } => Some(
                "Pass a full http:// or https:// URL, e.g. http://localhost:8545".to_string(),
            ),
            ClientError::ConnectionFailed(_) => {
                Some("Check that the node is running and its HTTP RPC is enabled.".to_string())
            }
            ClientError::HttpStatus { status: 401 | 403, .. } => {
                Some("The endpoint requires authentication.".to_string())
            }
            _ => None,
        }
    }
}
