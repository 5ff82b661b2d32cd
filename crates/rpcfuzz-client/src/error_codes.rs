//! JSON-RPC 2.0 error codes.
//!
//! - -32700 to -32600: Reserved protocol errors
//! - -32000 to -32099: Implementation-defined server errors

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// Server errors used by execution clients
pub const SERVER_ERROR: i32 = -32000;
pub const LIMIT_EXCEEDED: i32 = -32005;

/// Error category for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Method not exposed by the endpoint
    NotFound,
    /// Malformed request or parameters
    InvalidInput,
    /// Rate limited or otherwise saturated
    Busy,
    /// Error inside the node
    Internal,
    /// Transport or HTTP failure
    External,
    /// Call exceeded its deadline
    Timeout,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::Busy => "busy",
            ErrorCategory::Internal => "internal",
            ErrorCategory::External => "external",
            ErrorCategory::Timeout => "timeout",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns whether an error code represents a transient condition.
pub fn is_retryable(code: i32) -> bool {
    matches!(code, LIMIT_EXCEEDED)
}

/// Returns the error category for a given error code.
pub fn category_for_code(code: i32) -> ErrorCategory {
    match code {
        METHOD_NOT_FOUND => ErrorCategory::NotFound,
        PARSE_ERROR | INVALID_REQUEST | INVALID_PARAMS => ErrorCategory::InvalidInput,
        LIMIT_EXCEEDED => ErrorCategory::Busy,
        _ => ErrorCategory::Internal,
    }
}
