//! Error types for jsend
//!
//! Provides a unified error type for all operations. Every variant is a
//! caller-input validation failure; nothing here is transient or retryable.

use thiserror::Error;

/// Result type alias using JsendError
pub type Result<T> = std::result::Result<T, JsendError>;

/// Unified error type for jsend operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsendError {
    // -------------------------------------------------------------------------
    // Response Construction Errors
    // -------------------------------------------------------------------------
    #[error("Invalid status: expected \"success\", \"fail\", or \"error\", got {0}")]
    InvalidStatus(String),

    #[error("Invalid data: expected an object or null, got {0}")]
    InvalidData(String),

    #[error("Invalid errors: expected an object, got {0}")]
    InvalidErrors(String),

    #[error("Invalid code: expected an integer or a string, got {0}")]
    InvalidCode(String),

    #[error("Invalid message: expected a string, got {0}")]
    InvalidMessage(String),

    // -------------------------------------------------------------------------
    // Builder Errors
    // -------------------------------------------------------------------------
    #[error("Unable to parse status '{0}'")]
    InvalidArgument(String),
}

// Lets the builder's generic status setter accept `Status` itself, whose
// reflexive TryFrom conversion can never fail.
impl From<std::convert::Infallible> for JsendError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
