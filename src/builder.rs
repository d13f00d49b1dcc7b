//! Builder definitions
//!
//! Fluent accumulator for JSend responses.
//!
//! Setters stage values loosely and never validate (except the legacy
//! string-status path); the single validation gate runs inside
//! [`Response::from_parts`] when [`Builder::build`] is called. `build` borrows
//! the builder, so a failed build leaves it intact for correction and retry.

use serde_json::{Map, Value};

use crate::error::{JsendError, Result};
use crate::response::Response;
use crate::status::Status;

/// Fluent builder for [`Response`]
///
/// Defaults to a `success` response with no data, errors, code, or message.
///
/// ```
/// use jsend::Builder;
/// use serde_json::json;
///
/// let response = Builder::new()
///     .failed()
///     .data(json!({ "email": "is required" }))
///     .build()?;
///
/// assert_eq!(response.status(), "fail");
/// # Ok::<(), jsend::JsendError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    status: Status,
    data: Value,
    errors: Value,
    message: Value,
    code: Value,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            status: Status::Success,
            data: Value::Null,
            errors: Value::Object(Map::new()),
            message: Value::Null,
            code: Value::Null,
        }
    }
}

impl Builder {
    /// Create a new builder with default state
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Status Setters
    // -------------------------------------------------------------------------

    /// Set the status to `success`
    pub fn success(mut self) -> Self {
        self.status = Status::Success;
        self
    }

    /// Set the status to `error`
    pub fn error(mut self) -> Self {
        self.status = Status::Error;
        self
    }

    /// Set the status to `fail`
    pub fn failed(mut self) -> Self {
        self.status = Status::Fail;
        self
    }

    /// Alias for [`Builder::failed`]
    pub fn fail(self) -> Self {
        self.failed()
    }

    /// Set the status from a [`Status`] or one of the strings
    /// `"success"`, `"fail"`, `"error"`
    ///
    /// Legacy entry point kept for string-based callers; prefer the dedicated
    /// [`success`](Builder::success), [`failed`](Builder::failed), and
    /// [`error`](Builder::error) setters. An unrecognized string fails with
    /// [`JsendError::InvalidArgument`]; nothing is assigned on failure.
    pub fn status<S>(mut self, status: S) -> Result<Self>
    where
        S: TryInto<Status>,
        JsendError: From<S::Error>,
    {
        self.status = status.try_into()?;
        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Field Setters (staged, validated at build)
    // -------------------------------------------------------------------------

    /// Replace the staged data wholesale
    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.data = data.into();
        self
    }

    /// Replace the staged errors wholesale
    pub fn errors(mut self, errors: impl Into<Value>) -> Self {
        self.errors = errors.into();
        self
    }

    /// Replace the staged message
    pub fn message(mut self, message: impl Into<Value>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the staged reference code
    pub fn code(mut self, code: impl Into<Value>) -> Self {
        self.code = code.into();
        self
    }

    // -------------------------------------------------------------------------
    // Terminal Operation
    // -------------------------------------------------------------------------

    /// Validate the staged values and construct a [`Response`]
    ///
    /// Fails with whatever error the validation gate raises. The builder is
    /// untouched either way and may be reused.
    pub fn build(&self) -> Result<Response> {
        Response::from_parts(
            Value::String(self.status.as_str().to_string()),
            self.data.clone(),
            self.errors.clone(),
            self.code.clone(),
            self.message.clone(),
        )
    }
}
