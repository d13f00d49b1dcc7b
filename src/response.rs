//! Response definitions
//!
//! The immutable, validated JSend result value.
//!
//! All validation runs once, inside [`Response::from_parts`]; a constructed
//! `Response` is thereafter trusted and may be shared freely across threads.
//!
//! ## Serialized Shape
//!
//! ```text
//! {
//!   "status":  "success" | "fail" | "error",   always present
//!   "data":    <object> | null,                always present
//!   "errors":  <object> | null,                always present; empty -> null
//!   "code":    <integer> | <string>,           omitted when absent
//!   "message": <string>                        omitted when absent
//! }
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::builder::Builder;
use crate::error::{JsendError, Result};
use crate::status::Status;

/// Reference code attached to a response, integer or string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Code {
    /// Numeric reference code
    Int(i64),

    /// Symbolic reference code
    Str(String),
}

impl Code {
    fn to_value(&self) -> Value {
        match self {
            Code::Int(n) => Value::from(*n),
            Code::Str(s) => Value::String(s.clone()),
        }
    }
}

impl From<i64> for Code {
    fn from(n: i64) -> Self {
        Code::Int(n)
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Self {
        Code::Str(s.to_string())
    }
}

impl From<String> for Code {
    fn from(s: String) -> Self {
        Code::Str(s)
    }
}

/// A validated JSend response
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Outcome classification
    status: Status,

    /// Response payload (`None` serializes as `null`)
    data: Option<Map<String, Value>>,

    /// Per-field error details (empty serializes as `null`)
    errors: Map<String, Value>,

    /// Optional reference code
    code: Option<Code>,

    /// Optional human-readable message
    message: Option<String>,
}

impl Response {
    /// Create a response from already-typed parts
    ///
    /// Invalid states are unrepresentable here, so no validation is needed.
    pub fn new(
        status: Status,
        data: Option<Map<String, Value>>,
        errors: Map<String, Value>,
        code: Option<Code>,
        message: Option<String>,
    ) -> Self {
        Self {
            status,
            data,
            errors,
            code,
            message,
        }
    }

    /// Create a new response builder
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Validate loosely-typed parts and construct a response
    ///
    /// Runs five checks in order, each failing with its own error variant:
    /// 1. `status` must be one of the strings `"success"`, `"fail"`, `"error"`
    /// 2. `data` must be an object or null
    /// 3. `errors` must be an object (null is rejected)
    /// 4. `code` must be an integer, a string, or null
    /// 5. `message` must be a string or null
    ///
    /// Construction succeeds wholly or fails wholly; no partial response is
    /// ever observable.
    pub fn from_parts(
        status: Value,
        data: Value,
        errors: Value,
        code: Value,
        message: Value,
    ) -> Result<Self> {
        match Self::validate_parts(status, data, errors, code, message) {
            Ok(response) => {
                tracing::trace!("Constructed {} response", response.status);
                Ok(response)
            }
            Err(e) => {
                tracing::debug!("Response validation failed: {}", e);
                Err(e)
            }
        }
    }

    fn validate_parts(
        status: Value,
        data: Value,
        errors: Value,
        code: Value,
        message: Value,
    ) -> Result<Self> {
        let status = match status {
            Value::String(ref s) => s
                .parse::<Status>()
                .map_err(|_| JsendError::InvalidStatus(format!("\"{}\"", s)))?,
            other => return Err(JsendError::InvalidStatus(json_type(&other).to_string())),
        };

        let data = match data {
            Value::Null => None,
            Value::Object(map) => Some(map),
            other => return Err(JsendError::InvalidData(json_type(&other).to_string())),
        };

        let errors = match errors {
            Value::Object(map) => map,
            other => return Err(JsendError::InvalidErrors(json_type(&other).to_string())),
        };

        let code = match code {
            Value::Null => None,
            Value::Number(n) => match n.as_i64() {
                Some(n) => Some(Code::Int(n)),
                None => return Err(JsendError::InvalidCode("a non-integer number".to_string())),
            },
            Value::String(s) => Some(Code::Str(s)),
            other => return Err(JsendError::InvalidCode(json_type(&other).to_string())),
        };

        let message = match message {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => return Err(JsendError::InvalidMessage(json_type(&other).to_string())),
        };

        Ok(Self::new(status, data, errors, code, message))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Status in its lowercase wire form: `"success"`, `"fail"`, or `"error"`
    pub fn status(&self) -> &'static str {
        self.status.as_str()
    }

    /// Response payload, if any
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    /// Error details (possibly empty)
    pub fn errors(&self) -> &Map<String, Value> {
        &self.errors
    }

    /// Reference code, if any
    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    /// Human-readable message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    // -------------------------------------------------------------------------
    // Serialization
    // -------------------------------------------------------------------------

    /// Structured map form of the response
    ///
    /// Keys appear in the fixed order `status, data, errors, code, message`.
    /// `status`, `data`, and `errors` are always present; empty `errors`
    /// normalizes to `null`. `code` and `message` are omitted entirely when
    /// absent, never emitted as `null`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();

        map.insert("status".to_string(), Value::String(self.status().to_string()));

        let data = match &self.data {
            Some(data) => Value::Object(data.clone()),
            None => Value::Null,
        };
        map.insert("data".to_string(), data);

        let errors = if self.errors.is_empty() {
            Value::Null
        } else {
            Value::Object(self.errors.clone())
        };
        map.insert("errors".to_string(), errors);

        if let Some(code) = &self.code {
            map.insert("code".to_string(), code.to_value());
        }

        if let Some(message) = &self.message {
            map.insert("message".to_string(), Value::String(message.clone()));
        }

        map
    }

    /// Compact JSON text of the response
    pub fn to_json(&self) -> String {
        Value::Object(self.to_map()).to_string()
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Value::Object(self.to_map()).serialize(serializer)
    }
}

/// The textual form of a response is its JSON serialization
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// JSON type name for error messages
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
