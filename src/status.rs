//! Status definitions
//!
//! The three-way outcome classification of a JSend response. The enum is the
//! only internal representation; the lowercase strings `"success"`, `"fail"`,
//! and `"error"` exist purely at the serialization boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JsendError;

/// JSend response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The request succeeded; payload lives in `data`
    Success,

    /// The request was rejected (e.g. invalid input); details live in `data`
    Fail,

    /// The request failed due to a server-side problem; see `message`/`code`
    Error,
}

impl Status {
    /// Lowercase wire form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Fail => "fail",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = JsendError;

    /// Parse one of the three wire strings
    ///
    /// Anything outside the set fails with [`JsendError::InvalidArgument`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Status::Success),
            "fail" => Ok(Status::Fail),
            "error" => Ok(Status::Error),
            _ => Err(JsendError::InvalidArgument(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = JsendError;

    fn try_from(s: &str) -> Result<Self, JsendError> {
        s.parse()
    }
}

impl TryFrom<String> for Status {
    type Error = JsendError;

    fn try_from(s: String) -> Result<Self, JsendError> {
        s.parse()
    }
}
