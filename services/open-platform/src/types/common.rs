use std::fmt;

use jtexpress_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::constants::SUCCESS_CODE;

/// Parameters shared by query requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonRequest {
    /// Response language, `zh` by default.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lang: String,
    /// Time type selector.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time_type: String,
}

/// Status code of a response.
///
/// Depending on the endpoint the remote API sends it as a string or as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Code {
    /// Numeric code, e.g. `1`.
    Number(i64),
    /// String code, e.g. `"1"`.
    Text(String),
}

impl Code {
    /// Check if this code is the success sentinel, `"1"` or `1`.
    pub fn is_success(&self) -> bool {
        match self {
            Code::Number(n) => *n == 1,
            Code::Text(s) => s == SUCCESS_CODE,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Number(n) => write!(f, "{n}"),
            Code::Text(s) => f.write_str(s),
        }
    }
}

/// Response envelope returned by every endpoint.
///
/// `success` and `fail` are never read from the wire, they are derived from `code` once the
/// body has been parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    /// Status code.
    pub code: Code,
    /// Human readable message.
    #[serde(default)]
    pub msg: String,
    /// Endpoint specific payload.
    pub data: Option<T>,
    /// Whether `code` is the success sentinel.
    #[serde(skip_deserializing)]
    pub success: bool,
    /// Negation of `success`.
    #[serde(skip_deserializing)]
    pub fail: bool,
}

impl<T> Response<T> {
    pub(crate) fn derive_flags(mut self) -> Self {
        self.success = self.code.is_success();
        self.fail = !self.success;
        self
    }

    /// Turn a non-success response into an [`ErrorKind::Api`](jtexpress_core::ErrorKind::Api) error.
    pub fn error_for_code(self) -> Result<Self> {
        if self.code.is_success() {
            Ok(self)
        } else {
            Err(Error::api(&self.code, &self.msg))
        }
    }
}
