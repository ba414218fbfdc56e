use std::fmt::{Debug, Formatter};

use jtexpress_core::utils::Redact;
use serde::Serialize;

/// Credential for the open platform.
///
/// It is immutable once a client is built from it.
#[derive(Clone)]
pub struct Credential {
    /// Account identifier assigned by the open platform, sent in the `apiAccount` header.
    pub api_account: String,
    /// Shared secret appended to every payload before hashing.
    pub private_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(api_account: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            api_account: api_account.into(),
            private_key: private_key.into(),
        }
    }

    /// Check if both parts of the credential are present.
    pub fn is_valid(&self) -> bool {
        !self.api_account.is_empty() && !self.private_key.is_empty()
    }

    /// The account identifier as it appears in request payloads.
    pub fn account_id(&self) -> AccountId {
        AccountId::from(self.api_account.as_str())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_account", &Redact::from(&self.api_account))
            .field("private_key", &Redact::from(&self.private_key))
            .finish()
    }
}

/// Account identifier embedded in request payloads.
///
/// Numeric accounts are sent as JSON numbers, everything else as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AccountId {
    /// Account that parses as a 64-bit integer.
    Numeric(i64),
    /// Any other account identifier.
    Text(String),
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        // Numeric only when it prints back identical to the header value.
        match value.parse::<i64>() {
            Ok(v) if v.to_string() == value => AccountId::Numeric(v),
            _ => AccountId::Text(value.to_string()),
        }
    }
}
