//! Digest computation for the open platform.
use std::fmt::{Debug, Formatter};

use jtexpress_core::hash::base64_md5;
use jtexpress_core::utils::Redact;
use jtexpress_core::{Error, Result};
use serde::Serialize;

/// Sign computes the digest the open platform uses to authenticate a payload.
pub trait Sign: Debug + Send + Sync {
    /// Sign a raw string.
    fn sign(&self, content: &str) -> String;

    /// Serialize `data` into JSON and sign the result.
    ///
    /// Fails with a serialization error if `data` can't be represented as JSON.
    fn sign_struct<T: Serialize + ?Sized>(&self, data: &T) -> Result<String>
    where
        Self: Sized,
    {
        let content = serde_json::to_string(data).map_err(|e| {
            Error::serialization("failed to serialize content to sign").with_source(e)
        })?;
        Ok(self.sign(&content))
    }
}

/// Md5Signer implements the open platform digest: `base64(md5(content + key))`.
///
/// MD5 is what the remote API verifies; it is an authentication tag, not a secure signature.
#[derive(Clone)]
pub struct Md5Signer {
    key: String,
}

impl Md5Signer {
    /// Create a signer with the shared secret.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Sign for Md5Signer {
    fn sign(&self, content: &str) -> String {
        let mut s = String::with_capacity(content.len() + self.key.len());
        s.push_str(content);
        s.push_str(&self.key);
        base64_md5(s.as_bytes())
    }
}

impl Debug for Md5Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Md5Signer")
            .field("key", &Redact::from(&self.key))
            .finish()
    }
}
