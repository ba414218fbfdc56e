use http::header::{HeaderName, CONTENT_TYPE};
use http::HeaderValue;
use log::debug;

use crate::constants::*;
use crate::sign::{Md5Signer, Sign};
use crate::Credential;
use jtexpress_core::time::{format_timestamp_millis, now, DateTime};
use jtexpress_core::utils::Redact;
use jtexpress_core::Result;

/// RequestSigner attaches the open platform authentication headers to a request.
///
/// The digest covers the exact `bizContent` text carried by the body, so the caller must pass
/// the same string it encodes into the form.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    api_account: String,
    signer: Md5Signer,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer for the given credential.
    pub fn new(credential: &Credential) -> Self {
        Self {
            api_account: credential.api_account.clone(),
            signer: Md5Signer::new(&credential.private_key),
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Insert `Content-Type`, `apiAccount`, `timestamp` and `digest` into `parts`.
    pub fn sign_request(&self, parts: &mut http::request::Parts, biz_content: &str) -> Result<()> {
        let now = self.time.unwrap_or_else(now);
        let digest = self.signer.sign(biz_content);

        parts
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
        parts.headers.insert(
            HeaderName::from_static(API_ACCOUNT),
            self.api_account.parse()?,
        );
        parts.headers.insert(
            HeaderName::from_static(TIMESTAMP),
            format_timestamp_millis(now).parse()?,
        );
        parts.headers.insert(HeaderName::from_static(DIGEST), {
            let mut value: HeaderValue = digest.parse()?;
            value.set_sensitive(true);

            value
        });

        debug!(
            "signed request {} {} for account {:?} at {}",
            parts.method,
            parts.uri,
            Redact::from(&self.api_account),
            now.timestamp_millis()
        );
        Ok(())
    }
}
