use std::sync::Arc;

use bytes::Bytes;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::*;
use crate::credential::AccountId;
use crate::logistics::LogisticsService;
use crate::sign_request::RequestSigner;
use crate::types::Response;
use crate::{Config, Credential};
use jtexpress_core::{Context, Error, Result};

/// Client for the JT Express open platform.
///
/// Every call is one signed `POST` through the [`Context`]'s `HttpSend`. The client is cheap to
/// clone and can be shared across tasks.
///
/// ```no_run
/// use jtexpress_core::Context;
/// use jtexpress_open_platform::{Client, Credential};
///
/// # async fn example(ctx: Context) -> jtexpress_core::Result<()> {
/// let client = Client::new(ctx, Credential::new("178337126125932605", "private_key"));
/// let resp = client.logistics().query_track("JT0001").await?;
/// if resp.success {
///     println!("{:?}", resp.data);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    inner: Arc<ClientInner>,
}

#[derive(Debug, Clone)]
struct ClientInner {
    credential: Credential,
    signer: RequestSigner,
    base_url: String,
    lang: String,
}

impl Client {
    /// Create a client against the production endpoint.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            inner: Arc::new(ClientInner {
                signer: RequestSigner::new(&credential),
                credential,
                base_url: DEFAULT_BASE_URL.to_string(),
                lang: DEFAULT_LANG.to_string(),
            }),
        }
    }

    /// Create a client out of a [`Config`].
    ///
    /// The config is used as is, call [`Config::from_env`] first to pick up env values.
    pub fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let mut client = Self::new(ctx, config.credential()?);
        if let Some(base_url) = config.base_url.filter(|v| !v.is_empty()) {
            client = client.with_base_url(base_url);
        }
        if let Some(lang) = config.lang.filter(|v| !v.is_empty()) {
            client = client.with_lang(lang);
        }
        Ok(client)
    }

    /// Override the base url, for example to target a staging environment.
    ///
    /// Trailing slashes are removed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Arc::make_mut(&mut self.inner).base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the language sent with queries.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.inner).lang = lang.into();
        self
    }

    /// Base url requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Language sent with queries.
    pub fn lang(&self) -> &str {
        &self.inner.lang
    }

    /// Account identifier of this client.
    pub fn api_account(&self) -> &str {
        &self.inner.credential.api_account
    }

    /// Account identifier as embedded in request payloads.
    pub fn account_id(&self) -> AccountId {
        self.inner.credential.account_id()
    }

    /// Logistics endpoints.
    pub fn logistics(&self) -> LogisticsService<'_> {
        LogisticsService::new(self)
    }

    /// Sign `data` and post it to `api_path`, e.g. `/api/logistics/trace`.
    ///
    /// The returned response has `success` and `fail` derived from its code; a non-success
    /// code is not an error here, use [`Response::error_for_code`] for that.
    ///
    /// # Errors
    ///
    /// - `Serialization` if `data` can't be represented as JSON.
    /// - `RequestInvalid` if the url or a header value is malformed.
    /// - `Transport` on network failure or a non-2xx status, with status and body attached.
    /// - `Decode` if the body is not a valid response envelope.
    pub async fn post<Req, T>(&self, data: &Req, api_path: &str) -> Result<Response<T>>
    where
        Req: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let biz_content = serde_json::to_string(data)
            .map_err(|e| Error::serialization("failed to serialize request").with_source(e))?;
        let req = self.build_request(&biz_content, api_path)?;

        debug!("sending request to {}", req.uri());
        let resp = self.ctx.http_send(req).await?;
        debug!(
            "received response from {api_path}: status {}, {} bytes",
            resp.status(),
            resp.body().len()
        );

        parse_response(resp)
    }

    fn build_request(&self, biz_content: &str, api_path: &str) -> Result<http::Request<Bytes>> {
        let url = format!("{}{}{}", self.inner.base_url, API_PREFIX, api_path);
        let req = http::Request::post(url).body(Bytes::from(form_body(biz_content)))?;

        let (mut parts, body) = req.into_parts();
        self.inner.signer.sign_request(&mut parts, biz_content)?;
        Ok(http::Request::from_parts(parts, body))
    }
}

/// Encode `biz_content` as the single form field of a request body.
fn form_body(biz_content: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(BIZ_CONTENT, biz_content)
        .finish()
}

fn parse_response<T: DeserializeOwned>(resp: http::Response<Bytes>) -> Result<Response<T>> {
    let (parts, body) = resp.into_parts();
    if !parts.status.is_success() {
        let text = String::from_utf8_lossy(&body).to_string();
        return Err(Error::transport(format!(
            "API request failed with status {}: {text}",
            parts.status.as_u16()
        ))
        .with_status(parts.status)
        .with_body(text));
    }

    let resp: Response<T> = serde_json::from_slice(&body).map_err(|e| {
        Error::decode(format!("failed to parse response: {e}"))
            .with_body(String::from_utf8_lossy(&body))
            .with_source(e)
    })?;
    Ok(resp.derive_flags())
}
