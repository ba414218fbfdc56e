//! Reqwest-based HTTP transport for the JT Express client.
//!
//! This crate provides `ReqwestHttpSend`, an [`HttpSend`] implementation backed by
//! [`reqwest::Client`].
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use jtexpress_core::Context;
//! use jtexpress_http_send_reqwest::ReqwestHttpSend;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Timeouts belong to the transport: configure them before building the context.
//! let client = reqwest::Client::builder()
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use jtexpress_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// Reqwest based implementation of [`HttpSend`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert http request into reqwest request")
                .with_source(anyhow::Error::new(e))
        })?;

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| {
                Error::transport("failed to send http request").with_source(anyhow::Error::new(e))
            })?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| {
                Error::transport("failed to read http response body")
                    .with_source(anyhow::Error::new(e))
            })?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
