//! JT Express open platform client.
//!
//! This crate signs and sends requests to the JT Express open platform, and exposes the
//! logistics endpoints (track query and track subscription) on top of it.
//!
//! ## Overview
//!
//! Every call serializes its payload into JSON, signs it with
//! `base64(md5(json + private_key))` and posts it as the `bizContent` form field with the
//! `apiAccount`, `timestamp` and `digest` headers. The HTTP transport is provided by the
//! [`Context`](jtexpress_core::Context), so tests can intercept requests and production code
//! can use `jtexpress-http-send-reqwest`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use jtexpress_core::{Context, OsEnv};
//! use jtexpress_http_send_reqwest::ReqwestHttpSend;
//! use jtexpress_open_platform::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> jtexpress_core::Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     // Reads JTEXPRESS_API_ACCOUNT and JTEXPRESS_PRIVATE_KEY.
//!     let config = Config::new().from_env(&ctx);
//!     let client = Client::from_config(ctx, config)?;
//!
//!     let resp = client.logistics().query_track("JT0001,JT0002").await?;
//!     for info in resp.error_for_code()?.data.unwrap_or_default() {
//!         println!("{}: {} scans", info.bill_code, info.track_points.len());
//!     }
//!
//!     client
//!         .logistics()
//!         .subscribe_batch(&["JT0001", "JT0002"], "1&2&3", "https://example.com/callback")
//!         .await?
//!         .error_for_code()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```bash
//! export JTEXPRESS_API_ACCOUNT=178337126125932605
//! export JTEXPRESS_PRIVATE_KEY=your-private-key
//! # Optional
//! export JTEXPRESS_BASE_URL=https://uat-openapi.jtexpress.com.cn
//! export JTEXPRESS_LANG=en
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::{AccountId, Credential};

mod sign;
pub use sign::{Md5Signer, Sign};

mod sign_request;
pub use sign_request::RequestSigner;

mod client;
pub use client::Client;

mod logistics;
pub use logistics::{BillCodes, LogisticsService};

pub mod types;
pub use types::Response;
