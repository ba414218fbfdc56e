//! Core components for talking to the JT Express open platform.
//!
//! This crate provides the foundational types shared by the JT Express crates.
//! It carries no service logic of its own: the signing pipeline and the
//! logistics service live in `jtexpress-open-platform`.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Error**: The single error type returned by every fallible operation, tagged with an [`ErrorKind`]
//! - **Utilities**: Hashing, time and redaction helpers used by the signer
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use jtexpress_core::{Context, HttpSend, OsEnv, Result};
//!
//! #[derive(Debug)]
//! struct EchoHttpSend;
//!
//! #[async_trait]
//! impl HttpSend for EchoHttpSend {
//!     async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Ok(http::Response::new(req.into_body()))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(EchoHttpSend).with_env(OsEnv);
//!
//! let req = http::Request::post("https://example.com").body(Bytes::from("ping"))?;
//! let resp = ctx.http_send_as_string(req).await?;
//! assert_eq!(resp.body(), "ping");
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: Digest helpers (base64, MD5)
//! - [`time`]: Time helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
