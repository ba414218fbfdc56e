#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use jtexpress_core::*;

pub use jtexpress_open_platform::{BillCodes, Client, Config, Credential, Response};

/// Everything of the open platform, including the wire types.
pub mod open_platform {
    pub use jtexpress_open_platform::*;
}

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_client, default_context};
