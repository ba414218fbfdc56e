//! Wire types of the open platform.
//!
//! Field names follow the remote JSON schema through serde renames.

mod common;
pub use common::{Code, CommonRequest, Response};

mod logistics;
pub use logistics::{
    SubscribeData, SubscribeRequest, SubscribeResult, SubscribeTrace, TrackInfo, TrackPoint,
    TrackRequest,
};
