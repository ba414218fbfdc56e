use serde::{Deserialize, Serialize};

use super::CommonRequest;
use crate::credential::AccountId;

/// Body of a trace query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    /// Shared query parameters.
    #[serde(flatten)]
    pub common: CommonRequest,
    /// Comma separated waybill numbers.
    pub bill_codes: String,
}

/// Tracking history of one waybill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    /// Waybill number.
    #[serde(default)]
    pub bill_code: String,
    /// Scan events in the order the remote API returns them.
    #[serde(rename = "details", default)]
    pub track_points: Vec<TrackPoint>,
}

/// One scan event of a waybill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPoint {
    /// Scan time, as formatted by the remote API.
    #[serde(default)]
    pub scan_time: String,
    /// Scan type, e.g. `快件揽收`.
    #[serde(default)]
    pub scan_type: String,
    /// Human readable description.
    #[serde(rename = "desc", default)]
    pub description: String,
    /// Detailed address of the scanning site.
    #[serde(rename = "scanNetworkDetailAddress", default)]
    pub location: String,

    /// Name of the scanning site.
    #[serde(rename = "scanNetworkName", default, skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    /// Type of the scanning site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    /// Courier who handled the scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,
    /// Contact of the courier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_contact: Option<String>,
    /// Next stop of the parcel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_stop_name: Option<String>,
    /// Province of the scanning site.
    #[serde(rename = "scanNetworkProvince", default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// City of the scanning site.
    #[serde(rename = "scanNetworkCity", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// District of the scanning site.
    #[serde(rename = "scanNetworkArea", default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

/// Body of a trace subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
    /// Subscribing account.
    pub id: AccountId,
    /// One entry per waybill.
    pub list: Vec<SubscribeTrace>,
}

/// Subscription of one waybill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeTrace {
    /// Trace node to subscribe to, e.g. `1&2&3`.
    pub trace_node: String,
    /// Waybill number.
    pub waybill_code: String,
    /// Callback url the remote API pushes updates to.
    pub back_url: String,
}

/// Payload of a subscription response.
///
/// The remote API either acknowledges with a bare status string or lists a result per waybill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubscribeData {
    /// Per waybill results.
    Results {
        /// Results in request order.
        list: Vec<SubscribeResult>,
    },
    /// Bare acknowledgement, e.g. `SUCCESS`.
    Status(String),
}

/// Result of subscribing one waybill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeResult {
    /// Echo of the subscribing account, a string or a number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    /// Waybill number.
    #[serde(default)]
    pub waybill_code: String,
    /// Subscribed trace node.
    #[serde(default)]
    pub trace_node: String,
    /// Whether the subscription was accepted.
    #[serde(default)]
    pub is_success: bool,
}
