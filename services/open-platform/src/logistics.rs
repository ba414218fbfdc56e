use log::debug;

use crate::constants::*;
use crate::credential::AccountId;
use crate::types::{
    CommonRequest, Response, SubscribeData, SubscribeRequest, SubscribeTrace, TrackInfo,
    TrackRequest,
};
use crate::Client;
use jtexpress_core::{Error, Result};

/// Waybill numbers accepted by [`LogisticsService::subscribe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillCodes {
    /// One waybill number.
    Single(String),
    /// Several waybill numbers, one subscription entry each.
    List(Vec<String>),
}

impl BillCodes {
    fn into_vec(self) -> Result<Vec<String>> {
        match self {
            BillCodes::Single(code) => {
                if code.is_empty() {
                    return Err(Error::validation("bill code cannot be empty"));
                }
                Ok(vec![code])
            }
            BillCodes::List(codes) => {
                if codes.is_empty() {
                    return Err(Error::validation("bill codes list cannot be empty"));
                }
                if let Some(idx) = codes.iter().position(|v| v.is_empty()) {
                    return Err(Error::validation(format!(
                        "bill code at index {idx} cannot be empty"
                    )));
                }
                Ok(codes)
            }
        }
    }
}

impl From<&str> for BillCodes {
    fn from(value: &str) -> Self {
        BillCodes::Single(value.to_string())
    }
}

impl From<String> for BillCodes {
    fn from(value: String) -> Self {
        BillCodes::Single(value)
    }
}

impl From<Vec<String>> for BillCodes {
    fn from(value: Vec<String>) -> Self {
        BillCodes::List(value)
    }
}

impl From<Vec<&str>> for BillCodes {
    fn from(value: Vec<&str>) -> Self {
        BillCodes::List(value.into_iter().map(String::from).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for BillCodes {
    fn from(value: &[S]) -> Self {
        BillCodes::List(value.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for BillCodes {
    fn from(value: [S; N]) -> Self {
        BillCodes::List(value.iter().map(|v| v.as_ref().to_string()).collect())
    }
}

/// Tracking queries and subscriptions.
#[derive(Debug, Clone, Copy)]
pub struct LogisticsService<'a> {
    client: &'a Client,
}

impl<'a> LogisticsService<'a> {
    /// Create the service on top of `client`.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Query the tracking history of one or more waybills.
    ///
    /// `bill_codes` is sent as is, so several waybills can be queried at once with a comma
    /// separated list like `JT123,JT456`.
    pub async fn query_track(&self, bill_codes: &str) -> Result<Response<Vec<TrackInfo>>> {
        if bill_codes.is_empty() {
            return Err(Error::validation("bill codes cannot be empty"));
        }

        let req = TrackRequest {
            common: CommonRequest {
                lang: self.client.lang().to_string(),
                time_type: TIME_TYPE.to_string(),
            },
            bill_codes: bill_codes.to_string(),
        };
        debug!("querying track of {bill_codes}");
        self.client.post(&req, TRACE_PATH).await
    }

    /// Subscribe to track updates of one waybill or a list of waybills.
    ///
    /// Updates for `trace_node` are pushed to `back_url`.
    pub async fn subscribe(
        &self,
        bill_codes: impl Into<BillCodes>,
        trace_node: &str,
        back_url: &str,
    ) -> Result<Response<SubscribeData>> {
        validate_subscription(trace_node, back_url)?;
        let codes = bill_codes.into().into_vec()?;

        let req = build_subscribe_request(self.client.account_id(), codes, trace_node, back_url);
        debug!("subscribing {} waybills to trace node {trace_node}", req.list.len());
        self.client.post(&req, SUBSCRIBE_PATH).await
    }

    /// Subscribe to track updates of a list of waybills.
    pub async fn subscribe_batch<S: AsRef<str>>(
        &self,
        bill_codes: &[S],
        trace_node: &str,
        back_url: &str,
    ) -> Result<Response<SubscribeData>> {
        self.subscribe(BillCodes::from(bill_codes), trace_node, back_url)
            .await
    }
}

fn validate_subscription(trace_node: &str, back_url: &str) -> Result<()> {
    if trace_node.is_empty() {
        return Err(Error::validation("trace node cannot be empty"));
    }
    if back_url.is_empty() {
        return Err(Error::validation("back url cannot be empty"));
    }
    Ok(())
}

fn build_subscribe_request(
    id: AccountId,
    codes: Vec<String>,
    trace_node: &str,
    back_url: &str,
) -> SubscribeRequest {
    SubscribeRequest {
        id,
        list: codes
            .into_iter()
            .map(|waybill_code| SubscribeTrace {
                trace_node: trace_node.to_string(),
                waybill_code,
                back_url: back_url.to_string(),
            })
            .collect(),
    }
}
