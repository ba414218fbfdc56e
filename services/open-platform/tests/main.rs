use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use jtexpress_core::hash::base64_md5;
use jtexpress_core::{Context, ErrorKind, HttpSend, Result};
use jtexpress_open_platform::types::{SubscribeData, TrackInfo};
use jtexpress_open_platform::{Client, Credential};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

const API_ACCOUNT: &str = "178337126125932605";
const PRIVATE_KEY: &str = "a0a1047cce70493c9d5d29704f05d0d9";

/// Snapshot of a request seen by [`CaptureHttpSend`].
#[derive(Debug, Clone)]
struct CapturedRequest {
    method: http::Method,
    uri: http::Uri,
    headers: http::HeaderMap,
    body: Bytes,
}

/// Records every request and answers with a canned response.
#[derive(Debug, Clone)]
struct CaptureHttpSend {
    status: StatusCode,
    body: Bytes,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl CaptureHttpSend {
    fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body: Bytes::from_static(body.as_bytes()),
            requests: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for CaptureHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(CapturedRequest {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });

        let resp = http::Response::builder()
            .status(self.status)
            .body(self.body.clone())?;
        Ok(resp)
    }
}

fn init_client(status: StatusCode, body: &'static str) -> (Client, CaptureHttpSend) {
    let _ = env_logger::builder().is_test(true).try_init();

    let http = CaptureHttpSend::new(status, body);
    let ctx = Context::new().with_http_send(http.clone());
    let client = Client::new(ctx, Credential::new(API_ACCOUNT, PRIVATE_KEY));
    (client, http)
}

/// Decode the form body back into the raw `bizContent` text.
fn biz_content(req: &CapturedRequest) -> String {
    let fields: HashMap<String, String> = form_urlencoded::parse(&req.body)
        .into_owned()
        .collect();
    assert_eq!(fields.len(), 1, "body must carry bizContent only");
    fields["bizContent"].clone()
}

fn header<'a>(req: &'a CapturedRequest, name: &str) -> &'a str {
    req.headers
        .get(name)
        .unwrap_or_else(|| panic!("header {name} must be set"))
        .to_str()
        .unwrap()
}

const TRACK_OK: &str = r#"{
    "code": "1",
    "msg": "success",
    "data": [
        {
            "billCode": "JT123",
            "details": [
                {
                    "scanTime": "2024-01-02 10:00:00",
                    "desc": "快件已揽收",
                    "scanType": "快件揽收",
                    "scanNetworkDetailAddress": "上海市浦东新区"
                }
            ]
        }
    ]
}"#;

#[tokio::test]
async fn test_query_track_request() -> anyhow::Result<()> {
    let (client, http) = init_client(StatusCode::OK, TRACK_OK);

    let resp = client.logistics().query_track("JT123").await?;
    assert!(resp.success);
    assert!(!resp.fail);
    let data: Vec<TrackInfo> = resp.data.unwrap();
    assert_eq!(data[0].bill_code, "JT123");
    assert_eq!(data[0].track_points[0].description, "快件已揽收");

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];

    assert_eq!(req.method, http::Method::POST);
    assert_eq!(
        req.uri.to_string(),
        "https://openapi.jtexpress.com.cn/webopenplatformapi/api/logistics/trace"
    );
    assert_eq!(
        header(req, "content-type"),
        "application/x-www-form-urlencoded"
    );
    assert_eq!(header(req, "apiAccount"), API_ACCOUNT);
    assert!(header(req, "timestamp").parse::<i64>()? > 0);

    let content = biz_content(req);
    assert_eq!(content, r#"{"lang":"zh","timeType":"1","billCodes":"JT123"}"#);
    Ok(())
}

#[tokio::test]
async fn test_digest_covers_transmitted_body() -> anyhow::Result<()> {
    let (client, http) = init_client(StatusCode::OK, r#"{"code":"1","msg":"success"}"#);

    client.logistics().query_track("JT123,JT456").await?;
    client
        .logistics()
        .subscribe("JT123", "1&2&3", "https://example.com/cb?a=1&b=2")
        .await?;

    let requests = http.requests();
    assert_eq!(requests.len(), 2);
    for req in &requests {
        let content = biz_content(req);
        let expected = base64_md5(format!("{content}{PRIVATE_KEY}").as_bytes());
        assert_eq!(header(req, "digest"), expected);
    }
    Ok(())
}

#[test_case("JT123"; "single code")]
#[test_case("JT123,JT456"; "comma separated codes")]
#[tokio::test]
async fn test_query_track_passes_codes_through(codes: &str) -> anyhow::Result<()> {
    let (client, http) = init_client(StatusCode::OK, TRACK_OK);

    client.logistics().query_track(codes).await?;

    let body: Value = serde_json::from_str(&biz_content(&http.requests()[0]))?;
    assert_eq!(body["billCodes"], json!(codes));
    Ok(())
}

#[tokio::test]
async fn test_query_track_with_lang_and_base_url() -> anyhow::Result<()> {
    let (client, http) = init_client(StatusCode::OK, TRACK_OK);
    let client = client
        .with_lang("en")
        .with_base_url("https://uat-openapi.jtexpress.com.cn/");

    client.logistics().query_track("JT123").await?;

    let req = &http.requests()[0];
    assert_eq!(
        req.uri.to_string(),
        "https://uat-openapi.jtexpress.com.cn/webopenplatformapi/api/logistics/trace"
    );
    let body: Value = serde_json::from_str(&biz_content(req))?;
    assert_eq!(body["lang"], "en");
    Ok(())
}

const SUBSCRIBE_OK: &str = r#"{"code":1,"msg":"success","data":"SUCCESS"}"#;

#[tokio::test]
async fn test_subscribe_single() -> anyhow::Result<()> {
    let (client, http) = init_client(StatusCode::OK, SUBSCRIBE_OK);

    let resp = client
        .logistics()
        .subscribe("JT123", "1&2&3", "https://cb")
        .await?;
    assert!(resp.success);
    assert_eq!(resp.data, Some(SubscribeData::Status("SUCCESS".to_string())));

    let req = &http.requests()[0];
    assert_eq!(
        req.uri.to_string(),
        "https://openapi.jtexpress.com.cn/webopenplatformapi/api/trace/subscribe"
    );
    let body: Value = serde_json::from_str(&biz_content(req))?;
    assert_eq!(
        body,
        json!({
            "id": 178337126125932605u64,
            "list": [
                {"traceNode": "1&2&3", "waybillCode": "JT123", "backUrl": "https://cb"}
            ]
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_subscribe_batch() -> anyhow::Result<()> {
    let (client, http) = init_client(StatusCode::OK, SUBSCRIBE_OK);

    client
        .logistics()
        .subscribe_batch(&["A", "B"], "1&2", "https://cb")
        .await?;
    client
        .logistics()
        .subscribe(vec!["A".to_string(), "B".to_string()], "1&2", "https://cb")
        .await?;

    let requests = http.requests();
    assert_eq!(requests.len(), 2);
    for req in &requests {
        let body: Value = serde_json::from_str(&biz_content(req))?;
        assert_eq!(
            body["list"],
            json!([
                {"traceNode": "1&2", "waybillCode": "A", "backUrl": "https://cb"},
                {"traceNode": "1&2", "waybillCode": "B", "backUrl": "https://cb"}
            ])
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_subscribe_with_text_account() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let http = CaptureHttpSend::new(StatusCode::OK, SUBSCRIBE_OK);
    let ctx = Context::new().with_http_send(http.clone());
    let client = Client::new(ctx, Credential::new("jt-account", PRIVATE_KEY));

    client
        .logistics()
        .subscribe("JT123", "1", "https://cb")
        .await?;

    let body: Value = serde_json::from_str(&biz_content(&http.requests()[0]))?;
    assert_eq!(body["id"], json!("jt-account"));
    Ok(())
}

#[tokio::test]
async fn test_validation_happens_before_sending() {
    let (client, http) = init_client(StatusCode::OK, SUBSCRIBE_OK);
    let logistics = client.logistics();

    let errs = vec![
        logistics.query_track("").await.unwrap_err(),
        logistics.subscribe("JT123", "", "https://cb").await.unwrap_err(),
        logistics.subscribe("JT123", "1&2&3", "").await.unwrap_err(),
        logistics.subscribe("", "1&2&3", "https://cb").await.unwrap_err(),
        logistics
            .subscribe(Vec::<String>::new(), "1&2&3", "https://cb")
            .await
            .unwrap_err(),
        logistics
            .subscribe_batch(&["A", ""], "1&2&3", "https://cb")
            .await
            .unwrap_err(),
    ];

    for err in errs {
        assert_eq!(err.kind(), ErrorKind::Validation, "{err}");
        assert!(err.is_local());
    }
    assert!(http.requests().is_empty());
}

#[test_case(r#"{"code":"1","msg":"success","data":"SUCCESS"}"#, true; "string success")]
#[test_case(r#"{"code":1,"msg":"success","data":"SUCCESS"}"#, true; "numeric success")]
#[test_case(r#"{"code":"0","msg":"failed","data":null}"#, false; "string failure")]
#[test_case(r#"{"code":145003052,"msg":"illegal digest"}"#, false; "numeric failure")]
#[tokio::test]
async fn test_response_flags(body: &'static str, success: bool) -> anyhow::Result<()> {
    let (client, _) = init_client(StatusCode::OK, body);

    let resp = client
        .logistics()
        .subscribe("JT123", "1&2&3", "https://cb")
        .await?;
    assert_eq!(resp.success, success);
    assert_eq!(resp.fail, !success);

    let checked = resp.error_for_code();
    assert_eq!(checked.is_ok(), success);
    if let Err(err) = checked {
        assert_eq!(err.kind(), ErrorKind::Api);
    }
    Ok(())
}

#[test_case(StatusCode::INTERNAL_SERVER_ERROR, "internal error"; "server error")]
#[test_case(StatusCode::BAD_GATEWAY, r#"{"code":"1","msg":"success"}"#; "json body is not parsed")]
#[test_case(StatusCode::NOT_FOUND, ""; "empty body")]
#[tokio::test]
async fn test_non_2xx_is_transport_error(status: StatusCode, body: &'static str) {
    let (client, http) = init_client(status, body);

    let err = client.logistics().query_track("JT123").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(status));
    assert_eq!(err.body(), Some(body));
    assert_eq!(http.requests().len(), 1);
}

#[test_case("not json"; "plain text")]
#[test_case(r#"{"msg":"missing code"}"#; "missing code")]
#[test_case(r#"{"code":"1","data":"not a list"}"#; "unexpected data shape")]
#[tokio::test]
async fn test_invalid_body_is_decode_error(body: &'static str) {
    let (client, _) = init_client(StatusCode::OK, body);

    let err = client.logistics().query_track("JT123").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.body(), Some(body));
}

#[tokio::test]
async fn test_generic_post() -> anyhow::Result<()> {
    let (client, http) = init_client(
        StatusCode::OK,
        r#"{"code":"1","msg":"ok","data":{"n":1}}"#,
    );

    let resp: jtexpress_open_platform::Response<Value> = client
        .post(&json!({"custom": true}), "/api/custom/endpoint")
        .await?;
    assert_eq!(resp.data, Some(json!({"n": 1})));

    let req = &http.requests()[0];
    assert_eq!(req.uri.path(), "/webopenplatformapi/api/custom/endpoint");
    assert_eq!(biz_content(req), r#"{"custom":true}"#);
    Ok(())
}

#[tokio::test]
async fn test_unconfigured_transport() {
    let client = Client::new(Context::new(), Credential::new(API_ACCOUNT, PRIVATE_KEY));

    let err = client.logistics().query_track("JT123").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
}

mod live;
