//! Tests against the real open platform.
//!
//! Set `JTEXPRESS_TEST=on` together with `JTEXPRESS_API_ACCOUNT`, `JTEXPRESS_PRIVATE_KEY` and
//! optionally `JTEXPRESS_BASE_URL` (a `.env` file works too) to run them.

use std::env;

use jtexpress_core::{Context, OsEnv, Result};
use jtexpress_http_send_reqwest::ReqwestHttpSend;
use jtexpress_open_platform::{Client, Config};
use log::{debug, warn};

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("JTEXPRESS_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("reqwest client must build");
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(http))
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);

    let client = Client::from_config(ctx, config)
        .expect("env JTEXPRESS_API_ACCOUNT and JTEXPRESS_PRIVATE_KEY must set");
    Some(client)
}

#[tokio::test]
async fn test_live_query_track() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("JTEXPRESS_TEST is not set, skipped");
        return Ok(());
    };

    let bill_code =
        env::var("JTEXPRESS_BILL_CODE").unwrap_or_else(|_| "JT0000000000001".to_string());
    let resp = client.logistics().query_track(&bill_code).await?;
    debug!("query track response: {resp:?}");

    // An unknown waybill still yields a well formed envelope.
    assert_eq!(resp.fail, !resp.success);
    Ok(())
}

#[tokio::test]
async fn test_live_bad_digest_is_rejected() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("JTEXPRESS_TEST is not set, skipped");
        return Ok(());
    };

    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    let client = Client::new(
        ctx,
        jtexpress_open_platform::Credential::new(client.api_account(), "not-the-private-key"),
    )
    .with_base_url(client.base_url());

    let resp = client.logistics().query_track("JT0000000000001").await?;
    debug!("query track response with bad key: {resp:?}");
    assert!(resp.fail);
    Ok(())
}
