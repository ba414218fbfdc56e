use std::time::Duration;

use anyhow::Result;
use bytes::Bytes;
use jtexpress_core::Context;
use jtexpress_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    // Timeouts live on the reqwest client.
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("jtexpress-example/0.1")
        .build()?;

    println!("Created custom HTTP client with:");
    println!("  - 30 second timeout");
    println!("  - Custom user agent");

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let test_url = "https://httpbin.org/post";
    println!("\nTesting HTTP client with POST {test_url}");

    let req = http::Request::builder()
        .method("POST")
        .uri(test_url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Bytes::from("bizContent=%7B%7D"))?;

    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("\nResponse body:");
            println!("{}", resp.body());
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
