use anyhow::Result;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let bill_codes = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "JT0000000000001".to_string());

    // Reads JTEXPRESS_API_ACCOUNT and JTEXPRESS_PRIVATE_KEY.
    let client = jtexpress::default_client()?;

    let resp = client.logistics().query_track(&bill_codes).await?;
    info!("query track returned code {} ({})", resp.code, resp.msg);

    let resp = resp.error_for_code()?;
    for info in resp.data.unwrap_or_default() {
        println!("{}", info.bill_code);
        for point in info.track_points {
            println!(
                "  {} [{}] {} {}",
                point.scan_time, point.scan_type, point.description, point.location
            );
        }
    }
    Ok(())
}
