use anyhow::{bail, Result};
use jtexpress::open_platform::types::SubscribeData;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let mut args = std::env::args().skip(1);
    let Some(back_url) = args.next() else {
        bail!("usage: subscribe <back_url> <bill_code>...");
    };
    let bill_codes: Vec<String> = args.collect();

    let client = jtexpress::default_client()?;

    // Nodes 1 to 11 cover the whole delivery lifecycle.
    let resp = client
        .logistics()
        .subscribe_batch(&bill_codes, "1&2&3&4&5&6&7&8&9&10&11", &back_url)
        .await?
        .error_for_code()?;

    match resp.data {
        Some(SubscribeData::Results { list }) => {
            for result in list {
                println!("{}: {}", result.waybill_code, result.is_success);
            }
        }
        Some(SubscribeData::Status(status)) => println!("{status}"),
        None => println!("{}", resp.msg),
    }
    Ok(())
}
