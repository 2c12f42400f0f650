//! Example: Querying private account data.
//!
//! Reads credentials from a JSON config file (`config/dev.json` by default,
//! or the path given as the first argument):
//!
//! ```json
//! { "key": "...", "secret": "...", "client_id": "123456", "timeout": 5000 }
//! ```
//!
//! Run with: cargo run --example private_account -- config/dev.json

use bitstamp_api_client::rest::BitstampRestClient;
use bitstamp_api_client::rest::private::{SortOrder, UserTransactionsRequest};
use bitstamp_api_client::{BitstampError, ClientConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/dev.json".to_string());
    let config = match std::fs::read_to_string(&path) {
        Ok(json) => ClientConfig::from_json(&json)?,
        Err(e) => {
            eprintln!("Could not read {path}: {e}");
            eprintln!("Create it with your key, secret and client_id.");
            return Ok(());
        }
    };

    let client = BitstampRestClient::builder().config(config).build()?;

    println!("=== Balance ===");
    match client.balance(None).await {
        Ok(balance) => println!("{balance:#}"),
        Err(BitstampError::MissingCredentials) => {
            eprintln!("Config is missing key, secret or client_id");
            return Ok(());
        }
        Err(BitstampError::HttpStatus { status, body }) => {
            eprintln!("Bitstamp rejected the request ({status}): {body}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    println!("\n=== Recent Transactions ===");
    let request = UserTransactionsRequest {
        limit: Some(10),
        sort: Some(SortOrder::Desc),
        ..Default::default()
    };
    let transactions = client.user_transactions(Some("btceur"), Some(&request)).await?;
    println!("{transactions:#}");

    println!("\n=== Open Orders ===");
    let orders = client.open_orders(None).await?;
    println!("{orders:#}");

    Ok(())
}
