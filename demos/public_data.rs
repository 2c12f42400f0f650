//! Example: Fetching public market data from Bitstamp.
//!
//! This example demonstrates how to fetch publicly available market data
//! without authentication.
//!
//! Run with: cargo run --example public_data

use bitstamp_api_client::rest::BitstampRestClient;
use bitstamp_api_client::rest::public::{OrderBookRequest, TransactionsRequest, TransactionsTime};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a client for public endpoints (no credentials needed)
    let client = BitstampRestClient::new()?;

    println!("=== Ticker ===");
    let ticker = client.ticker("btceur").await?;
    println!("Last: {}, bid: {}, ask: {}", ticker["last"], ticker["bid"], ticker["ask"]);

    println!("\n=== Hourly Ticker ===");
    let ticker_hour = client.ticker_hour("btceur").await?;
    println!("VWAP: {}", ticker_hour["vwap"]);

    println!("\n=== Order Book (top 3) ===");
    let book = client
        .order_book("btcusd", Some(&OrderBookRequest::grouped(1)))
        .await?;
    if let Some(bids) = book["bids"].as_array() {
        for bid in bids.iter().take(3) {
            println!("Bid {} x {}", bid[0], bid[1]);
        }
    }

    println!("\n=== Transactions (last minute) ===");
    let request = TransactionsRequest::new(TransactionsTime::Minute);
    let trades = client.transactions("btceur", Some(&request)).await?;
    if let Some(trades) = trades.as_array() {
        println!("{} trades", trades.len());
    }

    Ok(())
}
