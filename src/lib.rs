//! # Bitstamp Client
//!
//! An async Rust client library for the Bitstamp exchange REST API.
//!
//! ## Features
//!
//! - Public market data: ticker, order book, transactions
//! - Private account endpoints: balance, orders, withdrawals, sub-account transfers
//! - Collision-free nonces even for many requests within one millisecond
//! - HMAC-SHA256 request signing
//! - Idle timeout and typed error classification for every request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitstamp_api_client::rest::BitstampRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitstampRestClient::new()?;
//!     let ticker = client.ticker("btceur").await?;
//!     println!("Ticker: {}", ticker);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;

// Re-export commonly used types at crate root
pub use config::ClientConfig;
pub use error::{BitstampError, ErrorBody, ErrorKind};
pub use rest::{BitstampClient, BitstampRestClient};

/// Result type alias using BitstampError
pub type Result<T> = std::result::Result<T, BitstampError>;
