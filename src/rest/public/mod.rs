//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::endpoints::public;
use crate::rest::params::Params;

impl BitstampRestClient {
    /// Get recent transactions for a market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market symbol (e.g., "btcusd").
    /// * `request` - Optional time window.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitstamp_api_client::rest::BitstampRestClient;
    /// use bitstamp_api_client::rest::public::{TransactionsRequest, TransactionsTime};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BitstampRestClient::new()?;
    ///     let request = TransactionsRequest::new(TransactionsTime::Minute);
    ///     let trades = client.transactions("btceur", Some(&request)).await?;
    ///     println!("{trades}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn transactions(
        &self,
        market: &str,
        request: Option<&TransactionsRequest>,
    ) -> Result<Value, BitstampError> {
        let params = request.map(TransactionsRequest::params).unwrap_or_default();
        self.public_get(Some(market), public::TRANSACTIONS, params)
            .await
    }

    /// Get the ticker for a market.
    pub async fn ticker(&self, market: &str) -> Result<Value, BitstampError> {
        self.public_get(Some(market), public::TICKER, Params::new())
            .await
    }

    /// Get the hourly ticker for a market.
    pub async fn ticker_hour(&self, market: &str) -> Result<Value, BitstampError> {
        self.public_get(Some(market), public::TICKER_HOUR, Params::new())
            .await
    }

    /// Get the order book for a market.
    pub async fn order_book(
        &self,
        market: &str,
        request: Option<&OrderBookRequest>,
    ) -> Result<Value, BitstampError> {
        let params = request.map(OrderBookRequest::params).unwrap_or_default();
        self.public_get(Some(market), public::ORDER_BOOK, params)
            .await
    }

    /// Get the EUR/USD conversion rate.
    ///
    /// This endpoint only exists on the legacy API (`/api/eur_usd/`).
    pub async fn eur_usd(&self) -> Result<Value, BitstampError> {
        self.public_get(None, public::EUR_USD, Params::new()).await
    }
}
