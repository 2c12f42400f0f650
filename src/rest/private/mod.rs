//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Every call fails with [`BitstampError::MissingCredentials`] before any
//! network I/O when the key, secret or customer ID is missing.

mod types;

pub use types::*;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::endpoints::{PathStyle, private};
use crate::rest::params::Params;

impl BitstampRestClient {
    async fn call(
        &self,
        endpoint: (&str, PathStyle),
        market: Option<&str>,
        params: Params,
    ) -> Result<Value, BitstampError> {
        let (action, style) = endpoint;
        self.private_post(market, action, params, style).await
    }

    // ========== Account ==========

    /// Get account balance.
    ///
    /// Returns the balances of all currencies, or of one market's currencies
    /// when a market is given.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitstamp_api_client::rest::BitstampRestClient;
    /// use bitstamp_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret", "123456"));
    ///     let client = BitstampRestClient::builder().credentials(credentials).build()?;
    ///
    ///     let balance = client.balance(Some("btcusd")).await?;
    ///     println!("BTC available: {}", balance["btc_available"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn balance(&self, market: Option<&str>) -> Result<Value, BitstampError> {
        self.call(private::BALANCE, market, Params::new()).await
    }

    /// Get user transactions.
    pub async fn user_transactions(
        &self,
        market: Option<&str>,
        request: Option<&UserTransactionsRequest>,
    ) -> Result<Value, BitstampError> {
        let params = request
            .map(UserTransactionsRequest::params)
            .unwrap_or_default();
        self.call(private::USER_TRANSACTIONS, market, params).await
    }

    // ========== Orders ==========

    /// Get open orders, optionally for one market.
    pub async fn open_orders(&self, market: Option<&str>) -> Result<Value, BitstampError> {
        self.call(private::OPEN_ORDERS, market, Params::new()).await
    }

    /// Get the status of an order.
    pub async fn order_status(&self, id: &str) -> Result<Value, BitstampError> {
        let params = Params::new().with("id", Some(id));
        self.call(private::ORDER_STATUS, None, params).await
    }

    /// Cancel an order.
    pub async fn cancel_order(&self, id: &str) -> Result<Value, BitstampError> {
        let params = Params::new().with("id", Some(id));
        self.call(private::CANCEL_ORDER, None, params).await
    }

    /// Cancel all open orders.
    pub async fn cancel_all_orders(&self) -> Result<Value, BitstampError> {
        self.call(private::CANCEL_ALL_ORDERS, None, Params::new())
            .await
    }

    /// Place a limit buy order.
    pub async fn buy(
        &self,
        market: &str,
        request: &LimitOrderRequest,
    ) -> Result<Value, BitstampError> {
        self.call(private::BUY, Some(market), request.params()).await
    }

    /// Place a market buy order.
    pub async fn buy_market(&self, market: &str, amount: Decimal) -> Result<Value, BitstampError> {
        let params = Params::new().with("amount", Some(amount));
        self.call(private::BUY_MARKET, Some(market), params).await
    }

    /// Place a limit sell order.
    pub async fn sell(
        &self,
        market: &str,
        request: &LimitOrderRequest,
    ) -> Result<Value, BitstampError> {
        self.call(private::SELL, Some(market), request.params()).await
    }

    /// Place a market sell order.
    pub async fn sell_market(&self, market: &str, amount: Decimal) -> Result<Value, BitstampError> {
        let params = Params::new().with("amount", Some(amount));
        self.call(private::SELL_MARKET, Some(market), params).await
    }

    // ========== Funding ==========

    /// Get withdrawal requests.
    pub async fn withdrawal_requests(&self) -> Result<Value, BitstampError> {
        self.call(private::WITHDRAWAL_REQUESTS, None, Params::new())
            .await
    }

    /// Withdraw bitcoin.
    pub async fn bitcoin_withdrawal(
        &self,
        request: &BitcoinWithdrawalRequest,
    ) -> Result<Value, BitstampError> {
        self.call(private::BITCOIN_WITHDRAWAL, None, request.params())
            .await
    }

    /// Withdraw XRP.
    pub async fn xrp_withdrawal(
        &self,
        request: &XrpWithdrawalRequest,
    ) -> Result<Value, BitstampError> {
        self.call(private::XRP_WITHDRAWAL, None, request.params())
            .await
    }

    /// Get the bitcoin deposit address.
    pub async fn bitcoin_deposit_address(&self) -> Result<Value, BitstampError> {
        self.call(private::BITCOIN_DEPOSIT_ADDRESS, None, Params::new())
            .await
    }

    /// Get unconfirmed bitcoin deposits.
    pub async fn unconfirmed_btc(&self) -> Result<Value, BitstampError> {
        self.call(private::UNCONFIRMED_BTC, None, Params::new())
            .await
    }

    /// Withdraw Ripple IOUs.
    pub async fn ripple_withdrawal(
        &self,
        request: &RippleWithdrawalRequest,
    ) -> Result<Value, BitstampError> {
        self.call(private::RIPPLE_WITHDRAWAL, None, request.params())
            .await
    }

    /// Get the Ripple IOU deposit address.
    pub async fn ripple_address(&self) -> Result<Value, BitstampError> {
        self.call(private::RIPPLE_ADDRESS, None, Params::new())
            .await
    }

    // ========== Sub accounts ==========

    /// Transfer funds from a sub account to the main account.
    pub async fn transfer_to_main(
        &self,
        request: &SubAccountTransferRequest,
    ) -> Result<Value, BitstampError> {
        self.call(private::TRANSFER_TO_MAIN, None, request.params())
            .await
    }

    /// Transfer funds from the main account to a sub account.
    pub async fn transfer_from_main(
        &self,
        request: &SubAccountTransferRequest,
    ) -> Result<Value, BitstampError> {
        self.call(private::TRANSFER_FROM_MAIN, None, request.params())
            .await
    }
}
