//! Trait definition for the Bitstamp REST API client.
//!
//! [`BitstampClient`] abstracts the endpoint surface so callers can be
//! written against a mock or a wrapping implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitstamp_api_client::rest::{BitstampClient, BitstampRestClient};
//!
//! async fn last_price<C: BitstampClient>(client: &C) -> Result<(), bitstamp_api_client::BitstampError> {
//!     let ticker = client.ticker("btcusd").await?;
//!     println!("Last: {}", ticker["last"]);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::BitstampError;
use crate::rest::private::{
    BitcoinWithdrawalRequest, LimitOrderRequest, RippleWithdrawalRequest,
    SubAccountTransferRequest, UserTransactionsRequest, XrpWithdrawalRequest,
};
use crate::rest::public::{OrderBookRequest, TransactionsRequest};

/// Trait defining all Bitstamp REST API operations.
///
/// All methods are async and return `Result<serde_json::Value, BitstampError>`.
pub trait BitstampClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get recent transactions for a market.
    fn transactions(
        &self,
        market: &str,
        request: Option<&TransactionsRequest>,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Get the ticker for a market.
    fn ticker(&self, market: &str) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Get the hourly ticker for a market.
    fn ticker_hour(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Get the order book for a market.
    fn order_book(
        &self,
        market: &str,
        request: Option<&OrderBookRequest>,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Get the EUR/USD conversion rate.
    fn eur_usd(&self) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get account balance.
    fn balance(
        &self,
        market: Option<&str>,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Get user transactions.
    fn user_transactions(
        &self,
        market: Option<&str>,
        request: Option<&UserTransactionsRequest>,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Get open orders.
    fn open_orders(
        &self,
        market: Option<&str>,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Get the status of an order.
    fn order_status(&self, id: &str) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Cancel an order.
    fn cancel_order(&self, id: &str) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Cancel all open orders.
    fn cancel_all_orders(&self) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Place a limit buy order.
    fn buy(
        &self,
        market: &str,
        request: &LimitOrderRequest,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Place a market buy order.
    fn buy_market(
        &self,
        market: &str,
        amount: Decimal,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Place a limit sell order.
    fn sell(
        &self,
        market: &str,
        request: &LimitOrderRequest,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Place a market sell order.
    fn sell_market(
        &self,
        market: &str,
        amount: Decimal,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    // ========== Private Endpoints - Funding ==========

    /// Get withdrawal requests.
    fn withdrawal_requests(&self) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Withdraw bitcoin.
    fn bitcoin_withdrawal(
        &self,
        request: &BitcoinWithdrawalRequest,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Withdraw XRP.
    fn xrp_withdrawal(
        &self,
        request: &XrpWithdrawalRequest,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Get the bitcoin deposit address.
    fn bitcoin_deposit_address(&self) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Get unconfirmed bitcoin deposits.
    fn unconfirmed_btc(&self) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Withdraw Ripple IOUs.
    fn ripple_withdrawal(
        &self,
        request: &RippleWithdrawalRequest,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Get the Ripple IOU deposit address.
    fn ripple_address(&self) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    // ========== Private Endpoints - Sub accounts ==========

    /// Transfer funds from a sub account to the main account.
    fn transfer_to_main(
        &self,
        request: &SubAccountTransferRequest,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;

    /// Transfer funds from the main account to a sub account.
    fn transfer_from_main(
        &self,
        request: &SubAccountTransferRequest,
    ) -> impl Future<Output = Result<Value, BitstampError>> + Send;
}
