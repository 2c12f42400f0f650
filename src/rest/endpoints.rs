//! Bitstamp REST API endpoint constants and path construction.

/// Default Bitstamp API host.
pub const BITSTAMP_HOST: &str = "www.bitstamp.net";

/// Shape of an endpoint's URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `/api/<action>/`
    Legacy,
    /// `/api/v2/<action>/` or `/api/v2/<action>/<market>/`
    V2,
}

/// Build the URL path of an endpoint.
///
/// The market is ignored for legacy paths.
///
/// ```rust
/// use bitstamp_api_client::rest::{PathStyle, endpoint_path};
///
/// assert_eq!(endpoint_path("balance", Some("btcusd"), PathStyle::V2), "/api/v2/balance/btcusd/");
/// assert_eq!(endpoint_path("balance", None, PathStyle::V2), "/api/v2/balance/");
/// assert_eq!(endpoint_path("cancel_order", None, PathStyle::Legacy), "/api/cancel_order/");
/// ```
pub fn endpoint_path(action: &str, market: Option<&str>, style: PathStyle) -> String {
    match (style, market) {
        (PathStyle::Legacy, _) => format!("/api/{action}/"),
        (PathStyle::V2, Some(market)) => format!("/api/v2/{action}/{market}/"),
        (PathStyle::V2, None) => format!("/api/v2/{action}/"),
    }
}

/// Build the path of a public GET endpoint.
///
/// Endpoints without a market (e.g. `eur_usd`) only exist on the legacy API.
pub fn public_path(action: &str, market: Option<&str>) -> String {
    let style = if market.is_some() {
        PathStyle::V2
    } else {
        PathStyle::Legacy
    };
    endpoint_path(action, market, style)
}

/// Public endpoint actions (no authentication required).
pub mod public {
    /// Recent transactions.
    pub const TRANSACTIONS: &str = "transactions";
    /// Ticker.
    pub const TICKER: &str = "ticker";
    /// Hourly ticker.
    pub const TICKER_HOUR: &str = "ticker_hour";
    /// Order book.
    pub const ORDER_BOOK: &str = "order_book";
    /// EUR/USD conversion rate.
    pub const EUR_USD: &str = "eur_usd";
}

/// Private endpoint actions (authentication required).
pub mod private {
    use super::PathStyle;

    // Account endpoints
    /// Account balance.
    pub const BALANCE: (&str, PathStyle) = ("balance", PathStyle::V2);
    /// User transactions.
    pub const USER_TRANSACTIONS: (&str, PathStyle) = ("user_transactions", PathStyle::V2);

    // Order endpoints
    /// Open orders.
    pub const OPEN_ORDERS: (&str, PathStyle) = ("open_orders", PathStyle::V2);
    /// Order status.
    pub const ORDER_STATUS: (&str, PathStyle) = ("order_status", PathStyle::Legacy);
    /// Cancel order.
    pub const CANCEL_ORDER: (&str, PathStyle) = ("cancel_order", PathStyle::Legacy);
    /// Cancel all orders.
    pub const CANCEL_ALL_ORDERS: (&str, PathStyle) = ("cancel_all_orders", PathStyle::Legacy);
    /// Limit buy order.
    pub const BUY: (&str, PathStyle) = ("buy", PathStyle::V2);
    /// Market buy order.
    pub const BUY_MARKET: (&str, PathStyle) = ("buy/market", PathStyle::V2);
    /// Limit sell order.
    pub const SELL: (&str, PathStyle) = ("sell", PathStyle::V2);
    /// Market sell order.
    pub const SELL_MARKET: (&str, PathStyle) = ("sell/market", PathStyle::V2);

    // Funding endpoints
    /// Withdrawal requests.
    pub const WITHDRAWAL_REQUESTS: (&str, PathStyle) = ("withdrawal_requests", PathStyle::Legacy);
    /// Bitcoin withdrawal.
    pub const BITCOIN_WITHDRAWAL: (&str, PathStyle) = ("bitcoin_withdrawal", PathStyle::Legacy);
    /// XRP withdrawal.
    pub const XRP_WITHDRAWAL: (&str, PathStyle) = ("xrp_withdrawal", PathStyle::Legacy);
    /// Bitcoin deposit address.
    pub const BITCOIN_DEPOSIT_ADDRESS: (&str, PathStyle) =
        ("bitcoin_deposit_address", PathStyle::Legacy);
    /// Unconfirmed bitcoin deposits.
    pub const UNCONFIRMED_BTC: (&str, PathStyle) = ("unconfirmed_btc", PathStyle::Legacy);
    /// Ripple IOU withdrawal.
    pub const RIPPLE_WITHDRAWAL: (&str, PathStyle) = ("ripple_withdrawal", PathStyle::Legacy);
    /// Ripple IOU deposit address.
    pub const RIPPLE_ADDRESS: (&str, PathStyle) = ("ripple_address", PathStyle::Legacy);

    // Sub-account endpoints
    /// Transfer from a sub account to the main account.
    pub const TRANSFER_TO_MAIN: (&str, PathStyle) = ("transfer-to-main", PathStyle::Legacy);
    /// Transfer from the main account to a sub account.
    pub const TRANSFER_FROM_MAIN: (&str, PathStyle) = ("transfer-from-main", PathStyle::Legacy);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert_eq!(public_path("ticker", Some("btcusd")), "/api/v2/ticker/btcusd/");
        assert_eq!(public_path("eur_usd", None), "/api/eur_usd/");
    }

    #[test]
    fn test_private_paths() {
        let (action, style) = private::BUY_MARKET;
        assert_eq!(
            endpoint_path(action, Some("btceur"), style),
            "/api/v2/buy/market/btceur/"
        );

        let (action, style) = private::TRANSFER_TO_MAIN;
        assert_eq!(
            endpoint_path(action, Some("ignored"), style),
            "/api/transfer-to-main/"
        );
    }
}
