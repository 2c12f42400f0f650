//! Types for private REST API endpoints.

use std::fmt;

use rust_decimal::Decimal;

use crate::rest::params::Params;

/// Sort order for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first (Bitstamp's default).
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Request for user transactions.
#[derive(Debug, Clone, Default)]
pub struct UserTransactionsRequest {
    /// Skip that many transactions.
    pub offset: Option<u32>,
    /// Limit result to that many transactions (max 1000).
    pub limit: Option<u32>,
    /// Sort order.
    pub sort: Option<SortOrder>,
}

impl UserTransactionsRequest {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with("offset", self.offset)
            .with("limit", self.limit)
            .with("sort", self.sort)
    }
}

/// Request to place a limit order.
#[derive(Debug, Clone)]
pub struct LimitOrderRequest {
    /// Amount of the base currency.
    pub amount: Decimal,
    /// Limit price.
    pub price: Decimal,
    /// Price at which a sell order is placed once the buy executes
    /// (or the reverse for a sell).
    pub limit_price: Option<Decimal>,
}

impl LimitOrderRequest {
    /// Create a new limit order request.
    pub fn new(amount: Decimal, price: Decimal) -> Self {
        Self {
            amount,
            price,
            limit_price: None,
        }
    }

    /// Set the follow-up limit price.
    pub fn limit_price(mut self, limit_price: Decimal) -> Self {
        self.limit_price = Some(limit_price);
        self
    }

    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with("amount", Some(self.amount))
            .with("price", Some(self.price))
            .with("limit_price", self.limit_price)
    }
}

/// Request to withdraw bitcoin.
#[derive(Debug, Clone)]
pub struct BitcoinWithdrawalRequest {
    /// Amount to withdraw.
    pub amount: Decimal,
    /// Destination address.
    pub address: String,
    /// Use an instant (blockchain-less) transfer when available.
    pub instant: Option<bool>,
}

impl BitcoinWithdrawalRequest {
    /// Create a new bitcoin withdrawal request.
    pub fn new(amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
            instant: None,
        }
    }

    /// Request an instant transfer.
    pub fn instant(mut self, instant: bool) -> Self {
        self.instant = Some(instant);
        self
    }

    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with("amount", Some(self.amount))
            .with("address", Some(&self.address))
            .with("instant", self.instant.map(u8::from))
    }
}

/// Request to withdraw XRP.
#[derive(Debug, Clone)]
pub struct XrpWithdrawalRequest {
    /// Amount to withdraw.
    pub amount: Decimal,
    /// Destination address.
    pub address: String,
    /// Destination tag.
    pub destination_tag: Option<String>,
}

impl XrpWithdrawalRequest {
    /// Create a new XRP withdrawal request.
    pub fn new(amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
            destination_tag: None,
        }
    }

    /// Set the destination tag.
    pub fn destination_tag(mut self, tag: impl Into<String>) -> Self {
        self.destination_tag = Some(tag.into());
        self
    }

    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with("amount", Some(self.amount))
            .with("address", Some(&self.address))
            .with("destination_tag", self.destination_tag.as_ref())
    }
}

/// Request to withdraw Ripple IOUs.
#[derive(Debug, Clone)]
pub struct RippleWithdrawalRequest {
    /// Amount to withdraw.
    pub amount: Decimal,
    /// Destination address.
    pub address: String,
    /// IOU currency.
    pub currency: String,
}

impl RippleWithdrawalRequest {
    /// Create a new Ripple IOU withdrawal request.
    pub fn new(amount: Decimal, address: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
            currency: currency.into(),
        }
    }

    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with("amount", Some(self.amount))
            .with("address", Some(&self.address))
            .with("currency", Some(&self.currency))
    }
}

/// Request to move funds between the main account and a sub account.
#[derive(Debug, Clone)]
pub struct SubAccountTransferRequest {
    /// Amount to transfer.
    pub amount: Decimal,
    /// Currency to transfer.
    pub currency: String,
    /// Sub account ID; required when transferring from the main account.
    pub sub_account: Option<String>,
}

impl SubAccountTransferRequest {
    /// Create a new transfer request.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            sub_account: None,
        }
    }

    /// Set the sub account.
    pub fn sub_account(mut self, sub_account: impl Into<String>) -> Self {
        self.sub_account = Some(sub_account.into());
        self
    }

    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with("amount", Some(self.amount))
            .with("currency", Some(&self.currency))
            .with("subAccount", self.sub_account.as_ref())
    }
}
