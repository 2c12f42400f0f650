//! Types for public REST API endpoints.

use std::fmt;

use crate::rest::params::Params;

/// Time window for the transactions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionsTime {
    /// Last minute.
    Minute,
    /// Last hour (Bitstamp's default).
    #[default]
    Hour,
    /// Last day.
    Day,
}

impl TransactionsTime {
    /// The wire value of the window.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

impl fmt::Display for TransactionsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for recent transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionsRequest {
    /// Time window; the server default applies when unset.
    pub time: Option<TransactionsTime>,
}

impl TransactionsRequest {
    /// Create a request for the given window.
    pub fn new(time: TransactionsTime) -> Self {
        Self { time: Some(time) }
    }

    pub(crate) fn params(&self) -> Params {
        Params::new().with("time", self.time)
    }
}

/// Request for the order book.
#[derive(Debug, Clone, Default)]
pub struct OrderBookRequest {
    /// Grouping of orders at the same price: `0` ungrouped, `1` grouped,
    /// `2` ungrouped with order IDs.
    pub group: Option<u8>,
}

impl OrderBookRequest {
    /// Create a request with the given grouping.
    pub fn grouped(group: u8) -> Self {
        Self { group: Some(group) }
    }

    pub(crate) fn params(&self) -> Params {
        Params::new().with("group", self.group)
    }
}
