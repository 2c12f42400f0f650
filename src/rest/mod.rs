//! Bitstamp REST API client.
//!
//! Provides access to the public market data and private account endpoints.
//!
//! Requests flow through one pipeline: the endpoint method builds a
//! [`Params`] set and picks a path, private calls are signed with a fresh
//! nonce, and [`BitstampRestClient`] performs the exchange and classifies
//! the outcome.
//!
//! # Trait-based API
//!
//! The [`BitstampClient`] trait abstracts all REST API operations, so code
//! can be written against a mock implementation in tests.

mod client;
mod endpoints;
mod params;
pub mod private;
pub mod public;
mod traits;

pub use client::{BitstampRestClient, BitstampRestClientBuilder, DEFAULT_TIMEOUT};
pub use endpoints::*;
pub use params::Params;
pub use traits::BitstampClient;
