//! Authentication module for Bitstamp API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    API_KEY_VAR, API_SECRET_VAR, CUSTOMER_ID_VAR, Credentials, CredentialsProvider,
    EnvCredentials, StaticCredentials,
};
pub use nonce::{NonceGenerator, NonceProvider};
pub use signature::{AuthParams, sign_request};
