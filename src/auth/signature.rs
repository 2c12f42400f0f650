//! HMAC-SHA256 signature generation for Bitstamp API authentication.
//!
//! Bitstamp private endpoints require a signature computed as:
//! ```text
//! HEX_UPPER(HMAC-SHA256(nonce + customer_id + api_key, api_secret))
//! ```
//!
//! The signature is sent in the POST body together with the API key and
//! the nonce, as the `key`, `signature` and `nonce` fields.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BitstampError;

type HmacSha256 = Hmac<Sha256>;

/// Authentication fields for a private request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthParams {
    /// The API key
    pub key: String,
    /// Uppercase hex HMAC-SHA256 signature
    pub signature: String,
    /// The nonce the signature was computed over
    pub nonce: String,
}

impl AuthParams {
    /// The fields in the order they are sent, as `(name, value)` pairs.
    pub fn into_pairs(self) -> [(&'static str, String); 3] {
        [
            ("key", self.key),
            ("signature", self.signature),
            ("nonce", self.nonce),
        ]
    }
}

/// Sign a request for Bitstamp's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the key, secret and customer ID
/// * `nonce` - The nonce value for this request
///
/// # Returns
///
/// The `key`, `signature` and `nonce` fields to merge into the request body,
/// or [`BitstampError::MissingCredentials`] when any credential is empty.
///
/// # Example
///
/// ```rust
/// use bitstamp_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("abc", "secret", "1");
/// let auth = sign_request(&credentials, "1600000000000000")?;
/// assert_eq!(auth.signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(credentials: &Credentials, nonce: &str) -> Result<AuthParams, BitstampError> {
    if !credentials.is_complete() {
        return Err(BitstampError::MissingCredentials);
    }

    // HMAC accepts keys of any length; an empty secret was rejected above.
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|_| BitstampError::MissingCredentials)?;
    hmac.update(nonce.as_bytes());
    hmac.update(credentials.customer_id.as_bytes());
    hmac.update(credentials.api_key.as_bytes());
    let signature = hex::encode_upper(hmac.finalize().into_bytes());

    Ok(AuthParams {
        key: credentials.api_key.clone(),
        signature,
        nonce: nonce.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_signature_vector() {
        let credentials = Credentials::new("abc", "secret", "1");
        let auth = sign_request(&credentials, "1600000000000000").unwrap();

        assert_eq!(
            auth.signature,
            "50C96B597974E25849BA574869AE5C6F3D8EBFAA747FA0799B2C380B046B41F7"
        );
        assert_eq!(auth.key, "abc");
        assert_eq!(auth.nonce, "1600000000000000");
    }

    #[test]
    fn test_signature_is_uppercase_hex() {
        let credentials = Credentials::new("key", "my_secret", "42");
        let auth = sign_request(&credentials, "16000000000000000").unwrap();

        assert_eq!(auth.signature.len(), 64);
        assert!(
            auth.signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );
    }

    #[test]
    fn test_signature_changes_with_nonce() {
        let credentials = Credentials::new("key", "my_secret", "42");

        let sig1 = sign_request(&credentials, "16000000000000000").unwrap();
        let sig2 = sign_request(&credentials, "16000000000000001").unwrap();

        assert_ne!(sig1.signature, sig2.signature);
    }

    #[test]
    fn test_signature_changes_with_customer_id() {
        let sig1 = sign_request(&Credentials::new("key", "my_secret", "42"), "1").unwrap();
        let sig2 = sign_request(&Credentials::new("key", "my_secret", "43"), "1").unwrap();

        assert_ne!(sig1.signature, sig2.signature);
    }

    #[test]
    fn test_incomplete_credentials_rejected() {
        for credentials in [
            Credentials::new("", "secret", "1"),
            Credentials::new("abc", "", "1"),
            Credentials::new("abc", "secret", ""),
        ] {
            let error = sign_request(&credentials, "1600000000000000").unwrap_err();
            assert_eq!(error.kind(), ErrorKind::MissingCredentials);
        }
    }

    #[test]
    fn test_auth_pairs_order() {
        let auth = AuthParams {
            key: "k".to_string(),
            signature: "S".to_string(),
            nonce: "n".to_string(),
        };
        let names: Vec<&str> = auth.into_pairs().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["key", "signature", "nonce"]);
    }
}
