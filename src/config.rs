//! Client configuration loaded from JSON.
//!
//! The format matches the usual `config/<env>.json` file:
//!
//! ```json
//! {
//!     "key": "...",
//!     "secret": "...",
//!     "client_id": "123456",
//!     "timeout": 5000,
//!     "host": "www.bitstamp.net"
//! }
//! ```
//!
//! Every field is optional. Leaving out any of the credential fields gives a
//! client that can only reach public endpoints.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

use crate::auth::Credentials;

/// Construction-time settings for a [`BitstampRestClient`](crate::rest::BitstampRestClient).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// API key
    #[serde(default)]
    pub key: Option<String>,
    /// API secret
    #[serde(default, deserialize_with = "secret_string")]
    pub secret: Option<SecretString>,
    /// Customer ID of the account
    #[serde(default)]
    pub client_id: Option<String>,
    /// Idle timeout in milliseconds
    #[serde(default)]
    pub timeout: Option<u64>,
    /// API host
    #[serde(default)]
    pub host: Option<String>,
}

impl ClientConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The configured timeout, if any.
    ///
    /// A zero timeout counts as unset.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// The credentials, when key, secret and client ID are all set.
    pub fn credentials(&self) -> Option<Credentials> {
        let key = self.key.as_ref()?;
        let secret = self.secret.as_ref()?;
        let client_id = self.client_id.as_ref()?;
        Some(Credentials::new(
            key.clone(),
            secret.expose_secret().to_string(),
            client_id.clone(),
        ))
    }
}

fn secret_string<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = ClientConfig::from_json(
            r#"{"key":"k","secret":"s","client_id":"42","timeout":1500,"host":"example.com"}"#,
        )
        .unwrap();

        assert_eq!(config.timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(config.host.as_deref(), Some("example.com"));
        let creds = config.credentials().unwrap();
        assert_eq!(creds.api_key, "k");
        assert_eq!(creds.customer_id, "42");
        assert_eq!(creds.expose_secret(), "s");
    }

    #[test]
    fn test_partial_config_has_no_credentials() {
        let config = ClientConfig::from_json(r#"{"key":"k","secret":"s"}"#).unwrap();
        assert!(config.credentials().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_zero_timeout_is_unset() {
        let config = ClientConfig::from_json(r#"{"timeout":0}"#).unwrap();
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::from_json(r#"{"secret":"hunter2"}"#).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
