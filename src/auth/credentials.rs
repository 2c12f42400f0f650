//! Credential management for Bitstamp API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "BITSTAMP_API_KEY";
/// Default environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BITSTAMP_API_SECRET";
/// Default environment variable holding the customer ID.
pub const CUSTOMER_ID_VAR: &str = "BITSTAMP_CUSTOMER_ID";

/// API credentials: key, secret and the account's customer ID.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The customer (client) ID of the account
    pub customer_id: String,
    /// The API secret (private, used for signing)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key, secret and customer ID.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            customer_id: customer_id.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Check that the key, secret and customer ID are all non-empty.
    ///
    /// Private endpoints refuse to run with incomplete credentials.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.customer_id.is_empty() && !self.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("customer_id", &self.customer_id)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret, customer_id),
        }
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads `BITSTAMP_API_KEY`, `BITSTAMP_API_SECRET` and
/// `BITSTAMP_CUSTOMER_ID`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if any of the variables is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_VAR, API_SECRET_VAR, CUSTOMER_ID_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if any of the variables is not set.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str, customer_id_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;
        let customer_id = std::env::var(customer_id_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key, api_secret, customer_id),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret", "123456");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(debug_str.contains("123456"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret", "1");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.customer_id, "1");
        assert_eq!(creds.expose_secret(), "secret");
        assert!(creds.is_complete());
    }

    #[test]
    fn test_incomplete_credentials() {
        assert!(!Credentials::new("", "secret", "1").is_complete());
        assert!(!Credentials::new("key", "", "1").is_complete());
        assert!(!Credentials::new("key", "secret", "").is_complete());
    }

    #[test]
    fn test_env_credentials_missing_var() {
        let creds = EnvCredentials::try_from_env_vars(
            "BITSTAMP_TEST_UNSET_KEY",
            "BITSTAMP_TEST_UNSET_SECRET",
            "BITSTAMP_TEST_UNSET_CUSTOMER",
        );
        assert!(creds.is_none());
    }
}
