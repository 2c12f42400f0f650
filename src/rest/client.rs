//! Bitstamp REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::auth::{
    AuthParams, CredentialsProvider, NonceGenerator, NonceProvider, StaticCredentials,
    sign_request,
};
use crate::config::ClientConfig;
use crate::error::{BitstampError, ErrorBody};
use crate::rest::endpoints::{BITSTAMP_HOST, PathStyle, endpoint_path, public_path};
use crate::rest::params::Params;
use crate::rest::private::{
    BitcoinWithdrawalRequest, LimitOrderRequest, RippleWithdrawalRequest,
    SubAccountTransferRequest, UserTransactionsRequest, XrpWithdrawalRequest,
};
use crate::rest::public::{OrderBookRequest, TransactionsRequest};
use crate::rest::traits::BitstampClient;

/// Default idle timeout for a request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The Bitstamp REST API client.
///
/// This client provides access to the public market data endpoints and,
/// when credentials are configured, the private account endpoints.
/// It signs private requests, enforces an idle timeout and classifies every
/// failure into a [`BitstampError`]. Nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use bitstamp_api_client::rest::BitstampRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BitstampRestClient::new()?;
///
///     let ticker = client.ticker("btcusd").await?;
///     println!("Last price: {}", ticker["last"]);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use bitstamp_api_client::rest::BitstampRestClient;
/// use bitstamp_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret", "123456"));
///     let client = BitstampRestClient::builder()
///         .credentials(credentials)
///         .build()?;
///
///     let balance = client.balance(None).await?;
///     println!("Balance: {balance}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitstampRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    timeout: Duration,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl BitstampRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BitstampRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Result<Self, BitstampError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BitstampRestClientBuilder {
        BitstampRestClientBuilder::new()
    }

    /// Check if credentials are configured.
    ///
    /// Configured credentials may still be incomplete; private calls check
    /// completeness before doing anything else.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// The idle timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Make a public GET request.
    ///
    /// The path is `/api/v2/<action>/<market>/` when a market is given and
    /// `/api/<action>/` otherwise. Unset parameters are dropped, the rest is
    /// appended as a query string.
    pub async fn public_get(
        &self,
        market: Option<&str>,
        action: &str,
        params: Params,
    ) -> Result<Value, BitstampError> {
        let query = params.encode()?;
        let mut path = public_path(action, market);
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }
        self.execute(Method::GET, &path, None).await
    }

    /// Make an authenticated POST request.
    ///
    /// The generated `key`, `signature` and `nonce` fields are merged first
    /// and `params` on top of them, so a caller parameter with one of those
    /// names replaces the generated value.
    pub async fn private_post(
        &self,
        market: Option<&str>,
        action: &str,
        params: Params,
        style: PathStyle,
    ) -> Result<Value, BitstampError> {
        let credentials = self
            .credentials
            .as_ref()
            .map(|provider| provider.get_credentials())
            .filter(|creds| creds.is_complete())
            .ok_or(BitstampError::MissingCredentials)?;

        let path = endpoint_path(action, market, style);
        let nonce = self.nonce_provider.next_nonce();
        let auth = sign_request(credentials, &nonce)?;
        let body = auth_params(auth).merge(params).encode()?;

        self.execute(Method::POST, &path, Some(body)).await
    }

    /// Perform one HTTP exchange and classify the outcome.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Value, BitstampError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, "sending Bitstamp request");

        let mut request = self.http_client.request(method, url.as_str());
        if let Some(body) = body {
            request = request
                .header(CONTENT_LENGTH, body.len())
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e.into()))?;

        tracing::trace!(status = status.as_u16(), path, "received Bitstamp response");
        parse_response(status, body)
    }

    fn transport_error(&self, error: reqwest_middleware::Error) -> BitstampError {
        if is_timeout(&error) {
            BitstampError::Timeout {
                after: self.timeout,
                source: error,
            }
        } else {
            BitstampError::Transport(error)
        }
    }
}

impl std::fmt::Debug for BitstampRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitstampRestClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

fn auth_params(auth: AuthParams) -> Params {
    auth.into_pairs().into_iter().collect()
}

/// Classify a received response.
///
/// Only status 200 with a JSON body is a success. Any other status is an
/// [`BitstampError::HttpStatus`], even when its body is JSON.
fn parse_response(status: StatusCode, body: String) -> Result<Value, BitstampError> {
    if status != StatusCode::OK {
        return Err(BitstampError::HttpStatus {
            status: status.as_u16(),
            body: ErrorBody::parse(body),
        });
    }

    serde_json::from_str(&body).map_err(|source| BitstampError::ResponseParse { source, body })
}

/// Check whether a transport error was caused by the idle timeout.
fn is_timeout(error: &reqwest_middleware::Error) -> bool {
    if let reqwest_middleware::Error::Reqwest(e) = error {
        if e.is_timeout() {
            return true;
        }
    }

    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::TimedOut {
                return true;
            }
        }
        source = err.source();
    }
    false
}

/// Builder for [`BitstampRestClient`].
pub struct BitstampRestClientBuilder {
    base_url: String,
    timeout: Duration,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
}

impl BitstampRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: format!("https://{BITSTAMP_HOST}"),
            timeout: DEFAULT_TIMEOUT,
            credentials: None,
            nonce_provider: None,
            user_agent: None,
        }
    }

    /// Set the API host; requests go to `https://<host>`.
    pub fn host(mut self, host: impl AsRef<str>) -> Self {
        self.base_url = format!("https://{}", host.as_ref());
        self
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the idle timeout (default 5 seconds).
    ///
    /// A request is aborted when connecting takes this long or when its
    /// socket later sees no data for this long.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Apply a loaded [`ClientConfig`].
    ///
    /// Credentials are only installed when key, secret and client ID are all
    /// present; unset timeout and host keep their current values.
    pub fn config(mut self, config: ClientConfig) -> Self {
        if let Some(timeout) = config.timeout() {
            self.timeout = timeout;
        }
        if let Some(host) = config.host.as_deref() {
            self = self.host(host);
        }
        if let Some(credentials) = config.credentials() {
            self.credentials = Some(Arc::new(StaticCredentials::from(credentials)));
        }
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BitstampRestClient, BitstampError> {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitstamp-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitstamp-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = http_client_builder(headers, self.timeout)
            .build()
            .map_err(BitstampError::ClientBuild)?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(NonceGenerator::new()));

        Ok(BitstampRestClient {
            http_client: client,
            base_url: self.base_url,
            timeout: self.timeout,
            credentials: self.credentials,
            nonce_provider,
        })
    }
}

/// The timeout bounds both connection setup and every read after it.
fn http_client_builder(headers: HeaderMap, timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(timeout)
        .read_timeout(timeout)
}

impl Default for BitstampRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// BitstampClient trait implementation.

impl BitstampClient for BitstampRestClient {
    // ========== Public Endpoints ==========

    async fn transactions(
        &self,
        market: &str,
        request: Option<&TransactionsRequest>,
    ) -> Result<Value, BitstampError> {
        BitstampRestClient::transactions(self, market, request).await
    }

    async fn ticker(&self, market: &str) -> Result<Value, BitstampError> {
        BitstampRestClient::ticker(self, market).await
    }

    async fn ticker_hour(&self, market: &str) -> Result<Value, BitstampError> {
        BitstampRestClient::ticker_hour(self, market).await
    }

    async fn order_book(
        &self,
        market: &str,
        request: Option<&OrderBookRequest>,
    ) -> Result<Value, BitstampError> {
        BitstampRestClient::order_book(self, market, request).await
    }

    async fn eur_usd(&self) -> Result<Value, BitstampError> {
        BitstampRestClient::eur_usd(self).await
    }

    // ========== Private Endpoints - Account ==========

    async fn balance(&self, market: Option<&str>) -> Result<Value, BitstampError> {
        BitstampRestClient::balance(self, market).await
    }

    async fn user_transactions(
        &self,
        market: Option<&str>,
        request: Option<&UserTransactionsRequest>,
    ) -> Result<Value, BitstampError> {
        BitstampRestClient::user_transactions(self, market, request).await
    }

    // ========== Private Endpoints - Trading ==========

    async fn open_orders(&self, market: Option<&str>) -> Result<Value, BitstampError> {
        BitstampRestClient::open_orders(self, market).await
    }

    async fn order_status(&self, id: &str) -> Result<Value, BitstampError> {
        BitstampRestClient::order_status(self, id).await
    }

    async fn cancel_order(&self, id: &str) -> Result<Value, BitstampError> {
        BitstampRestClient::cancel_order(self, id).await
    }

    async fn cancel_all_orders(&self) -> Result<Value, BitstampError> {
        BitstampRestClient::cancel_all_orders(self).await
    }

    async fn buy(&self, market: &str, request: &LimitOrderRequest) -> Result<Value, BitstampError> {
        BitstampRestClient::buy(self, market, request).await
    }

    async fn buy_market(&self, market: &str, amount: Decimal) -> Result<Value, BitstampError> {
        BitstampRestClient::buy_market(self, market, amount).await
    }

    async fn sell(&self, market: &str, request: &LimitOrderRequest) -> Result<Value, BitstampError> {
        BitstampRestClient::sell(self, market, request).await
    }

    async fn sell_market(&self, market: &str, amount: Decimal) -> Result<Value, BitstampError> {
        BitstampRestClient::sell_market(self, market, amount).await
    }

    // ========== Private Endpoints - Funding ==========

    async fn withdrawal_requests(&self) -> Result<Value, BitstampError> {
        BitstampRestClient::withdrawal_requests(self).await
    }

    async fn bitcoin_withdrawal(
        &self,
        request: &BitcoinWithdrawalRequest,
    ) -> Result<Value, BitstampError> {
        BitstampRestClient::bitcoin_withdrawal(self, request).await
    }

    async fn xrp_withdrawal(&self, request: &XrpWithdrawalRequest) -> Result<Value, BitstampError> {
        BitstampRestClient::xrp_withdrawal(self, request).await
    }

    async fn bitcoin_deposit_address(&self) -> Result<Value, BitstampError> {
        BitstampRestClient::bitcoin_deposit_address(self).await
    }

    async fn unconfirmed_btc(&self) -> Result<Value, BitstampError> {
        BitstampRestClient::unconfirmed_btc(self).await
    }

    async fn ripple_withdrawal(
        &self,
        request: &RippleWithdrawalRequest,
    ) -> Result<Value, BitstampError> {
        BitstampRestClient::ripple_withdrawal(self, request).await
    }

    async fn ripple_address(&self) -> Result<Value, BitstampError> {
        BitstampRestClient::ripple_address(self).await
    }

    // ========== Private Endpoints - Sub accounts ==========

    async fn transfer_to_main(
        &self,
        request: &SubAccountTransferRequest,
    ) -> Result<Value, BitstampError> {
        BitstampRestClient::transfer_to_main(self, request).await
    }

    async fn transfer_from_main(
        &self,
        request: &SubAccountTransferRequest,
    ) -> Result<Value, BitstampError> {
        BitstampRestClient::transfer_from_main(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_success() {
        let value = parse_response(StatusCode::OK, r#"{"price":"100"}"#.to_string()).unwrap();
        assert_eq!(value, serde_json::json!({"price": "100"}));
    }

    #[test]
    fn test_parse_scalar_and_array() {
        let value = parse_response(StatusCode::OK, "true".to_string()).unwrap();
        assert_eq!(value, Value::Bool(true));

        let value = parse_response(StatusCode::OK, "[]".to_string()).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn test_parse_invalid_json_is_parse_error() {
        let error = parse_response(StatusCode::OK, "not-json".to_string()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ResponseParse);
        assert_eq!(error.raw_body().as_deref(), Some("not-json"));
    }

    #[test]
    fn test_parse_non_200_json() {
        let error = parse_response(
            StatusCode::BAD_REQUEST,
            r#"{"status":"error","reason":"Invalid signature"}"#.to_string(),
        )
        .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::HttpStatus);
        assert_eq!(error.http_status(), Some(400));
        assert_eq!(error.body_json().unwrap()["reason"], "Invalid signature");
    }

    #[test]
    fn test_parse_non_200_text() {
        let error =
            parse_response(StatusCode::BAD_GATEWAY, "upstream failure".to_string()).unwrap_err();
        match error {
            BitstampError::HttpStatus { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, ErrorBody::Text("upstream failure".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_other_2xx_is_status_error() {
        let error = parse_response(StatusCode::CREATED, "{}".to_string()).unwrap_err();
        assert_eq!(error.http_status(), Some(201));
    }

    #[test]
    fn test_builder_defaults() {
        let client = BitstampRestClient::new().unwrap();
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
        assert!(!client.has_credentials());
        assert_eq!(client.base_url, "https://www.bitstamp.net");
    }

    #[test]
    fn test_timeout_covers_connect() {
        let builder = http_client_builder(HeaderMap::new(), Duration::from_millis(250));
        assert!(format!("{builder:?}").contains("connect_timeout: 250ms"));
    }

    #[test]
    fn test_builder_host_and_base_url() {
        let client = BitstampRestClient::builder()
            .host("sandbox.bitstamp.example")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://sandbox.bitstamp.example");

        let client = BitstampRestClient::builder()
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = BitstampRestClient::builder()
            .credentials(Arc::new(StaticCredentials::new("key", "top_secret", "1")))
            .build()
            .unwrap();
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("has_credentials: true"));
        assert!(!debug_str.contains("top_secret"));
    }
}
