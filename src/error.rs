//! Error types for the Bitstamp client library.

use std::time::Duration;

use thiserror::Error;

/// The main error type for all Bitstamp client operations.
///
/// Every failure is returned to the caller as one of these variants. Nothing
/// is retried or logged away internally.
#[derive(Error, Debug)]
pub enum BitstampError {
    /// A private endpoint was called without a complete credential set.
    #[error("Missing credentials: API key, secret and customer ID required for private endpoints")]
    MissingCredentials,

    /// Bitstamp answered with a status other than 200.
    #[error("Bitstamp error {status}")]
    HttpStatus {
        /// HTTP status code of the response
        status: u16,
        /// Response body, parsed as JSON when possible
        body: ErrorBody,
    },

    /// Bitstamp answered 200 but the body is not valid JSON.
    #[error("Failed to parse response: {source}")]
    ResponseParse {
        /// The JSON parse failure
        #[source]
        source: serde_json::Error,
        /// The raw response body
        body: String,
    },

    /// Connection-level failure (DNS, refused, reset, TLS).
    #[error("HTTP transport failed: {0}")]
    Transport(#[source] reqwest_middleware::Error),

    /// Connecting, or waiting on an idle socket, took longer than the
    /// configured timeout.
    #[error("Request timed out after {after:?} of inactivity")]
    Timeout {
        /// The configured idle timeout
        after: Duration,
        /// The underlying transport error
        #[source]
        source: reqwest_middleware::Error,
    },

    /// Request parameters could not be form-encoded.
    #[error("Failed to encode request parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Classification of a [`BitstampError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BitstampError::MissingCredentials`].
    MissingCredentials,
    /// See [`BitstampError::HttpStatus`].
    HttpStatus,
    /// See [`BitstampError::ResponseParse`].
    ResponseParse,
    /// See [`BitstampError::Transport`].
    Transport,
    /// See [`BitstampError::Timeout`].
    Timeout,
    /// See [`BitstampError::Encode`].
    Encode,
    /// See [`BitstampError::ClientBuild`].
    ClientBuild,
}

/// Body of a non-200 response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The body did not parse as JSON; the raw text is kept.
    Text(String),
}

impl ErrorBody {
    /// Parse a response body, falling back to the raw text.
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw),
        }
    }

    /// Get the parsed JSON body, if the body was JSON.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl BitstampError {
    /// Get the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredentials => ErrorKind::MissingCredentials,
            Self::HttpStatus { .. } => ErrorKind::HttpStatus,
            Self::ResponseParse { .. } => ErrorKind::ResponseParse,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Encode(_) => ErrorKind::Encode,
            Self::ClientBuild(_) => ErrorKind::ClientBuild,
        }
    }

    /// HTTP status code, when a response was received.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::ResponseParse { .. } => Some(200),
            _ => None,
        }
    }

    /// The response body as text, when a response was received.
    pub fn raw_body(&self) -> Option<String> {
        match self {
            Self::HttpStatus { body, .. } => Some(body.to_string()),
            Self::ResponseParse { body, .. } => Some(body.clone()),
            _ => None,
        }
    }

    /// The parsed error body, when Bitstamp returned JSON with a non-200 status.
    ///
    /// Bitstamp error bodies typically look like
    /// `{"status": "error", "reason": "...", "code": "..."}`.
    pub fn body_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::HttpStatus { body, .. } => body.as_json(),
            _ => None,
        }
    }

    /// Check if the request never reached the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials | Self::Encode(_) | Self::ClientBuild(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_parses_json() {
        let body = ErrorBody::parse(r#"{"status":"error","reason":"Invalid nonce"}"#.to_string());
        let json = body.as_json().unwrap();
        assert_eq!(json["reason"], "Invalid nonce");
    }

    #[test]
    fn test_error_body_keeps_raw_text() {
        let body = ErrorBody::parse("<html>Bad Gateway</html>".to_string());
        assert_eq!(body, ErrorBody::Text("<html>Bad Gateway</html>".to_string()));
        assert!(body.as_json().is_none());
    }

    #[test]
    fn test_http_status_metadata() {
        let error = BitstampError::HttpStatus {
            status: 403,
            body: ErrorBody::Text("Forbidden".to_string()),
        };
        assert_eq!(error.kind(), ErrorKind::HttpStatus);
        assert_eq!(error.http_status(), Some(403));
        assert_eq!(error.raw_body().as_deref(), Some("Forbidden"));
        assert_eq!(error.to_string(), "Bitstamp error 403");
    }

    #[test]
    fn test_missing_credentials_is_local() {
        let error = BitstampError::MissingCredentials;
        assert_eq!(error.kind(), ErrorKind::MissingCredentials);
        assert!(error.is_local());
        assert!(error.http_status().is_none());
        assert!(error.raw_body().is_none());
    }

    #[test]
    fn test_response_parse_keeps_body() {
        let source = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let error = BitstampError::ResponseParse {
            source,
            body: "not-json".to_string(),
        };
        assert_eq!(error.kind(), ErrorKind::ResponseParse);
        assert_eq!(error.raw_body().as_deref(), Some("not-json"));
        assert!(error.body_json().is_none());
    }
}
