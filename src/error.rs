//! Error types for the RDCom API client.
//!
//! Every failure the client can produce is a variant of [`Error`]. Callers
//! that only care about the broad category can use [`Error::kind`].

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for RDCom operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all RDCom API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The client configuration failed validation
    #[error("Configuration error: {}", ConfigIssues(.0))]
    Config(Vec<ConfigIssue>),

    /// No usable credential for an authenticated operation
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// HTTP request failed (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Response body did not match the expected schema
    #[error("Decode error for {path}: {source}")]
    Decode {
        /// Request path whose response failed to decode
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization of a request body failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `{placeholder}` in the request path had no value
    #[error("Missing path parameter: {0}")]
    MissingPathParam(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The operation was cancelled by the caller
    #[error("Operation cancelled")]
    Cancelled,
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid or conflicting client configuration.
    Configuration,
    /// No credential configured for an authenticated operation.
    Authentication,
    /// Network, TLS or non-2xx failure.
    Transport,
    /// Response body does not match the expected schema.
    Decode,
    /// The caller built a request that cannot be issued.
    InvalidRequest,
    /// Cancelled through a cancellation token.
    Cancelled,
}

/// A single problem found while validating a client configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    /// No base URL was configured
    #[error("base URL is required")]
    MissingBaseUrl,

    /// The base URL could not be parsed
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The offending value
        url: String,
        /// Parser message
        reason: String,
    },

    /// Both a bearer token and basic credentials were configured
    #[error("cannot have both token and username/password")]
    ConflictingAuth,

    /// Basic credentials with an empty username or password
    #[error("must have both username and password")]
    IncompleteCredentials,
}

struct ConfigIssues<'a>(&'a [ConfigIssue]);

impl fmt::Display for ConfigIssues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl Error {
    /// Classify this error.
    ///
    /// # Example
    ///
    /// ```
    /// use rdcom_rs::{Error, ErrorKind};
    ///
    /// let err = Error::Authentication("invalid token".into());
    /// assert_eq!(err.kind(), ErrorKind::Authentication);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Configuration,
            Error::Authentication(_) => ErrorKind::Authentication,
            Error::Http(_) | Error::Api { .. } => ErrorKind::Transport,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Json(_)
            | Error::MissingPathParam(_)
            | Error::InvalidInput(_)
            | Error::UrlParse(_) => ErrorKind::InvalidRequest,
            Error::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Returns `true` if this is an authentication-related error,
    /// including a 401/403 answer from the server.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) => true,
            Error::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Config(_)
            | Error::MissingPathParam(_)
            | Error::InvalidInput(_)
            | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a non-2xx response.
    ///
    /// The platform reports failures as `{"detail": "..."}` on most endpoints
    /// and as `{"error": "..."}` or `{"message": "..."}` on a few others.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = ["detail", "error", "message"]
            .iter()
            .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
            .map(String::from)
            .or_else(|| body.as_str().filter(|s| !s.is_empty()).map(String::from))
            .unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown API error")
                    .to_string()
            });

        Error::Api {
            status,
            message,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(
            Error::Config(vec![ConfigIssue::MissingBaseUrl]).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::Authentication("no credential".into()).kind(),
            ErrorKind::Authentication
        );
        assert_eq!(
            Error::from_api_response(500, Value::Null).kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            Error::MissingPathParam("account".into()).kind(),
            ErrorKind::InvalidRequest
        );
        assert_eq!(Error::Cancelled.kind(), ErrorKind::Cancelled);
    }

    #[test]
    fn test_error_auth() {
        assert!(Error::Authentication("failed".into()).is_auth_error());
        assert!(Error::from_api_response(401, Value::Null).is_auth_error());
        assert!(!Error::from_api_response(404, Value::Null).is_auth_error());
        assert!(!Error::Cancelled.is_auth_error());
    }

    #[test]
    fn test_client_and_server_errors() {
        assert!(Error::from_api_response(404, Value::Null).is_client_error());
        assert!(!Error::from_api_response(404, Value::Null).is_server_error());
        assert!(Error::from_api_response(503, Value::Null).is_server_error());
        assert!(Error::InvalidInput("bad".into()).is_client_error());
    }

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({ "detail": "Invalid token." });

        match Error::from_api_response(401, body) {
            Error::Api {
                status, message, ..
            } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid token.");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_api_response_without_message() {
        match Error::from_api_response(500, Value::Null) {
            Error::Api { message, .. } => assert_eq!(message, "Internal Server Error"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_display_lists_every_issue() {
        let err = Error::Config(vec![
            ConfigIssue::MissingBaseUrl,
            ConfigIssue::ConflictingAuth,
        ]);
        assert_eq!(
            err.to_string(),
            "Configuration error: base URL is required; cannot have both token and username/password"
        );
    }
}
