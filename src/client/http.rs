//! HTTP transport for the RDCom API.

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{AccountsService, SmsGatewaysService, TokensService};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::request::Request;

/// The client for the RDCom API.
///
/// Owns one pooled HTTP client bound to the configured base URL. Resource
/// services borrow the client for the duration of a call, so the client must
/// outlive them. Dropping the client (or calling [`close`](Self::close))
/// releases the connection pool.
///
/// # Example
///
/// ```no_run
/// use rdcom_rs::{ClientConfig, RdcomClient};
///
/// # async fn example() -> rdcom_rs::Result<()> {
/// let config = ClientConfig::builder()
///     .with_base_url("https://platform.rdcom.com")
///     .with_auth_token("your-token")
///     .build()?;
/// let client = RdcomClient::new(config)?;
///
/// let tokens = client.tokens().list().await?;
/// println!("{} tokens", tokens.len());
///
/// client.close();
/// # Ok(())
/// # }
/// ```
pub struct RdcomClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RdcomClient {
    /// Create a client from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .connection_verbose(config.trace());

        if config.skip_tls_verify() {
            tracing::warn!(
                endpoint = %config.base_url(),
                "TLS certificate verification is disabled"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;

        tracing::debug!(
            endpoint = %config.base_url(),
            auth = config.auth().name(),
            debug = config.debug(),
            trace = config.trace(),
            "API client ready"
        );

        Ok(Self { http, config })
    }

    /// Create a client authenticating with a bearer token.
    pub fn from_token(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let config = ClientConfig::builder()
            .with_base_url(base_url)
            .with_auth_token(token)
            .build()?;
        Self::new(config)
    }

    /// Create a client authenticating with a username and password.
    pub fn from_credentials(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let config = ClientConfig::builder()
            .with_base_url(base_url)
            .with_user_credentials(username, password)
            .build()?;
        Self::new(config)
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService<'_> {
        AccountsService::new(self)
    }

    /// Get the tokens service.
    pub fn tokens(&self) -> TokensService<'_> {
        TokensService::new(self)
    }

    /// Get the SMS gateways service.
    pub fn sms_gateways(&self) -> SmsGatewaysService<'_> {
        SmsGatewaysService::new(self)
    }

    /// Check connectivity and credentials by listing tokens.
    pub async fn ping(&self) -> Result<()> {
        self.tokens().list().await?;
        tracing::debug!("successful ping");
        Ok(())
    }

    /// Release the connection pool.
    pub fn close(self) {
        tracing::debug!(endpoint = %self.config.base_url(), "closing API client");
    }

    /// Issue one HTTP request and decode the JSON response.
    ///
    /// Path parameters are substituted into the path template and query
    /// parameters appended before sending. A 2xx response is decoded into
    /// `T` (an empty body decodes as `null`); anything else becomes
    /// [`Error::Api`]. No credential check is made here.
    pub async fn execute<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let url = request.url(self.config.base_url())?;
        let headers = self.build_headers(request.body.is_some())?;

        let mut builder = self
            .http
            .request(request.method.clone(), url.clone())
            .headers(headers);

        let query = request.query_pairs();
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        if self.config.trace() {
            tracing::trace!(
                method = %request.method,
                %url,
                path_params = ?request.path_params,
                query_params = ?request.query_params,
                body = ?request.body,
                "sending API request"
            );
        }

        let started = Instant::now();
        let call = async {
            let response = builder.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, Error>((status, bytes))
        };

        let outcome = match &request.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(method = %request.method, %url, "API request cancelled");
                    return Err(Error::Cancelled);
                }
                outcome = call => outcome,
            },
            None => call.await,
        };

        let (status, bytes) = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(
                    method = %request.method,
                    path = request.path(),
                    error = %err,
                    "error performing API request"
                );
                return Err(err);
            }
        };

        if self.config.debug() {
            tracing::debug!(
                method = %request.method,
                %url,
                status = status.as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                body = %String::from_utf8_lossy(&bytes),
                "API response"
            );
        }

        handle_response(request.path(), status, &bytes)
    }

    fn build_headers(&self, has_body: bool) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(value) = self.config.auth().header_value()? {
            headers.insert(AUTHORIZATION, value);
        }

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(headers)
    }
}

fn handle_response<T: DeserializeOwned>(path: &str, status: StatusCode, bytes: &[u8]) -> Result<T> {
    if status.is_success() {
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null".as_slice()
        } else {
            bytes
        };
        serde_json::from_slice(body).map_err(|source| {
            tracing::error!(path, error = %source, "error decoding API response");
            Error::Decode {
                path: path.to_string(),
                source,
            }
        })
    } else {
        let body: Value = serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()));
        tracing::error!(path, status = status.as_u16(), "API request failed");
        Err(Error::from_api_response(status.as_u16(), body))
    }
}

impl std::fmt::Debug for RdcomClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RdcomClient")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Entity {
        token: String,
    }

    #[test]
    fn test_handle_success() {
        let entity: Entity =
            handle_response("/t", StatusCode::OK, br#"{"token":"abc"}"#).unwrap();
        assert_eq!(entity.token, "abc");
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let value: Option<Entity> = handle_response("/t", StatusCode::NO_CONTENT, b"").unwrap();
        assert!(value.is_none());
        handle_response::<()>("/t", StatusCode::OK, b"  \n").unwrap();
    }

    #[test]
    fn test_schema_mismatch_is_decode_error() {
        let err = handle_response::<Entity>("/t", StatusCode::OK, br#"{"id":1}"#).unwrap_err();
        assert!(matches!(err, Error::Decode { ref path, .. } if path == "/t"));
    }

    #[test]
    fn test_non_success_is_api_error() {
        let err =
            handle_response::<Entity>("/t", StatusCode::FORBIDDEN, br#"{"detail":"nope"}"#)
                .unwrap_err();
        match err {
            Error::Api {
                status, message, ..
            } => {
                assert_eq!(status, 403);
                assert_eq!(message, "nope");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_error_body() {
        let err = handle_response::<Entity>("/t", StatusCode::BAD_GATEWAY, b"upstream down")
            .unwrap_err();
        assert!(matches!(err, Error::Api { status: 502, ref message, .. } if message == "upstream down"));
    }
}
