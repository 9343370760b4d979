//! Client configuration options.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::auth::{AuthMode, Credentials};
use crate::error::ConfigIssue;
use crate::{Error, Result};

/// Default API endpoint used by the command-line tool.
pub const DEFAULT_BASE_URL: &str = "https://platform.rdcom.com";

/// Validated configuration for the RDCom client.
///
/// Built through [`ClientConfig::builder`] and immutable afterwards.
///
/// # Example
///
/// ```
/// use rdcom_rs::ClientConfig;
///
/// # fn example() -> rdcom_rs::Result<()> {
/// let config = ClientConfig::builder()
///     .with_base_url("https://platform.rdcom.com")
///     .with_user_agent("my-app/1.0")
///     .with_auth_token("my-token")
///     .build()?;
/// assert_eq!(config.user_agent(), "my-app/1.0");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    user_agent: String,
    skip_tls_verify: bool,
    debug: bool,
    trace: bool,
    timeout: Option<Duration>,
    auth: AuthMode,
}

impl ClientConfig {
    /// Start building a configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// User-Agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Whether TLS certificate verification is disabled.
    pub fn skip_tls_verify(&self) -> bool {
        self.skip_tls_verify
    }

    /// Whether request/response logging is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Whether wire-level tracing is enabled.
    pub fn trace(&self) -> bool {
        self.trace
    }

    /// Per-request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The configured authentication mode.
    pub fn auth(&self) -> &AuthMode {
        &self.auth
    }
}

/// Builder for [`ClientConfig`].
///
/// Every `with_*` call overwrites whatever an earlier call set for the same
/// field. The token and the basic credentials are separate fields, so setting
/// one does not clear the other; [`build`](Self::build) rejects having both.
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    user_agent: String,
    skip_tls_verify: bool,
    debug: bool,
    trace: bool,
    timeout: Option<Duration>,
    token: Option<SecretString>,
    credentials: Option<Credentials>,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: format!("rdcom-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            skip_tls_verify: false,
            debug: false,
            trace: false,
            timeout: None,
            token: None,
            credentials: None,
        }
    }
}

impl ClientConfigBuilder {
    /// Set the API endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        tracing::debug!(endpoint = %base_url, "setting base URL");
        self.base_url = Some(base_url);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        tracing::debug!(agent = %self.user_agent, "setting user agent");
        self
    }

    /// Enable or disable skipping TLS certificate verification.
    pub fn with_skip_tls_verify(mut self, insecure: bool) -> Self {
        tracing::debug!(insecure, "setting skip TLS verification");
        self.skip_tls_verify = insecure;
        self
    }

    /// Log every request and response.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Enable connection-level tracing.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Authenticate with a bearer token.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        tracing::debug!("setting authentication token");
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Authenticate with HTTP Basic credentials.
    pub fn with_user_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let credentials = Credentials::new(username, password);
        tracing::debug!(username = credentials.username(), "setting user credentials");
        self.credentials = Some(credentials);
        self
    }

    /// Validate the accumulated options and produce the configuration.
    ///
    /// No network I/O happens here. All problems are reported together in
    /// [`Error::Config`].
    pub fn build(self) -> Result<ClientConfig> {
        let mut issues = Vec::new();

        let base_url = match self.base_url.as_deref().map(str::trim) {
            None | Some("") => {
                issues.push(ConfigIssue::MissingBaseUrl);
                None
            }
            Some(raw) => match parse_base_url(raw) {
                Ok(url) => Some(url),
                Err(reason) => {
                    issues.push(ConfigIssue::InvalidBaseUrl {
                        url: raw.to_string(),
                        reason,
                    });
                    None
                }
            },
        };

        let auth = AuthMode::resolve(self.token, self.credentials, &mut issues);

        match base_url {
            Some(base_url) if issues.is_empty() => {
                tracing::debug!(
                    endpoint = %base_url,
                    auth = auth.name(),
                    "API client configuration ready"
                );
                Ok(ClientConfig {
                    base_url,
                    user_agent: self.user_agent,
                    skip_tls_verify: self.skip_tls_verify,
                    debug: self.debug,
                    trace: self.trace,
                    timeout: self.timeout,
                    auth,
                })
            }
            _ => {
                tracing::error!(?issues, "invalid API client configuration");
                Err(Error::Config(issues))
            }
        }
    }
}

fn parse_base_url(raw: &str) -> std::result::Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme {:?}", other)),
    }
    if url.cannot_be_a_base() {
        return Err("URL cannot be used as a base".to_string());
    }
    Ok(url)
}
