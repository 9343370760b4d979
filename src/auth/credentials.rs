//! Credential types and the rules for combining them.

use base64::{engine::general_purpose, Engine as _};
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigIssue;
use crate::{Error, Result};

/// Username and password for HTTP Basic authentication.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Create a new pair of credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// The username.
    pub fn username(&self) -> &str {
        &self.username
    }

    fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.expose_secret().is_empty()
    }

    fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.expose_secret().is_empty()
    }

    fn header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password.expose_secret());
        format!("Basic {}", general_purpose::STANDARD.encode(raw))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The authentication mode of a client session.
///
/// Fixed once the configuration is built.
#[derive(Clone, Default)]
pub enum AuthMode {
    /// No credential configured
    #[default]
    None,
    /// Bearer token authentication
    Bearer(SecretString),
    /// HTTP Basic authentication
    Basic(Credentials),
}

impl AuthMode {
    /// Combine the separately configured token and credentials into a
    /// single mode, recording any rule violations in `issues`.
    ///
    /// An empty token counts as no token, and a username and password that
    /// are both empty count as no credentials.
    pub(crate) fn resolve(
        token: Option<SecretString>,
        credentials: Option<Credentials>,
        issues: &mut Vec<ConfigIssue>,
    ) -> Self {
        let token = token.filter(|t| !t.expose_secret().is_empty());
        let credentials = credentials.filter(|c| !c.is_empty());

        if let Some(credentials) = &credentials {
            if !credentials.is_complete() {
                issues.push(ConfigIssue::IncompleteCredentials);
            }
        }

        match (token, credentials) {
            (Some(_), Some(_)) => {
                issues.push(ConfigIssue::ConflictingAuth);
                AuthMode::None
            }
            (Some(token), None) => AuthMode::Bearer(token),
            (None, Some(credentials)) => AuthMode::Basic(credentials),
            (None, None) => AuthMode::None,
        }
    }

    /// Returns `true` if no credential is configured.
    pub fn is_none(&self) -> bool {
        matches!(self, AuthMode::None)
    }

    /// Fail fast unless a credential is configured.
    pub(crate) fn require(&self) -> Result<()> {
        if self.is_none() {
            return Err(Error::Authentication(
                "no token or username/password configured".to_string(),
            ));
        }
        Ok(())
    }

    /// The `Authorization` header value for this mode, if any.
    pub(crate) fn header_value(&self) -> Result<Option<HeaderValue>> {
        let raw = match self {
            AuthMode::None => return Ok(None),
            AuthMode::Bearer(token) => format!("Bearer {}", token.expose_secret()),
            AuthMode::Basic(credentials) => credentials.header_value(),
        };

        let mut value = HeaderValue::from_str(&raw)
            .map_err(|_| Error::InvalidInput("Invalid credential format".to_string()))?;
        value.set_sensitive(true);
        Ok(Some(value))
    }

    /// Short name of the mode for logging.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            AuthMode::None => "none",
            AuthMode::Bearer(_) => "bearer",
            AuthMode::Basic(_) => "basic",
        }
    }
}

impl std::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMode::None => f.write_str("None"),
            AuthMode::Bearer(_) => f.write_str("Bearer([REDACTED])"),
            AuthMode::Basic(credentials) => f.debug_tuple("Basic").field(credentials).finish(),
        }
    }
}
