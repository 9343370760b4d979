//! Identifier newtypes.
//!
//! Strongly-typed wrappers around string identifiers so that an account
//! code cannot be passed where a token is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed account code.
///
/// # Example
///
/// ```
/// use rdcom_rs::AccountCode;
///
/// let account = AccountCode::new("acme");
/// println!("Account: {}", account);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCode(String);

impl AccountCode {
    /// Create a new account code from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the account code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A strongly-typed API token identifier.
///
/// The platform identifies a token by its own value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    /// Create a new token identifier.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the token identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TokenId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
