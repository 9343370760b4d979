//! API token models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::TokenId;

/// An API authentication token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token value, which is also its identifier
    pub token: String,
    /// When the token expires; `None` if it never does
    #[serde(rename = "expire_date", default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl Token {
    /// The token's identifier.
    pub fn id(&self) -> TokenId {
        TokenId::new(self.token.clone())
    }

    /// Whether the token has expired as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date.map_or(false, |expiry| expiry <= now)
    }
}

/// Body of a token deletion request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TokenRef<'a> {
    pub token: &'a str,
}
