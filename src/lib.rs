//! # rdcom-rs
//!
//! An async Rust client for the RDCom marketing and messaging platform API.
//!
//! The crate is built around a small generic engine:
//!
//! - **Configuration**: a validated [`ClientConfig`] (endpoint, TLS policy,
//!   authentication mode, diagnostics)
//! - **Transport**: [`RdcomClient`] owns the pooled HTTP client and executes
//!   one JSON request at a time
//! - **Pagination**: list endpoints are walked page by page into a single `Vec`
//! - **Resource operations**: generic get, list, create and delete in
//!   [`api::resource`], wrapped by typed services for accounts, tokens and
//!   SMS gateways
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rdcom_rs::{ClientConfig, RdcomClient};
//!
//! #[tokio::main]
//! async fn main() -> rdcom_rs::Result<()> {
//!     let config = ClientConfig::builder()
//!         .with_base_url("https://platform.rdcom.com")
//!         .with_auth_token("your-token")
//!         .build()?;
//!     let client = RdcomClient::new(config)?;
//!
//!     let tokens = client.tokens().list().await?;
//!     println!("Found {} tokens", tokens.len());
//!
//!     for account in client.accounts().list().await? {
//!         let gateways = client.sms_gateways().list(&account.code).await?;
//!         println!("{}: {} SMS gateways", account.code, gateways.len());
//!     }
//!
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Generic Operations
//!
//! Resources without a dedicated service can be reached through the
//! generic operations with any `serde` type:
//!
//! ```rust,no_run
//! use rdcom_rs::api::resource;
//! use rdcom_rs::client::Request;
//!
//! #[derive(serde::Deserialize)]
//! struct Campaign {
//!     id: i64,
//!     name: String,
//! }
//!
//! # async fn example(client: rdcom_rs::RdcomClient) -> rdcom_rs::Result<()> {
//! let campaigns: Vec<Campaign> = resource::list(
//!     &client,
//!     Request::get("/api/v2/{account}/campaigns/")
//!         .path_param("account", "acme")
//!         .page_size(50),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{AuthMode, Credentials};
pub use client::{ClientConfig, ClientConfigBuilder, RdcomClient};
pub use error::{ConfigIssue, Error, ErrorKind, Result};
pub use models::{AccountCode, TokenId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use rdcom_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::resource;
    pub use crate::auth::AuthMode;
    pub use crate::client::{ClientConfig, Page, RdcomClient, Request};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::models::{
        Account, AccountCode, AccountInfo, AccountLimits, SmsGateway, Token, TokenId,
        UserPermission,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_code_creation() {
        let account = AccountCode::new("acme");
        assert_eq!(account.as_str(), "acme");
    }

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::builder()
            .with_base_url(client::DEFAULT_BASE_URL)
            .build()
            .unwrap();
        assert_eq!(config.base_url().host_str(), Some("platform.rdcom.com"));
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RdcomClient>();
        assert_send_sync::<ClientConfig>();
    }
}
