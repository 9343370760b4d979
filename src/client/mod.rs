//! HTTP client and request layer for the RDCom API.
//!
//! This module provides the main entry point [`RdcomClient`], its
//! [`ClientConfig`], the [`Request`] descriptor and the pagination walker.
//!
//! # Example
//!
//! ```no_run
//! use rdcom_rs::RdcomClient;
//!
//! # async fn example() -> rdcom_rs::Result<()> {
//! let client = RdcomClient::from_token("https://platform.rdcom.com", "your-token")?;
//!
//! let accounts = client.accounts().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
mod request;

pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use http::RdcomClient;
pub use paginated::{fetch_all, Page, DEFAULT_PAGE_SIZE};
pub use request::Request;
