//! Authentication modes for the RDCom API.
//!
//! A client authenticates in exactly one of two ways:
//!
//! 1. **Bearer token** - sent as `Authorization: Bearer <token>`
//! 2. **Basic credentials** - username and password sent as HTTP Basic auth
//!
//! Both are configured on the [`ClientConfigBuilder`](crate::ClientConfigBuilder);
//! configuring both at once is rejected when the configuration is built.
//! A client with neither can still be built, but every API operation on it
//! fails with [`Error::Authentication`](crate::Error::Authentication) before
//! any request is sent.
//!
//! ```
//! use rdcom_rs::{AuthMode, ClientConfig};
//!
//! # fn example() -> rdcom_rs::Result<()> {
//! let config = ClientConfig::builder()
//!     .with_base_url("https://platform.rdcom.com")
//!     .with_auth_token("my-token")
//!     .build()?;
//! assert!(matches!(config.auth(), AuthMode::Bearer(_)));
//! # Ok(())
//! # }
//! ```

mod credentials;

pub use credentials::{AuthMode, Credentials};
