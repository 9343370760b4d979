//! Data models for the RDCom API.
//!
//! - [`primitives`] - Identifier newtypes like `AccountCode` and `TokenId`
//! - [`account`] - Account models
//! - [`token`] - API token models
//! - [`sms_gateway`] - SMS gateway models

pub mod primitives;
pub mod account;
pub mod token;
pub mod sms_gateway;

// Re-export commonly used types
pub use primitives::*;
pub use account::*;
pub use token::*;
pub use sms_gateway::*;
