//! API services for RDCom resources.
//!
//! [`resource`] holds the four generic operations (get, list, create,
//! delete); each service wraps them for one resource type.

mod accounts;
pub mod resource;
mod sms_gateways;
mod tokens;

pub use accounts::AccountsService;
pub use sms_gateways::SmsGatewaysService;
pub use tokens::TokensService;
