//! Account models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::AccountCode;

/// A platform account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account code
    pub code: AccountCode,
    /// Display name
    pub name: String,
    /// Whether the account is enabled
    #[serde(default)]
    pub enabled: bool,
    /// When the account was created
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Code of the parent account, empty for top-level accounts
    #[serde(default)]
    pub parent: Option<String>,
    /// When the account expires
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    /// Email preview feature
    #[serde(default)]
    pub enable_email_preview: bool,
    /// PDF attachments feature
    #[serde(default)]
    pub enable_pdf_attachments: bool,
    /// Anti-spam check feature
    #[serde(default)]
    pub enable_anti_spam_check: bool,
    /// Unlimited SMS credit
    #[serde(default)]
    pub enable_sms_unlimited_credit: bool,
    /// OTP over SMS
    #[serde(default)]
    pub enable_otp_sms: bool,
    /// OTP over email
    #[serde(default)]
    pub enable_otp_email: bool,
    /// Sending domains
    #[serde(default)]
    pub domains: Vec<String>,
    /// Per-user permissions on this account
    #[serde(default)]
    pub user_permissions: Vec<UserPermission>,
    /// Company and contact details
    #[serde(default)]
    pub infos: AccountInfo,
    /// Suspension state code, 0 when active
    #[serde(default)]
    pub suspension_state: i32,
    /// Remaining SMS credits (the API spells this field `sms_credists`)
    #[serde(rename = "sms_credists", default)]
    pub sms_credits: Decimal,
    /// Default sender address
    #[serde(default)]
    pub sender_address: String,
    /// Sending limits
    #[serde(default)]
    pub limits: AccountLimits,
}

impl Account {
    /// Whether the account is enabled and not suspended.
    pub fn is_active(&self) -> bool {
        self.enabled && self.suspension_state == 0
    }
}

/// A user's permissions on an account.
///
/// The platform exposes several dozen `can_*` flags; they are kept in
/// [`flags`](Self::flags) keyed by their wire name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPermission {
    /// Account code
    pub account: String,
    /// User name
    pub user: String,
    /// Permission flags such as `can_view_lists`
    #[serde(flatten)]
    pub flags: BTreeMap<String, serde_json::Value>,
}

impl UserPermission {
    /// Whether the named permission is granted. Unknown names are denied.
    pub fn can(&self, permission: &str) -> bool {
        self.flags
            .get(permission)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}

/// Company and contact details of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    /// Name
    pub name: String,
    /// Email
    pub email: String,
    /// Main contact first name
    pub main_contact_name: String,
    /// Main contact surname
    pub main_contact_surname: String,
    /// Main contact email
    pub main_contact_email: String,
    /// Main contact mobile number
    pub main_contact_cell: String,
    /// Legal representative first name
    pub repr_name: String,
    /// Legal representative surname
    pub repr_surname: String,
    /// Legal representative form of address
    pub repr_callme: String,
    /// Legal representative email
    pub repr_email: String,
    /// Legal representative fiscal code
    pub repr_fiscal_code: String,
    /// Company name
    pub company: String,
    /// Company type
    pub company_type: String,
    /// VAT number
    pub vat: String,
    /// City
    pub city: String,
    /// Street address
    pub address: String,
    /// Postal code
    pub zip_code: String,
    /// State or province
    pub state: String,
    /// Country
    pub country: String,
    /// Phone number
    pub phone: String,
    /// Website
    pub website: String,
}

/// Sending limits of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountLimits {
    /// Maximum recipients per day
    pub max_recipients_per_day: i64,
    /// Maximum recipients per month
    pub max_recipients_per_month: i64,
    /// Maximum recipients per year
    pub max_recipients_per_year: i64,
    /// Maximum number of lists
    pub max_lists: i64,
}
