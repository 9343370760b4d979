//! SMS gateway models.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An SMS gateway configured for an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsGateway {
    /// Gateway identifier
    pub id: i64,
    /// Display label, keyed by language code
    #[serde(default)]
    pub label: BTreeMap<String, String>,
    /// Whether this is the account's default gateway
    #[serde(default)]
    pub is_default: bool,
    /// Whether the sender is ready
    #[serde(default)]
    pub sender_ready: bool,
    /// Whether two-way messaging is ready
    #[serde(default)]
    pub twoway_ready: bool,
    /// Whether mobile-originated messaging is ready
    #[serde(default)]
    pub mo_ready: bool,
    /// Whether RCS is ready
    #[serde(default)]
    pub rcs_ready: bool,
    /// Whether delivery reports are enabled
    #[serde(default)]
    pub enable_sms_dlr: bool,
    /// Gateway type name
    #[serde(default)]
    pub gateway_type: String,
    /// Gateway type code
    #[serde(default)]
    pub gateway_type_raw: i64,
    /// Prices per destination
    #[serde(default)]
    pub prices: BTreeMap<String, Decimal>,
}

impl SmsGateway {
    /// The label in `lang`, if present.
    pub fn label_in(&self, lang: &str) -> Option<&str> {
        self.label.get(lang).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_gateway() {
        let gateway: SmsGateway = serde_json::from_str(
            r#"{
                "id": 7,
                "label": {"en": "Premium", "it": "Alta qualita"},
                "is_default": true,
                "sender_ready": true,
                "twoway_ready": false,
                "mo_ready": false,
                "rcs_ready": false,
                "enable_sms_dlr": true,
                "gateway_type": "premium",
                "gateway_type_raw": 1,
                "prices": {"IT": 0.045, "FR": 0.07}
            }"#,
        )
        .unwrap();

        assert_eq!(gateway.id, 7);
        assert!(gateway.is_default);
        assert_eq!(gateway.label_in("en"), Some("Premium"));
        assert_eq!(gateway.prices.get("IT"), Some(&dec!(0.045)));
    }

    #[test]
    fn test_missing_optional_fields() {
        let gateway: SmsGateway = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(gateway.label.is_empty());
        assert!(gateway.prices.is_empty());
        assert!(!gateway.is_default);
    }
}
