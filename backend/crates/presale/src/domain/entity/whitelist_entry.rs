//! WhitelistEntry entity - interest registration for a presale

use kernel::validation::ValidationError;
use serde_json::Value;

use crate::domain::document::Document;
use crate::domain::schema::Payload;
use crate::domain::value_object::Email;

#[derive(Debug, Clone, PartialEq)]
pub struct WhitelistEntry {
    pub email: Email,
    pub wallet: Option<String>,
    pub network: Option<String>,
}

impl WhitelistEntry {
    /// Validate a request body
    pub fn from_payload(body: &Value) -> Result<Self, ValidationError> {
        let mut p = Payload::new(body)?;

        let raw_email = p.required_str("email");
        let wallet = p.optional_str("wallet");
        let network = p.optional_str("network");

        let email = if p.has_violation("email") {
            None
        } else {
            match Email::new(&raw_email) {
                Ok(email) => Some(email),
                Err(reason) => {
                    p.reject("email", reason);
                    None
                }
            }
        };

        p.finish()?;
        let email = email.ok_or_else(|| ValidationError::single("email", "field required"))?;
        Ok(Self {
            email,
            wallet,
            network,
        })
    }

    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("email".into(), Value::from(self.email.as_str()));
        doc.insert("wallet".into(), self.wallet.clone().into());
        doc.insert("network".into(), self.network.clone().into());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_entry() {
        let entry = WhitelistEntry::from_payload(&json!({ "email": "a@b.com" })).unwrap();
        assert_eq!(entry.email.as_str(), "a@b.com");
        assert!(entry.wallet.is_none());
        assert!(entry.network.is_none());

        let doc = entry.to_document();
        assert_eq!(doc["wallet"], Value::Null);
        assert_eq!(doc["network"], Value::Null);
    }

    #[test]
    fn test_malformed_email_rejected() {
        let err = WhitelistEntry::from_payload(&json!({ "email": "not-an-email" })).unwrap_err();
        assert!(err.has_field("email"));
    }

    #[test]
    fn test_missing_email_reported_once() {
        let err = WhitelistEntry::from_payload(&json!({ "wallet": "0xabc" })).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].reason, "field required");
    }

    #[test]
    fn test_empty_email_string_rejected() {
        let err = WhitelistEntry::from_payload(&json!({ "email": "" })).unwrap_err();
        assert!(err.has_field("email"));
        assert!(err.violations()[0].reason.contains("not a valid email"));
    }

    #[test]
    fn test_full_entry() {
        let entry = WhitelistEntry::from_payload(&json!({
            "email": "whale@fund.io",
            "wallet": "0x52908400098527886E0F7030069857D2E4169EE7",
            "network": "ETH"
        }))
        .unwrap();
        assert_eq!(entry.network.as_deref(), Some("ETH"));
    }
}
