//! Presale entity - a token-sale listing

use chrono::{DateTime, Utc};
use kernel::validation::ValidationError;
use serde_json::Value;

use crate::domain::document::Document;
use crate::domain::schema::{NumberRule, Payload};
use crate::domain::value_object::{Networks, timestamp};

/// Validated presale listing
///
/// No cross-field rules apply: a soft cap above the hard cap is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Presale {
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub soft_cap_usd: f64,
    pub hard_cap_usd: f64,
    pub token_supply: u64,
    pub liquidity_percent: f64,
    pub networks: Networks,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub vesting: Option<String>,
}

impl Presale {
    /// Validate a request body
    pub fn from_payload(body: &Value) -> Result<Self, ValidationError> {
        let mut p = Payload::new(body)?;

        let presale = Self {
            name: p.required_str("name"),
            symbol: p.required_str("symbol"),
            price_usd: p.required_f64("price_usd", NumberRule::Positive),
            soft_cap_usd: p.required_f64("soft_cap_usd", NumberRule::NonNegative),
            hard_cap_usd: p.required_f64("hard_cap_usd", NumberRule::NonNegative),
            token_supply: p.required_u64("token_supply"),
            liquidity_percent: p.required_f64("liquidity_percent", NumberRule::Between(0.0, 100.0)),
            networks: Networks::new(p.string_list_or("networks", || {
                Networks::default().into_inner()
            })),
            start_at: p.optional_timestamp("start_at"),
            end_at: p.optional_timestamp("end_at"),
            vesting: p.optional_str("vesting"),
        };

        p.finish()?;
        Ok(presale)
    }

    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("name".into(), Value::from(self.name.as_str()));
        doc.insert("symbol".into(), Value::from(self.symbol.as_str()));
        doc.insert("price_usd".into(), Value::from(self.price_usd));
        doc.insert("soft_cap_usd".into(), Value::from(self.soft_cap_usd));
        doc.insert("hard_cap_usd".into(), Value::from(self.hard_cap_usd));
        doc.insert("token_supply".into(), Value::from(self.token_supply));
        doc.insert("liquidity_percent".into(), Value::from(self.liquidity_percent));
        doc.insert("networks".into(), Value::from(self.networks.as_slice().to_vec()));
        doc.insert(
            "start_at".into(),
            self.start_at.as_ref().map(timestamp::format).into(),
        );
        doc.insert(
            "end_at".into(),
            self.end_at.as_ref().map(timestamp::format).into(),
        );
        doc.insert("vesting".into(), self.vesting.clone().into());
        doc
    }
}
