//! Shaping - stored documents to the strict output schema
//!
//! Stored documents may predate the current schema, so reading is lenient:
//! absent or `null` numbers become 0, absent lists become empty, absent
//! optional strings become `None`, and numeric strings are parsed. A value
//! that is present but cannot be coerced fails the whole listing.

use serde_json::Value;

use crate::domain::document::StoredDocument;
use crate::error::{PresaleError, PresaleResult};

/// A presale as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct PresaleView {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub soft_cap_usd: f64,
    pub hard_cap_usd: f64,
    pub token_supply: u64,
    pub liquidity_percent: f64,
    pub networks: Vec<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub vesting: Option<String>,
}

impl PresaleView {
    pub fn from_document(doc: &StoredDocument) -> PresaleResult<Self> {
        let r = Lenient(doc);
        Ok(Self {
            id: doc.id.to_string(),
            name: r.read("name", string_or_empty)?,
            symbol: r.read("symbol", string_or_empty)?,
            price_usd: r.read("price_usd", float_or_zero)?,
            soft_cap_usd: r.read("soft_cap_usd", float_or_zero)?,
            hard_cap_usd: r.read("hard_cap_usd", float_or_zero)?,
            token_supply: r.read("token_supply", integer_or_zero)?,
            liquidity_percent: r.read("liquidity_percent", float_or_zero)?,
            networks: r.read("networks", string_list_or_empty)?,
            start_at: r.read("start_at", truthy_string)?,
            end_at: r.read("end_at", truthy_string)?,
            vesting: r.read("vesting", optional_string)?,
        })
    }
}

struct Lenient<'a>(&'a StoredDocument);

impl Lenient<'_> {
    fn read<T>(
        &self,
        field: &'static str,
        coerce: fn(Option<&Value>) -> Result<T, String>,
    ) -> PresaleResult<T> {
        let value = self.0.get(field).filter(|v| !v.is_null());
        coerce(value).map_err(|reason| PresaleError::Shaping {
            id: self.0.id,
            field,
            reason,
        })
    }
}

fn string_or_empty(value: Option<&Value>) -> Result<String, String> {
    match value {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("expected a string, found {other}")),
    }
}

fn optional_string(value: Option<&Value>) -> Result<Option<String>, String> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(format!("expected a string, found {other}")),
    }
}

fn float_or_zero(value: Option<&Value>) -> Result<f64, String> {
    match value {
        None => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| format!("unreadable number {n}")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("could not convert {s:?} to float")),
        Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Some(other) => Err(format!("could not convert {other} to float")),
    }
}

/// Floats truncate toward zero
fn integer_or_zero(value: Option<&Value>) -> Result<u64, String> {
    match value {
        None => Ok(0),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_u64() {
                Ok(i)
            } else {
                match n.as_f64() {
                    Some(f) if f >= 0.0 => Ok(f.trunc() as u64),
                    _ => Err(format!("{n} is not a non-negative integer")),
                }
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("could not convert {s:?} to integer")),
        Some(Value::Bool(b)) => Ok(u64::from(*b)),
        Some(other) => Err(format!("could not convert {other} to integer")),
    }
}

fn string_list_or_empty(value: Option<&Value>) -> Result<Vec<String>, String> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(format!("expected a list of strings, found {other}")),
            })
            .collect(),
        Some(other) => Err(format!("expected a list of strings, found {other}")),
    }
}

/// Rendered as a string when present and truthy; `""`, `0` and `false` read as absent
fn truthy_string(value: Option<&Value>) -> Result<Option<String>, String> {
    Ok(match value {
        None | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(other) => Some(other.to_string()),
    })
}
