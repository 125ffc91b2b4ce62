//! Schema Readers
//!
//! [`Payload`] reads fields out of an untyped JSON request body. Each accessor
//! checks type and constraint, records a violation on failure and hands back a
//! placeholder so reading can continue; [`Payload::finish`] then rejects the
//! whole payload if anything was recorded. Unknown fields are ignored.
//!
//! Scalars are read leniently: numbers and booleans also accept their string
//! spellings (`"0.05"`, `"1000"`, `"yes"`), numbers accept booleans, and
//! booleans accept `0`/`1`. Strings must be JSON strings.

use chrono::{DateTime, Utc};
use kernel::validation::{ValidationError, Violations};
use serde_json::{Map, Value};

use crate::domain::value_object::timestamp;

/// Numeric constraint attached to a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberRule {
    /// `> 0`
    Positive,
    /// `>= 0`
    NonNegative,
    /// `min <= x <= max`
    Between(f64, f64),
}

impl NumberRule {
    pub fn check(&self, value: f64) -> Result<(), String> {
        match *self {
            NumberRule::Positive if value > 0.0 => Ok(()),
            NumberRule::Positive => Err("must be greater than 0".to_string()),
            NumberRule::NonNegative if value >= 0.0 => Ok(()),
            NumberRule::NonNegative => Err("must be greater than or equal to 0".to_string()),
            NumberRule::Between(min, _) if value < min => {
                Err(format!("must be greater than or equal to {min}"))
            }
            NumberRule::Between(_, max) if value > max => {
                Err(format!("must be less than or equal to {max}"))
            }
            NumberRule::Between(..) => Ok(()),
        }
    }
}

/// Strict reader over a request body
pub struct Payload<'a> {
    fields: &'a Map<String, Value>,
    violations: Violations,
}

impl<'a> Payload<'a> {
    /// The body must be a JSON object
    pub fn new(body: &'a Value) -> Result<Self, ValidationError> {
        match body {
            Value::Object(fields) => Ok(Self {
                fields,
                violations: Violations::new(),
            }),
            _ => Err(ValidationError::single("body", "must be a JSON object")),
        }
    }

    /// Present and not `null`
    fn present(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    fn missing(&mut self, field: &str) {
        self.violations.push(field, "field required");
    }

    pub fn required_str(&mut self, field: &str) -> String {
        match self.present(field) {
            Some(value) => self.violations.check(field, as_str(value)).unwrap_or_default(),
            None => {
                self.missing(field);
                String::new()
            }
        }
    }

    pub fn optional_str(&mut self, field: &str) -> Option<String> {
        let value = self.present(field)?;
        self.violations.check(field, as_str(value))
    }

    pub fn required_f64(&mut self, field: &str, rule: NumberRule) -> f64 {
        match self.present(field) {
            Some(value) => {
                let result = as_f64(value).and_then(|n| rule.check(n).map(|_| n));
                self.violations.check(field, result).unwrap_or_default()
            }
            None => {
                self.missing(field);
                0.0
            }
        }
    }

    pub fn required_u64(&mut self, field: &str) -> u64 {
        match self.present(field) {
            Some(value) => self.violations.check(field, as_u64(value)).unwrap_or_default(),
            None => {
                self.missing(field);
                0
            }
        }
    }

    /// Optional integer with an inclusive range
    pub fn optional_u64_between(&mut self, field: &str, min: u64, max: u64) -> Option<u64> {
        let value = self.present(field)?;
        let result = as_u64(value).and_then(|n| {
            NumberRule::Between(min as f64, max as f64)
                .check(n as f64)
                .map(|_| n)
        });
        self.violations.check(field, result)
    }

    pub fn bool_or(&mut self, field: &str, default: bool) -> bool {
        match self.present(field) {
            Some(value) => self.violations.check(field, as_bool(value)).unwrap_or(default),
            None => default,
        }
    }

    /// Array of strings; `default` applies only when the field is absent
    pub fn string_list_or(
        &mut self,
        field: &str,
        default: impl FnOnce() -> Vec<String>,
    ) -> Vec<String> {
        match self.fields.get(field) {
            None => default(),
            Some(value) => self
                .violations
                .check(field, as_string_list(value))
                .unwrap_or_default(),
        }
    }

    pub fn optional_timestamp(&mut self, field: &str) -> Option<DateTime<Utc>> {
        let value = self.present(field)?;
        self.violations.check(field, timestamp::parse(value))
    }

    pub fn has_violation(&self, field: &str) -> bool {
        self.violations.contains(field)
    }

    /// Record a violation found outside the accessors (e.g. by a value object)
    pub fn reject(&mut self, field: &str, reason: impl Into<String>) {
        self.violations.push(field, reason);
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        self.violations.finish()
    }
}

fn as_str(value: &Value) -> Result<String, String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "must be a string".to_string())
}

fn as_f64(value: &Value) -> Result<f64, String> {
    const NOT_A_NUMBER: &str = "must be a number";
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| NOT_A_NUMBER.to_string()),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            Ok(_) => Err("must be a finite number".to_string()),
            Err(_) => Err(NOT_A_NUMBER.to_string()),
        },
        _ => Err(NOT_A_NUMBER.to_string()),
    }
}

/// Integers, floats without a fractional part, and their string spellings
fn as_u64(value: &Value) -> Result<u64, String> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                Ok(i)
            } else if n.as_i64().is_some() {
                Err(NEGATIVE.to_string())
            } else {
                n.as_f64().map_or_else(|| Err(NOT_AN_INTEGER.to_string()), whole_u64)
            }
        }
        Value::Bool(b) => Ok(u64::from(*b)),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<u64>() {
                Ok(i)
            } else if s.parse::<i64>().is_ok() {
                Err(NEGATIVE.to_string())
            } else {
                s.parse::<f64>()
                    .map_err(|_| NOT_AN_INTEGER.to_string())
                    .and_then(whole_u64)
            }
        }
        _ => Err(NOT_AN_INTEGER.to_string()),
    }
}

const NEGATIVE: &str = "must be greater than or equal to 0";
const NOT_AN_INTEGER: &str = "must be an integer";

/// `u64::MAX as f64` rounds up to 2^64, which is already out of range
fn whole_u64(f: f64) -> Result<u64, String> {
    if !f.is_finite() || f.fract() != 0.0 {
        Err(NOT_AN_INTEGER.to_string())
    } else if f < 0.0 {
        Err(NEGATIVE.to_string())
    } else if f < u64::MAX as f64 {
        Ok(f as u64)
    } else {
        Err("must fit in an unsigned 64-bit integer".to_string())
    }
}

fn as_bool(value: &Value) -> Result<bool, String> {
    const NOT_A_BOOL: &str = "must be a boolean";
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Ok(false),
            Some(f) if f == 1.0 => Ok(true),
            _ => Err(NOT_A_BOOL.to_string()),
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
            "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
            _ => Err(NOT_A_BOOL.to_string()),
        },
        _ => Err(NOT_A_BOOL.to_string()),
    }
}

fn as_string_list(value: &Value) -> Result<Vec<String>, String> {
    let items = value
        .as_array()
        .ok_or_else(|| "must be an array of strings".to_string())?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| "must be an array of strings".to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_rules() {
        assert!(NumberRule::Positive.check(0.01).is_ok());
        assert!(NumberRule::Positive.check(0.0).is_err());
        assert!(NumberRule::NonNegative.check(0.0).is_ok());
        assert!(NumberRule::NonNegative.check(-1.0).is_err());
        assert!(NumberRule::Between(0.0, 100.0).check(100.0).is_ok());
        assert!(NumberRule::Between(0.0, 100.0).check(0.0).is_ok());
        assert!(NumberRule::Between(0.0, 100.0).check(100.5).is_err());
        assert!(NumberRule::Between(0.0, 100.0).check(-0.5).is_err());
    }

    #[test]
    fn test_non_object_body_rejected() {
        let body = json!([1, 2, 3]);
        let err = Payload::new(&body).err().unwrap();
        assert!(err.has_field("body"));
    }

    #[test]
    fn test_collects_every_violation() {
        let body = json!({ "count": "ten", "ratio": 150 });
        let mut p = Payload::new(&body).unwrap();
        let _ = p.required_str("name");
        let _ = p.required_u64("count");
        let _ = p.required_f64("ratio", NumberRule::Between(0.0, 100.0));
        let err = p.finish().unwrap_err();

        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["name", "count", "ratio"]);
    }

    #[test]
    fn test_integer_coercion() {
        let body = json!({ "a": 5, "b": 5.0, "c": 5.5, "d": -1 });
        let mut p = Payload::new(&body).unwrap();
        assert_eq!(p.required_u64("a"), 5);
        assert_eq!(p.required_u64("b"), 5);
        let _ = p.required_u64("c");
        let _ = p.required_u64("d");
        let err = p.finish().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["c", "d"]);
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let body = json!({ "price": " 0.05 ", "supply": "1000", "whole": "5.0", "flag": true });
        let mut p = Payload::new(&body).unwrap();
        assert_eq!(p.required_f64("price", NumberRule::Positive), 0.05);
        assert_eq!(p.required_u64("supply"), 1000);
        assert_eq!(p.required_u64("whole"), 5);
        assert_eq!(p.required_f64("flag", NumberRule::NonNegative), 1.0);
        assert!(p.finish().is_ok());

        let body = json!({ "price": "cheap", "supply": "-3", "frac": "2.5", "inf": "inf" });
        let mut p = Payload::new(&body).unwrap();
        let _ = p.required_f64("price", NumberRule::Positive);
        let _ = p.required_u64("supply");
        let _ = p.required_u64("frac");
        let _ = p.required_f64("inf", NumberRule::NonNegative);
        let err = p.finish().unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec!["price", "supply", "frac", "inf"]
        );
    }

    #[test]
    fn test_integer_upper_bound() {
        // 2^64 and up do not fit
        let body = json!({ "max": 18446744073709551615u64, "over": 18446744073709551616.0 });
        let mut p = Payload::new(&body).unwrap();
        assert_eq!(p.required_u64("max"), u64::MAX);
        let _ = p.required_u64("over");
        assert!(p.finish().unwrap_err().has_field("over"));
    }

    #[test]
    fn test_bool_spellings() {
        let body = json!({ "a": "yes", "b": "Off", "c": 1, "d": 0, "e": "maybe", "f": 2 });
        let mut p = Payload::new(&body).unwrap();
        assert!(p.bool_or("a", false));
        assert!(!p.bool_or("b", true));
        assert!(p.bool_or("c", false));
        assert!(!p.bool_or("d", true));
        let _ = p.bool_or("e", true);
        let _ = p.bool_or("f", true);
        let err = p.finish().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["e", "f"]);
    }

    #[test]
    fn test_string_list_default_only_when_absent() {
        let body = json!({ "present": ["SOL"], "bad": null });
        let mut p = Payload::new(&body).unwrap();
        assert_eq!(p.string_list_or("present", Vec::new), vec!["SOL"]);
        assert_eq!(
            p.string_list_or("absent", || vec!["X".to_string()]),
            vec!["X"]
        );
        let _ = p.string_list_or("bad", Vec::new);
        assert!(p.finish().unwrap_err().has_field("bad"));
    }

    #[test]
    fn test_optional_null_is_none() {
        let body = json!({ "vesting": null });
        let mut p = Payload::new(&body).unwrap();
        assert_eq!(p.optional_str("vesting"), None);
        assert_eq!(p.optional_str("missing"), None);
        assert!(p.finish().is_ok());
    }
}
