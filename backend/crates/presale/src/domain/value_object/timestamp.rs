//! Timestamp parsing and storage format
//!
//! Accepted inputs, all normalized to UTC:
//! - RFC 3339 (`2025-01-01T12:00:00+02:00`)
//! - naive ISO-8601 date-time, read as UTC (`2025-01-01T12:00:00`)
//! - plain date, midnight UTC (`2025-01-01`)
//! - Unix seconds as a number or numeric string, fractions kept; values
//!   beyond 2e10 are read as milliseconds

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse(value: &Value) -> Result<DateTime<Utc>, String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            parse_str(s).or_else(|err| match s.parse::<f64>() {
                Ok(secs) => from_unix(secs),
                Err(_) => Err(err),
            })
        }
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| INVALID_UNIX.to_string())
            .and_then(from_unix),
        _ => Err("must be a datetime".to_string()),
    }
}

const INVALID_UNIX: &str = "must be a valid Unix timestamp";

/// Magnitudes above this are milliseconds
const MILLIS_THRESHOLD: f64 = 2e10;

fn from_unix(value: f64) -> Result<DateTime<Utc>, String> {
    if !value.is_finite() {
        return Err(INVALID_UNIX.to_string());
    }
    let secs = if value.abs() > MILLIS_THRESHOLD {
        value / 1000.0
    } else {
        value
    };
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(INVALID_UNIX.to_string());
    }
    DateTime::from_timestamp(whole as i64, nanos).ok_or_else(|| INVALID_UNIX.to_string())
}

fn parse_str(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid datetime format: {s:?}"))
}

/// Storage and wire form
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roundtrip(value: Value) -> String {
        format(&parse(&value).unwrap())
    }

    #[test]
    fn test_rfc3339_normalized_to_utc() {
        assert_eq!(
            roundtrip(json!("2025-03-01T12:00:00+02:00")),
            "2025-03-01T10:00:00Z"
        );
        assert_eq!(roundtrip(json!("2025-03-01T10:00:00Z")), "2025-03-01T10:00:00Z");
    }

    #[test]
    fn test_naive_and_date_inputs() {
        assert_eq!(roundtrip(json!("2025-03-01T10:00:00")), "2025-03-01T10:00:00Z");
        assert_eq!(roundtrip(json!("2025-03-01 10:00:00.5")), "2025-03-01T10:00:00.500Z");
        assert_eq!(roundtrip(json!("2025-03-01")), "2025-03-01T00:00:00Z");
    }

    #[test]
    fn test_unix_seconds() {
        assert_eq!(roundtrip(json!(0)), "1970-01-01T00:00:00Z");
        assert_eq!(roundtrip(json!(1.5)), "1970-01-01T00:00:01.500Z");
        assert_eq!(roundtrip(json!("1717200000")), "2024-06-01T00:00:00Z");
        assert_eq!(roundtrip(json!(1717200000000u64)), "2024-06-01T00:00:00Z");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse(&json!("next tuesday")).is_err());
        assert!(parse(&json!(true)).is_err());
        assert!(parse(&json!("1e400")).is_err());
    }
}
