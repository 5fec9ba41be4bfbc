//! Forgiving field deserializers for catalog documents and profile requests.
//!
//! A missing or mistyped optional field never rejects the payload; it is
//! read as absent instead.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a JSON string; anything else (null, number, object) becomes `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accepts an array and keeps its string elements; a non-array becomes empty.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Stipend as a non-negative integer. Numbers are truncated, strings parsed
/// by their leading digits, everything else is 0.
pub fn stipend<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
            .unwrap_or(0),
        Value::String(s) => parse_stipend(&s),
        _ => 0,
    })
}

/// Parses the leading run of ASCII digits, saturating on overflow.
pub fn parse_stipend(raw: &str) -> u64 {
    raw.trim()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stipend_plain() {
        assert_eq!(parse_stipend("25000"), 25000);
        assert_eq!(parse_stipend("  18000 "), 18000);
    }

    #[test]
    fn test_parse_stipend_stops_at_first_non_digit() {
        assert_eq!(parse_stipend("25,000"), 25);
        assert_eq!(parse_stipend("15000/month"), 15000);
    }

    #[test]
    fn test_parse_stipend_unparsable_is_zero() {
        assert_eq!(parse_stipend("unpaid"), 0);
        assert_eq!(parse_stipend("-500"), 0);
        assert_eq!(parse_stipend(""), 0);
    }

    #[test]
    fn test_parse_stipend_saturates() {
        assert_eq!(parse_stipend("99999999999999999999999"), u64::MAX);
    }
}
