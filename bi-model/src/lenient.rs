//! Forgiving field deserializers.
//!
//! The backend is not consistent about whether numeric columns arrive as JSON
//! numbers or formatted strings (`"12.5%"`, `"1,200"`), or whether text columns
//! arrive as numbers. These helpers accept either.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a number out of a formatted string, ignoring `,`, `%`, `$` and spaces.
pub fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '%' | '$' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// `Option<f64>` from a number, a numeric string, or null.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// `String` from a string, a number, a bool, or null (empty).
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "string")]
        label: String,
    }

    #[test]
    fn test_parse_formatted_numbers() {
        assert_eq!(parse_number("1,200"), Some(1200.0));
        assert_eq!(parse_number(" 12.5% "), Some(12.5));
        assert_eq!(parse_number("$3.25"), Some(3.25));
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_fields_accept_either_shape() {
        let p: Probe = serde_json::from_str(r#"{"amount":"85%","label":42}"#).unwrap();
        assert_eq!(p.amount, Some(85.0));
        assert_eq!(p.label, "42");

        let p: Probe = serde_json::from_str(r#"{"amount":0.4,"label":null}"#).unwrap();
        assert_eq!(p.amount, Some(0.4));
        assert_eq!(p.label, "");

        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.amount, None);
        assert!(p.label.is_empty());
    }
}
