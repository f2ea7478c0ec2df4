//! Free-text search across all fields of a row.

use crate::record::{stringify, to_record};
use serde::Serialize;
use serde_json::Value;

/// True iff some stringified top-level field of `record` contains `term`,
/// ignoring case. An empty term matches every row.
pub fn record_matches_search(record: &Value, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    match record {
        Value::Object(map) => map
            .values()
            .any(|v| stringify(v).to_lowercase().contains(&needle)),
        other => stringify(other).to_lowercase().contains(&needle),
    }
}

/// [`record_matches_search`] for typed rows.
pub fn row_matches_search<T: Serialize>(row: &T, term: &str) -> bool {
    record_matches_search(&to_record(row), term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bi_model::ntp::NtpRow;
    use serde_json::json;

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(record_matches_search(&json!({}), ""));
        assert!(record_matches_search(&json!({"a": "b"}), ""));
    }

    #[test]
    fn test_case_insensitive_substring_of_any_field() {
        let r = json!({"companyName": "Acme Corp", "intentStatus": "High-Medium", "score": 87});
        assert!(record_matches_search(&r, "acme"));
        assert!(record_matches_search(&r, "MEDIUM"));
        assert!(record_matches_search(&r, "87"));
        assert!(!record_matches_search(&r, "zeta"));
    }

    #[test]
    fn test_field_boundaries_are_respected() {
        // "Corp" + "High" concatenated would contain "pHi"; no single field does
        let r = json!({"a": "Corp", "b": "High"});
        assert!(!record_matches_search(&r, "phi"));
    }

    #[test]
    fn test_array_fields_are_searched() {
        let r = json!({"companyName": "Acme", "technologies": ["HubSpot", "Marketo"]});
        assert!(record_matches_search(&r, "marketo"));
    }

    #[test]
    fn test_typed_rows() {
        let row = NtpRow {
            company_name: "Zeta".to_string(),
            technology: "Snowflake".to_string(),
            purchase_probability: Some(64.0),
            ..Default::default()
        };
        assert!(row_matches_search(&row, "snow"));
        assert!(row_matches_search(&row, "64"));
        assert!(!row_matches_search(&row, "oracle"));
    }
}
