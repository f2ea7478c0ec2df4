//! Uniform access to rows as JSON records.
//!
//! Tables search, filter, sort and export the records exactly as the backend
//! sent them. Typed rows are decoded from those records with [`decode_rows`]
//! for aggregation; [`to_record`] is for rows derived locally.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Serialize a typed row into a JSON record.
pub fn to_record<T: Serialize>(row: &T) -> Value {
    match serde_json::to_value(row) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[BI] record: failed to serialize row: {}", e);
            Value::Null
        }
    }
}

pub fn to_records<T: Serialize>(rows: &[T]) -> Vec<Value> {
    rows.iter().map(to_record).collect()
}

/// Typed rows for the records that decode; the rest are logged and skipped.
pub fn decode_rows<T: DeserializeOwned>(records: &[Value]) -> Vec<T> {
    records
        .iter()
        .filter_map(|record| match T::deserialize(record) {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("[BI] record: skipping undecodable row: {}", e);
                None
            }
        })
        .collect()
}

/// Resolve a dotted path (`dailyPerformance.close`) inside a record.
pub fn field<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |current, key| current.as_object()?.get(key))
}

/// Text form of a value as shown in tables and written to CSV.
///
/// Strings are verbatim, null is empty, arrays join their elements with
/// `", "`, objects fall back to compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Stringified field, empty when absent.
pub fn field_string(record: &Value, path: &str) -> String {
    field(record, path).map(stringify).unwrap_or_default()
}

/// Numeric field, accepting numbers and numeric strings.
pub fn field_number(record: &Value, path: &str) -> Option<f64> {
    field(record, path).and_then(bi_model::lenient::number_from_value)
}

/// True for null, missing-equivalent and blank-string values.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dotted_paths() {
        let r = json!({"a": {"b": {"c": 3}}, "x": 1});
        assert_eq!(field(&r, "a.b.c"), Some(&json!(3)));
        assert_eq!(field(&r, "x"), Some(&json!(1)));
        assert_eq!(field(&r, "a.missing"), None);
        assert_eq!(field(&r, "x.y"), None);
    }

    #[test]
    fn test_stringify_shapes() {
        assert_eq!(stringify(&json!(null)), "");
        assert_eq!(stringify(&json!("Acme")), "Acme");
        assert_eq!(stringify(&json!(12.5)), "12.5");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&json!(["HubSpot", "Salesforce"])), "HubSpot, Salesforce");
        assert_eq!(stringify(&json!({"open": 1})), "{\"open\":1}");
    }

    #[test]
    fn test_typed_rows_become_camel_case_records() {
        let row = bi_model::intent::IntentRow {
            company_name: "Acme".to_string(),
            intent_status: "High".to_string(),
        };
        let rec = to_record(&row);
        assert_eq!(field_string(&rec, "companyName"), "Acme");
        assert_eq!(field_string(&rec, "intentStatus"), "High");
    }

    #[test]
    fn test_decode_rows_keeps_raw_records_intact() {
        let records = vec![
            json!({"companyName": "Acme", "technology": "HubSpot", "purchaseProbability": "72%"}),
            json!("not a row"),
        ];
        let rows: Vec<bi_model::ntp::NtpRow> = decode_rows(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].purchase_probability, Some(72.0));
        // the record the table works on still holds the backend's text
        assert_eq!(field_string(&records[0], "purchaseProbability"), "72%");
        assert!(crate::search::record_matches_search(&records[0], "72%"));
        let visible: Vec<&Value> = records.iter().take(1).collect();
        let csv = crate::export::to_csv(&visible, &["companyName", "purchaseProbability"]).unwrap();
        assert_eq!(csv, "\"companyName\",\"purchaseProbability\"\n\"Acme\",\"72%\"");
    }

    #[test]
    fn test_numbers_from_strings() {
        let r = json!({"p": "72%", "q": 3, "s": "n/a"});
        assert_eq!(field_number(&r, "p"), Some(72.0));
        assert_eq!(field_number(&r, "q"), Some(3.0));
        assert_eq!(field_number(&r, "s"), None);
    }
}
