//! Column definitions and CSV export.
//!
//! A view declares its columns once; the same list drives the table header,
//! cell formatting and the downloadable CSV.
//!
//! # CSV format
//!
//! Header row of field keys, one line per record, every cell double-quoted
//! (embedded quotes doubled), `\n` between lines and no trailing newline:
//!
//! ```text
//! "companyName","intentStatus"
//! "Acme","High"
//! ```

use crate::record::{field, field_number, field_string, stringify};
use bi_utils::{dates, format};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::Value;

/// How a cell value is displayed in the table. Exports always use the raw
/// stringified value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFormat {
    #[default]
    Text,
    /// Thousands-grouped integer.
    Number,
    /// 1.2K / 3.4M / 5.6B.
    Compact,
    Percent,
    /// Percent with an explicit `+` for gains.
    SignedPercent,
    Currency,
    /// ISO date rendered as `Jan 05, 2024`.
    Date,
    /// URL rendered as a link.
    Link,
    /// Array rendered as chips.
    Chips,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Field key (dotted paths allowed).
    pub key: String,
    pub label: String,
    pub format: CellFormat,
    pub sortable: bool,
}

impl Column {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            format: CellFormat::Text,
            sortable: true,
        }
    }

    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Display text of this column for `record`.
    pub fn render(&self, record: &Value) -> String {
        let raw = field(record, &self.key);
        let number = || field_number(record, &self.key);
        let formatted = match self.format {
            CellFormat::Text | CellFormat::Link | CellFormat::Chips => None,
            CellFormat::Number => number().map(|v| {
                let grouped = format::group_thousands(v.abs().round() as u64);
                if v < 0.0 {
                    format!("-{}", grouped)
                } else {
                    grouped
                }
            }),
            CellFormat::Compact => number().map(format::compact_number),
            CellFormat::Percent => number().map(format::percent),
            CellFormat::SignedPercent => number().map(format::signed_percent),
            CellFormat::Currency => number().map(format::currency),
            CellFormat::Date => raw
                .and_then(|v| v.as_str())
                .map(dates::format_display),
        };
        formatted.unwrap_or_else(|| raw.map(stringify).unwrap_or_default())
    }
}

/// Field keys of `columns`, in order.
pub fn column_keys(columns: &[Column]) -> Vec<&str> {
    columns.iter().map(|c| c.key.as_str()).collect()
}

/// Columns for schema-less records: the `preferred` columns present in the
/// data, then one text column for every other key seen in any record, in
/// first-seen order. With no records the `preferred` list is returned as is.
pub fn infer_columns(records: &[Value], preferred: &[Column]) -> Vec<Column> {
    let mut columns: Vec<Column> = preferred
        .iter()
        .filter(|c| records.iter().any(|r| field(r, &c.key).is_some()))
        .cloned()
        .collect();
    for key in union_keys(records) {
        if !columns.iter().any(|c| c.key == key) {
            columns.push(Column::new(&key, &humanize(&key)));
        }
    }
    if columns.is_empty() {
        return preferred.to_vec();
    }
    columns
}

/// Top-level keys across all object records, first occurrence wins.
pub fn union_keys(records: &[Value]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for map in records.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.clone());
            }
        }
    }
    keys
}

/// `purchaseProbability` / `purchase_probability` → "Purchase Probability".
pub fn humanize(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in key.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize `records` to CSV with the given field keys as header.
pub fn to_csv<K: AsRef<str>>(records: &[&Value], fields: &[K]) -> anyhow::Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(fields.iter().map(|f| f.as_ref()))?;
    for record in records {
        wtr.write_record(fields.iter().map(|f| field_string(record, f.as_ref())))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {}", e.error()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    log::info!("[BI] export: wrote {} rows x {} fields", records.len(), fields.len());
    Ok(text)
}

/// [`to_csv`] with the keys of `columns`.
pub fn columns_to_csv(records: &[&Value], columns: &[Column]) -> anyhow::Result<String> {
    to_csv(records, &column_keys(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intent_example() {
        let rows = [json!({"companyName": "Acme", "intentStatus": "High"})];
        let refs: Vec<&Value> = rows.iter().collect();
        let csv = to_csv(&refs, &["companyName", "intentStatus"]).unwrap();
        assert_eq!(csv, "\"companyName\",\"intentStatus\"\n\"Acme\",\"High\"");
    }

    #[test]
    fn test_header_only_when_empty() {
        let csv = to_csv::<&str>(&[], &["a", "b"]).unwrap();
        assert_eq!(csv, "\"a\",\"b\"");
    }

    #[test]
    fn test_round_trip_recovers_values() {
        let rows = vec![
            json!({"name": "Acme, Inc.", "note": "said \"hi\"", "n": 12.5, "tags": ["x", "y"]}),
            json!({"name": "Zeta", "note": "line\nbreak", "n": null}),
        ];
        let refs: Vec<&Value> = rows.iter().collect();
        let fields = ["name", "note", "n", "tags"];
        let csv = to_csv(&refs, &fields).unwrap();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        let headers: Vec<String> = rdr.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(headers, fields);
        let parsed: Vec<Vec<String>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        let expected: Vec<Vec<String>> = rows
            .iter()
            .map(|r| fields.iter().map(|f| field_string(r, f)).collect())
            .collect();
        assert_eq!(parsed, expected);
        assert_eq!(parsed[0][3], "x, y");
    }

    #[test]
    fn test_column_rendering() {
        let r = json!({
            "cap": 2_500_000_000.0_f64,
            "growth": 3.5,
            "price": "1234.5",
            "employees": 15230,
            "date": "2024-01-05",
            "name": "Acme"
        });
        assert_eq!(Column::new("cap", "Cap").with_format(CellFormat::Compact).render(&r), "2.5B");
        assert_eq!(Column::new("growth", "G").with_format(CellFormat::SignedPercent).render(&r), "+3.50%");
        assert_eq!(Column::new("price", "P").with_format(CellFormat::Currency).render(&r), "$1,234.50");
        assert_eq!(Column::new("employees", "E").with_format(CellFormat::Number).render(&r), "15,230");
        assert_eq!(Column::new("date", "D").with_format(CellFormat::Date).render(&r), "Jan 05, 2024");
        assert_eq!(Column::new("name", "N").with_format(CellFormat::Percent).render(&r), "Acme");
        assert_eq!(Column::new("missing", "M").render(&r), "");
    }

    #[test]
    fn test_infer_columns_prefers_known_keys() {
        let preferred = vec![Column::new("companyName", "Company"), Column::new("arr", "ARR")];
        let rows = vec![json!({"companyName": "Acme", "other": 1})];
        let cols = infer_columns(&rows, &preferred);
        assert_eq!(column_keys(&cols), vec!["companyName", "other"]);
        assert_eq!(cols[0].label, "Company");

        let rows = vec![json!({"account_name": "Acme", "renewalDate": "2024-01-05"})];
        let cols = infer_columns(&rows, &preferred);
        assert_eq!(column_keys(&cols), vec!["account_name", "renewalDate"]);
        assert_eq!(cols[1].label, "Renewal Date");

        assert_eq!(infer_columns(&[], &preferred), preferred);
    }

    #[test]
    fn test_infer_columns_keeps_keys_missing_from_first_record() {
        let rows = vec![
            json!({"companyName": "Acme"}),
            json!({"companyName": "Zeta", "arr": 1200, "riskLevel": "High"}),
        ];
        let cols = infer_columns(&rows, &[]);
        assert_eq!(column_keys(&cols), vec!["companyName", "arr", "riskLevel"]);

        let refs: Vec<&Value> = rows.iter().collect();
        let csv = columns_to_csv(&refs, &cols).unwrap();
        assert_eq!(
            csv,
            "\"companyName\",\"arr\",\"riskLevel\"\n\"Acme\",\"\",\"\"\n\"Zeta\",\"1200\",\"High\""
        );

        let preferred = vec![Column::new("riskLevel", "Risk Level")];
        let cols = infer_columns(&rows, &preferred);
        assert_eq!(column_keys(&cols), vec!["riskLevel", "companyName", "arr"]);
    }

    #[test]
    fn test_humanize_keys() {
        assert_eq!(humanize("purchaseProbability"), "Purchase Probability");
        assert_eq!(humanize("linkedin_url"), "Linkedin Url");
        assert_eq!(humanize("eps"), "Eps");
    }

    #[test]
    fn test_columns_drive_export_header() {
        let rows = [json!({"companyName": "Acme", "technology": "HubSpot"})];
        let refs: Vec<&Value> = rows.iter().collect();
        let columns = vec![Column::new("companyName", "Company"), Column::new("technology", "Technology")];
        let csv = columns_to_csv(&refs, &columns).unwrap();
        assert!(csv.starts_with("\"companyName\",\"technology\"\n"));
    }
}
