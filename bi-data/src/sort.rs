//! Column sorting for table views.

use crate::record::{field, is_blank, stringify};
use bi_model::lenient::number_from_value;
use serde_json::Value;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header arrow.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: &str) -> Self {
        Self {
            key: key.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: &str) -> Self {
        Self {
            key: key.to_string(),
            direction: SortDirection::Descending,
        }
    }

    /// Sort after a header click: same column flips direction, a new column
    /// starts ascending.
    pub fn after_click(current: Option<&SortSpec>, key: &str) -> SortSpec {
        match current {
            Some(spec) if spec.key == key => SortSpec {
                key: key.to_string(),
                direction: spec.direction.toggled(),
            },
            _ => SortSpec::ascending(key),
        }
    }
}

/// Compare two present values: numerically when both are numeric, otherwise
/// as case-insensitive text.
fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (number_from_value(a), number_from_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => stringify(a).to_lowercase().cmp(&stringify(b).to_lowercase()),
    }
}

/// Order two records by `spec`. Missing or blank values go last in both
/// directions.
pub fn compare_records(a: &Value, b: &Value, spec: &SortSpec) -> Ordering {
    let va = field(a, &spec.key).filter(|v| !is_blank(v));
    let vb = field(b, &spec.key).filter(|v| !is_blank(v));
    match (va, vb) {
        (Some(x), Some(y)) => {
            let ord = compare_present(x, y);
            match spec.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort.
pub fn sort_records(records: &mut [&Value], spec: &SortSpec) {
    records.sort_by(|a, b| compare_records(a, b, spec));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(rows: &[&Value]) -> Vec<String> {
        rows.iter().map(|r| stringify(&r["name"])).collect()
    }

    #[test]
    fn test_numeric_strings_sort_numerically() {
        let data = vec![
            json!({"name": "a", "cap": "1,200"}),
            json!({"name": "b", "cap": 90}),
            json!({"name": "c", "cap": "15"}),
        ];
        let mut rows: Vec<&Value> = data.iter().collect();
        sort_records(&mut rows, &SortSpec::ascending("cap"));
        assert_eq!(names(&rows), vec!["c", "b", "a"]);
        sort_records(&mut rows, &SortSpec::descending("cap"));
        assert_eq!(names(&rows), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let data = vec![json!({"name": "beta"}), json!({"name": "Alpha"}), json!({"name": "gamma"})];
        let mut rows: Vec<&Value> = data.iter().collect();
        sort_records(&mut rows, &SortSpec::ascending("name"));
        assert_eq!(names(&rows), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_blanks_go_last_both_ways() {
        let data = vec![
            json!({"name": "x", "v": null}),
            json!({"name": "y", "v": 2}),
            json!({"name": "z"}),
            json!({"name": "w", "v": 1}),
        ];
        let mut rows: Vec<&Value> = data.iter().collect();
        sort_records(&mut rows, &SortSpec::ascending("v"));
        assert_eq!(names(&rows), vec!["w", "y", "x", "z"]);
        sort_records(&mut rows, &SortSpec::descending("v"));
        assert_eq!(names(&rows), vec!["y", "w", "x", "z"]);
    }

    #[test]
    fn test_header_clicks_cycle_direction() {
        let first = SortSpec::after_click(None, "name");
        assert_eq!(first, SortSpec::ascending("name"));
        let second = SortSpec::after_click(Some(&first), "name");
        assert_eq!(second.direction, SortDirection::Descending);
        let other = SortSpec::after_click(Some(&second), "region");
        assert_eq!(other, SortSpec::ascending("region"));
    }
}
