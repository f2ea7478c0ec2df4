//! Multi-select column filters.
//!
//! Each filter dropdown maps a field key to the set of values the user ticked.
//! A record passes when, for every field with a non-empty selection, its value
//! is one of the selected values. Array fields (e.g. a grouped company's
//! `technologies`) pass when any element is selected.

use crate::record::{field, is_blank, stringify};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    selections: BTreeMap<String, BTreeSet<String>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the selection for `key`.
    pub fn select(&mut self, key: &str, value: &str) {
        self.selections
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string());
    }

    /// Select or deselect `value`, as a checkbox click does.
    pub fn toggle(&mut self, key: &str, value: &str) {
        let selected = self.selections.entry(key.to_string()).or_default();
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        if selected.is_empty() {
            self.selections.remove(key);
        }
    }

    /// Replace the whole selection for `key`.
    pub fn set<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.selections.remove(key);
        } else {
            self.selections.insert(key.to_string(), values);
        }
    }

    pub fn clear(&mut self, key: &str) {
        self.selections.remove(key);
    }

    pub fn clear_all(&mut self) {
        self.selections.clear();
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.selections
            .get(key)
            .map(|s| s.contains(value))
            .unwrap_or(false)
    }

    pub fn selected(&self, key: &str) -> Vec<String> {
        self.selections
            .get(key)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.values().all(|s| s.is_empty())
    }

    /// Number of selected values across all fields, for the "N filters" chip.
    pub fn active_count(&self) -> usize {
        self.selections.values().map(|s| s.len()).sum()
    }

    /// Iterate `(key, value)` pairs of every active selection.
    pub fn chips(&self) -> Vec<(String, String)> {
        self.selections
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.clone(), v.clone())))
            .collect()
    }

    pub fn matches(&self, record: &Value) -> bool {
        self.selections.iter().all(|(key, selected)| {
            if selected.is_empty() {
                return true;
            }
            match field(record, key) {
                Some(Value::Array(items)) => items.iter().any(|i| selected.contains(&stringify(i))),
                Some(value) => selected.contains(&stringify(value)),
                None => false,
            }
        })
    }
}

/// Sorted, de-duplicated, non-blank values of `key`, for dropdown options.
pub fn distinct_values<'a, I>(records: I, key: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut values = BTreeSet::new();
    for record in records {
        match field(record, key) {
            Some(Value::Array(items)) => {
                for item in items.iter().filter(|i| !is_blank(i)) {
                    values.insert(stringify(item));
                }
            }
            Some(value) if !is_blank(value) => {
                values.insert(stringify(value));
            }
            _ => {}
        }
    }
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_rows() -> Vec<Value> {
        vec![
            json!({"companyName": "Acme", "intentStatus": "High", "region": "EMEA", "technologies": ["HubSpot", "Slack"]}),
            json!({"companyName": "Zeta", "intentStatus": "Low", "region": "APAC", "technologies": ["Salesforce"]}),
            json!({"companyName": "Beta", "intentStatus": "High", "region": "APAC", "technologies": []}),
            json!({"companyName": "Gamma", "intentStatus": "", "region": null}),
        ]
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let f = FilterSet::new();
        assert!(f.is_empty());
        assert!(sample_rows().iter().all(|r| f.matches(r)));
    }

    #[test]
    fn test_single_field_selection() {
        let mut f = FilterSet::new();
        f.select("intentStatus", "High");
        let names: Vec<_> = sample_rows()
            .into_iter()
            .filter(|r| f.matches(r))
            .map(|r| r["companyName"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Acme", "Beta"]);
    }

    #[test]
    fn test_fields_combine_with_and_values_with_or() {
        let mut f = FilterSet::new();
        f.set("intentStatus", ["High", "Low"]);
        f.select("region", "APAC");
        let rows = sample_rows();
        let passed: Vec<_> = rows.iter().filter(|r| f.matches(r)).collect();
        assert_eq!(passed.len(), 2);
        assert_eq!(f.active_count(), 3);
    }

    #[test]
    fn test_array_fields_match_any_element() {
        let mut f = FilterSet::new();
        f.select("technologies", "Slack");
        let rows = sample_rows();
        let passed: Vec<_> = rows.iter().filter(|r| f.matches(r)).collect();
        assert_eq!(passed.len(), 1);
        assert_eq!(passed[0]["companyName"], "Acme");
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut f = FilterSet::new();
        f.toggle("region", "EMEA");
        assert!(f.is_selected("region", "EMEA"));
        f.toggle("region", "EMEA");
        assert!(!f.is_selected("region", "EMEA"));
        assert!(f.is_empty());
        assert!(f.chips().is_empty());
    }

    #[test]
    fn test_missing_field_fails_an_active_filter() {
        let mut f = FilterSet::new();
        f.select("industry", "Retail");
        assert!(!f.matches(&json!({"companyName": "Acme"})));
    }

    #[test]
    fn test_distinct_values_are_sorted_and_skip_blanks() {
        let rows = sample_rows();
        assert_eq!(distinct_values(&rows, "intentStatus"), vec!["High", "Low"]);
        assert_eq!(distinct_values(&rows, "region"), vec!["APAC", "EMEA"]);
        assert_eq!(
            distinct_values(&rows, "technologies"),
            vec!["HubSpot", "Salesforce", "Slack"]
        );
    }
}
