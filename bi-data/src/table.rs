//! The search → filter → sort pipeline shared by every table view.

use crate::filter::FilterSet;
use crate::pagination::{clamp_page, page_count, page_slice};
use crate::search::record_matches_search;
use crate::sort::{sort_records, SortSpec};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableQuery {
    pub search: String,
    pub filters: FilterSet,
    pub sort: Option<SortSpec>,
}

/// One rendered page of a filtered table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a Value>,
    /// Page actually shown (clamped into range).
    pub page: usize,
    pub page_count: usize,
    /// Size of the filtered set.
    pub total: usize,
}

impl TableQuery {
    pub fn with_search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    /// Filtered and sorted records, in display order.
    pub fn apply<'a>(&self, records: &'a [Value]) -> Vec<&'a Value> {
        let mut rows: Vec<&Value> = records
            .iter()
            .filter(|r| record_matches_search(r, &self.search))
            .filter(|r| self.filters.matches(r))
            .collect();
        if let Some(spec) = &self.sort {
            sort_records(&mut rows, spec);
        }
        rows
    }

    /// Page `page` of the filtered set.
    pub fn page<'a>(&self, records: &'a [Value], page: usize, per_page: usize) -> TablePage<'a> {
        let filtered = self.apply(records);
        let count = page_count(filtered.len(), per_page);
        let page = clamp_page(page, count);
        TablePage {
            rows: page_slice(&filtered, page, per_page).to_vec(),
            page,
            page_count: count,
            total: filtered.len(),
        }
    }
}
