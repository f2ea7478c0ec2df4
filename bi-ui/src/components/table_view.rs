//! Search, filters, sorting, pagination and CSV export around a `DataTable`.
//!
//! Every table view in the dashboard is a `TableView` over JSON records with
//! its own column and filter set. The export writes exactly the filtered,
//! sorted set the user is looking at (all pages).

use super::{DataTable, DownloadButton, FilterDropdown, Pagination, SearchBox};
use crate::bridge;
use bi_data::export::{columns_to_csv, Column};
use bi_data::filter::{distinct_values, FilterSet};
use bi_data::pagination::DEFAULT_ROWS_PER_PAGE;
use bi_data::sort::SortSpec;
use bi_data::table::TableQuery;
use bi_utils::export::csv_filename;
use dioxus::prelude::*;
use serde_json::Value;

/// A filter dropdown over one record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub key: String,
    pub label: String,
}

impl FilterSpec {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TableViewProps {
    /// Export filename prefix, e.g. "intent"
    pub view: String,
    pub records: Vec<Value>,
    pub columns: Vec<Column>,
    #[props(default)]
    pub filters: Vec<FilterSpec>,
    /// CSV field set when it differs from the displayed columns
    #[props(default)]
    pub export_columns: Option<Vec<Column>>,
    #[props(default)]
    pub initial_sort: Option<SortSpec>,
    #[props(default)]
    pub on_row_click: Option<EventHandler<Value>>,
}

#[component]
pub fn TableView(props: TableViewProps) -> Element {
    let initial_sort = props.initial_sort.clone();
    let mut search = use_signal(String::new);
    let mut filters = use_signal(FilterSet::new);
    let mut sort = use_signal(move || initial_sort);
    let mut page = use_signal(|| 1usize);
    let mut per_page = use_signal(|| DEFAULT_ROWS_PER_PAGE);
    let mut export_error = use_signal(|| None::<String>);

    let query = TableQuery {
        search: search(),
        filters: filters(),
        sort: sort(),
    };
    let table_page = query.page(&props.records, page(), per_page());
    let rows: Vec<Value> = table_page.rows.iter().map(|r| (*r).clone()).collect();
    let shown_page = table_page.page;
    let page_count = table_page.page_count;
    let total = table_page.total;
    let chips = filters.read().chips();

    let dropdowns: Vec<(FilterSpec, Vec<String>, Vec<String>)> = props
        .filters
        .iter()
        .map(|spec| {
            (
                spec.clone(),
                distinct_values(&props.records, &spec.key),
                filters.read().selected(&spec.key),
            )
        })
        .collect();

    let on_export = {
        let records = props.records.clone();
        let columns = props.export_columns.clone().unwrap_or_else(|| props.columns.clone());
        let view = props.view.clone();
        move |_: ()| {
            let query = TableQuery {
                search: search(),
                filters: filters(),
                sort: sort(),
            };
            let visible = query.apply(&records);
            let result = columns_to_csv(&visible, &columns)
                .map_err(|e| e.to_string())
                .and_then(|text| bridge::download_csv(&csv_filename(&view, &bridge::today()), &text));
            if let Err(e) = result {
                log::error!("[BI] export of {} failed: {}", view, e);
                export_error.set(Some(format!("Export failed: {}", e)));
            }
        }
    };

    rsx! {
        div {
            div {
                style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap; margin-bottom: 8px;",
                SearchBox {
                    value: search(),
                    on_change: move |term: String| {
                        search.set(term);
                        page.set(1);
                    },
                }
                for (spec, options, selected) in dropdowns {
                    FilterDropdown {
                        key: "{spec.key}",
                        label: spec.label.clone(),
                        options,
                        selected,
                        on_toggle: {
                            let key = spec.key.clone();
                            move |value: String| {
                                filters.write().toggle(&key, &value);
                                page.set(1);
                            }
                        },
                        on_clear: {
                            let key = spec.key.clone();
                            move |_: ()| {
                                filters.write().clear(&key);
                                page.set(1);
                            }
                        },
                    }
                }
                div { style: "flex: 1;" }
                DownloadButton {
                    disabled: total == 0,
                    on_click: on_export,
                }
            }
            if !chips.is_empty() {
                div {
                    style: "display: flex; gap: 6px; flex-wrap: wrap; margin-bottom: 8px;",
                    for (key, value) in chips {
                        span {
                            key: "{key}={value}",
                            style: "padding: 2px 8px; background: #E8EAF6; border-radius: 10px; font-size: 12px;",
                            "{value} "
                            button {
                                style: "border: none; background: none; cursor: pointer;",
                                onclick: {
                                    let key = key.clone();
                                    let value = value.clone();
                                    move |_| {
                                        filters.write().toggle(&key, &value);
                                        page.set(1);
                                    }
                                },
                                "×"
                            }
                        }
                    }
                    button {
                        style: "border: none; background: none; color: #1565C0; cursor: pointer; font-size: 12px;",
                        onclick: move |_| {
                            filters.write().clear_all();
                            page.set(1);
                        },
                        "Clear all"
                    }
                }
            }
            if let Some(err) = export_error() {
                super::ErrorDisplay {
                    message: err,
                    on_dismiss: move |_: ()| export_error.set(None),
                }
            }
            DataTable {
                rows,
                columns: props.columns.clone(),
                sort: sort(),
                on_sort: move |key: String| {
                    let next = SortSpec::after_click(sort.read().as_ref(), &key);
                    sort.set(Some(next));
                },
                on_row_click: props.on_row_click,
            }
            Pagination {
                page: shown_page,
                page_count,
                total,
                per_page: per_page(),
                on_page: move |n: usize| page.set(n),
                on_per_page: move |n: usize| {
                    per_page.set(n);
                    page.set(1);
                },
            }
        }
    }
}
