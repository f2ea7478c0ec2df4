//! Plain HTML table with sortable headers and formatted cells.

use bi_data::export::{CellFormat, Column};
use bi_data::record::{field, stringify};
use bi_data::sort::SortSpec;
use dioxus::prelude::*;
use serde_json::Value;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    /// Rows of the current page, already filtered and sorted
    pub rows: Vec<Value>,
    pub columns: Vec<Column>,
    /// Active sort, shown as an arrow on its header
    #[props(default)]
    pub sort: Option<SortSpec>,
    /// Header clicked (column key)
    #[props(default)]
    pub on_sort: Option<EventHandler<String>>,
    /// Row clicked
    #[props(default)]
    pub on_row_click: Option<EventHandler<Value>>,
}

fn sort_indicator(sort: Option<&SortSpec>, key: &str) -> String {
    match sort {
        Some(spec) if spec.key == key => format!(" {}", spec.direction.indicator()),
        _ => String::new(),
    }
}

fn cell(column: &Column, record: &Value) -> Element {
    match column.format {
        CellFormat::Link => {
            let href = column.render(record);
            if href.is_empty() {
                rsx! { "" }
            } else {
                rsx! {
                    a {
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onclick: move |evt| evt.stop_propagation(),
                        "Link"
                    }
                }
            }
        }
        CellFormat::Chips => {
            let chips: Vec<String> = match field(record, &column.key) {
                Some(Value::Array(items)) => items.iter().map(stringify).collect(),
                Some(v) => vec![stringify(v)],
                None => Vec::new(),
            };
            rsx! {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 4px;",
                    for chip in chips.into_iter().filter(|c| !c.is_empty()) {
                        span {
                            style: "padding: 2px 8px; background: #E3F2FD; color: #0D47A1; border-radius: 10px; font-size: 12px;",
                            "{chip}"
                        }
                    }
                }
            }
        }
        _ => {
            let text = column.render(record);
            rsx! { "{text}" }
        }
    }
}

#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let row_style = if props.on_row_click.is_some() {
        "border-bottom: 1px solid #f0f0f0; cursor: pointer;"
    } else {
        "border-bottom: 1px solid #f0f0f0;"
    };
    let column_count = props.columns.len();

    rsx! {
        div {
            style: "overflow-x: auto; border: 1px solid #e0e0e0; border-radius: 4px;",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        for column in props.columns.iter().cloned() {
                            th {
                                key: "{column.key}",
                                style: "text-align: left; padding: 8px; background: #FAFAFA; border-bottom: 2px solid #e0e0e0; white-space: nowrap; cursor: pointer;",
                                onclick: {
                                    let key = column.key.clone();
                                    let sortable = column.sortable;
                                    move |_| {
                                        if sortable {
                                            if let Some(handler) = props.on_sort {
                                                handler.call(key.clone());
                                            }
                                        }
                                    }
                                },
                                "{column.label}"
                                {sort_indicator(props.sort.as_ref(), &column.key)}
                            }
                        }
                    }
                }
                tbody {
                    if props.rows.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                style: "padding: 16px; text-align: center; color: #888;",
                                "No data"
                            }
                        }
                    }
                    for (i, row) in props.rows.iter().cloned().enumerate() {
                        tr {
                            key: "{i}",
                            style: row_style,
                            onclick: {
                                let row = row.clone();
                                move |_| {
                                    if let Some(handler) = props.on_row_click {
                                        handler.call(row.clone());
                                    }
                                }
                            },
                            for column in props.columns.iter() {
                                td {
                                    key: "{column.key}",
                                    style: "padding: 6px 8px; vertical-align: top;",
                                    {cell(column, &row)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
