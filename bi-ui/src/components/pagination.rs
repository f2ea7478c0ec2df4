//! Page navigation with an ellipsis window and rows-per-page selector.

use bi_data::pagination::{page_window, range_label, PageItem, ROWS_PER_PAGE_OPTIONS};
use dioxus::prelude::*;

const ACTIVE_STYLE: &str = "min-width: 32px; padding: 4px 8px; border: 1px solid #1565C0; border-radius: 4px; background: #1565C0; color: white;";

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    /// Current page, 1-based
    pub page: usize,
    pub page_count: usize,
    /// Size of the filtered set
    pub total: usize,
    pub per_page: usize,
    pub on_page: EventHandler<usize>,
    pub on_per_page: EventHandler<usize>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let page = props.page;
    let count = props.page_count;
    let label = range_label(page, props.per_page, props.total);
    let items = page_window(page, count);
    let button_style = "min-width: 32px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; background: white; cursor: pointer;";

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-top: 8px; font-size: 13px; flex-wrap: wrap; gap: 8px;",
            span { style: "color: #666;", "{label}" }
            div {
                style: "display: flex; gap: 4px; align-items: center;",
                button {
                    style: button_style,
                    disabled: page <= 1,
                    onclick: move |_| props.on_page.call(page.saturating_sub(1).max(1)),
                    "‹ Prev"
                }
                for (i, item) in items.into_iter().enumerate() {
                    {match item {
                        PageItem::Page(n) => {
                            let style = if n == page { ACTIVE_STYLE } else { button_style };
                            rsx! {
                                button {
                                    key: "p{n}",
                                    style: "{style}",
                                    onclick: move |_| props.on_page.call(n),
                                    "{n}"
                                }
                            }
                        }
                        PageItem::Ellipsis => rsx! {
                            span { key: "e{i}", style: "padding: 0 4px; color: #888;", "…" }
                        },
                    }}
                }
                button {
                    style: button_style,
                    disabled: page >= count,
                    onclick: move |_| props.on_page.call((page + 1).min(count.max(1))),
                    "Next ›"
                }
            }
            label {
                style: "color: #666;",
                "Rows per page: "
                select {
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(n) = evt.value().parse::<usize>() {
                            props.on_per_page.call(n);
                        }
                    },
                    for n in ROWS_PER_PAGE_OPTIONS {
                        option {
                            value: "{n}",
                            selected: n == props.per_page,
                            "{n}"
                        }
                    }
                }
            }
        }
    }
}
