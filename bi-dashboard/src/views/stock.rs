//! Stock performance: history summary and line chart for a symbol and range,
//! plus a live quote polled every few seconds while the view is mounted.

use bi_data::market::{line_points, stock_summary, StockSummary};
use bi_model::stock::{StockPoint, StockQuote, StockRange};
use bi_model::Endpoint;
use bi_ui::bridge;
use bi_ui::components::{ErrorDisplay, LoadingSpinner, ViewHeader};
use bi_ui::state::AppState;
use bi_utils::format;
use dioxus::prelude::*;

const DEFAULT_SYMBOL: &str = "AAPL";
const QUOTE_POLL_MS: i32 = 5_000;
const CHART_WIDTH: f64 = 760.0;
const CHART_HEIGHT: f64 = 260.0;
const RANGE_STYLE: &str = "padding: 4px 10px; background: white; border: 1px solid #ccc; border-radius: 4px; cursor: pointer;";
const ACTIVE_RANGE_STYLE: &str = "padding: 4px 10px; background: #1565C0; color: white; border: 1px solid #1565C0; border-radius: 4px;";

fn summary_cards(summary: &StockSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Last close", format::currency(summary.last_close)),
        (
            "Change",
            match summary.change_percent {
                Some(p) => format!("{} ({})", format::currency(summary.change), format::signed_percent(p)),
                None => format::currency(summary.change),
            },
        ),
        ("High", format::currency(summary.high)),
        ("Low", format::currency(summary.low)),
        ("Volume", format::compact_number(summary.volume)),
    ]
}

#[component]
pub fn StockView() -> Element {
    let state = use_context::<AppState>();
    let mut symbol = use_signal(|| DEFAULT_SYMBOL.to_string());
    let mut draft = use_signal(|| DEFAULT_SYMBOL.to_string());
    let mut range = use_signal(StockRange::default);
    let mut points = use_signal(Vec::<StockPoint>::new);
    let mut quote = use_signal(|| None::<StockQuote>);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);

    // History: re-runs when symbol or range changes.
    use_effect(move || {
        let config = state.api_config();
        let endpoint = Endpoint::Stock {
            id: symbol(),
            range: range(),
        };
        loading.set(true);
        spawn(async move {
            match bridge::get_json::<Vec<StockPoint>>(&config, &endpoint).await {
                Ok(data) => {
                    log::info!("[BI] stock {:?}: {} points", endpoint, data.len());
                    error_msg.set(None);
                    points.set(data);
                }
                Err(e) => {
                    log::error!("[BI] stock history failed: {:?}", e);
                    points.set(Vec::new());
                    error_msg.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    // Quote polling. The task belongs to this component and stops on unmount.
    use_future(move || async move {
        let config = state.api_config();
        loop {
            let endpoint = Endpoint::StockQuote { id: symbol() };
            match bridge::get_json::<StockQuote>(&config, &endpoint).await {
                Ok(q) => quote.set(Some(q)),
                Err(e) => log::warn!("[BI] quote poll for {:?} failed: {}", endpoint, e),
            }
            if let Err(e) = bridge::sleep_ms(QUOTE_POLL_MS).await {
                log::warn!("[BI] quote polling stopped: {}", e);
                break;
            }
        }
    });

    let current_range = range();
    let ranges: Vec<(StockRange, &'static str, &'static str)> = StockRange::ALL
        .into_iter()
        .map(|r| {
            let style = if r == current_range { ACTIVE_RANGE_STYLE } else { RANGE_STYLE };
            (r, r.label(), style)
        })
        .collect();
    let summary = stock_summary(&points.read());
    let cards = summary.as_ref().map(summary_cards).unwrap_or_default();
    let polyline = line_points(&points.read(), CHART_WIDTH, CHART_HEIGHT);
    let line_color = match summary.and_then(|s| s.change_percent) {
        Some(p) if p < 0.0 => "#C62828",
        _ => "#2E7D32",
    };
    let quote_text = quote().map(|q| {
        let price = q.price.map(format::currency).unwrap_or_default();
        let change = q.change_percent.map(format::signed_percent).unwrap_or_default();
        format!("{} {} {}", q.symbol, price, change)
    });

    rsx! {
        div {
            ViewHeader {
                title: "Stock Performance".to_string(),
                subtitle: "Price history and live quote".to_string(),
                form {
                    style: "display: flex; gap: 6px;",
                    onsubmit: move |evt: Event<FormData>| {
                        evt.prevent_default();
                        let next = draft().trim().to_uppercase();
                        if !next.is_empty() {
                            quote.set(None);
                            symbol.set(next);
                        }
                    },
                    input {
                        style: "padding: 6px; width: 100px; text-transform: uppercase;",
                        value: "{draft}",
                        oninput: move |evt: Event<FormData>| draft.set(evt.value()),
                    }
                    button { r#type: "submit", style: "padding: 6px 10px;", "Load" }
                }
            }
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                div {
                    style: "display: flex; gap: 4px;",
                    for (r, label, style) in ranges {
                        button {
                            key: "{label}",
                            style,
                            onclick: move |_| range.set(r),
                            "{label}"
                        }
                    }
                }
                div {
                    style: "font-size: 14px; font-weight: bold;",
                    if let Some(text) = quote_text {
                        "Live: {text}"
                    } else {
                        span { style: "color: #888; font-weight: normal;", "Waiting for quote..." }
                    }
                }
            }
            if let Some(err) = error_msg() {
                ErrorDisplay { message: err, on_dismiss: move |_: ()| error_msg.set(None) }
            }
            if loading() {
                LoadingSpinner {}
            } else if cards.is_empty() {
                p { style: "color: #888;", "No price history for {symbol}" }
            } else {
                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 12px;",
                    for (label, value) in cards {
                        div {
                            key: "{label}",
                            style: "padding: 8px 12px; border: 1px solid #e0e0e0; border-radius: 4px; min-width: 110px;",
                            div { style: "font-size: 11px; color: #666;", "{label}" }
                            div { style: "font-size: 16px; font-weight: bold;", "{value}" }
                        }
                    }
                }
                svg {
                    width: "{CHART_WIDTH}",
                    height: "{CHART_HEIGHT}",
                    style: "border: 1px solid #f0f0f0; max-width: 100%;",
                    polyline {
                        points: "{polyline}",
                        fill: "none",
                        stroke: "{line_color}",
                        "stroke-width": "2",
                    }
                }
            }
        }
    }
}
