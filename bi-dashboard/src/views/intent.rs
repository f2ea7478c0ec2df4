use bi_data::columns::intent_columns;
use bi_data::intent::status_counts;
use bi_data::record::decode_rows;
use bi_model::intent::IntentRow;
use bi_model::{Endpoint, Record};
use bi_ui::bridge;
use bi_ui::components::{ErrorDisplay, FilterSpec, LoadingSpinner, TableView, ViewHeader};
use bi_ui::state::{AppState, Tab};
use dioxus::prelude::*;

const NEUTRAL_COLOR: &str = "#757575";

/// Accounts and their intent status.
#[component]
pub fn IntentView() -> Element {
    let state = use_context::<AppState>();
    let mut records = use_signal(Vec::<Record>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);

    use_effect(move || {
        let config = state.api_config();
        spawn(async move {
            match bridge::get_json::<Vec<Record>>(&config, &Endpoint::Intent).await {
                Ok(data) => {
                    log::info!("[BI] intent: {} rows", data.len());
                    records.set(data);
                }
                Err(e) => {
                    log::error!("[BI] intent fetch failed: {:?}", e);
                    records.set(Vec::new());
                    error_msg.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let rows: Vec<IntentRow> = decode_rows(&records.read());
    let summary: Vec<(String, String, usize)> = status_counts(&rows)
        .into_iter()
        .map(|c| {
            let color = c.status.map(|s| s.color()).unwrap_or(NEUTRAL_COLOR).to_string();
            (c.label, color, c.count)
        })
        .collect();

    rsx! {
        div {
            ViewHeader {
                title: "Intent".to_string(),
                subtitle: "Backend-assigned buying propensity per account".to_string(),
            }
            if let Some(err) = error_msg() {
                ErrorDisplay { message: err, on_dismiss: move |_: ()| error_msg.set(None) }
            }
            if loading() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 12px;",
                    for (label, color, count) in summary {
                        div {
                            key: "{label}",
                            style: "padding: 6px 12px; border-radius: 16px; background: {color}; color: white; font-size: 13px;",
                            "{label}: {count}"
                        }
                    }
                }
                TableView {
                    view: Tab::Intent.slug().to_string(),
                    records: records(),
                    columns: intent_columns(),
                    filters: vec![FilterSpec::new("intentStatus", "Intent Status")],
                }
            }
        }
    }
}
