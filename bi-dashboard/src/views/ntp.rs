use bi_data::columns::ntp_columns;
use bi_data::sort::SortSpec;
use bi_model::{Endpoint, Record};
use bi_ui::bridge;
use bi_ui::components::{ErrorDisplay, FilterSpec, LoadingSpinner, TableView, ViewHeader};
use bi_ui::state::{AppState, Tab};
use dioxus::prelude::*;

/// "Next to Purchase" predictions.
#[component]
pub fn NtpView() -> Element {
    let state = use_context::<AppState>();
    let mut records = use_signal(Vec::<Record>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);

    use_effect(move || {
        let config = state.api_config();
        spawn(async move {
            match bridge::get_json::<Vec<Record>>(&config, &Endpoint::Ntp).await {
                Ok(data) => {
                    log::info!("[BI] ntp: {} rows", data.len());
                    records.set(data);
                }
                Err(e) => {
                    log::error!("[BI] ntp fetch failed: {:?}", e);
                    records.set(Vec::new());
                    error_msg.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        div {
            ViewHeader {
                title: "NTP".to_string(),
                subtitle: "Next-to-purchase predictions per company and technology".to_string(),
            }
            if let Some(err) = error_msg() {
                ErrorDisplay { message: err, on_dismiss: move |_: ()| error_msg.set(None) }
            }
            if loading() {
                LoadingSpinner {}
            } else {
                TableView {
                    view: Tab::Ntp.slug().to_string(),
                    records: records(),
                    columns: ntp_columns(),
                    filters: vec![
                        FilterSpec::new("category", "Category"),
                        FilterSpec::new("technology", "Technology"),
                        FilterSpec::new("purchasePrediction", "Prediction"),
                    ],
                    initial_sort: SortSpec::descending("purchaseProbability"),
                }
            }
        }
    }
}
