use bi_data::columns::financial_columns;
use bi_data::market::financial_records;
use bi_model::financial::PerformancePeriod;
use bi_model::{Endpoint, Record};
use bi_ui::bridge;
use bi_ui::components::{ErrorDisplay, FilterSpec, LoadingSpinner, TableView, ViewHeader};
use bi_ui::state::{AppState, Tab};
use dioxus::prelude::*;

/// Wide financial table with a performance-period selector.
#[component]
pub fn FinancialView() -> Element {
    let state = use_context::<AppState>();
    let mut rows = use_signal(Vec::<Record>::new);
    let mut period = use_signal(|| PerformancePeriod::Daily);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);

    use_effect(move || {
        let config = state.api_config();
        spawn(async move {
            match bridge::get_json::<Vec<Record>>(&config, &Endpoint::FinancialWide).await {
                Ok(data) => {
                    log::info!("[BI] financial: {} rows", data.len());
                    rows.set(data);
                }
                Err(e) => {
                    log::error!("[BI] financial fetch failed: {:?}", e);
                    rows.set(Vec::new());
                    error_msg.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let current = period();
    let records = financial_records(&rows.read(), current);
    let periods: Vec<(PerformancePeriod, &'static str)> =
        PerformancePeriod::ALL.into_iter().map(|p| (p, p.label())).collect();

    rsx! {
        div {
            ViewHeader {
                title: "Financial".to_string(),
                subtitle: "Company financials with period performance".to_string(),
                label {
                    style: "font-weight: bold;",
                    "Period: "
                    select {
                        onchange: move |evt: Event<FormData>| {
                            if let Some(p) = PerformancePeriod::parse(&evt.value()) {
                                period.set(p);
                            }
                        },
                        for (p, label) in periods {
                            option {
                                key: "{label}",
                                value: "{label}",
                                selected: p == current,
                                "{label}"
                            }
                        }
                    }
                }
            }
            if let Some(err) = error_msg() {
                ErrorDisplay { message: err, on_dismiss: move |_: ()| error_msg.set(None) }
            }
            if loading() {
                LoadingSpinner {}
            } else {
                TableView {
                    view: Tab::Financial.slug().to_string(),
                    records,
                    columns: financial_columns(current),
                    filters: vec![FilterSpec::new("sector", "Sector")],
                }
            }
        }
    }
}
