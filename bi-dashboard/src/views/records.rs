//! Views over schema-less record endpoints (renewal intelligence, growth,
//! mutual funds). Each picks its preferred columns; when the backend sends
//! none of them, every key seen across the records is shown.

use bi_data::columns::{growth_columns, mutual_fund_columns, renewal_columns};
use bi_data::export::{infer_columns, Column};
use bi_model::{Endpoint, Record};
use bi_ui::bridge;
use bi_ui::components::{ErrorDisplay, FilterSpec, LoadingSpinner, TableView, ViewHeader};
use bi_ui::state::{AppState, Tab};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct RecordsViewProps {
    tab: Tab,
    subtitle: String,
    endpoint: Endpoint,
    columns: Vec<Column>,
    filters: Vec<FilterSpec>,
}

#[component]
fn RecordsView(props: RecordsViewProps) -> Element {
    let state = use_context::<AppState>();
    let mut records = use_signal(Vec::<Record>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);

    let endpoint = props.endpoint.clone();
    use_effect(move || {
        let config = state.api_config();
        let endpoint = endpoint.clone();
        spawn(async move {
            match bridge::get_json::<Vec<Record>>(&config, &endpoint).await {
                Ok(rows) => {
                    log::info!("[BI] {:?}: {} records", endpoint, rows.len());
                    records.set(rows);
                }
                Err(e) => {
                    log::error!("[BI] {:?} failed: {:?}", endpoint, e);
                    records.set(Vec::new());
                    error_msg.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let columns = infer_columns(&records.read(), &props.columns);

    rsx! {
        div {
            ViewHeader { title: props.tab.label().to_string(), subtitle: props.subtitle.clone() }
            if let Some(err) = error_msg() {
                ErrorDisplay { message: err, on_dismiss: move |_: ()| error_msg.set(None) }
            }
            if loading() {
                LoadingSpinner {}
            } else {
                TableView {
                    view: props.tab.slug().to_string(),
                    records: records(),
                    columns,
                    filters: props.filters.clone(),
                }
            }
        }
    }
}

#[component]
pub fn RenewalView() -> Element {
    rsx! {
        RecordsView {
            tab: Tab::RenewalIntelligence,
            subtitle: "Accounts approaching renewal and their risk signals".to_string(),
            endpoint: Endpoint::RenewalIntelligence,
            columns: renewal_columns(),
            filters: vec![
                FilterSpec::new("riskLevel", "Risk Level"),
                FilterSpec::new("product", "Product"),
            ],
        }
    }
}

#[component]
pub fn GrowthView() -> Element {
    rsx! {
        RecordsView {
            tab: Tab::Growth,
            subtitle: "Company growth indicators".to_string(),
            endpoint: Endpoint::Growth,
            columns: growth_columns(),
            filters: vec![
                FilterSpec::new("industry", "Industry"),
                FilterSpec::new("region", "Region"),
                FilterSpec::new("fundingStage", "Funding Stage"),
            ],
        }
    }
}

#[component]
pub fn MutualFundView() -> Element {
    rsx! {
        RecordsView {
            tab: Tab::MutualFund,
            subtitle: "Mutual fund holdings and returns".to_string(),
            endpoint: Endpoint::MutualFunds,
            columns: mutual_fund_columns(),
            filters: vec![
                FilterSpec::new("category", "Category"),
                FilterSpec::new("fundHouse", "Fund House"),
                FilterSpec::new("riskLevel", "Risk"),
            ],
        }
    }
}
