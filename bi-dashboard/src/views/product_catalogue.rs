use bi_data::columns::product_catalogue_columns;
use bi_data::export::infer_columns;
use bi_model::{Endpoint, Record};
use bi_ui::bridge;
use bi_ui::components::{ErrorDisplay, FilterSpec, LoadingSpinner, TableView, ViewHeader};
use bi_ui::state::{AppState, Tab};
use chrono::Datelike;
use dioxus::prelude::*;

/// Years offered by the selector, newest first.
const YEARS_SHOWN: i32 = 6;

/// Product catalogue for a selected year (or all years).
#[component]
pub fn ProductCatalogueView() -> Element {
    let state = use_context::<AppState>();
    let this_year = bridge::today().year();
    let mut year = use_signal(move || Some(this_year));
    let mut records = use_signal(Vec::<Record>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);

    // Re-runs whenever the year changes.
    use_effect(move || {
        let config = state.api_config();
        let endpoint = Endpoint::ProductCatalogue { year: year() };
        loading.set(true);
        spawn(async move {
            match bridge::get_json::<Vec<Record>>(&config, &endpoint).await {
                Ok(rows) => {
                    log::info!("[BI] product catalogue {:?}: {} rows", endpoint, rows.len());
                    error_msg.set(None);
                    records.set(rows);
                }
                Err(e) => {
                    log::error!("[BI] product catalogue fetch failed: {:?}", e);
                    records.set(Vec::new());
                    error_msg.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let selected = year();
    let years: Vec<i32> = (0..YEARS_SHOWN).map(|i| this_year - i).collect();
    let columns = infer_columns(&records.read(), &product_catalogue_columns());

    rsx! {
        div {
            ViewHeader {
                title: "Product Catalogue".to_string(),
                subtitle: "Products and their sales per year".to_string(),
                label {
                    style: "font-weight: bold;",
                    "Year: "
                    select {
                        onchange: move |evt: Event<FormData>| year.set(evt.value().parse::<i32>().ok()),
                        option { value: "all", selected: selected.is_none(), "All years" }
                        for y in years {
                            option {
                                key: "{y}",
                                value: "{y}",
                                selected: selected == Some(y),
                                "{y}"
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
                    view: Tab::ProductCatalogue.slug().to_string(),
                    records: records(),
                    columns,
                    filters: vec![
                        FilterSpec::new("category", "Category"),
                        FilterSpec::new("vendor", "Vendor"),
                    ],
                }
            }
        }
    }
}
