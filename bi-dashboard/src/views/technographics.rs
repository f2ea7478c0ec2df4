//! Technographics: one row per company with its technologies, the industry
//! pie and regional adoption from `IndustryContext`, and an NTP side panel
//! for the clicked company.

use bi_data::columns::{technographics_columns, technographics_export_columns};
use bi_data::record::{field_string, to_records};
use bi_data::technographics::group_by_company;
use bi_model::ntp::NtpRow;
use bi_model::Endpoint;
use bi_ui::bridge;
use bi_ui::components::{ErrorDisplay, FilterSpec, LoadingSpinner, PieChart, TableView, ViewHeader};
use bi_ui::context::IndustryContext;
use bi_ui::state::{AppState, Tab};
use bi_utils::format;
use dioxus::prelude::*;
use serde_json::Value;

const TOP_TECHNOLOGIES: usize = 8;

#[component]
pub fn TechnographicsView() -> Element {
    let state = use_context::<AppState>();
    let industry = use_context::<IndustryContext>();
    let mut loading = use_signal(|| !*industry.loaded.peek());
    let mut error_msg = use_signal(|| None::<String>);
    let mut selected_company = use_signal(|| None::<String>);
    let mut selected_region = use_signal(String::new);

    use_effect(move || {
        let config = state.api_config();
        spawn(async move {
            if let Err(e) = industry.ensure_loaded(config).await {
                log::error!("[BI] technographics fetch failed: {:?}", e);
                error_msg.set(Some(e.to_string()));
            }
            loading.set(false);
        });
    });

    let records = to_records(&group_by_company(&industry.rows.read()));
    let insights = industry.insights.read().clone();
    let regions = insights.regions();
    let region = if selected_region().is_empty() {
        regions.first().cloned().unwrap_or_default()
    } else {
        selected_region()
    };
    let adoption: Vec<(String, String)> = insights
        .top_in_region(&region, TOP_TECHNOLOGIES)
        .into_iter()
        .map(|a| {
            (
                a.technology.clone(),
                format!("{} ({}/{})", format::percent(a.percent), a.companies, a.region_companies),
            )
        })
        .collect();
    let company_count = insights.company_count;

    rsx! {
        div {
            ViewHeader {
                title: "Technographics".to_string(),
                subtitle: "Technologies detected per company".to_string(),
            }
            if let Some(err) = error_msg() {
                ErrorDisplay { message: err, on_dismiss: move |_: ()| error_msg.set(None) }
            }
            if loading() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 24px; flex-wrap: wrap; margin-bottom: 16px;",
                    PieChart {
                        title: format!("Industries ({} companies)", company_count),
                        slices: insights.industry_pie.clone(),
                    }
                    div {
                        style: "min-width: 280px;",
                        h4 { style: "margin: 0 0 6px 0;", "Regional adoption" }
                        select {
                            onchange: move |evt: Event<FormData>| selected_region.set(evt.value()),
                            for r in regions.iter().cloned() {
                                option {
                                    key: "{r}",
                                    value: "{r}",
                                    selected: r == region,
                                    "{r}"
                                }
                            }
                        }
                        table {
                            style: "margin-top: 8px; font-size: 13px; border-collapse: collapse;",
                            for (technology, share) in adoption {
                                tr {
                                    key: "{technology}",
                                    td { style: "padding: 2px 12px 2px 0;", "{technology}" }
                                    td { style: "padding: 2px 0; color: #555;", "{share}" }
                                }
                            }
                        }
                    }
                }
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",
                    div {
                        style: "flex: 1; min-width: 0;",
                        TableView {
                            view: Tab::Technographics.slug().to_string(),
                            records,
                            columns: technographics_columns(),
                            export_columns: technographics_export_columns(),
                            filters: vec![
                                FilterSpec::new("industry", "Industry"),
                                FilterSpec::new("region", "Region"),
                                FilterSpec::new("categories", "Category"),
                                FilterSpec::new("technologies", "Technology"),
                            ],
                            on_row_click: move |row: Value| {
                                selected_company.set(Some(field_string(&row, "companyName")));
                            },
                        }
                    }
                    if let Some(company) = selected_company() {
                        NtpPanel {
                            company,
                            on_close: move |_: ()| selected_company.set(None),
                        }
                    }
                }
            }
        }
    }
}

/// NTP predictions of one company, fetched once and filtered per selection.
#[component]
fn NtpPanel(company: String, on_close: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let mut rows = use_signal(|| None::<Vec<NtpRow>>);
    let mut error_msg = use_signal(|| None::<String>);

    use_effect(move || {
        let config = state.api_config();
        spawn(async move {
            match bridge::get_json::<Vec<NtpRow>>(&config, &Endpoint::Ntp).await {
                Ok(data) => rows.set(Some(data)),
                Err(e) => {
                    log::error!("[BI] ntp side panel fetch failed: {:?}", e);
                    rows.set(Some(Vec::new()));
                    error_msg.set(Some(e.to_string()));
                }
            }
        });
    });

    let predictions: Option<Vec<(String, String, String)>> = rows.read().as_ref().map(|all| {
        all.iter()
            .filter(|r| r.is_for_company(&company))
            .map(|r| {
                let probability = r.purchase_probability.map(format::percent).unwrap_or_default();
                (r.technology.clone(), probability, r.purchase_prediction.clone())
            })
            .collect()
    });

    rsx! {
        aside {
            style: "width: 320px; flex-shrink: 0; border: 1px solid #e0e0e0; border-radius: 4px; padding: 12px; font-size: 13px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h4 { style: "margin: 0;", "{company}" }
                button {
                    style: "border: none; background: none; cursor: pointer; font-size: 16px;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            p { style: "color: #666; margin: 4px 0 8px 0;", "Next-to-purchase predictions" }
            if let Some(err) = error_msg() {
                ErrorDisplay { message: err, on_dismiss: move |_: ()| error_msg.set(None) }
            }
            {match predictions {
                None => rsx! { LoadingSpinner { label: "Loading predictions...".to_string() } },
                Some(list) if list.is_empty() => rsx! { p { style: "color: #888;", "No predictions for this company" } },
                Some(list) => rsx! {
                    ul {
                        style: "padding-left: 16px; margin: 0;",
                        for (technology, probability, prediction) in list {
                            li {
                                key: "{technology}",
                                strong { "{technology}" }
                                " {probability} {prediction}"
                            }
                        }
                    }
                },
            }}
        }
    }
}
