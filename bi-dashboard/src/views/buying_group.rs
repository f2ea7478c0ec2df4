//! Buying group: pick a company, review its people grouped by buying role
//! and by reporting line, then generate an org chart for a selection.

use bi_data::org_chart::{build_org_tree, buying_group, parse_org_chart_csv, OrgNode};
use bi_model::org_chart::{
    company_names, CompanyEntry, GenerateSelectedRequest, GenerateSelectedResponse, OrgPerson,
};
use bi_model::Endpoint;
use bi_ui::bridge;
use bi_ui::components::{ErrorDisplay, LoadingSpinner, ViewHeader};
use bi_ui::state::AppState;
use dioxus::prelude::*;
use std::collections::BTreeSet;

const PANEL_STYLE: &str = "flex: 1; min-width: 260px; border: 1px solid #e0e0e0; border-radius: 4px; padding: 10px; font-size: 13px;";

#[component]
pub fn BuyingGroupView() -> Element {
    let state = use_context::<AppState>();
    let mut companies = use_signal(Vec::<String>::new);
    let mut company = use_signal(String::new);
    let mut people = use_signal(Vec::<OrgPerson>::new);
    let mut selected = use_signal(BTreeSet::<String>::new);
    let mut org_html = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut generating = use_signal(|| false);
    let mut notice = use_signal(|| None::<String>);
    let mut error_msg = use_signal(|| None::<String>);

    use_effect(move || {
        let config = state.api_config();
        spawn(async move {
            match bridge::get_json::<Vec<CompanyEntry>>(&config, &Endpoint::OrgChartCompanies).await {
                Ok(entries) => {
                    let names = company_names(entries);
                    log::info!("[BI] org chart companies: {}", names.len());
                    companies.set(names);
                }
                Err(e) => {
                    log::error!("[BI] org chart companies failed: {:?}", e);
                    error_msg.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    // People of the chosen company.
    use_effect(move || {
        let name = company();
        if name.is_empty() {
            return;
        }
        let config = state.api_config();
        loading.set(true);
        spawn(async move {
            let endpoint = Endpoint::OrgChartPersonDetails { company: name.clone() };
            let parsed = match bridge::get_text(&config, &endpoint).await {
                Ok(text) => parse_org_chart_csv(&text).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match parsed {
                Ok(list) => {
                    log::info!("[BI] {}: {} people", name, list.len());
                    people.set(list);
                }
                Err(e) => {
                    log::error!("[BI] person details for {} failed: {}", name, e);
                    people.set(Vec::new());
                    error_msg.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let on_generate = move |_| {
        let request = GenerateSelectedRequest {
            company_name: company(),
            persons: selected.read().iter().cloned().collect(),
        };
        let config = state.api_config();
        generating.set(true);
        spawn(async move {
            let result: Result<GenerateSelectedResponse, _> =
                bridge::post_json(&config, &Endpoint::OrgChartGenerateSelected, &request).await;
            match result {
                Ok(response) => {
                    log::info!("[BI] org chart generated for {}: {}", request.company_name, response.message);
                    if !response.message.is_empty() {
                        notice.set(Some(response.message.clone()));
                    }
                    let html = match response.html {
                        Some(html) => Ok(html),
                        None => {
                            let endpoint = Endpoint::OrgChart {
                                company: request.company_name.clone(),
                            };
                            bridge::get_text(&config, &endpoint).await
                        }
                    };
                    match html {
                        Ok(html) => org_html.set(Some(html)),
                        Err(e) => {
                            log::error!("[BI] org chart page failed: {:?}", e);
                            error_msg.set(Some(e.to_string()));
                        }
                    }
                }
                Err(e) => {
                    log::error!("[BI] generate org chart failed: {:?}", e);
                    error_msg.set(Some(e.to_string()));
                }
            }
            generating.set(false);
        });
    };

    let current = company();
    let company_options = companies.read().clone();
    let groups: Vec<(&'static str, Vec<(String, String, bool)>)> = {
        let chosen = selected.read();
        buying_group(&people.read())
            .into_iter()
            .map(|(role, members)| {
                let rows = members
                    .into_iter()
                    .map(|p| (p.name.clone(), p.title.clone(), chosen.contains(&p.name)))
                    .collect();
                (role.label(), rows)
            })
            .collect()
    };
    let tree: Vec<(String, OrgNode)> = build_org_tree(&people.read())
        .into_iter()
        .map(|n| (n.person.name.clone(), n))
        .collect();
    let selected_count = selected.read().len();
    let can_generate = selected_count > 0 && !generating();
    let generate_label = if generating() {
        "Generating...".to_string()
    } else {
        format!("Generate org chart ({})", selected_count)
    };

    rsx! {
        div {
            ViewHeader {
                title: "Buying Group".to_string(),
                subtitle: "Decision makers, influencers and users per account".to_string(),
                select {
                    style: "padding: 6px; min-width: 220px;",
                    onchange: move |evt: Event<FormData>| {
                        selected.write().clear();
                        org_html.set(None);
                        notice.set(None);
                        company.set(evt.value());
                    },
                    option { value: "", selected: current.is_empty(), "Select a company" }
                    for name in company_options {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: name == current,
                            "{name}"
                        }
                    }
                }
            }
            if let Some(err) = error_msg() {
                ErrorDisplay { message: err, on_dismiss: move |_: ()| error_msg.set(None) }
            }
            if let Some(text) = notice() {
                div { style: "color: #2E7D32; margin-bottom: 8px;", "{text}" }
            }
            if loading() {
                LoadingSpinner {}
            } else if current.is_empty() {
                p { style: "color: #888;", "Choose a company to see its buying group" }
            } else if groups.is_empty() {
                p { style: "color: #888;", "No people found for {current}" }
            } else {
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; margin-bottom: 12px;",
                    for (role_label, members) in groups {
                        div {
                            key: "{role_label}",
                            style: PANEL_STYLE,
                            h4 { style: "margin: 0 0 6px 0;", "{role_label}" }
                            for (name, title, checked) in members {
                                label {
                                    key: "{name}",
                                    style: "display: block; margin: 3px 0;",
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        onchange: {
                                            let name = name.clone();
                                            move |_| {
                                                let mut set = selected.write();
                                                if !set.remove(&name) {
                                                    set.insert(name.clone());
                                                }
                                            }
                                        },
                                    }
                                    " {name} "
                                    span { style: "color: #666;", "{title}" }
                                }
                            }
                        }
                    }
                }
                button {
                    style: "padding: 6px 12px; margin-bottom: 12px;",
                    disabled: !can_generate,
                    onclick: on_generate,
                    "{generate_label}"
                }
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",
                    div {
                        style: PANEL_STYLE,
                        h4 { style: "margin: 0 0 6px 0;", "Reporting lines" }
                        ul {
                            style: "padding-left: 16px; margin: 0;",
                            for (key, node) in tree {
                                OrgTreeNode { key: "{key}", node }
                            }
                        }
                    }
                    if let Some(html) = org_html() {
                        iframe {
                            style: "flex: 2; min-height: 480px; border: 1px solid #e0e0e0; border-radius: 4px;",
                            "srcdoc": "{html}",
                            "sandbox": "allow-scripts",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrgTreeNode(node: OrgNode) -> Element {
    let name = node.person.name.clone();
    let title = node.person.title.clone();
    let reports: Vec<(String, OrgNode)> = node
        .reports
        .into_iter()
        .map(|n| (n.person.name.clone(), n))
        .collect();

    rsx! {
        li {
            strong { "{name}" }
            if !title.is_empty() {
                span { style: "color: #666;", " {title}" }
            }
            if !reports.is_empty() {
                ul {
                    style: "padding-left: 16px; margin: 0;",
                    for (key, child) in reports {
                        OrgTreeNode { key: "{key}", node: child }
                    }
                }
            }
        }
    }
}
