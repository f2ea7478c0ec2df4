use bi_data::sankey::SankeyGraph;
use bi_ui::components::{ErrorDisplay, LoadingSpinner, SankeyDiagram, ViewHeader};
use bi_ui::context::IndustryContext;
use bi_ui::state::AppState;
use dioxus::prelude::*;

/// Category → technology flow over the shared technographics rows.
#[component]
pub fn MartechSummaryView() -> Element {
    let state = use_context::<AppState>();
    let industry = use_context::<IndustryContext>();
    let mut loading = use_signal(|| !*industry.loaded.peek());
    let mut error_msg = use_signal(|| None::<String>);

    use_effect(move || {
        let config = state.api_config();
        spawn(async move {
            if let Err(e) = industry.ensure_loaded(config).await {
                log::error!("[BI] martech summary fetch failed: {:?}", e);
                error_msg.set(Some(e.to_string()));
            }
            loading.set(false);
        });
    });

    let graph = SankeyGraph::from_rows(&industry.rows.read());
    let empty = graph.categories().next().is_none();

    rsx! {
        div {
            ViewHeader {
                title: "MarTech Summary".to_string(),
                subtitle: "Technology categories and the tools behind them. Click a category to expand it.".to_string(),
            }
            if let Some(err) = error_msg() {
                ErrorDisplay { message: err, on_dismiss: move |_: ()| error_msg.set(None) }
            }
            if loading() {
                LoadingSpinner {}
            } else if empty {
                p { style: "color: #888;", "No technographics data" }
            } else {
                div {
                    style: "overflow-x: auto;",
                    SankeyDiagram { graph }
                }
            }
        }
    }
}
