//! Marketing and sales BI dashboard.
//!
//! Data flow:
//! 1. `App` provides `AppState` and `IndustryContext` and shows the login
//!    screen until the backend accepts a login.
//! 2. `Dashboard` renders the tab bar and the active view.
//! 3. Each view fetches its own data on mount, keeps it in local signals and
//!    runs the shared search → filter → sort → paginate pipeline on render.

mod views;

use bi_model::auth::User;
use bi_ui::components::{LoginForm, SignupForm};
use bi_ui::context::IndustryContext;
use bi_ui::state::{AppState, Tab};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bi-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    use_context_provider(IndustryContext::new);

    rsx! {
        div {
            style: "font-family: system-ui, -apple-system, sans-serif; color: #212121;",
            if state.user.read().is_some() {
                Dashboard {}
            } else {
                AuthScreen {}
            }
        }
    }
}

/// Login / signup gate.
#[component]
fn AuthScreen() -> Element {
    let mut state = use_context::<AppState>();
    let mut signing_up = use_signal(|| false);

    rsx! {
        div {
            style: "max-width: 360px; margin: 80px auto; padding: 24px; border: 1px solid #e0e0e0; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);",
            if let Some(notice) = state.notice.read().as_ref() {
                div {
                    style: "padding: 8px 12px; margin-bottom: 12px; background: #E8F5E9; color: #2E7D32; border-radius: 4px;",
                    "{notice}"
                }
            }
            if signing_up() {
                SignupForm {
                    on_signed_up: move |message: String| {
                        state.notice.set(Some(message));
                        signing_up.set(false);
                    },
                    on_switch: move |_: ()| signing_up.set(false),
                }
            } else {
                LoginForm {
                    on_login: move |user: User| {
                        log::info!("[BI] logged in as {}", user.display_name());
                        state.notice.set(None);
                        state.user.set(Some(user));
                    },
                    on_switch: move |_: ()| {
                        state.notice.set(None);
                        signing_up.set(true);
                    },
                }
            }
        }
    }
}

const TAB_STYLE: &str = "padding: 10px 14px; border: none; border-bottom: 3px solid transparent; background: none; cursor: pointer;";
const ACTIVE_TAB_STYLE: &str = "padding: 10px 14px; border: none; border-bottom: 3px solid #1565C0; background: none; font-weight: bold; cursor: pointer;";

/// Tab bar plus the active view.
#[component]
fn Dashboard() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();
    let user_name = state
        .user
        .read()
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    let tabs: Vec<(Tab, &'static str, &'static str, &'static str)> = Tab::ALL
        .into_iter()
        .map(|tab| {
            let style = if tab == active { ACTIVE_TAB_STYLE } else { TAB_STYLE };
            (tab, tab.slug(), tab.label(), style)
        })
        .collect();

    rsx! {
        div {
            header {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 10px 20px; background: #0D47A1; color: white;",
                h1 { style: "margin: 0; font-size: 18px;", "BI Dashboard" }
                div {
                    style: "display: flex; gap: 12px; align-items: center; font-size: 13px;",
                    span { "{user_name}" }
                    button {
                        style: "padding: 4px 10px; background: transparent; color: white; border: 1px solid white; border-radius: 4px; cursor: pointer;",
                        onclick: move |_| state.log_out(),
                        "Log out"
                    }
                }
            }
            nav {
                style: "display: flex; flex-wrap: wrap; gap: 2px; padding: 0 12px; border-bottom: 1px solid #e0e0e0; background: #FAFAFA;",
                for (tab, slug, label, style) in tabs {
                    button {
                        key: "{slug}",
                        style,
                        onclick: move |_| state.active_tab.set(tab),
                        "{label}"
                    }
                }
            }
            main {
                style: "max-width: 1280px; margin: 0 auto; padding: 16px;",
                {views::render(active)}
            }
        }
    }
}
