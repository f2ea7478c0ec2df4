//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the session-wide signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Everything else is view-local.

use bi_model::auth::User;
use bi_model::ApiConfig;
use dioxus::prelude::*;

/// Dashboard tabs, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Intent,
    Technographics,
    Ntp,
    BuyingGroup,
    RenewalIntelligence,
    Financial,
    StockPerformance,
    Growth,
    MutualFund,
    ProductCatalogue,
    MartechSummary,
}

impl Tab {
    pub const ALL: [Tab; 11] = [
        Tab::Intent,
        Tab::Technographics,
        Tab::Ntp,
        Tab::BuyingGroup,
        Tab::RenewalIntelligence,
        Tab::Financial,
        Tab::StockPerformance,
        Tab::Growth,
        Tab::MutualFund,
        Tab::ProductCatalogue,
        Tab::MartechSummary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Intent => "Intent",
            Tab::Technographics => "Technographics",
            Tab::Ntp => "NTP",
            Tab::BuyingGroup => "Buying Group",
            Tab::RenewalIntelligence => "Renewal Intelligence",
            Tab::Financial => "Financial",
            Tab::StockPerformance => "Stock Performance",
            Tab::Growth => "Growth",
            Tab::MutualFund => "Mutual Fund",
            Tab::ProductCatalogue => "Product Catalogue",
            Tab::MartechSummary => "MarTech Summary",
        }
    }

    /// Prefix of CSV export filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Intent => "intent",
            Tab::Technographics => "technographics",
            Tab::Ntp => "ntp",
            Tab::BuyingGroup => "buying_group",
            Tab::RenewalIntelligence => "renewal_intelligence",
            Tab::Financial => "financial",
            Tab::StockPerformance => "stock",
            Tab::Growth => "growth",
            Tab::MutualFund => "mutual_fund",
            Tab::ProductCatalogue => "product_catalogue",
            Tab::MartechSummary => "martech_summary",
        }
    }
}

/// Shared state for the whole dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Logged-in user (None shows the login screen)
    pub user: Signal<Option<User>>,
    /// Currently shown tab
    pub active_tab: Signal<Tab>,
    /// Transient success message (e.g. after signup)
    pub notice: Signal<Option<String>>,
    /// Backend location; same-origin in the browser
    pub api: Signal<ApiConfig>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            active_tab: Signal::new(Tab::default()),
            notice: Signal::new(None),
            api: Signal::new(ApiConfig::same_origin()),
        }
    }

    /// Clone of the API config, safe to move into async tasks.
    pub fn api_config(&self) -> ApiConfig {
        self.api.read().clone()
    }

    pub fn log_out(&mut self) {
        log::info!("[BI] logged out");
        self.user.set(None);
        self.active_tab.set(Tab::default());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
