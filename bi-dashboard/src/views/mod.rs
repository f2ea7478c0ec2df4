//! One component per dashboard tab.

mod buying_group;
mod financial;
mod intent;
mod martech_summary;
mod ntp;
mod product_catalogue;
mod records;
mod stock;
mod technographics;

use bi_ui::state::Tab;
use dioxus::prelude::*;

pub fn render(tab: Tab) -> Element {
    match tab {
        Tab::Intent => rsx! { intent::IntentView {} },
        Tab::Technographics => rsx! { technographics::TechnographicsView {} },
        Tab::Ntp => rsx! { ntp::NtpView {} },
        Tab::BuyingGroup => rsx! { buying_group::BuyingGroupView {} },
        Tab::RenewalIntelligence => rsx! { records::RenewalView {} },
        Tab::Financial => rsx! { financial::FinancialView {} },
        Tab::StockPerformance => rsx! { stock::StockView {} },
        Tab::Growth => rsx! { records::GrowthView {} },
        Tab::MutualFund => rsx! { records::MutualFundView {} },
        Tab::ProductCatalogue => rsx! { product_catalogue::ProductCatalogueView {} },
        Tab::MartechSummary => rsx! { martech_summary::MartechSummaryView {} },
    }
}
