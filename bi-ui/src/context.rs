//! Technographics data and its derived aggregates, shared between views.
//!
//! The Technographics and MarTech Summary views both need the technographics
//! rows; whichever mounts first fetches them and the other reuses the cached
//! rows and [`IndustryInsights`].

use crate::bridge;
use bi_data::industry::IndustryInsights;
use bi_model::technographics::TechnographicsRow;
use bi_model::{ApiConfig, ApiError, Endpoint};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct IndustryContext {
    pub rows: Signal<Vec<TechnographicsRow>>,
    pub insights: Signal<IndustryInsights>,
    /// Set once rows have been fetched successfully
    pub loaded: Signal<bool>,
}

impl IndustryContext {
    pub fn new() -> Self {
        Self {
            rows: Signal::new(Vec::new()),
            insights: Signal::new(IndustryInsights::default()),
            loaded: Signal::new(false),
        }
    }

    /// Store rows and recompute the aggregates.
    pub fn set_rows(&mut self, rows: Vec<TechnographicsRow>) {
        self.insights.set(IndustryInsights::from_rows(&rows));
        self.rows.set(rows);
        self.loaded.set(true);
    }

    /// Fetch the rows unless a previous view already did.
    pub async fn ensure_loaded(mut self, config: ApiConfig) -> Result<(), ApiError> {
        if *self.loaded.peek() {
            return Ok(());
        }
        let rows: Vec<TechnographicsRow> = bridge::get_json(&config, &Endpoint::Technographics).await?;
        log::info!("[BI] technographics: {} rows cached", rows.len());
        self.set_rows(rows);
        Ok(())
    }
}

impl Default for IndustryContext {
    fn default() -> Self {
        Self::new()
    }
}
