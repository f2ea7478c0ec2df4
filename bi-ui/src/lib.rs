//! Shared Dioxus components and browser bridge for the BI dashboard.
//!
//! This crate provides:
//! - `bridge`: `fetch`, CSV download and timer wrappers over `web-sys`
//! - `state`: reactive `AppState` (session user, active tab, notice)
//! - `context`: `IndustryContext`, technographics aggregates shared by views
//! - `components`: reusable RSX components (tables, filters, charts, forms)

pub mod bridge;
pub mod components;
pub mod context;
pub mod state;
