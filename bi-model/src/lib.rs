//! Core types for the BI dashboard backend.
//!
//! This crate provides:
//! - row types for every dashboard view (intent, NTP, technographics, ...)
//! - `endpoint`: the catalogue of backend REST endpoints and URL building
//! - `error`: the `ApiError` shared by the native client and the browser bridge
//! - `client`: a `reqwest` REST client (feature `api`, native only)

pub mod auth;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod financial;
pub mod intent;
pub mod lenient;
pub mod ntp;
pub mod org_chart;
pub mod stock;
pub mod technographics;

#[cfg(feature = "api")]
pub mod client;

pub use config::ApiConfig;
pub use endpoint::Endpoint;
pub use error::ApiError;

/// A schema-less row as delivered by the backend (a JSON object).
///
/// Growth, renewal intelligence, mutual fund and product catalogue views
/// consume these directly and pick their columns at render time.
pub type Record = serde_json::Value;
