//! Data processing for the BI dashboard views.
//!
//! Every table view runs the same pipeline over JSON records:
//! search ([`search`]) → filter ([`filter`]) → sort ([`sort`]) → paginate
//! ([`pagination`]), bundled as [`table::TableQuery`]. The CSV download
//! ([`export`]) runs over the same filtered set, so the file matches what the
//! user sees.
//!
//! The aggregation modules turn technographics rows into per-company groups
//! ([`technographics`]), industry/regional insights ([`industry`]) and the
//! category → technology flow diagram ([`sankey`]). [`org_chart`] parses the
//! buying-group person CSV and [`market`] summarises stock/financial data.
//!
//! ```rust
//! use bi_data::table::TableQuery;
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"companyName": "Acme", "intentStatus": "High"}),
//!     json!({"companyName": "Zeta", "intentStatus": "Low"}),
//! ];
//! let mut query = TableQuery::default();
//! query.filters.select("intentStatus", "High");
//! let visible = query.apply(&rows);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(
//!     bi_data::export::to_csv(&visible, &["companyName", "intentStatus"]).unwrap(),
//!     "\"companyName\",\"intentStatus\"\n\"Acme\",\"High\""
//! );
//! ```

pub mod columns;
pub mod export;
pub mod filter;
pub mod industry;
pub mod intent;
pub mod market;
pub mod org_chart;
pub mod pagination;
pub mod record;
pub mod sankey;
pub mod search;
pub mod sort;
pub mod table;
pub mod technographics;
