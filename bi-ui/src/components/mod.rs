//! Reusable Dioxus RSX components for the dashboard views.

mod auth_forms;
mod data_table;
mod download_button;
mod error_display;
mod filter_dropdown;
mod loading_spinner;
mod pagination;
mod pie_chart;
mod sankey_diagram;
mod search_box;
mod table_view;
mod view_header;

pub use auth_forms::{LoginForm, SignupForm};
pub use data_table::DataTable;
pub use download_button::DownloadButton;
pub use error_display::ErrorDisplay;
pub use filter_dropdown::FilterDropdown;
pub use loading_spinner::LoadingSpinner;
pub use pagination::Pagination;
pub use pie_chart::{slice_path, PieChart};
pub use sankey_diagram::SankeyDiagram;
pub use search_box::SearchBox;
pub use table_view::{FilterSpec, TableView};
pub use view_header::ViewHeader;
