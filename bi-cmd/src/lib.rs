//! Command implementations for the BI CLI.
//!
//! Provides subcommands for exporting dashboard tables as CSV, summarising
//! technographics as a category tree, following stock quotes and inspecting
//! a company's buying group.

use bi_model::client::ApiClient;
use bi_model::ApiConfig;
use clap::Subcommand;

pub mod account;
pub mod export;
pub mod market;
pub mod org_chart;
pub mod sankey;

pub use export::ExportView;

#[derive(Subcommand)]
pub enum Command {
    /// Export a dashboard table as CSV
    Export {
        /// Table to export
        #[arg(value_enum)]
        view: ExportView,

        /// Output path for the CSV file
        #[arg(short = 'o', long)]
        out: String,

        /// Keep only rows containing this text (case-insensitive)
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Column filter as key=value; repeat for more values
        #[arg(short = 'f', long = "filter", value_parser = export::parse_filter)]
        filters: Vec<(String, String)>,

        /// Column key to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Performance period for the financial table (daily, weekly, monthly, yearly)
        #[arg(long, default_value = "daily")]
        period: String,
    },

    /// Print the technology category tree with company counts
    Sankey {
        /// Category to list technologies for; repeatable
        #[arg(short = 'e', long = "expand")]
        expand: Vec<String>,

        /// List technologies for every category
        #[arg(long)]
        expand_all: bool,

        /// Also write the laid-out diagram as SVG
        #[arg(long)]
        svg: Option<String>,
    },

    /// Print the latest quote for a stock symbol
    Quote {
        id: String,

        /// Keep polling until interrupted
        #[arg(short = 'w', long)]
        watch: bool,

        /// Seconds between polls with --watch
        #[arg(long, default_value_t = market::DEFAULT_INTERVAL_SECS)]
        interval: u64,
    },

    /// Summarise a stock's price history
    Stock {
        id: String,

        /// History window (1d, 5d, 1m, 6m, 1y, 5y)
        #[arg(short = 'r', long, default_value = "1m")]
        range: String,
    },

    /// Show a company's buying group and reporting lines
    OrgChart {
        company: String,

        /// Save the person details CSV to this path
        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Check credentials against the backend
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

pub async fn run(command: Command, config: ApiConfig) -> anyhow::Result<()> {
    let client = ApiClient::new(config)?;
    match command {
        Command::Export {
            view,
            out,
            search,
            filters,
            sort,
            desc,
            period,
        } => {
            let options = export::ExportOptions {
                search: search.unwrap_or_default(),
                filters,
                sort,
                descending: desc,
                period,
            };
            export::run_export(&client, view, &out, &options).await
        }
        Command::Sankey {
            expand,
            expand_all,
            svg,
        } => sankey::run_sankey(&client, &expand, expand_all, svg.as_deref()).await,
        Command::Quote {
            id,
            watch,
            interval,
        } => {
            if watch {
                market::watch_quote(&client, &id, interval).await
            } else {
                market::run_quote(&client, &id).await
            }
        }
        Command::Stock { id, range } => market::run_stock(&client, &id, &range).await,
        Command::OrgChart { company, out } => org_chart::run_org_chart(&client, &company, out.as_deref()).await,
        Command::Login { email, password } => account::run_login(&client, &email, &password).await,
    }
}
