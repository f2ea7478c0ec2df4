//! BI CLI - Command line tool for the marketing and sales dashboard backend.

use bi_model::config::{API_BASE_ENV, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use bi_model::ApiConfig;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bi-cli",
    version,
    about = "Marketing and sales BI dashboard toolkit"
)]
struct Cli {
    /// Base URL of the dashboard backend
    #[arg(long, global = true, env = API_BASE_ENV, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: bi_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ApiConfig::new(cli.api_base).with_timeout(cli.timeout);
    log::info!("[BI] backend {} (timeout {}s)", config.base_url, config.timeout_secs);
    bi_cmd::run(cli.command, config).await
}
