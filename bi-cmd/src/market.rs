//! `quote` and `stock`: live quotes and price-history summaries.

use anyhow::anyhow;
use bi_data::market::{stock_summary, StockSummary};
use bi_model::client::ApiClient;
use bi_model::stock::{StockQuote, StockRange};
use bi_utils::format;
use log::{info, warn};
use std::time::Duration;

pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// One line per quote: `MSFT $412.30 +1.25 (+0.30%) vol 21.4M @ 15:59`.
pub fn format_quote(quote: &StockQuote) -> String {
    let mut line = quote.symbol.clone();
    match quote.price {
        Some(price) => line.push_str(&format!(" {}", format::currency(price))),
        None => line.push_str(" n/a"),
    }
    if let Some(change) = quote.change {
        let sign = if change > 0.0 { "+" } else { "" };
        line.push_str(&format!(" {}{:.2}", sign, change));
    }
    if let Some(p) = quote.change_percent {
        line.push_str(&format!(" ({})", format::signed_percent(p)));
    }
    if let Some(volume) = quote.volume {
        line.push_str(&format!(" vol {}", format::compact_number(volume)));
    }
    if !quote.timestamp.is_empty() {
        line.push_str(&format!(" @ {}", quote.timestamp));
    }
    line
}

pub fn format_summary(id: &str, range: StockRange, summary: &StockSummary) -> String {
    let change = match summary.change_percent {
        Some(p) => format!("{} ({})", format::currency(summary.change), format::signed_percent(p)),
        None => format::currency(summary.change),
    };
    format!(
        "{} {} ({} points)\n  close  {} -> {}\n  change {}\n  high   {}\n  low    {}\n  volume {}",
        id,
        range.label(),
        summary.points,
        format::currency(summary.first_close),
        format::currency(summary.last_close),
        change,
        format::currency(summary.high),
        format::currency(summary.low),
        format::compact_number(summary.volume),
    )
}

pub async fn run_quote(client: &ApiClient, id: &str) -> anyhow::Result<()> {
    let quote = client.stock_quote(id).await?;
    println!("{}", format_quote(&quote));
    Ok(())
}

/// Poll the quote every `interval_secs` until Ctrl-C. Failed polls are
/// logged and the loop keeps going.
pub async fn watch_quote(client: &ApiClient, id: &str, interval_secs: u64) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    info!("[BI] watching {} every {}s", id, interval_secs.max(1));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match client.stock_quote(id).await {
                    Ok(quote) => println!("{}", format_quote(&quote)),
                    Err(e) => warn!("[BI] quote poll for {} failed: {:?}", id, e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("[BI] stopped watching {}", id);
                return Ok(());
            }
        }
    }
}

pub async fn run_stock(client: &ApiClient, id: &str, range: &str) -> anyhow::Result<()> {
    let range = StockRange::parse(range).ok_or_else(|| anyhow!("unknown range {:?}", range))?;
    let points = client.stock_history(id, range).await?;
    info!("[BI] {} {}: {} points", id, range.as_str(), points.len());
    match stock_summary(&points) {
        Some(summary) => println!("{}", format_summary(id, range, &summary)),
        None => println!("No price history for {} over {}", id, range.label()),
    }
    Ok(())
}
