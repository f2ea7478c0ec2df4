//! `export`: fetch a table, run the search → filter → sort pipeline and
//! write the visible rows as CSV.

use anyhow::{anyhow, bail};
use bi_data::columns;
use bi_data::export::{columns_to_csv, infer_columns, Column};
use bi_data::market::financial_records;
use bi_data::record::to_records;
use bi_data::sort::SortSpec;
use bi_data::table::TableQuery;
use bi_data::technographics::group_by_company;
use bi_model::client::ApiClient;
use bi_model::financial::PerformancePeriod;
use bi_model::Endpoint;
use clap::ValueEnum;
use log::info;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportView {
    Intent,
    Ntp,
    /// One row per company with its technologies
    Technographics,
    Financial,
    Growth,
    RenewalIntelligence,
    MutualFunds,
    ProductCatalogue,
}

impl ExportView {
    /// Columns written for `records`: the fixed set the dashboard exports
    /// for typed views, the preferred set plus every other key for
    /// schema-less ones.
    pub fn columns(&self, records: &[Value], period: PerformancePeriod) -> Vec<Column> {
        match self {
            ExportView::Intent => columns::intent_columns(),
            ExportView::Ntp => columns::ntp_columns(),
            ExportView::Technographics => columns::technographics_export_columns(),
            ExportView::Financial => columns::financial_columns(period),
            ExportView::Growth => infer_columns(records, &columns::growth_columns()),
            ExportView::RenewalIntelligence => infer_columns(records, &columns::renewal_columns()),
            ExportView::MutualFunds => infer_columns(records, &columns::mutual_fund_columns()),
            ExportView::ProductCatalogue => infer_columns(records, &columns::product_catalogue_columns()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub search: String,
    pub filters: Vec<(String, String)>,
    pub sort: Option<String>,
    pub descending: bool,
    pub period: String,
}

impl ExportOptions {
    pub fn query(&self) -> TableQuery {
        let mut query = TableQuery::default().with_search(&self.search);
        for (key, value) in &self.filters {
            query.filters.select(key, value);
        }
        query.sort = self.sort.as_deref().map(|key| {
            if self.descending {
                SortSpec::descending(key)
            } else {
                SortSpec::ascending(key)
            }
        });
        query
    }
}

/// Parse a `key=value` filter argument.
pub fn parse_filter(arg: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("filter must look like key=value, got {:?}", arg))?;
    let key = key.trim();
    if key.is_empty() {
        bail!("filter key is empty in {:?}", arg);
    }
    Ok((key.to_string(), value.trim().to_string()))
}

async fn fetch(client: &ApiClient, view: ExportView, period: PerformancePeriod) -> anyhow::Result<Vec<Value>> {
    let records = match view {
        ExportView::Intent => client.records(&Endpoint::Intent).await?,
        ExportView::Ntp => client.records(&Endpoint::Ntp).await?,
        ExportView::Technographics => to_records(&group_by_company(&client.technographics().await?)),
        ExportView::Financial => financial_records(&client.records(&Endpoint::FinancialWide).await?, period),
        ExportView::Growth => client.records(&Endpoint::Growth).await?,
        ExportView::RenewalIntelligence => client.records(&Endpoint::RenewalIntelligence).await?,
        ExportView::MutualFunds => client.records(&Endpoint::MutualFunds).await?,
        ExportView::ProductCatalogue => client.records(&Endpoint::ProductCatalogue { year: None }).await?,
    };
    Ok(records)
}

/// CSV of the rows `options` leaves visible. Values are written exactly as
/// the backend sent them.
pub fn export_csv(records: &[Value], columns: &[Column], options: &ExportOptions) -> anyhow::Result<(usize, String)> {
    let visible = options.query().apply(records);
    let csv = columns_to_csv(&visible, columns)?;
    Ok((visible.len(), csv))
}

pub async fn run_export(
    client: &ApiClient,
    view: ExportView,
    out: &str,
    options: &ExportOptions,
) -> anyhow::Result<()> {
    let period = PerformancePeriod::parse(&options.period)
        .ok_or_else(|| anyhow!("unknown period {:?}", options.period))?;
    let records = fetch(client, view, period).await?;
    info!("[BI] fetched {} {:?} rows", records.len(), view);

    let columns = view.columns(&records, period);
    let (count, csv) = export_csv(&records, &columns, options)?;
    std::fs::write(out, csv)?;
    info!("[BI] wrote {} of {} rows to {}", count, records.len(), out);
    println!("Exported {} rows to {}", count, out);
    Ok(())
}
