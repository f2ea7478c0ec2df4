//! Column sets of every table view. The dashboard renders and exports with
//! these and the CLI exports with the same lists, so a file written from
//! either side has the same fields.

use crate::export::{CellFormat, Column};
use bi_model::financial::PerformancePeriod;

pub fn intent_columns() -> Vec<Column> {
    vec![
        Column::new("companyName", "Company"),
        Column::new("intentStatus", "Intent Status"),
    ]
}

pub fn ntp_columns() -> Vec<Column> {
    vec![
        Column::new("companyName", "Company"),
        Column::new("domain", "Domain"),
        Column::new("category", "Category"),
        Column::new("technology", "Technology"),
        Column::new("purchaseProbability", "Purchase Probability").with_format(CellFormat::Percent),
        Column::new("purchasePrediction", "Prediction"),
        Column::new("ntpAnalysis", "Analysis").unsortable(),
    ]
}

/// Grouped technographics table (one row per company).
pub fn technographics_columns() -> Vec<Column> {
    vec![
        Column::new("companyName", "Company"),
        Column::new("domain", "Domain"),
        Column::new("industry", "Industry"),
        Column::new("region", "Region"),
        Column::new("employeeSize", "Employees"),
        Column::new("revenue", "Revenue"),
        Column::new("technologies", "Technologies").with_format(CellFormat::Chips).unsortable(),
        Column::new("linkedinUrl", "LinkedIn").with_format(CellFormat::Link).unsortable(),
    ]
}

/// Technographics download: the table columns plus categories.
pub fn technographics_export_columns() -> Vec<Column> {
    vec![
        Column::new("companyName", "Company"),
        Column::new("domain", "Domain"),
        Column::new("industry", "Industry"),
        Column::new("region", "Region"),
        Column::new("employeeSize", "Employees"),
        Column::new("revenue", "Revenue"),
        Column::new("categories", "Categories"),
        Column::new("technologies", "Technologies"),
        Column::new("linkedinUrl", "LinkedIn"),
    ]
}

pub fn financial_columns(period: PerformancePeriod) -> Vec<Column> {
    vec![
        Column::new("companyName", "Company"),
        Column::new("symbol", "Symbol"),
        Column::new("sector", "Sector"),
        Column::new("marketCap", "Market Cap").with_format(CellFormat::Compact),
        Column::new("revenue", "Revenue").with_format(CellFormat::Compact),
        Column::new("revenueGrowth", "Revenue Growth").with_format(CellFormat::SignedPercent),
        Column::new("netIncome", "Net Income").with_format(CellFormat::Compact),
        Column::new("peRatio", "P/E"),
        Column::new("eps", "EPS").with_format(CellFormat::Currency),
        Column::new("dividendYield", "Dividend Yield").with_format(CellFormat::Percent),
        Column::new("periodClose", &format!("{} Close", period.label())).with_format(CellFormat::Currency),
        Column::new("periodChangePercent", &format!("{} Change", period.label()))
            .with_format(CellFormat::SignedPercent),
    ]
}

pub fn renewal_columns() -> Vec<Column> {
    vec![
        Column::new("companyName", "Company"),
        Column::new("product", "Product"),
        Column::new("renewalDate", "Renewal Date").with_format(CellFormat::Date),
        Column::new("contractValue", "Contract Value").with_format(CellFormat::Currency),
        Column::new("renewalProbability", "Renewal Probability").with_format(CellFormat::Percent),
        Column::new("riskLevel", "Risk Level"),
        Column::new("accountManager", "Account Manager"),
    ]
}

pub fn growth_columns() -> Vec<Column> {
    vec![
        Column::new("companyName", "Company"),
        Column::new("industry", "Industry"),
        Column::new("region", "Region"),
        Column::new("employeeGrowth", "Employee Growth").with_format(CellFormat::SignedPercent),
        Column::new("revenueGrowth", "Revenue Growth").with_format(CellFormat::SignedPercent),
        Column::new("fundingStage", "Funding Stage"),
        Column::new("totalFunding", "Total Funding").with_format(CellFormat::Compact),
    ]
}

pub fn mutual_fund_columns() -> Vec<Column> {
    vec![
        Column::new("fundName", "Fund"),
        Column::new("fundHouse", "Fund House"),
        Column::new("category", "Category"),
        Column::new("nav", "NAV").with_format(CellFormat::Currency),
        Column::new("aum", "AUM").with_format(CellFormat::Compact),
        Column::new("oneYearReturn", "1Y Return").with_format(CellFormat::SignedPercent),
        Column::new("threeYearReturn", "3Y Return").with_format(CellFormat::SignedPercent),
        Column::new("expenseRatio", "Expense Ratio").with_format(CellFormat::Percent),
        Column::new("riskLevel", "Risk"),
    ]
}

pub fn product_catalogue_columns() -> Vec<Column> {
    vec![
        Column::new("productName", "Product"),
        Column::new("category", "Category"),
        Column::new("vendor", "Vendor"),
        Column::new("year", "Year"),
        Column::new("price", "Price").with_format(CellFormat::Currency),
        Column::new("unitsSold", "Units Sold").with_format(CellFormat::Number),
        Column::new("revenue", "Revenue").with_format(CellFormat::Compact),
    ]
}
