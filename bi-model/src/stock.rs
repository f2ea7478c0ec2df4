use crate::lenient;
use serde::{Deserialize, Serialize};

/// History window for `/api/stock/{id}/{range}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StockRange {
    OneDay,
    FiveDays,
    #[default]
    OneMonth,
    SixMonths,
    OneYear,
    FiveYears,
}

impl StockRange {
    pub const ALL: [StockRange; 6] = [
        StockRange::OneDay,
        StockRange::FiveDays,
        StockRange::OneMonth,
        StockRange::SixMonths,
        StockRange::OneYear,
        StockRange::FiveYears,
    ];

    /// Path segment sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockRange::OneDay => "1d",
            StockRange::FiveDays => "5d",
            StockRange::OneMonth => "1m",
            StockRange::SixMonths => "6m",
            StockRange::OneYear => "1y",
            StockRange::FiveYears => "5y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockRange::OneDay => "1D",
            StockRange::FiveDays => "5D",
            StockRange::OneMonth => "1M",
            StockRange::SixMonths => "6M",
            StockRange::OneYear => "1Y",
            StockRange::FiveYears => "5Y",
        }
    }

    pub fn parse(s: &str) -> Option<StockRange> {
        StockRange::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// One bar of a stock history series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockPoint {
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub close: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub volume: Option<f64>,
}

/// Live quote from `/api/stock/quote/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    #[serde(default, deserialize_with = "lenient::string")]
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub change: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub change_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_segments() {
        assert_eq!(StockRange::default().as_str(), "1m");
        assert_eq!(StockRange::parse("5Y"), Some(StockRange::FiveYears));
        assert_eq!(StockRange::parse("2w"), None);
    }

    #[test]
    fn test_quote_decodes() {
        let q: StockQuote = serde_json::from_str(
            r#"{"symbol":"ACME","price":"101.5","change":-1.5,"changePercent":-1.46}"#,
        )
        .unwrap();
        assert_eq!(q.price, Some(101.5));
        assert_eq!(q.change_percent, Some(-1.46));
        assert!(q.timestamp.is_empty());
    }
}
