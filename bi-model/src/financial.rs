use crate::lenient;
use serde::{Deserialize, Serialize};

/// Open/high/low/close for one performance window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ohlc {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub close: Option<f64>,
}

impl Ohlc {
    /// Percent move from open to close, `None` when either side is missing
    /// or the open is zero.
    pub fn change_percent(&self) -> Option<f64> {
        match (self.open, self.close) {
            (Some(open), Some(close)) if open != 0.0 => Some((close - open) / open * 100.0),
            _ => None,
        }
    }

    /// Absolute close - open.
    pub fn change(&self) -> Option<f64> {
        Some(self.close? - self.open?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformancePeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl PerformancePeriod {
    pub const ALL: [PerformancePeriod; 4] = [
        PerformancePeriod::Daily,
        PerformancePeriod::Weekly,
        PerformancePeriod::Monthly,
        PerformancePeriod::Yearly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PerformancePeriod::Daily => "Daily",
            PerformancePeriod::Weekly => "Weekly",
            PerformancePeriod::Monthly => "Monthly",
            PerformancePeriod::Yearly => "Yearly",
        }
    }

    /// JSON key of the nested performance object.
    pub fn field(&self) -> &'static str {
        match self {
            PerformancePeriod::Daily => "dailyPerformance",
            PerformancePeriod::Weekly => "weeklyPerformance",
            PerformancePeriod::Monthly => "monthlyPerformance",
            PerformancePeriod::Yearly => "yearlyPerformance",
        }
    }

    pub fn parse(s: &str) -> Option<PerformancePeriod> {
        PerformancePeriod::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
    }
}

/// A company row of the wide financial table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRow {
    #[serde(default, deserialize_with = "lenient::string")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub sector: String,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub revenue: Option<f64>,
    /// Year-over-year revenue growth in percent.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub revenue_growth: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub net_income: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub pe_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub eps: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub daily_performance: Option<Ohlc>,
    #[serde(default)]
    pub weekly_performance: Option<Ohlc>,
    #[serde(default)]
    pub monthly_performance: Option<Ohlc>,
    #[serde(default)]
    pub yearly_performance: Option<Ohlc>,
}

impl FinancialRow {
    pub fn performance(&self, period: PerformancePeriod) -> Option<&Ohlc> {
        match period {
            PerformancePeriod::Daily => self.daily_performance.as_ref(),
            PerformancePeriod::Weekly => self.weekly_performance.as_ref(),
            PerformancePeriod::Monthly => self.monthly_performance.as_ref(),
            PerformancePeriod::Yearly => self.yearly_performance.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FinancialRow {
        serde_json::from_str(
            r#"{
                "companyName": "Acme",
                "symbol": "ACME",
                "marketCap": "1,500,000,000",
                "revenueGrowth": 12.5,
                "dailyPerformance": {"open": 100, "high": 104, "low": 99, "close": 102},
                "yearlyPerformance": {"open": 0, "close": 102}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_nested_performance_decodes() {
        let row = sample();
        assert_eq!(row.market_cap, Some(1_500_000_000.0));
        let daily = row.performance(PerformancePeriod::Daily).unwrap();
        assert_eq!(daily.high, Some(104.0));
        assert!(row.performance(PerformancePeriod::Weekly).is_none());
    }

    #[test]
    fn test_change_percent_from_open_and_close() {
        let row = sample();
        let daily = row.performance(PerformancePeriod::Daily).unwrap();
        assert!((daily.change_percent().unwrap() - 2.0).abs() < 1e-9);
        assert_eq!(daily.change(), Some(2.0));
        // zero open has no meaningful percentage
        let yearly = row.performance(PerformancePeriod::Yearly).unwrap();
        assert_eq!(yearly.change_percent(), None);
    }

    #[test]
    fn test_period_parse_and_field() {
        assert_eq!(PerformancePeriod::parse("weekly"), Some(PerformancePeriod::Weekly));
        assert_eq!(PerformancePeriod::Monthly.field(), "monthlyPerformance");
        assert_eq!(PerformancePeriod::parse("hourly"), None);
    }
}
