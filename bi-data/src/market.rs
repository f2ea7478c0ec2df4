//! Stock history summaries and the financial-table projection.

use bi_model::financial::{FinancialRow, PerformancePeriod};
use bi_model::stock::StockPoint;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Headline figures of a stock history series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StockSummary {
    pub first_close: f64,
    pub last_close: f64,
    pub change: f64,
    /// `None` when the first close is zero.
    pub change_percent: Option<f64>,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub points: usize,
}

/// Summarise `points` in date order. Bars without a close are ignored; the
/// high/low fall back to the close when a bar lacks them. `None` when no bar
/// has a close.
pub fn stock_summary(points: &[StockPoint]) -> Option<StockSummary> {
    let closes: Vec<(&StockPoint, f64)> = points
        .iter()
        .filter_map(|p| p.close.map(|c| (p, c)))
        .collect();
    let (_, first_close) = *closes.first()?;
    let (_, last_close) = *closes.last()?;

    let high = closes
        .iter()
        .map(|(p, c)| p.high.unwrap_or(*c))
        .fold(f64::MIN, f64::max);
    let low = closes
        .iter()
        .map(|(p, c)| p.low.unwrap_or(*c))
        .fold(f64::MAX, f64::min);
    let volume = points.iter().filter_map(|p| p.volume).sum();
    let change = last_close - first_close;

    Some(StockSummary {
        first_close,
        last_close,
        change,
        change_percent: (first_close != 0.0).then(|| change / first_close * 100.0),
        high,
        low,
        volume,
        points: closes.len(),
    })
}

/// The fetched financial record with the selected period's close and change
/// added as `periodClose` / `periodChangePercent`. Backend fields are kept
/// verbatim.
pub fn financial_record(raw: &Value, period: PerformancePeriod) -> Value {
    let row = match FinancialRow::deserialize(raw) {
        Ok(row) => row,
        Err(e) => {
            log::warn!("[BI] financial: undecodable row: {}", e);
            FinancialRow::default()
        }
    };
    let mut record = raw.clone();
    let ohlc = row.performance(period);
    if let Value::Object(map) = &mut record {
        map.insert(
            "periodClose".to_string(),
            ohlc.and_then(|o| o.close).map(Value::from).unwrap_or(Value::Null),
        );
        map.insert(
            "periodChangePercent".to_string(),
            ohlc.and_then(|o| o.change_percent())
                .map(Value::from)
                .unwrap_or(Value::Null),
        );
    }
    record
}

pub fn financial_records(records: &[Value], period: PerformancePeriod) -> Vec<Value> {
    records.iter().map(|r| financial_record(r, period)).collect()
}

/// SVG `points` attribute for a close-price polyline filling
/// `width` x `height`. Higher prices are drawn higher.
pub fn line_points(points: &[StockPoint], width: f64, height: f64) -> String {
    let closes: Vec<f64> = points.iter().filter_map(|p| p.close).collect();
    if closes.is_empty() {
        return String::new();
    }
    let min = closes.iter().copied().fold(f64::MAX, f64::min);
    let max = closes.iter().copied().fold(f64::MIN, f64::max);
    let span = if max > min { max - min } else { 1.0 };
    let step = if closes.len() > 1 {
        width / (closes.len() - 1) as f64
    } else {
        0.0
    };
    closes
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let x = i as f64 * step;
            let y = height - (c - min) / span * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bar(close: Option<f64>, high: Option<f64>, low: Option<f64>, volume: f64) -> StockPoint {
        StockPoint {
            date: String::new(),
            open: None,
            high,
            low,
            close,
            volume: Some(volume),
        }
    }

    #[test]
    fn test_summary_over_series() {
        let points = vec![
            bar(Some(100.0), Some(101.0), Some(98.0), 10.0),
            bar(None, None, None, 5.0),
            bar(Some(110.0), None, None, 20.0),
            bar(Some(105.0), Some(112.0), Some(104.0), 30.0),
        ];
        let s = stock_summary(&points).unwrap();
        assert_eq!(s.first_close, 100.0);
        assert_eq!(s.last_close, 105.0);
        assert_eq!(s.change, 5.0);
        assert_eq!(s.change_percent, Some(5.0));
        assert_eq!(s.high, 112.0);
        assert_eq!(s.low, 98.0);
        assert_eq!(s.volume, 65.0);
        assert_eq!(s.points, 3);
    }

    #[test]
    fn test_summary_of_empty_series() {
        assert!(stock_summary(&[]).is_none());
        assert!(stock_summary(&[bar(None, None, None, 1.0)]).is_none());
    }

    #[test]
    fn test_period_columns_are_added() {
        let row = json!({
            "companyName": "Acme",
            "marketCap": "1,500,000,000",
            "weeklyPerformance": {"open": 50, "close": "55"}
        });
        let weekly = financial_record(&row, PerformancePeriod::Weekly);
        assert_eq!(weekly["periodClose"], 55.0);
        assert_eq!(weekly["periodChangePercent"], 10.0);
        assert_eq!(weekly["companyName"], "Acme");
        // backend formatting survives for search and export
        assert_eq!(weekly["marketCap"], "1,500,000,000");
        assert!(crate::search::record_matches_search(&weekly, "1,500,000"));
        let daily = financial_record(&row, PerformancePeriod::Daily);
        assert!(daily["periodClose"].is_null());
    }

    #[test]
    fn test_polyline_spans_the_box() {
        let points = vec![
            bar(Some(10.0), None, None, 0.0),
            bar(Some(20.0), None, None, 0.0),
            bar(Some(15.0), None, None, 0.0),
        ];
        assert_eq!(line_points(&points, 100.0, 50.0), "0.0,50.0 50.0,0.0 100.0,25.0");
        assert_eq!(line_points(&points[..1], 100.0, 50.0), "0.0,50.0");
        assert_eq!(line_points(&[], 100.0, 50.0), "");
    }
}
