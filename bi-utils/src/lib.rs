//! Shared utility functions for BI dashboard crates.

/// Number formatting for table cells and summary cards.
pub mod format {
    /// Format large values with a K/M/B/T suffix and one decimal.
    ///
    /// Values below 1,000 keep up to two decimals with trailing zeros removed.
    pub fn compact_number(value: f64) -> String {
        let abs = value.abs();
        let (scaled, suffix) = if abs >= 1e12 {
            (value / 1e12, "T")
        } else if abs >= 1e9 {
            (value / 1e9, "B")
        } else if abs >= 1e6 {
            (value / 1e6, "M")
        } else if abs >= 1e3 {
            (value / 1e3, "K")
        } else {
            return trim_decimals(value, 2);
        };
        format!("{:.1}{}", scaled, suffix)
    }

    /// `12.34%`.
    pub fn percent(value: f64) -> String {
        format!("{:.2}%", value)
    }

    /// Signed percentage for changes: `+1.50%` / `-0.25%`.
    pub fn signed_percent(value: f64) -> String {
        if value > 0.0 {
            format!("+{:.2}%", value)
        } else {
            format!("{:.2}%", value)
        }
    }

    /// `$1,234.50`, negative as `-$1,234.50`.
    pub fn currency(value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        let cents = (value.abs() * 100.0).round() as u64;
        format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
    }

    /// `1234567` -> `1,234,567`.
    pub fn group_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    fn trim_decimals(value: f64, decimals: usize) -> String {
        let s = format!("{:.*}", decimals, value);
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            s
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compact_number() {
            assert_eq!(compact_number(950.0), "950");
            assert_eq!(compact_number(12.5), "12.5");
            assert_eq!(compact_number(1_260.0), "1.3K");
            assert_eq!(compact_number(3_400_000.0), "3.4M");
            assert_eq!(compact_number(-5_600_000_000.0), "-5.6B");
            assert_eq!(compact_number(2.1e12), "2.1T");
        }

        #[test]
        fn test_percent() {
            assert_eq!(percent(12.346), "12.35%");
            assert_eq!(signed_percent(1.5), "+1.50%");
            assert_eq!(signed_percent(-0.25), "-0.25%");
            assert_eq!(signed_percent(0.0), "0.00%");
        }

        #[test]
        fn test_currency() {
            assert_eq!(currency(1234.5), "$1,234.50");
            assert_eq!(currency(-0.5), "-$0.50");
            assert_eq!(currency(1_000_000.0), "$1,000,000.00");
        }
    }
}

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Parse the date part of an ISO string (`2024-01-05`, `2024-01-05T10:00:00Z`,
    /// `2024-01-05 10:00`).
    pub fn parse_iso(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        let date_part = s.get(..10).unwrap_or(s);
        if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            return Ok(date);
        }
        Ok(NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")?.date())
    }

    /// Format an ISO date for display (`Jan 05, 2024`); unparseable input is
    /// returned unchanged.
    pub fn format_display(s: &str) -> String {
        match parse_iso(s) {
            Ok(date) => date.format("%b %d, %Y").to_string(),
            Err(_) => s.to_string(),
        }
    }

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

}

/// Naming of downloaded files.
pub mod export {
    use chrono::NaiveDate;

    /// `<view>_<YYYY-MM-DD>.csv`, with the view name lower-cased and spaces
    /// replaced by underscores.
    pub fn csv_filename(view: &str, date: &NaiveDate) -> String {
        let slug: String = view
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        format!("{}_{}.csv", slug, super::dates::format_date(date))
    }

}
