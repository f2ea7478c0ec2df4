use bi_model::intent::{IntentRow, IntentStatus};

/// Count of rows for one intent label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    /// `None` for labels that are not a known status.
    pub status: Option<IntentStatus>,
    pub label: String,
    pub count: usize,
}

/// Rows per status in rank order. Only statuses present are listed; unknown
/// labels follow in first-seen order.
pub fn status_counts(rows: &[IntentRow]) -> Vec<StatusCount> {
    let mut known = [0usize; IntentStatus::ALL.len()];
    let mut unknown: Vec<StatusCount> = Vec::new();

    for row in rows {
        match row.status() {
            Some(status) => known[status.rank()] += 1,
            None => {
                let label = row.intent_status.trim();
                let label = if label.is_empty() { "Unknown" } else { label };
                match unknown.iter_mut().find(|c| c.label == label) {
                    Some(c) => c.count += 1,
                    None => unknown.push(StatusCount {
                        status: None,
                        label: label.to_string(),
                        count: 1,
                    }),
                }
            }
        }
    }

    IntentStatus::ALL
        .into_iter()
        .filter(|s| known[s.rank()] > 0)
        .map(|s| StatusCount {
            status: Some(s),
            label: s.label().to_string(),
            count: known[s.rank()],
        })
        .chain(unknown)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> IntentRow {
        IntentRow {
            company_name: "x".to_string(),
            intent_status: status.to_string(),
        }
    }

    #[test]
    fn test_counts_in_rank_order() {
        let rows = vec![row("Low"), row("High"), row("high-medium"), row("Low"), row("Maybe"), row("")];
        let counts = status_counts(&rows);
        let summary: Vec<_> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(
            summary,
            vec![("High", 1), ("High-Medium", 1), ("Low", 2), ("Maybe", 1), ("Unknown", 1)]
        );
        assert_eq!(counts[0].status, Some(IntentStatus::High));
        assert_eq!(counts[3].status, None);
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, rows.len());
    }
}
