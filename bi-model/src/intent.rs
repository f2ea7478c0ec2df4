use crate::lenient;
use serde::{Deserialize, Serialize};

/// Backend-assigned propensity label for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntentStatus {
    High,
    HighMedium,
    Medium,
    Low,
    GreenFieldAccount,
}

impl IntentStatus {
    /// All statuses, strongest first.
    pub const ALL: [IntentStatus; 5] = [
        IntentStatus::High,
        IntentStatus::HighMedium,
        IntentStatus::Medium,
        IntentStatus::Low,
        IntentStatus::GreenFieldAccount,
    ];

    /// Parse a backend label, ignoring case, spacing and `-`/`_` differences.
    pub fn parse(label: &str) -> Option<IntentStatus> {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "high" => Some(IntentStatus::High),
            "highmedium" => Some(IntentStatus::HighMedium),
            "medium" => Some(IntentStatus::Medium),
            "low" => Some(IntentStatus::Low),
            "greenfieldaccount" | "greenfield" => Some(IntentStatus::GreenFieldAccount),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntentStatus::High => "High",
            IntentStatus::HighMedium => "High-Medium",
            IntentStatus::Medium => "Medium",
            IntentStatus::Low => "Low",
            IntentStatus::GreenFieldAccount => "Green Field Account",
        }
    }

    /// 0 for `High` through 4 for `Green Field Account`.
    pub fn rank(&self) -> usize {
        *self as usize
    }

    /// Badge colour used by the intent view.
    pub fn color(&self) -> &'static str {
        match self {
            IntentStatus::High => "#2E7D32",
            IntentStatus::HighMedium => "#689F38",
            IntentStatus::Medium => "#F9A825",
            IntentStatus::Low => "#EF6C00",
            IntentStatus::GreenFieldAccount => "#1565C0",
        }
    }
}

/// One account in the intent view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRow {
    #[serde(default, deserialize_with = "lenient::string")]
    pub company_name: String,
    /// Kept as delivered; see [`IntentRow::status`] for the parsed form.
    #[serde(default, deserialize_with = "lenient::string")]
    pub intent_status: String,
}

impl IntentRow {
    pub fn status(&self) -> Option<IntentStatus> {
        IntentStatus::parse(&self.intent_status)
    }
}
