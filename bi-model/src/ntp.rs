use crate::lenient;
use serde::{Deserialize, Serialize};

/// A "Next to Purchase" prediction for one company-technology pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NtpRow {
    #[serde(default, deserialize_with = "lenient::string")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub domain: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub technology: String,
    /// Probability in percent (0-100) when the backend sends one.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub purchase_probability: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub purchase_prediction: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ntp_analysis: String,
}

impl NtpRow {
    /// Case-insensitive company match, used by the technographics side panel.
    pub fn is_for_company(&self, company: &str) -> bool {
        self.company_name.trim().eq_ignore_ascii_case(company.trim())
    }
}
