use crate::lenient;
use serde::{Deserialize, Serialize};

/// One detected technology at one company.
///
/// A company with several technologies arrives as several rows; see
/// `bi_data::technographics::group_by_company` for the grouped form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnographicsRow {
    #[serde(default, deserialize_with = "lenient::string")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub domain: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub industry: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub region: String,
    /// Headcount band, e.g. "51-200".
    #[serde(default, deserialize_with = "lenient::string")]
    pub employee_size: String,
    /// Revenue band, e.g. "$10M-$50M".
    #[serde(default, deserialize_with = "lenient::string")]
    pub revenue: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub technology: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub linkedin_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_bands_become_strings() {
        let row: TechnographicsRow = serde_json::from_str(
            r#"{"companyName":"Acme","employeeSize":250,"category":"CRM","technology":"HubSpot"}"#,
        )
        .unwrap();
        assert_eq!(row.employee_size, "250");
        assert_eq!(row.category, "CRM");
        assert!(row.region.is_empty());
    }
}
