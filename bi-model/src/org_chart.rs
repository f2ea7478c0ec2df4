//! Buying-group / org-chart types.

use crate::lenient;
use serde::{Deserialize, Serialize};

/// An entry of `/api/org-chart/companies`: either a bare name or an object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CompanyEntry {
    Name(String),
    Record {
        #[serde(alias = "companyName", alias = "company_name", alias = "company")]
        name: String,
    },
}

impl CompanyEntry {
    pub fn name(&self) -> &str {
        match self {
            CompanyEntry::Name(name) => name,
            CompanyEntry::Record { name } => name,
        }
    }
}

/// Flatten the companies response into sorted, de-duplicated names.
pub fn company_names(entries: Vec<CompanyEntry>) -> Vec<String> {
    let mut names: Vec<String> = entries
        .iter()
        .map(|e| e.name().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    names.sort_by_key(|n| n.to_lowercase());
    names.dedup();
    names
}

/// A person parsed from the person-details CSV.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrgPerson {
    pub name: String,
    pub title: String,
    pub department: String,
    pub level: String,
    /// Manager's name as written in the CSV; empty for top-level people.
    pub reports_to: String,
    pub email: String,
    pub linkedin: String,
    pub location: String,
}

/// Body of `POST /api/org-chart/generate-selected`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSelectedRequest {
    pub company_name: String,
    pub persons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GenerateSelectedResponse {
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: String,
    #[serde(default)]
    pub html: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_companies_accept_both_shapes() {
        let entries: Vec<CompanyEntry> =
            serde_json::from_str(r#"["Zeta", {"companyName":"acme"}, {"name":"Beta"}, "Zeta", " "]"#)
                .unwrap();
        assert_eq!(company_names(entries), vec!["acme", "Beta", "Zeta"]);
    }

    #[test]
    fn test_generate_request_is_camel_case() {
        let req = GenerateSelectedRequest {
            company_name: "Acme".to_string(),
            persons: vec!["Ana".to_string()],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["persons"][0], "Ana");
    }
}
