//! Grouping of per-technology rows into one row per company.

use bi_model::technographics::TechnographicsRow;
use serde::Serialize;
use std::collections::HashMap;

/// A company with every technology detected for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTechnologies {
    pub company_name: String,
    pub domain: String,
    pub industry: String,
    pub region: String,
    pub employee_size: String,
    pub revenue: String,
    pub linkedin_url: String,
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
}

fn company_key(row: &TechnographicsRow) -> (String, String) {
    (
        row.company_name.trim().to_lowercase(),
        row.domain.trim().to_lowercase(),
    )
}

fn fill_if_blank(slot: &mut String, value: &str) {
    if slot.trim().is_empty() && !value.trim().is_empty() {
        *slot = value.trim().to_string();
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Group rows by (company, domain), case-insensitively, in first-seen order.
///
/// Firmographic fields take the first non-blank value seen for the company;
/// `categories` and `technologies` are de-duplicated in first-seen order.
pub fn group_by_company(rows: &[TechnographicsRow]) -> Vec<CompanyTechnologies> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut companies: Vec<CompanyTechnologies> = Vec::new();

    for row in rows {
        let key = company_key(row);
        let slot = *index.entry(key).or_insert_with(|| {
            companies.push(CompanyTechnologies {
                company_name: row.company_name.trim().to_string(),
                domain: row.domain.trim().to_string(),
                ..Default::default()
            });
            companies.len() - 1
        });
        let company = &mut companies[slot];
        fill_if_blank(&mut company.industry, &row.industry);
        fill_if_blank(&mut company.region, &row.region);
        fill_if_blank(&mut company.employee_size, &row.employee_size);
        fill_if_blank(&mut company.revenue, &row.revenue);
        fill_if_blank(&mut company.linkedin_url, &row.linkedin_url);
        push_unique(&mut company.categories, &row.category);
        push_unique(&mut company.technologies, &row.technology);
    }

    log::info!(
        "[BI] technographics: grouped {} rows into {} companies",
        rows.len(),
        companies.len()
    );
    companies
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn row(company: &str, industry: &str, region: &str, category: &str, technology: &str) -> TechnographicsRow {
        TechnographicsRow {
            company_name: company.to_string(),
            domain: format!("{}.com", company.to_lowercase()),
            industry: industry.to_string(),
            region: region.to_string(),
            category: category.to_string(),
            technology: technology.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn sample_rows() -> Vec<TechnographicsRow> {
        vec![
            row("Acme", "Retail", "EMEA", "CRM", "Salesforce"),
            row("Acme", "", "EMEA", "Marketing Automation", "HubSpot"),
            row("Zeta", "Finance", "APAC", "CRM", "Salesforce"),
            row("acme", "Retail", "EMEA", "CRM", "Salesforce"),
            row("Beta", "Retail", "APAC", "Analytics", "Tableau"),
            row("Zeta", "Finance", "APAC", "CRM", "HubSpot CRM"),
        ]
    }

    #[test]
    fn test_one_row_per_company_in_first_seen_order() {
        let grouped = group_by_company(&sample_rows());
        let names: Vec<_> = grouped.iter().map(|c| c.company_name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Zeta", "Beta"]);
    }

    #[test]
    fn test_technologies_are_unique_and_ordered() {
        let grouped = group_by_company(&sample_rows());
        assert_eq!(grouped[0].technologies, vec!["Salesforce", "HubSpot"]);
        assert_eq!(grouped[0].categories, vec!["CRM", "Marketing Automation"]);
        assert_eq!(grouped[1].technologies, vec!["Salesforce", "HubSpot CRM"]);
    }

    #[test]
    fn test_firmographics_take_first_non_blank() {
        let rows = vec![row("Acme", "", "", "CRM", "A"), row("Acme", "Retail", "EMEA", "CRM", "B")];
        let grouped = group_by_company(&rows);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].industry, "Retail");
        assert_eq!(grouped[0].region, "EMEA");
    }

    #[test]
    fn test_grouped_rows_serialize_with_technology_array() {
        let grouped = group_by_company(&sample_rows());
        let rec = crate::record::to_record(&grouped[0]);
        assert_eq!(rec["companyName"], "Acme");
        assert_eq!(rec["technologies"][1], "HubSpot");
    }
}
