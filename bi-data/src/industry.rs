//! Industry and regional aggregates derived from technographics.
//!
//! These are computed once from the technographics rows and shared between
//! views (the industry pie and the regional adoption table).

use crate::technographics::{group_by_company, CompanyTechnologies};
use bi_model::technographics::TechnographicsRow;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// Share of the whole, 0-100.
    pub percent: f64,
}

/// Share of a region's companies that use a technology.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionAdoption {
    pub region: String,
    pub technology: String,
    pub companies: usize,
    pub region_companies: usize,
    pub percent: f64,
}

fn label_or_unknown(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        UNKNOWN.to_string()
    } else {
        s.to_string()
    }
}

fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Distinct companies per industry, largest first (ties by name).
pub fn industry_pie(companies: &[CompanyTechnologies]) -> Vec<PieSlice> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for company in companies {
        *counts.entry(label_or_unknown(&company.industry)).or_default() += 1;
    }
    let total = companies.len();
    let mut slices: Vec<PieSlice> = counts
        .into_iter()
        .map(|(label, value)| PieSlice {
            percent: percent_of(value, total),
            label,
            value,
        })
        .collect();
    slices.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
    slices
}

/// Per region, per technology adoption. Sorted by region, then by percent
/// descending, then technology name.
pub fn regional_adoption(companies: &[CompanyTechnologies]) -> Vec<RegionAdoption> {
    let mut region_sizes: HashMap<String, usize> = HashMap::new();
    let mut usage: BTreeMap<(String, String), usize> = BTreeMap::new();
    for company in companies {
        let region = label_or_unknown(&company.region);
        *region_sizes.entry(region.clone()).or_default() += 1;
        for tech in &company.technologies {
            *usage.entry((region.clone(), tech.clone())).or_default() += 1;
        }
    }
    let mut out: Vec<RegionAdoption> = usage
        .into_iter()
        .map(|((region, technology), count)| {
            let region_companies = region_sizes.get(&region).copied().unwrap_or(0);
            RegionAdoption {
                percent: percent_of(count, region_companies),
                region,
                technology,
                companies: count,
                region_companies,
            }
        })
        .collect();
    out.sort_by(|a, b| {
        a.region
            .cmp(&b.region)
            .then_with(|| b.percent.partial_cmp(&a.percent).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| a.technology.cmp(&b.technology))
    });
    out
}

/// Cached aggregates shared across views.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndustryInsights {
    pub company_count: usize,
    pub industry_pie: Vec<PieSlice>,
    pub regional_adoption: Vec<RegionAdoption>,
}

impl IndustryInsights {
    pub fn from_rows(rows: &[TechnographicsRow]) -> Self {
        Self::from_companies(&group_by_company(rows))
    }

    pub fn from_companies(companies: &[CompanyTechnologies]) -> Self {
        Self {
            company_count: companies.len(),
            industry_pie: industry_pie(companies),
            regional_adoption: regional_adoption(companies),
        }
    }

    /// Regions present, sorted.
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self
            .regional_adoption
            .iter()
            .map(|a| a.region.clone())
            .collect();
        regions.dedup();
        regions
    }

    /// Top `limit` technologies of a region.
    pub fn top_in_region(&self, region: &str, limit: usize) -> Vec<&RegionAdoption> {
        self.regional_adoption
            .iter()
            .filter(|a| a.region == region)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technographics::tests::{row, sample_rows};

    #[test]
    fn test_pie_counts_companies_not_rows() {
        let insights = IndustryInsights::from_rows(&sample_rows());
        assert_eq!(insights.company_count, 3);
        assert_eq!(
            insights.industry_pie,
            vec![
                PieSlice {
                    label: "Retail".to_string(),
                    value: 2,
                    percent: 2.0 / 3.0 * 100.0
                },
                PieSlice {
                    label: "Finance".to_string(),
                    value: 1,
                    percent: 1.0 / 3.0 * 100.0
                },
            ]
        );
        let total: f64 = insights.industry_pie.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_blank_industry_is_unknown() {
        let companies = group_by_company(&[row("Solo", "", "", "CRM", "X")]);
        let pie = industry_pie(&companies);
        assert_eq!(pie[0].label, "Unknown");
        assert_eq!(pie[0].percent, 100.0);
    }

    #[test]
    fn test_regional_percentages() {
        let insights = IndustryInsights::from_rows(&sample_rows());
        assert_eq!(insights.regions(), vec!["APAC", "EMEA"]);
        let apac = insights.top_in_region("APAC", 10);
        // APAC: Zeta (Salesforce, HubSpot CRM) and Beta (Tableau)
        assert_eq!(apac.len(), 3);
        assert!(apac.iter().all(|a| a.region_companies == 2));
        assert!(apac.iter().all(|a| (a.percent - 50.0).abs() < 1e-9));
        let techs: Vec<_> = apac.iter().map(|a| a.technology.as_str()).collect();
        assert_eq!(techs, vec!["HubSpot CRM", "Salesforce", "Tableau"]);

        let emea = insights.top_in_region("EMEA", 1);
        assert_eq!(emea.len(), 1);
        assert_eq!(emea[0].percent, 100.0);
    }
}
