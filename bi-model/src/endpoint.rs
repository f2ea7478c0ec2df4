//! Catalogue of backend REST endpoints.
//!
//! Every view and CLI command builds its URL through [`Endpoint::url`] so path
//! segments and query values are percent-encoded in one place.

use crate::error::ApiError;
use crate::stock::StockRange;
use url::{Position, Url};

/// Placeholder origin used to build same-origin (relative) URLs.
const RELATIVE_BASE: &str = "http://same-origin.invalid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A backend endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Login,
    Signup,
    Intent,
    Ntp,
    Technographics,
    FinancialWide,
    /// Historical OHLC series for a symbol over a range.
    Stock { id: String, range: StockRange },
    StockQuote { id: String },
    Growth,
    RenewalIntelligence,
    /// Product catalogue, optionally restricted to a year (`?year=`).
    ProductCatalogue { year: Option<i32> },
    MutualFunds,
    OrgChartCompanies,
    /// Person details for a company, returned as CSV text.
    OrgChartPersonDetails { company: String },
    OrgChartGenerateSelected,
    /// Rendered org chart HTML for a company.
    OrgChart { company: String },
}

impl Endpoint {
    /// Path segments below the base URL.
    pub fn segments(&self) -> Vec<String> {
        let fixed: &[&str] = match self {
            Endpoint::Login => &["api", "auth", "login"],
            Endpoint::Signup => &["api", "auth", "signup"],
            Endpoint::Intent => &["api", "intent"],
            Endpoint::Ntp => &["api", "ntp"],
            Endpoint::Technographics => &["api", "technographics"],
            Endpoint::FinancialWide => &["api", "financial", "wide"],
            Endpoint::Growth => &["api", "growth"],
            Endpoint::RenewalIntelligence => &["api", "renewal-intelligence"],
            Endpoint::ProductCatalogue { .. } => &["api", "product-catalogue"],
            Endpoint::MutualFunds => &["api", "mutual-funds"],
            Endpoint::OrgChartCompanies => &["api", "org-chart", "companies"],
            Endpoint::OrgChartPersonDetails { .. } => &["api", "org-chart", "person-details"],
            Endpoint::OrgChartGenerateSelected => &["api", "org-chart", "generate-selected"],
            Endpoint::Stock { id, range } => {
                return vec![
                    "api".to_string(),
                    "stock".to_string(),
                    id.clone(),
                    range.as_str().to_string(),
                ]
            }
            Endpoint::StockQuote { id } => {
                return vec![
                    "api".to_string(),
                    "stock".to_string(),
                    "quote".to_string(),
                    id.clone(),
                ]
            }
            Endpoint::OrgChart { company } => {
                return vec!["api".to_string(), "org-chart".to_string(), company.clone()]
            }
        };
        fixed.iter().map(|s| s.to_string()).collect()
    }

    /// Query-string pairs.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::ProductCatalogue { year: Some(year) } => vec![("year", year.to_string())],
            Endpoint::OrgChartPersonDetails { company } => vec![("company", company.clone())],
            _ => Vec::new(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login | Endpoint::Signup | Endpoint::OrgChartGenerateSelected => Method::Post,
            _ => Method::Get,
        }
    }

    /// Build the full URL against `base`.
    ///
    /// An empty base yields a relative URL (`/api/...`) for same-origin use.
    pub fn url(&self, base: &str) -> Result<String, ApiError> {
        let base = base.trim();
        let relative = base.is_empty();
        let mut url = Url::parse(if relative { RELATIVE_BASE } else { base })
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base, e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base", base)))?;
            segments.pop_if_empty();
            segments.extend(self.segments());
        }
        let query = self.query();
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        if relative {
            Ok(url[Position::BeforePath..].to_string())
        } else {
            Ok(url.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_endpoints_against_base() {
        let base = "http://localhost:5000";
        assert_eq!(Endpoint::Intent.url(base).unwrap(), "http://localhost:5000/api/intent");
        assert_eq!(
            Endpoint::FinancialWide.url(base).unwrap(),
            "http://localhost:5000/api/financial/wide"
        );
        assert_eq!(
            Endpoint::RenewalIntelligence.url(base).unwrap(),
            "http://localhost:5000/api/renewal-intelligence"
        );
    }

    #[test]
    fn test_relative_urls_for_same_origin() {
        assert_eq!(Endpoint::Login.url("").unwrap(), "/api/auth/login");
        assert_eq!(
            Endpoint::ProductCatalogue { year: Some(2024) }.url("").unwrap(),
            "/api/product-catalogue?year=2024"
        );
        assert_eq!(
            Endpoint::ProductCatalogue { year: None }.url("").unwrap(),
            "/api/product-catalogue"
        );
    }

    #[test]
    fn test_base_with_path_prefix_is_kept() {
        assert_eq!(
            Endpoint::Ntp.url("https://example.com/bi/").unwrap(),
            "https://example.com/bi/api/ntp"
        );
    }

    #[test]
    fn test_company_names_are_encoded() {
        let url = Endpoint::OrgChart {
            company: "Acme Corp/EU".to_string(),
        }
        .url("")
        .unwrap();
        assert_eq!(url, "/api/org-chart/Acme%20Corp%2FEU");

        let url = Endpoint::OrgChartPersonDetails {
            company: "Zeta & Sons".to_string(),
        }
        .url("")
        .unwrap();
        assert_eq!(url, "/api/org-chart/person-details?company=Zeta+%26+Sons");
    }

    #[test]
    fn test_stock_paths() {
        let url = Endpoint::Stock {
            id: "AAPL".to_string(),
            range: StockRange::SixMonths,
        }
        .url("")
        .unwrap();
        assert_eq!(url, "/api/stock/AAPL/6m");
        let url = Endpoint::StockQuote { id: "MSFT".to_string() }.url("").unwrap();
        assert_eq!(url, "/api/stock/quote/MSFT");
    }

    #[test]
    fn test_methods() {
        assert_eq!(Endpoint::Login.method(), Method::Post);
        assert_eq!(Endpoint::OrgChartGenerateSelected.method(), Method::Post);
        assert_eq!(Endpoint::Growth.method(), Method::Get);
    }

    #[test]
    fn test_invalid_base_is_reported() {
        assert!(matches!(
            Endpoint::Intent.url("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
