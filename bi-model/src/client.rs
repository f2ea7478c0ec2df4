//! Native REST client for the dashboard backend.
//!
//! Requests are issued once with no retry or backoff; a failure is reported
//! to the caller as an [`ApiError`] and logged.

use crate::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::config::ApiConfig;
use crate::endpoint::{Endpoint, Method};
use crate::error::{decode, ApiError};
use crate::org_chart::{company_names, CompanyEntry, GenerateSelectedRequest, GenerateSelectedResponse};
use crate::stock::{StockPoint, StockQuote, StockRange};
use crate::technographics::TechnographicsRow;
use crate::Record;
use log::{info, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(&self, endpoint: &Endpoint, request: RequestBuilder) -> Result<String, ApiError> {
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("[BI] request to {:?} failed: {}", endpoint, e);
                return Err(ApiError::Connection(e.to_string()));
            }
        };
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("[BI] failed to read body for {:?}: {}", endpoint, e);
            ApiError::Connection(e.to_string())
        })?;
        if !status.is_success() {
            warn!("[BI] {:?} answered {}", endpoint, status);
            return Err(ApiError::from_response(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                &body,
            ));
        }
        info!("[BI] {:?} returned {} bytes", endpoint, body.len());
        Ok(body)
    }

    /// GET an endpoint and return the raw body.
    pub async fn get_text(&self, endpoint: &Endpoint) -> Result<String, ApiError> {
        let url = endpoint.url(&self.config.base_url)?;
        let request = self.client.get(url);
        self.send(endpoint, request).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let body = self.get_text(endpoint).await?;
        decode(&body)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        payload: &B,
    ) -> Result<T, ApiError> {
        if endpoint.method() != Method::Post {
            warn!("[BI] posting to GET endpoint {:?}", endpoint);
        }
        let url = endpoint.url(&self.config.base_url)?;
        let request = self.client.post(url).json(payload);
        let body = self.send(endpoint, request).await?;
        decode(&body)
    }

    pub async fn technographics(&self) -> Result<Vec<TechnographicsRow>, ApiError> {
        self.get_json(&Endpoint::Technographics).await
    }

    pub async fn stock_history(&self, id: &str, range: StockRange) -> Result<Vec<StockPoint>, ApiError> {
        self.get_json(&Endpoint::Stock {
            id: id.to_string(),
            range,
        })
        .await
    }

    pub async fn stock_quote(&self, id: &str) -> Result<StockQuote, ApiError> {
        self.get_json(&Endpoint::StockQuote { id: id.to_string() }).await
    }

    /// Rows as the backend sent them. Table views search and export these
    /// untouched.
    pub async fn records(&self, endpoint: &Endpoint) -> Result<Vec<Record>, ApiError> {
        self.get_json(endpoint).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(&Endpoint::Login, request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(&Endpoint::Signup, request).await
    }

    pub async fn org_chart_companies(&self) -> Result<Vec<String>, ApiError> {
        let entries: Vec<CompanyEntry> = self.get_json(&Endpoint::OrgChartCompanies).await?;
        Ok(company_names(entries))
    }

    /// Person details as CSV text.
    pub async fn org_chart_person_details(&self, company: &str) -> Result<String, ApiError> {
        self.get_text(&Endpoint::OrgChartPersonDetails {
            company: company.to_string(),
        })
        .await
    }

    pub async fn org_chart_html(&self, company: &str) -> Result<String, ApiError> {
        self.get_text(&Endpoint::OrgChart {
            company: company.to_string(),
        })
        .await
    }

    pub async fn generate_selected(
        &self,
        request: &GenerateSelectedRequest,
    ) -> Result<GenerateSelectedResponse, ApiError> {
        self.post_json(&Endpoint::OrgChartGenerateSelected, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_config() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:5000").with_timeout(3)).unwrap();
        assert_eq!(client.config().timeout_secs, 3);
        assert_eq!(client.config().base_url, "http://localhost:5000");
    }

    #[tokio::test]
    async fn test_bad_base_url_fails_before_sending() {
        let client = ApiClient::new(ApiConfig::new("::nope::")).unwrap();
        let err = client.records(&Endpoint::Intent).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
