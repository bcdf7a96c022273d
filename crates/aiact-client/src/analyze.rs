//! Typed client for the website analysis endpoint.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/analyze_compliance` | Scrape and score one website |
//!
//! The request body is `{"url": "<website>"}`. A 2xx answer carries
//! `website_url`, `website_description` and `category_scores`. Any other
//! status carries a JSON `detail` string that is shown to the user as is.

use serde::Serialize;
use url::Url;

use aiact_core::ComplianceReport;

use crate::config::AnalysisApiConfig;
use crate::error::{extract_detail, AnalysisApiError, ANALYZE_FAILED};

/// Request body for `POST /analyze_compliance`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub url: &'a str,
}

/// Check a user-supplied website URL before any request is made.
///
/// Surrounding whitespace is ignored. The result must be an absolute
/// `http` or `https` URL with a host.
pub fn validate_website_url(input: &str) -> Result<&str, AnalysisApiError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnalysisApiError::EmptyUrl);
    }
    let parsed = Url::parse(trimmed).map_err(|e| AnalysisApiError::InvalidUrl {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(AnalysisApiError::InvalidUrl {
            input: trimmed.to_string(),
            reason: "expected an http or https address".to_string(),
        });
    }
    Ok(trimmed)
}

/// Client for the analysis endpoint.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    http: reqwest::Client,
    config: AnalysisApiConfig,
}

impl AnalyzeClient {
    pub(crate) fn new(http: reqwest::Client, config: AnalysisApiConfig) -> Self {
        Self { http, config }
    }

    /// Submit a website for analysis and return its sanitized report.
    ///
    /// Calls `POST {base_url}/analyze_compliance`.
    pub async fn analyze(&self, website_url: &str) -> Result<ComplianceReport, AnalysisApiError> {
        let endpoint = "POST /analyze_compliance";
        let website_url = validate_website_url(website_url)?;
        let url = self.config.endpoint_url(&["analyze_compliance"]);

        tracing::debug!(%url, website_url, "submitting website for analysis");

        let resp = self
            .http
            .post(url)
            .json(&AnalyzeRequest { url: website_url })
            .send()
            .await
            .map_err(|e| AnalysisApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(endpoint, status, body = %body, "analysis request rejected");
            return Err(AnalysisApiError::ApiError {
                endpoint: endpoint.into(),
                status,
                detail: extract_detail(&body).unwrap_or_else(|| ANALYZE_FAILED.to_string()),
            });
        }

        let report: ComplianceReport =
            resp.json()
                .await
                .map_err(|e| AnalysisApiError::Deserialization {
                    endpoint: endpoint.into(),
                    source: e,
                })?;

        Ok(report.sanitized())
    }
}
