//! # aiact-client -- Typed client for the compliance-analysis API
//!
//! Provides typed access to the two endpoints of the analysis service:
//! - **Analyze** via `POST /analyze_compliance` (score one website)
//! - **Reports** via `GET /compliance_reports/{user_id}/report` (stored reports)
//!
//! ## Boundary Validation
//!
//! The service is an external collaborator whose schema may drift. Every
//! report leaving this crate has been deserialized with the defaulting
//! rules of [`aiact_core::ComplianceReport`] and passed through
//! [`ComplianceReport::sanitized`](aiact_core::ComplianceReport::sanitized),
//! so callers only ever see scores inside `[0, 10]`.
//!
//! ## Failure Policy
//!
//! No retries, no caching, no fallback to stale data. A transport error,
//! non-2xx status or malformed body ends the call with an
//! [`AnalysisApiError`] whose [`user_message`](AnalysisApiError::user_message)
//! is ready to print.

pub mod analyze;
pub mod config;
pub mod error;
pub mod reports;

pub use config::{AnalysisApiConfig, ConfigError};
pub use error::AnalysisApiError;

use std::time::Duration;

use aiact_core::ComplianceReport;

/// Top-level analysis API client. Holds one sub-client per endpoint.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    analyze: analyze::AnalyzeClient,
    reports: reports::ReportClient,
}

impl AnalysisClient {
    /// Create a new client from configuration.
    pub fn new(config: AnalysisApiConfig) -> Result<Self, AnalysisApiError> {
        let mut builder = reqwest::Client::builder().default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                reqwest::header::HeaderValue::from_static("application/json"),
            );
            headers
        });
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| AnalysisApiError::Http {
            endpoint: "client_init".into(),
            source: e,
        })?;

        tracing::debug!(base_url = %config.base_url, timeout_secs = ?config.timeout_secs, "analysis client ready");

        Ok(Self {
            analyze: analyze::AnalyzeClient::new(http.clone(), config.clone()),
            reports: reports::ReportClient::new(http, config),
        })
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self, AnalysisApiError> {
        Self::new(AnalysisApiConfig::from_env()?)
    }

    /// Access the analysis endpoint client.
    pub fn analyze(&self) -> &analyze::AnalyzeClient {
        &self.analyze
    }

    /// Access the stored-report endpoint client.
    pub fn reports(&self) -> &reports::ReportClient {
        &self.reports
    }

    /// Shorthand for `self.analyze().analyze(website_url)`.
    pub async fn analyze_website(
        &self,
        website_url: &str,
    ) -> Result<ComplianceReport, AnalysisApiError> {
        self.analyze.analyze(website_url).await
    }

    /// Shorthand for `self.reports().list_for_user(user_id)`.
    pub async fn reports_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ComplianceReport>, AnalysisApiError> {
        self.reports.list_for_user(user_id).await
    }
}
