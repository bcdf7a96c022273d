//! Typed client for the stored-report endpoint.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/compliance_reports/{user_id}/report` | All reports generated for a user |
//!
//! The answer is `{"results": [...]}`. An empty or missing `results` array
//! is a normal answer, not a failure.

use serde::Deserialize;

use aiact_core::ComplianceReport;

use crate::config::AnalysisApiConfig;
use crate::error::{AnalysisApiError, FETCH_REPORTS_FAILED};

/// Response envelope of the stored-report endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportsResponse {
    #[serde(default)]
    pub results: Vec<ComplianceReport>,
}

/// Client for the stored-report endpoint.
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: reqwest::Client,
    config: AnalysisApiConfig,
}

impl ReportClient {
    pub(crate) fn new(http: reqwest::Client, config: AnalysisApiConfig) -> Self {
        Self { http, config }
    }

    /// Fetch every stored report for `user_id`, in the order the service
    /// returns them. Callers rank them with [`aiact_core::rank`].
    ///
    /// Calls `GET {base_url}/compliance_reports/{user_id}/report`. An empty,
    /// `.` or `..` user id is rejected with
    /// [`AnalysisApiError::InvalidUserId`] before any request is sent.
    pub async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ComplianceReport>, AnalysisApiError> {
        // The URL parser drops or collapses these segments, which would
        // address a different endpoint.
        if matches!(user_id, "" | "." | "..") {
            return Err(AnalysisApiError::InvalidUserId(user_id.to_string()));
        }
        let endpoint = format!("GET /compliance_reports/{user_id}/report");
        let url = self
            .config
            .endpoint_url(&["compliance_reports", user_id, "report"]);

        tracing::debug!(%url, user_id, "fetching stored reports");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AnalysisApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(endpoint = %endpoint, status, body = %body, "report fetch rejected");
            return Err(AnalysisApiError::ApiError {
                endpoint,
                status,
                detail: FETCH_REPORTS_FAILED.to_string(),
            });
        }

        let envelope: ReportsResponse =
            resp.json()
                .await
                .map_err(|e| AnalysisApiError::Deserialization {
                    endpoint: endpoint.clone(),
                    source: e,
                })?;

        tracing::debug!(count = envelope.results.len(), "stored reports received");

        Ok(envelope
            .results
            .into_iter()
            .map(ComplianceReport::sanitized)
            .collect())
    }
}
