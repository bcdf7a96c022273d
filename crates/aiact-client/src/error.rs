//! Analysis API client error types.

/// Message shown when the analysis endpoint fails without a usable `detail`.
pub const ANALYZE_FAILED: &str = "Failed to analyze compliance";

/// Message shown when the stored-report endpoint returns a non-2xx status.
pub const FETCH_REPORTS_FAILED: &str = "Failed to fetch compliance reports";

/// Errors from analysis API calls.
///
/// Every variant is terminal for the current request. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisApiError {
    /// The URL to analyze was blank after trimming.
    #[error("a website URL is required")]
    EmptyUrl,
    /// The URL to analyze is not an absolute http(s) URL.
    #[error("invalid website URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },
    /// The user id cannot be sent as a single path segment (empty, `.` or `..`).
    #[error("invalid user id {0:?}")]
    InvalidUserId(String),
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The service returned a non-2xx status.
    #[error("{endpoint} returned {status}: {detail}")]
    ApiError {
        endpoint: String,
        status: u16,
        /// Human-readable failure text; the service's own `detail` when it sent one.
        detail: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AnalysisApiError {
    /// Text to present to the end user. For a rejected request this is the
    /// service's `detail` verbatim, without endpoint or status decoration.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a rejected request, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull the `detail` field out of an error body.
///
/// A string `detail` is returned verbatim. Structured details (validation
/// error arrays) are returned as compact JSON. A body that is not JSON, or
/// has no `detail`, yields `None`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
