//! Analysis API client configuration.
//!
//! The base address of the analysis service is always injected: request
//! code builds every endpoint URL from [`AnalysisApiConfig::base_url`] and
//! never from a literal. The default points at a locally running service.

use url::Url;

/// Default base URL when `AIACT_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for connecting to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: Url,
    /// Request timeout in seconds. `None` leaves requests unbounded, which
    /// suits analyses that scrape a whole site before answering.
    pub timeout_secs: Option<u64>,
}

impl AnalysisApiConfig {
    /// Configuration for an explicit base URL, with no timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("base_url", base_url)?,
            timeout_secs: None,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `AIACT_API_URL` (default: `http://localhost:8000`)
    /// - `AIACT_TIMEOUT_SECS` (default: unset, no timeout)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("AIACT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Ok(Self {
            base_url: parse_base_url("AIACT_API_URL", &raw)?,
            timeout_secs: std::env::var("AIACT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
        })
    }

    /// Configuration pointing at a local mock server (for testing).
    pub fn local(port: u16) -> Result<Self, ConfigError> {
        let mut config = Self::new(&format!("http://127.0.0.1:{port}"))?;
        config.timeout_secs = Some(5);
        Ok(config)
    }

    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Build the URL of an endpoint below the base URL. Each segment is
    /// percent-encoded on its own, so a segment can never introduce `/`.
    /// Segments that are exactly `.` or `..` are dropped by the URL parser;
    /// callers passing untrusted segments must reject those first.
    pub fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `parse_base_url` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn parse_base_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(
            source.to_string(),
            format!("{url} is not an http(s) base URL"),
        ));
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
