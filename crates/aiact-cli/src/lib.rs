//! # aiact-cli: Command-Line Front End
//!
//! Provides the `aiact` binary, the two presentation surfaces over the
//! compliance-analysis service plus an offline classifier.
//!
//! ## Subcommands
//!
//! - `aiact analyze <URL>`: submit a website and print its report card.
//! - `aiact rank --user <ID>`: fetch a user's stored reports and print them
//!   ranked by main score. `--input <FILE>` ranks a saved JSON file instead.
//! - `aiact classify <SCORE>...`: bucket raw scores on a risk scale.
//!
//! ```bash
//! aiact analyze https://shop.example.com
//! AIACT_API_URL=http://analysis.internal:8000 aiact rank --user Bruce --format json
//! aiact classify 9 4.5 1 --buckets 4
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here take parsed args.
//! - Scoring and ranking are delegated to `aiact-core`; HTTP to `aiact-client`.
//! - Rendered output goes to stdout, logs and errors to stderr.

pub mod analyze;
pub mod classify;
pub mod rank;
pub mod render;

use anyhow::{Context, Result};
use clap::Args;

use aiact_client::{AnalysisApiConfig, AnalysisClient};
use aiact_core::RiskScale;

use render::OutputFormat;

/// Connection options shared by the commands that talk to the service.
///
/// Unset flags fall back to `AIACT_API_URL` / `AIACT_TIMEOUT_SECS`.
#[derive(Args, Debug, Clone, Default)]
pub struct ApiArgs {
    /// Base URL of the analysis service.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds. No timeout when unset.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

impl ApiArgs {
    /// Resolve the service configuration: flags first, then the environment.
    pub fn config(&self) -> Result<AnalysisApiConfig> {
        let config = match &self.api_url {
            Some(url) => AnalysisApiConfig::new(url)
                .with_context(|| format!("invalid --api-url {url:?}"))?,
            None => AnalysisApiConfig::from_env().context("invalid AIACT_API_URL")?,
        };
        Ok(match self.timeout_secs {
            Some(secs) => config.with_timeout_secs(Some(secs)),
            None => config,
        })
    }

    pub fn client(&self) -> Result<AnalysisClient> {
        let config = self.config()?;
        tracing::debug!(base_url = %config.base_url, "using analysis service");
        AnalysisClient::new(config).context("failed to build HTTP client")
    }
}

/// Presentation settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presentation {
    pub format: OutputFormat,
    pub scale: RiskScale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_flag_wins() {
        let args = ApiArgs {
            api_url: Some("http://10.0.0.5:9000".into()),
            timeout_secs: Some(12),
        };
        let config = args.config().unwrap();
        assert_eq!(config.base_url.as_str(), "http://10.0.0.5:9000/");
        assert_eq!(config.timeout_secs, Some(12));
    }

    #[test]
    fn invalid_api_url_flag_is_an_error() {
        let args = ApiArgs {
            api_url: Some("nope".into()),
            timeout_secs: None,
        };
        let err = args.config().unwrap_err();
        assert!(format!("{err:#}").contains("--api-url"));
    }

    #[test]
    fn default_presentation_is_text_five_band() {
        let p = Presentation::default();
        assert_eq!(p.format, OutputFormat::Text);
        assert_eq!(p.scale, RiskScale::FiveBand);
    }
}
