//! # Rank: Multi-Report Surface
//!
//! `aiact rank --user <ID>` fetches every stored report for a user and
//! prints them ordered by descending main score. `--input <FILE>` ranks a
//! saved report list instead, accepting either the service envelope
//! `{"results": [...]}` or a bare array.
//!
//! An empty list is not a failure: it prints the "No reports found" state
//! and exits 0.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;

use aiact_client::AnalysisClient;
use aiact_core::{parse_report_list, ranked_entries, ComplianceReport};

use crate::render::{self, OutputFormat, RankingView};
use crate::{ApiArgs, Presentation};

/// Rank subcommand arguments.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// User whose stored reports are ranked.
    #[arg(long, env = "AIACT_USER_ID", required_unless_present = "input")]
    pub user: Option<String>,

    /// Rank reports from a JSON file instead of the service. Takes
    /// precedence over --user.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Execute the rank subcommand.
pub async fn run_rank(args: &RankArgs, api: &ApiArgs, presentation: Presentation) -> Result<u8> {
    let reports = match (&args.input, &args.user) {
        (Some(path), _) => load_reports(path)?,
        (None, Some(user)) => fetch_reports(&api.client()?, user).await?,
        (None, None) => return Err(anyhow!("either --user or --input is required")),
    };
    let stdout = std::io::stdout();
    print_ranking(&mut stdout.lock(), &reports, presentation)?;
    Ok(0)
}

/// Fetch a user's stored reports, turning failures into the user-facing text.
pub async fn fetch_reports(client: &AnalysisClient, user: &str) -> Result<Vec<ComplianceReport>> {
    tracing::info!(user, "fetching stored reports");
    client.reports_for_user(user).await.map_err(|e| {
        tracing::debug!(error = %e, "report fetch failed");
        anyhow!("Failed to load compliance reports. {}", e.user_message())
    })
}

/// Read and parse a saved report list.
pub fn load_reports(path: &Path) -> Result<Vec<ComplianceReport>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let reports = parse_report_list(&text)
        .with_context(|| format!("{} is not a valid report list", path.display()))?;
    tracing::debug!(count = reports.len(), path = %path.display(), "loaded reports");
    Ok(reports)
}

pub fn print_ranking<W: Write>(
    out: &mut W,
    reports: &[ComplianceReport],
    presentation: Presentation,
) -> Result<()> {
    let entries = ranked_entries(reports, presentation.scale);
    match presentation.format {
        OutputFormat::Text => render::write_ranking_text(out, &entries, presentation.scale)?,
        OutputFormat::Json => render::write_json(
            out,
            &RankingView {
                scale: presentation.scale,
                reports: &entries,
            },
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiact_client::AnalysisApiConfig;
    use aiact_core::RiskScale;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TWO_REPORTS: &str = r#"{"results": [
        {"website_url": "https://b.example", "website_description": "",
         "category_scores": {"prohibited_ai_practices": 0, "high_risk_ai_systems": 0,
            "limited_risk_ai_systems": 0, "minimal_risk_ai_systems": 0, "general_purpose_ai_models": 0}},
        {"website_url": "https://a.example", "website_description": "",
         "category_scores": {"prohibited_ai_practices": 9, "high_risk_ai_systems": 2,
            "limited_risk_ai_systems": 1, "minimal_risk_ai_systems": 0, "general_purpose_ai_models": 3}}
    ]}"#;

    fn text() -> Presentation {
        Presentation {
            format: OutputFormat::Text,
            scale: RiskScale::FiveBand,
        }
    }

    fn render(reports: &[ComplianceReport], presentation: Presentation) -> String {
        let mut buf = Vec::new();
        print_ranking(&mut buf, reports, presentation).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn load_reports_from_file_and_rank() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("reports.json");
        std::fs::write(&file, TWO_REPORTS).unwrap();

        let reports = load_reports(&file).unwrap();
        assert_eq!(reports.len(), 2);

        let out = render(&reports, text());
        let a = out.find("#1 a.example").unwrap();
        let b = out.find("#2 b.example").unwrap();
        assert!(a < b);
    }

    #[test]
    fn load_reports_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let err = load_reports(&missing).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn load_reports_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad.json");
        std::fs::write(&file, "{ nope").unwrap();
        assert!(load_reports(&file).is_err());
    }

    #[test]
    fn empty_list_prints_no_reports_state() {
        let out = render(&[], text());
        assert!(out.contains("No reports found"));
        assert!(out.contains("No compliance reports have been generated yet."));
    }

    #[test]
    fn json_output_for_empty_list_is_empty_array() {
        let out = render(
            &[],
            Presentation {
                format: OutputFormat::Json,
                scale: RiskScale::FourBand,
            },
        );
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["reports"], serde_json::json!([]));
        assert_eq!(json["scale"], "four-band");
    }

    #[tokio::test]
    async fn fetch_reports_failure_is_prefixed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/compliance_reports/Bruce/report"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = AnalysisClient::new(AnalysisApiConfig::new(&server.uri()).unwrap()).unwrap();
        let err = fetch_reports(&client, "Bruce").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load compliance reports. Failed to fetch compliance reports"
        );
    }

    #[tokio::test]
    async fn run_rank_prefers_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("reports.json");
        std::fs::write(&file, "[]").unwrap();

        let args = RankArgs {
            user: Some("unused".into()),
            input: Some(file),
        };
        // Unroutable API URL: any network call would fail the test.
        let api = ApiArgs {
            api_url: Some("http://127.0.0.1:1".into()),
            timeout_secs: Some(1),
        };
        assert_eq!(run_rank(&args, &api, text()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn run_rank_without_user_or_input_fails() {
        let args = RankArgs {
            user: None,
            input: None,
        };
        let api = ApiArgs {
            api_url: Some("http://127.0.0.1:1".into()),
            timeout_secs: Some(1),
        };
        let err = run_rank(&args, &api, text()).await.unwrap_err();
        assert_eq!(err.to_string(), "either --user or --input is required");
    }

    #[tokio::test]
    async fn run_rank_fetches_for_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/compliance_reports/Alice/report"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let args = RankArgs {
            user: Some("Alice".into()),
            input: None,
        };
        let api = ApiArgs {
            api_url: Some(server.uri()),
            timeout_secs: Some(5),
        };
        assert_eq!(run_rank(&args, &api, text()).await.unwrap(), 0);
    }
}
