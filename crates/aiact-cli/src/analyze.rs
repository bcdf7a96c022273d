//! # Analyze: Single-Report Surface
//!
//! `aiact analyze <URL>` submits one website to the analysis service and
//! prints the returned report card. A rejected request prints the service's
//! own message and exits 1; there is no partial output.

use std::io::Write;

use anyhow::{anyhow, Result};
use clap::Args;

use aiact_client::AnalysisClient;
use aiact_core::ComplianceReport;

use crate::render::{self, OutputFormat, ReportView};
use crate::{ApiArgs, Presentation};

/// Analyze subcommand arguments.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Absolute http(s) URL of the website to analyze.
    pub url: String,
}

/// Execute the analyze subcommand against the configured service.
pub async fn run_analyze(args: &AnalyzeArgs, api: &ApiArgs, presentation: Presentation) -> Result<u8> {
    let client = api.client()?;
    let report = fetch_report(&client, &args.url).await?;
    let stdout = std::io::stdout();
    print_report(&mut stdout.lock(), &report, presentation)?;
    Ok(0)
}

/// Request the analysis, turning service failures into the user-facing text.
pub async fn fetch_report(client: &AnalysisClient, url: &str) -> Result<ComplianceReport> {
    tracing::info!(url, "analyzing website");
    let report = client.analyze_website(url).await.map_err(|e| {
        tracing::debug!(error = %e, "analysis failed");
        anyhow!(e.user_message())
    })?;
    tracing::info!(
        main_score = report.main_score(),
        dominant = %report.dominant_category(),
        "analysis complete"
    );
    Ok(report)
}

pub fn print_report<W: Write>(
    out: &mut W,
    report: &ComplianceReport,
    presentation: Presentation,
) -> Result<()> {
    match presentation.format {
        OutputFormat::Text => render::write_report_text(out, report, presentation.scale)?,
        OutputFormat::Json => {
            render::write_json(out, &ReportView::new(report, presentation.scale))?
        }
    }
    Ok(())
}
