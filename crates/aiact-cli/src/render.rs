//! # Terminal Rendering
//!
//! Text and JSON views of a single report and of a ranking. Renderers write
//! to any `io::Write` so handlers print to stdout and tests capture into a
//! buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use aiact_core::{CategoryKey, ComplianceReport, RankedEntry, RiskBucket, RiskScale, SCORE_MAX};

/// Width of the score bar, in characters.
pub const BAR_WIDTH: usize = 20;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Horizontal bar filled in proportion to `score / 10`.
pub fn score_bar(score: f64, width: usize) -> String {
    let fraction = (score / SCORE_MAX).clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Host part of a report URL, falling back to the raw text.
pub fn display_host(website_url: &str) -> String {
    url::Url::parse(website_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| website_url.to_string())
}

/// JSON view of one category line.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub key: CategoryKey,
    pub label: &'static str,
    pub score: f64,
    pub risk: RiskBucket,
}

/// JSON view of a single analyzed report.
#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub website_url: &'a str,
    pub website_description: &'a str,
    pub main_score: f64,
    pub risk: RiskBucket,
    pub dominant_category: CategoryKey,
    pub categories: Vec<CategoryView>,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a ComplianceReport, scale: RiskScale) -> Self {
        Self {
            website_url: &report.website_url,
            website_description: &report.website_description,
            main_score: report.main_score(),
            risk: report.risk(scale),
            dominant_category: report.dominant_category(),
            categories: report
                .category_scores
                .iter()
                .map(|(key, score)| CategoryView {
                    key,
                    label: key.label(),
                    score,
                    risk: scale.classify(score),
                })
                .collect(),
        }
    }
}

/// Render one report as a report card.
pub fn write_report_text<W: Write>(
    out: &mut W,
    report: &ComplianceReport,
    scale: RiskScale,
) -> io::Result<()> {
    let main_score = report.main_score();
    let flag_prohibited = report.at_ceiling();

    writeln!(out, "Compliance Analysis Report")?;
    writeln!(out, "Analyzed URL: {}", report.website_url)?;
    writeln!(out)?;
    writeln!(out, "Website Summary")?;
    if report.website_description.is_empty() {
        writeln!(out, "  (no summary provided)")?;
    } else {
        writeln!(out, "  {}", report.website_description)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Main Risk Score: {main_score} / 10  ({})",
        scale.classify(main_score)
    )?;
    writeln!(out)?;
    writeln!(out, "EU AI Act Analysis")?;
    for (key, score) in report.category_scores.iter() {
        let marker = if flag_prohibited && key == CategoryKey::ProhibitedAiPractices {
            "!"
        } else {
            " "
        };
        writeln!(
            out,
            " {marker}{:<26} {:>4} {} {}",
            key.label(),
            score,
            score_bar(score, BAR_WIDTH),
            scale.classify(score).level,
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Note: This analysis is based on automated scanning and should be reviewed \
         by legal professionals for comprehensive compliance assessment."
    )?;
    Ok(())
}

/// Render a ranking. An empty ranking renders the "no reports" state.
pub fn write_ranking_text<W: Write>(
    out: &mut W,
    entries: &[RankedEntry],
    scale: RiskScale,
) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No reports found")?;
        writeln!(out, "No compliance reports have been generated yet.")?;
        return Ok(());
    }

    writeln!(out, "Compliance Rankings")?;
    writeln!(
        out,
        "Compare AI compliance scores across all analyzed websites."
    )?;
    for entry in entries {
        let report = &entry.report;
        writeln!(out)?;
        writeln!(
            out,
            "#{} {}  [{}]  main score {} / 10",
            entry.position,
            display_host(&report.website_url),
            entry.risk.badge(),
            entry.main_score,
        )?;
        if !report.website_description.is_empty() {
            writeln!(out, "    {}", report.website_description)?;
        }
        for (key, score) in report.category_scores.iter() {
            writeln!(
                out,
                "    {:<14} {:>4}/10 {} {}",
                key.short_label(),
                score,
                score_bar(score, BAR_WIDTH),
                scale.classify(score).level,
            )?;
        }
    }
    Ok(())
}

/// JSON document for a ranking.
#[derive(Debug, Serialize)]
pub struct RankingView<'a> {
    pub scale: RiskScale,
    pub reports: &'a [RankedEntry],
}

/// Serialize `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiact_core::{ranked_entries, CategoryScores};

    fn sample(url: &str, values: [f64; 5]) -> ComplianceReport {
        ComplianceReport::new(url, "Sample site.", CategoryScores::from_values(values))
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn score_bar_fills_proportionally() {
        assert_eq!(score_bar(0.0, 10), "[----------]");
        assert_eq!(score_bar(5.0, 10), "[#####-----]");
        assert_eq!(score_bar(10.0, 10), "[##########]");
        assert_eq!(score_bar(15.0, 4), "[####]");
        assert_eq!(score_bar(-1.0, 4), "[----]");
    }

    #[test]
    fn display_host_extracts_hostname() {
        assert_eq!(display_host("https://www.example.com/pricing"), "www.example.com");
        assert_eq!(display_host("not a url"), "not a url");
    }

    #[test]
    fn report_card_shows_main_score_and_categories() {
        let report = sample("https://a.example", [9.0, 2.0, 1.0, 0.0, 3.0]);
        let text = render(|out| write_report_text(out, &report, RiskScale::FiveBand));
        assert!(text.contains("Analyzed URL: https://a.example"));
        assert!(text.contains("Main Risk Score: 9 / 10  (Critical/red)"));
        assert!(text.contains("Prohibited AI Practices"));
        assert!(text.contains("General Purpose AI Models"));
        assert!(text.contains("reviewed by legal professionals"));
        assert!(!text.contains(" !Prohibited"));
    }

    #[test]
    fn report_card_flags_prohibited_at_ceiling() {
        let report = sample("https://b.example", [10.0, 0.0, 0.0, 0.0, 0.0]);
        let text = render(|out| write_report_text(out, &report, RiskScale::FourBand));
        assert!(text.contains(" !Prohibited AI Practices"));
    }

    #[test]
    fn ranking_lists_highest_first() {
        let entries = ranked_entries(
            &[
                sample("https://calm.example", [0.0; 5]),
                sample("https://risky.example/shop", [9.0, 2.0, 1.0, 0.0, 3.0]),
            ],
            RiskScale::FiveBand,
        );
        let text = render(|out| write_ranking_text(out, &entries, RiskScale::FiveBand));
        let risky = text.find("#1 risky.example  [Critical Risk]").unwrap();
        let calm = text.find("#2 calm.example  [Minimal Risk]").unwrap();
        assert!(risky < calm);
        assert!(text.contains("Prohibited AI"));
    }

    #[test]
    fn empty_ranking_renders_no_reports_state() {
        let text = render(|out| write_ranking_text(out, &[], RiskScale::FiveBand));
        assert!(text.starts_with("No reports found"));
        assert!(!text.contains("Compliance Rankings"));
    }

    #[test]
    fn report_view_serializes_derived_fields() {
        let report = sample("https://a.example", [9.0, 2.0, 1.0, 0.0, 3.0]);
        let json = serde_json::to_value(ReportView::new(&report, RiskScale::FourBand)).unwrap();
        assert_eq!(json["main_score"], 9.0);
        assert_eq!(json["risk"]["level"], "Critical");
        assert_eq!(json["risk"]["color"], "red");
        assert_eq!(json["dominant_category"], "prohibited_ai_practices");
        assert_eq!(json["categories"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn ranking_view_serializes_positions() {
        let entries = ranked_entries(
            &[sample("b", [1.0; 5]), sample("a", [7.0; 5])],
            RiskScale::FiveBand,
        );
        let view = RankingView {
            scale: RiskScale::FiveBand,
            reports: &entries,
        };
        let text = render(|out| write_json(out, &view));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["scale"], "five-band");
        assert_eq!(json["reports"][0]["position"], 1);
        assert_eq!(json["reports"][0]["report"]["website_url"], "a");
    }
}
