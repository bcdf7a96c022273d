//! # Report Ranking
//!
//! Orders reports by descending main score. The sort is stable, so reports
//! with equal main scores keep their input order, and ranking an already
//! ranked list returns it unchanged.
//!
//! Scores are compared with [`f64::total_cmp`]. The main score is never
//! `-0.0`, so a zero score ties with every other zero. Finite scores are the
//! only ones that can arrive through JSON; a non-finite score would be an
//! upstream defect and simply takes its IEEE total-order position.

use serde::Serialize;

use crate::report::ComplianceReport;
use crate::risk::{RiskBucket, RiskScale};

/// Return a new list sorted by descending main score. The input is not
/// modified; an empty input yields an empty output.
pub fn rank(reports: &[ComplianceReport]) -> Vec<ComplianceReport> {
    let mut keyed: Vec<(f64, &ComplianceReport)> =
        reports.iter().map(|r| (r.main_score(), r)).collect();
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, r)| r.clone()).collect()
}

/// A ranked report together with the derived values shown next to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based position in the ranking.
    pub position: usize,
    pub main_score: f64,
    pub risk: RiskBucket,
    pub report: ComplianceReport,
}

/// Rank `reports` and attach position, main score and risk bucket.
pub fn ranked_entries(reports: &[ComplianceReport], scale: RiskScale) -> Vec<RankedEntry> {
    rank(reports)
        .into_iter()
        .enumerate()
        .map(|(i, report)| {
            let main_score = report.main_score();
            RankedEntry {
                position: i + 1,
                main_score,
                risk: scale.classify(main_score),
                report,
            }
        })
        .collect()
}
