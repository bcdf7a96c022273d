//! # Classify: Offline Score Bucketing
//!
//! `aiact classify <SCORE>...` prints the risk bucket of each score without
//! contacting the service. `--buckets 4|5` picks the scheme by bucket count
//! and overrides `--scale`; `--legend` prints the scheme's thresholds.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use aiact_core::{RiskBucket, RiskScale};

use crate::render::{self, OutputFormat};
use crate::Presentation;

/// Classify subcommand arguments.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Scores to classify. Values outside [0, 10] land in the extreme buckets.
    #[arg(allow_negative_numbers = true)]
    pub scores: Vec<f64>,

    /// Number of buckets in the scheme (4 or 5).
    #[arg(long)]
    pub buckets: Option<usize>,

    /// Print the thresholds of the selected scheme.
    #[arg(long)]
    pub legend: bool,
}

#[derive(Debug, Serialize)]
struct Classified {
    score: f64,
    risk: RiskBucket,
}

#[derive(Debug, Serialize)]
struct LegendRow {
    from: f64,
    risk: RiskBucket,
}

#[derive(Debug, Serialize)]
struct ClassifyView {
    scale: RiskScale,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    legend: Vec<LegendRow>,
    results: Vec<Classified>,
}

/// Resolve the scheme: `--buckets` beats the global `--scale`.
pub fn resolve_scale(args: &ClassifyArgs, fallback: RiskScale) -> Result<RiskScale> {
    match args.buckets {
        Some(count) => Ok(RiskScale::with_bucket_count(count)?),
        None => Ok(fallback),
    }
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs, presentation: Presentation) -> Result<u8> {
    let stdout = std::io::stdout();
    write_classification(&mut stdout.lock(), args, presentation)?;
    Ok(0)
}

pub fn write_classification<W: Write>(
    out: &mut W,
    args: &ClassifyArgs,
    presentation: Presentation,
) -> Result<()> {
    let scale = resolve_scale(args, presentation.scale)?;
    let view = ClassifyView {
        scale,
        legend: if args.legend {
            scale
                .legend()
                .into_iter()
                .map(|(from, risk)| LegendRow { from, risk })
                .collect()
        } else {
            Vec::new()
        },
        results: args
            .scores
            .iter()
            .map(|&score| Classified {
                score,
                risk: scale.classify(score),
            })
            .collect(),
    };

    match presentation.format {
        OutputFormat::Json => render::write_json(out, &view)?,
        OutputFormat::Text => {
            if !view.legend.is_empty() {
                writeln!(out, "Scale: {} ({} buckets)", scale, scale.bucket_count())?;
                for row in &view.legend {
                    writeln!(
                        out,
                        "  {}  {:<8} {:<6} from {}",
                        row.risk.ordinal, row.risk.level, row.risk.color, row.from
                    )?;
                }
            }
            for c in &view.results {
                writeln!(out, "{:>6}  {}", c.score, c.risk)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(scores: &[f64], buckets: Option<usize>, legend: bool) -> ClassifyArgs {
        ClassifyArgs {
            scores: scores.to_vec(),
            buckets,
            legend,
        }
    }

    fn render(args: &ClassifyArgs, format: OutputFormat) -> Result<String> {
        let mut buf = Vec::new();
        write_classification(
            &mut buf,
            args,
            Presentation {
                format,
                scale: RiskScale::FiveBand,
            },
        )?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn buckets_flag_overrides_scale() {
        assert_eq!(
            resolve_scale(&args(&[], Some(4), false), RiskScale::FiveBand).unwrap(),
            RiskScale::FourBand
        );
        assert_eq!(
            resolve_scale(&args(&[], None, false), RiskScale::FourBand).unwrap(),
            RiskScale::FourBand
        );
    }

    #[test]
    fn unsupported_bucket_count_is_an_error() {
        let err = render(&args(&[5.0], Some(3), false), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("unsupported risk bucket count 3"));
    }

    #[test]
    fn text_lists_each_score() {
        let out = render(&args(&[9.0, 2.5, 0.0], None, false), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("Critical/red"));
        assert!(lines[1].ends_with("Low/blue"));
        assert!(lines[2].ends_with("Minimal/green"));
    }

    #[test]
    fn four_band_text() {
        let out = render(&args(&[5.0, 3.0], Some(4), false), OutputFormat::Text).unwrap();
        assert!(out.contains("High/orange"));
        assert!(out.contains("Medium/yellow"));
    }

    #[test]
    fn legend_in_json() {
        let out = render(&args(&[], Some(4), true), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["scale"], "four-band");
        assert_eq!(json["legend"].as_array().unwrap().len(), 4);
        assert_eq!(json["legend"][3]["from"], 8.0);
        assert_eq!(json["results"], serde_json::json!([]));
    }

    #[test]
    fn legend_omitted_from_json_when_not_requested() {
        let out = render(&args(&[1.0], None, false), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(json.get("legend").is_none());
        assert_eq!(json["results"][0]["risk"]["level"], "Minimal");
    }
}
