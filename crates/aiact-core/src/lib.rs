//! # aiact-core: EU AI Act Risk Scoring
//!
//! Pure, synchronous scoring over website compliance reports. Each report
//! carries five category scores in `[0, 10]`; from them this crate derives:
//!
//! - the **main score**, the maximum of the five ([`CategoryScores::main_score`]);
//! - a **risk bucket** for any score ([`RiskScale::classify`]);
//! - a **ranking** of reports by descending main score ([`rank`]).
//!
//! ## Crate Policy
//!
//! - No I/O and no async. Fetching reports is `aiact-client`'s job.
//! - Every function here is total except the string/count parsers, which
//!   return [`CoreError`].
//! - The main score is derived on demand and never stored beside the
//!   scores it summarizes.

pub mod category;
pub mod error;
pub mod ranking;
pub mod report;
pub mod risk;

pub use category::{CategoryKey, CATEGORY_COUNT};
pub use error::CoreError;
pub use ranking::{rank, ranked_entries, RankedEntry};
pub use report::{parse_report_list, CategoryScores, ComplianceReport, SCORE_MAX, SCORE_MIN};
pub use risk::{RiskBucket, RiskColor, RiskLevel, RiskScale};
