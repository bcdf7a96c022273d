//! # Risk Buckets: Score-to-Label Classification
//!
//! Maps a 0–10 score onto a discrete [`RiskBucket`] through a fixed
//! threshold table. Two tables exist, selected by [`RiskScale`]:
//!
//! ```text
//! FourBand:  >=8 Critical/red  >=5 High/orange  >=3 Medium/yellow                 else Minimal/green
//! FiveBand:  >=8 Critical/red  >=6 High/orange  >=4 Medium/yellow  >=2 Low/blue   else Minimal/green
//! ```
//!
//! Classification is a total function over `f64`. The rule chain is tried
//! from the highest threshold down, so anything above 10 is Critical and
//! anything below 0 (or NaN, which compares false) falls to the floor band.
//!
//! The bucket ordinal is a display weight for legends and colour ramps.
//! Report ranking never consults it; ranking orders by raw main score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Discrete risk level attached to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Display colour associated with a risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
}

impl RiskColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for RiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The result of classifying one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskBucket {
    pub level: RiskLevel,
    pub color: RiskColor,
    /// 0 for the lowest-risk bucket up to `bucket_count - 1` for the highest.
    pub ordinal: u8,
}

impl RiskBucket {
    /// Badge text used in the ranking list, e.g. `"Critical Risk"`.
    pub fn badge(&self) -> String {
        format!("{} Risk", self.level)
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.level, self.color)
    }
}

/// One row of a threshold table: scores `>= threshold` land here unless a
/// higher row matched first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Band {
    threshold: f64,
    level: RiskLevel,
    color: RiskColor,
}

const fn band(threshold: f64, level: RiskLevel, color: RiskColor) -> Band {
    Band {
        threshold,
        level,
        color,
    }
}

// Rows are ordered highest threshold first. The final row is the floor and
// its threshold is only the nominal lower bound shown in legends.
const FOUR_BAND: [Band; 4] = [
    band(8.0, RiskLevel::Critical, RiskColor::Red),
    band(5.0, RiskLevel::High, RiskColor::Orange),
    band(3.0, RiskLevel::Medium, RiskColor::Yellow),
    band(0.0, RiskLevel::Minimal, RiskColor::Green),
];

const FIVE_BAND: [Band; 5] = [
    band(8.0, RiskLevel::Critical, RiskColor::Red),
    band(6.0, RiskLevel::High, RiskColor::Orange),
    band(4.0, RiskLevel::Medium, RiskColor::Yellow),
    band(2.0, RiskLevel::Low, RiskColor::Blue),
    band(0.0, RiskLevel::Minimal, RiskColor::Green),
];

/// Threshold scheme used to bucket scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskScale {
    /// Coarse four-bucket scheme used on per-category bars.
    FourBand,
    /// Five-bucket scheme used for ranking badges.
    #[default]
    FiveBand,
}

impl RiskScale {
    /// Select the scheme with the given number of buckets.
    pub fn with_bucket_count(count: usize) -> Result<Self, CoreError> {
        match count {
            4 => Ok(Self::FourBand),
            5 => Ok(Self::FiveBand),
            other => Err(CoreError::UnsupportedBucketCount(other)),
        }
    }

    pub fn bucket_count(self) -> usize {
        self.bands().len()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FourBand => "four-band",
            Self::FiveBand => "five-band",
        }
    }

    fn bands(self) -> &'static [Band] {
        match self {
            Self::FourBand => &FOUR_BAND,
            Self::FiveBand => &FIVE_BAND,
        }
    }

    /// Classify a score. Never fails.
    pub fn classify(self, score: f64) -> RiskBucket {
        let bands = self.bands();
        let floor = bands.len() - 1;
        let position = bands[..floor]
            .iter()
            .position(|b| score >= b.threshold)
            .unwrap_or(floor);
        let row = bands[position];
        RiskBucket {
            level: row.level,
            color: row.color,
            ordinal: (floor - position) as u8,
        }
    }

    /// Every bucket of this scale with its nominal lower bound, lowest risk first.
    pub fn legend(self) -> Vec<(f64, RiskBucket)> {
        let bands = self.bands();
        let floor = bands.len() - 1;
        bands
            .iter()
            .enumerate()
            .rev()
            .map(|(position, row)| {
                (
                    row.threshold,
                    RiskBucket {
                        level: row.level,
                        color: row.color,
                        ordinal: (floor - position) as u8,
                    },
                )
            })
            .collect()
    }
}

impl fmt::Display for RiskScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskScale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "four-band" | "4" => Ok(Self::FourBand),
            "five-band" | "5" => Ok(Self::FiveBand),
            other => Err(CoreError::UnknownScale(other.to_string())),
        }
    }
}
