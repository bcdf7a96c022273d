//! # Error Types
//!
//! Scoring and ranking are total functions and never fail. The only
//! fallible operations in this crate are the parsers that turn
//! user-supplied names and counts into typed values.

use thiserror::Error;

/// Errors raised while interpreting user-supplied scoring parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A risk scale was requested with a bucket count no scheme defines.
    #[error("unsupported risk bucket count {0}; expected 4 or 5")]
    UnsupportedBucketCount(usize),

    /// A category identifier did not match any of the five fixed keys.
    #[error("unknown category key: {0:?}")]
    UnknownCategory(String),

    /// A risk scale name did not match any known scheme.
    #[error("unknown risk scale: {0:?}; expected \"four-band\" or \"five-band\"")]
    UnknownScale(String),
}
