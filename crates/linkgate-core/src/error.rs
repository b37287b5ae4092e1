//! Configuration and programming errors.
//!
//! Rejected URLs are never errors; they surface as `None` or an empty set.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Target language is not a recognised ISO 639 code.
    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),

    /// Sampler bounds that can never be satisfied together.
    #[error("exclude_min ({min}) is greater than exclude_max ({max})")]
    InvalidBounds { min: usize, max: usize },

    /// Sample size of zero.
    #[error("sample size must be at least 1")]
    ZeroSampleSize,
}
