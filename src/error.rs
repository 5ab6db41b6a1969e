//! Error types for article-blocks.
//!
//! Classification itself is total and never errors; the only fallible
//! operation in the crate is validating a custom ruleset.

/// Error type for ruleset validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A ratio threshold fell outside the meaningful range.
    #[error("ratio threshold {name} out of range: {value} (expected 0.0..=1.0)")]
    InvalidRatio {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The heading word-count bounds describe an empty range.
    #[error("empty heading word-count range: min {min} > max {max}")]
    EmptyWordRange {
        /// Configured minimum word count.
        min: usize,
        /// Configured maximum word count.
        max: usize,
    },
}

/// Result type alias for ruleset validation.
pub type Result<T> = std::result::Result<T, Error>;
