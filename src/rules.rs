//! Consolidated classification thresholds.
//!
//! The source system accumulated several near-duplicate copies of the heading
//! heuristics with slowly drifting thresholds. This module is the single
//! canonical ruleset: every tunable lives here as a named constant, and the
//! `Rules` struct carries the effective values through the pipeline.

use crate::error::{Error, Result};

/// Minimum word count for a heading candidate.
pub const MIN_HEADING_WORDS: usize = 2;

/// Maximum word count for a heading candidate.
///
/// Observed variants used 10 and 12; the more permissive bound is canonical
/// so recall of true headings is not sacrificed.
pub const MAX_HEADING_WORDS: usize = 12;

/// Minimum number of capitalized words for a heading candidate.
pub const MIN_CAPITALIZED_WORDS: usize = 2;

/// Minimum proportion of capitalized words for a heading candidate.
pub const MIN_CAPITALIZED_RATIO: f64 = 0.35;

/// Maximum word count for a heading ending in "!".
pub const MAX_EXCLAMATION_WORDS: usize = 6;

/// Maximum word count for a heading ending in "?".
pub const MAX_QUESTION_WORDS: usize = 8;

/// Minimum capitalized-word proportion for a heading ending in "?".
pub const MIN_QUESTION_CAPITALIZED_RATIO: f64 = 0.5;

/// Classification thresholds for the heading detector.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the canonical settings.
///
/// # Example
///
/// ```rust
/// use article_blocks::Rules;
///
/// // Use the canonical thresholds
/// let rules = Rules::default();
///
/// // Tighten the word-count bound only
/// let rules = Rules {
///     max_heading_words: 10,
///     ..Rules::default()
/// };
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    /// Minimum word count for a heading candidate.
    ///
    /// Default: `2`
    pub min_heading_words: usize,

    /// Maximum word count for a heading candidate.
    ///
    /// Default: `12`
    pub max_heading_words: usize,

    /// Minimum number of words starting with an uppercase letter.
    ///
    /// Default: `2`
    pub min_capitalized_words: usize,

    /// Minimum proportion of capitalized words among all words.
    ///
    /// Default: `0.35`
    pub min_capitalized_ratio: f64,

    /// Maximum word count accepted for an exclamatory heading ("!").
    ///
    /// Carve-out for short exclamatory subheadings; a tunable threshold,
    /// not a hard invariant.
    ///
    /// Default: `6`
    pub max_exclamation_words: usize,

    /// Maximum word count accepted for a question-style heading ("?").
    ///
    /// Default: `8`
    pub max_question_words: usize,

    /// Minimum capitalized-word proportion for a question-style heading.
    ///
    /// Question headings must look strongly heading-like to avoid promoting
    /// rhetorical sentences.
    ///
    /// Default: `0.5`
    pub min_question_capitalized_ratio: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_heading_words: MIN_HEADING_WORDS,
            max_heading_words: MAX_HEADING_WORDS,
            min_capitalized_words: MIN_CAPITALIZED_WORDS,
            min_capitalized_ratio: MIN_CAPITALIZED_RATIO,
            max_exclamation_words: MAX_EXCLAMATION_WORDS,
            max_question_words: MAX_QUESTION_WORDS,
            min_question_capitalized_ratio: MIN_QUESTION_CAPITALIZED_RATIO,
        }
    }
}

impl Rules {
    /// Checks that the thresholds describe a usable ruleset.
    ///
    /// Classification itself never errors; validation exists for callers
    /// building custom rulesets from external configuration.
    pub fn validate(&self) -> Result<()> {
        if self.min_heading_words > self.max_heading_words {
            return Err(Error::EmptyWordRange {
                min: self.min_heading_words,
                max: self.max_heading_words,
            });
        }

        let ratios = [
            ("min_capitalized_ratio", self.min_capitalized_ratio),
            (
                "min_question_capitalized_ratio",
                self.min_question_capitalized_ratio,
            ),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidRatio { name, value });
            }
        }

        Ok(())
    }
}
