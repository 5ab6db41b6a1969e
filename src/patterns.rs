//! Compiled regex patterns and brand marker tokens for line classification.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by the pipeline stage that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Brand Marker Tokens
// =============================================================================

/// Lowercased brand token for case-insensitive credit checks.
pub const BRAND_TOKEN_LOWER: &str = "kompas.com";

/// Documentation indicator co-occurring with the brand in credit lines
/// ("dok." / "dokumentasi").
pub const DOC_INDICATOR: &str = "dok";

/// Photography indicator co-occurring with the brand in credit lines.
pub const PHOTO_INDICATOR: &str = "foto";

// =============================================================================
// Line Splitting Patterns
// =============================================================================

/// Matches runs of one or more newlines; the line boundary in raw scraped
/// content. Splitting on the run (not on each newline) means blank lines
/// between paragraphs never produce empty candidates of their own.
pub static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("NEWLINE_RUN regex"));

// =============================================================================
// Lead Paragraph Patterns
// =============================================================================

/// Anchored lead-paragraph test: optional all-caps location token plus comma,
/// then the brand token, at the very start of the line
/// (e.g. "JAKARTA, KOMPAS.com - Pantai ini indah.").
pub static LEAD_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]+,\s*)?KOMPAS\.com\b").expect("LEAD_ANCHOR regex"));

/// Stricter prefix extraction for anchored lead lines: requires the location
/// token and captures through the optional separator glyph (hyphen/en-dash/
/// em-dash) plus trailing whitespace. A line passing `LEAD_ANCHOR` but
/// failing this capture degrades to an ordinary paragraph.
pub static LEAD_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]+,\s*KOMPAS\.com\s*[-–—]?\s*)").expect("LEAD_PREFIX regex")
});

// =============================================================================
// Heading Disqualifier Patterns
// =============================================================================

/// Matches URL markers or @-mentions; headings never contain links or handles.
pub static URL_OR_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)http|@").expect("URL_OR_MENTION regex"));
