//! Lead paragraph detection and prefix extraction.
//!
//! News-style articles open with a dateline: an all-caps location, a comma,
//! and the publication brand, e.g. `"JAKARTA, KOMPAS.com - Pantai ini..."`.
//! The dateline is rendered emphasized, so the detector splits the line into
//! the emphasized prefix and the remainder.

use crate::patterns::{LEAD_ANCHOR, LEAD_PREFIX};

/// A lead line split into its emphasized dateline prefix and the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadSplit<'a> {
    /// The dateline prefix, including the separator glyph and trailing space.
    pub emphasized_prefix: &'a str,
    /// Everything after the prefix.
    pub remainder: &'a str,
}

/// Returns true if the line is anchored by the lead-paragraph pattern:
/// an optional all-caps location token plus comma, then the brand token,
/// at the very start of the line.
#[must_use]
pub fn is_lead(line: &str) -> bool {
    LEAD_ANCHOR.is_match(line)
}

/// Extracts the emphasized dateline prefix from a lead line.
///
/// The extraction pattern is stricter than the anchor: it requires the
/// location token. Returns `None` when the anchor matched but no clean
/// prefix can be captured; the caller then treats the whole line as an
/// ordinary paragraph instead of failing.
#[must_use]
pub fn split_lead(line: &str) -> Option<LeadSplit<'_>> {
    let caps = LEAD_PREFIX.captures(line)?;
    let prefix = caps.get(1)?.as_str();
    Some(LeadSplit {
        emphasized_prefix: prefix,
        remainder: &line[prefix.len()..],
    })
}
