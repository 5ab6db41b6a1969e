//! Line splitting for raw scraped article content.
//!
//! Raw content arrives as one string with embedded newlines. Candidate lines
//! are the pieces between runs of one or more newlines, trimmed, with empty
//! pieces discarded.

use crate::patterns::NEWLINE_RUN;

/// A trimmed, non-empty candidate line.
///
/// `ordinal` is the line's position in the newline-run split, used only for
/// stable output ordering and render keys. It plays no part in
/// classification, which looks at `text` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Position in the newline-run split of the original content.
    pub ordinal: usize,
    /// The trimmed line text.
    pub text: &'a str,
}

/// Splits raw content into candidate lines.
///
/// Lazy and restartable: call again on the same content for a fresh pass.
/// Empty content yields an empty sequence. No error conditions.
///
/// # Example
///
/// ```rust
/// use article_blocks::lines::split_lines;
///
/// let texts: Vec<&str> = split_lines("A\n\nB\n").map(|l| l.text).collect();
/// assert_eq!(texts, vec!["A", "B"]);
/// ```
pub fn split_lines(content: &str) -> impl Iterator<Item = Line<'_>> {
    NEWLINE_RUN
        .split(content)
        .enumerate()
        .filter_map(|(ordinal, piece)| {
            let text = piece.trim();
            if text.is_empty() {
                None
            } else {
                Some(Line { ordinal, text })
            }
        })
}
