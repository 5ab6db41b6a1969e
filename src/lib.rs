//! # article-blocks
//!
//! Line-level article content structurer.
//!
//! Takes an unstructured block of scraped article text (one string with
//! embedded newlines) and classifies each line into a structural role -
//! section heading, lead paragraph with an emphasized dateline prefix,
//! photo credit/caption (dropped), or ordinary body paragraph - producing
//! an ordered, typed block sequence ready for rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_blocks::{structure, BlockKind};
//!
//! let content = "JAKARTA, KOMPAS.com - Pantai ini indah.\n\n\
//!                Pesona Alam Tersembunyi\n\
//!                Air lautnya jernih dan tenang.";
//!
//! let blocks = structure(content);
//! assert_eq!(blocks.len(), 3);
//! assert!(matches!(blocks[0].kind, BlockKind::LeadParagraph { .. }));
//! assert!(matches!(blocks[1].kind, BlockKind::Heading { .. }));
//! assert!(matches!(blocks[2].kind, BlockKind::Paragraph { .. }));
//! ```
//!
//! ## Guarantees
//!
//! - **Total**: every trimmed, non-empty line resolves to exactly one role;
//!   classification never errors, only degrades to the safest reading.
//! - **Line-local**: a line's role is a pure function of that line's text
//!   alone - no cross-line state, no lookahead, no reordering or merging.
//! - **Isolated**: pure synchronous computation with no shared state; safe
//!   to call concurrently per request.

mod assemble;
mod error;
mod patterns;
mod result;
mod rules;

/// Line splitting for raw scraped content.
pub mod lines;

/// Photo credit and caption detection.
pub mod credit;

/// Lead paragraph detection and prefix extraction.
pub mod lead;

/// Section heading detection (the four-stage funnel).
pub mod heading;

/// The line classification chain and its tagged result.
pub mod classify;

// Public API - re-exports
pub use classify::{classify_line, Classification, Rule, RULE_CHAIN};
pub use error::{Error, Result};
pub use result::{Block, BlockKind, ContentBlocks, RawDocument, StructuredArticle};
pub use rules::Rules;

/// Structures raw article content using the canonical ruleset.
///
/// Returns one block per surviving line, in original order. Empty content
/// yields an empty sequence; the caller renders its own fallback.
///
/// # Example
///
/// ```rust
/// use article_blocks::structure;
///
/// let blocks = structure("Pesona Alam Tersembunyi\nAir lautnya jernih.");
/// assert_eq!(blocks.len(), 2);
/// ```
#[must_use]
pub fn structure(content: &str) -> ContentBlocks {
    structure_with_rules(content, &Rules::default())
}

/// Structures raw article content with custom thresholds.
///
/// # Example
///
/// ```rust
/// use article_blocks::{structure_with_rules, Rules};
///
/// let rules = Rules {
///     max_heading_words: 10,
///     ..Rules::default()
/// };
/// let blocks = structure_with_rules("Pesona Alam Tersembunyi", &rules);
/// assert_eq!(blocks.len(), 1);
/// ```
#[must_use]
pub fn structure_with_rules(content: &str, rules: &Rules) -> ContentBlocks {
    assemble::assemble(content, rules)
}

/// Structures a whole raw document, passing header metadata through.
///
/// Absent or empty content yields an article with zero blocks; this is not
/// an error. Title, URL, length, and image URL are never transformed.
///
/// # Example
///
/// ```rust
/// use article_blocks::{structure_document, RawDocument, Rules};
///
/// let doc = RawDocument {
///     title: "Pantai Sanur".to_string(),
///     url: "https://travel.kompas.com/read/1".to_string(),
///     content: Some("JAKARTA, KOMPAS.com - Pantai ini indah.".to_string()),
///     doc_len: Some(450),
///     image_url: None,
/// };
///
/// let article = structure_document(&doc, &Rules::default());
/// assert_eq!(article.title, "Pantai Sanur");
/// assert_eq!(article.blocks.len(), 1);
/// ```
#[must_use]
pub fn structure_document(doc: &RawDocument, rules: &Rules) -> StructuredArticle {
    assemble::assemble_document(doc, rules)
}
