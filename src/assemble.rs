//! Block assembly: the driver that wires the pipeline together.
//!
//! Splits raw content into lines, runs each line through the classification
//! chain, and emits the ordered block sequence. Never merges or reorders
//! lines; a document with zero surviving lines yields an empty sequence and
//! the caller renders its own fallback.

use crate::classify::{classify_line, Classification};
use crate::lines::split_lines;
use crate::result::{Block, BlockKind, ContentBlocks, RawDocument, StructuredArticle};
use crate::rules::Rules;

/// Assembles classified blocks from raw content.
pub(crate) fn assemble(content: &str, rules: &Rules) -> ContentBlocks {
    split_lines(content)
        .filter_map(|line| {
            let kind = match classify_line(line.text, rules) {
                Classification::Dropped => return None,
                Classification::Heading => BlockKind::Heading {
                    text: line.text.to_string(),
                },
                Classification::LeadParagraph {
                    emphasized_prefix,
                    remainder,
                } => BlockKind::LeadParagraph {
                    emphasized_prefix,
                    remainder,
                },
                Classification::Paragraph => BlockKind::Paragraph {
                    text: line.text.to_string(),
                },
            };
            Some(Block {
                ordinal: line.ordinal,
                kind,
            })
        })
        .collect()
}

/// Structures a whole document, passing header metadata through untouched.
pub(crate) fn assemble_document(doc: &RawDocument, rules: &Rules) -> StructuredArticle {
    let content = doc.content.as_deref().unwrap_or_default();

    if cfg!(debug_assertions) {
        eprintln!(
            "DEBUG: Structuring article (content length: {} chars)",
            content.chars().count()
        );
    }

    let blocks = assemble(content, rules);

    if cfg!(debug_assertions) {
        eprintln!("DEBUG: Emitted {} blocks", blocks.len());
    }

    StructuredArticle {
        title: doc.title.clone(),
        url: doc.url.clone(),
        doc_len: doc.doc_len,
        image_url: doc.image_url.clone(),
        blocks,
    }
}
