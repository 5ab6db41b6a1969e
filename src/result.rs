//! Input and output types for article structuring.
//!
//! `RawDocument` is what the document-fetch collaborator delivers;
//! `StructuredArticle` is what the rendering collaborator consumes. Both are
//! serde-facing: documents arrive as JSON from the search backend and blocks
//! are handed off tagged for the renderer.

use serde::{Deserialize, Serialize};

/// A raw scraped document as delivered by the document-fetch collaborator.
///
/// Field names match the backend wire format. The document is immutable once
/// received; this crate never transforms the metadata fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Article title.
    pub title: String,

    /// Original article URL.
    pub url: String,

    /// Scraped article body; absent or empty means "no content".
    #[serde(default)]
    pub content: Option<String>,

    /// Approximate article length in words.
    #[serde(default)]
    pub doc_len: Option<usize>,

    /// Main article image URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One classified unit of article content, ready for structured rendering.
///
/// A closed enumeration: credit/caption lines produce no block at all rather
/// than a kind of block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    /// Section subheading.
    Heading {
        /// The heading text.
        text: String,
    },

    /// Opening paragraph with an emphasized dateline prefix.
    LeadParagraph {
        /// The dateline prefix, rendered emphasized.
        emphasized_prefix: String,
        /// Everything after the prefix.
        remainder: String,
    },

    /// Ordinary body paragraph.
    Paragraph {
        /// The paragraph text.
        text: String,
    },
}

/// A classified block with its original line ordinal.
///
/// The ordinal is the line's position in the newline-run split of the raw
/// content, kept for stable ordering and render keys only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Original line position in the raw content.
    pub ordinal: usize,
    /// The classified role of the line.
    #[serde(flatten)]
    pub kind: BlockKind,
}

/// Ordered sequence of classified blocks, one per surviving line, in
/// original line order. Produced fresh per call; no persistent lifecycle.
pub type ContentBlocks = Vec<Block>;

/// Structured output handed to the rendering collaborator.
///
/// Carries the classified blocks plus untransformed pass-through of the
/// document's header metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredArticle {
    /// Article title, passed through unchanged.
    pub title: String,

    /// Original article URL, passed through unchanged.
    pub url: String,

    /// Approximate article length in words, passed through unchanged.
    pub doc_len: Option<usize>,

    /// Main article image URL, passed through unchanged.
    pub image_url: Option<String>,

    /// The classified content blocks.
    pub blocks: ContentBlocks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_document_deserializes_with_missing_optional_fields() {
        let doc: RawDocument = serde_json::from_str(
            r#"{"title": "Pantai Sanur", "url": "https://travel.kompas.com/read/1"}"#,
        )
        .expect("expected valid document JSON");
        assert_eq!(doc.title, "Pantai Sanur");
        assert!(doc.content.is_none());
        assert!(doc.doc_len.is_none());
        assert!(doc.image_url.is_none());
    }

    #[test]
    fn block_kind_serializes_tagged() {
        let block = Block {
            ordinal: 3,
            kind: BlockKind::Heading {
                text: "Pesona Alam".to_string(),
            },
        };
        let json = serde_json::to_value(&block).expect("expected serializable block");
        assert_eq!(json["kind"], "heading");
        assert_eq!(json["text"], "Pesona Alam");
        assert_eq!(json["ordinal"], 3);
    }
}
