//! Photo credit and caption detection.
//!
//! Scraped article bodies carry photo-credit lines such as
//! `"KOMPAS.com/M LUKMAN PABRIYANTO Pantai Sanur"` interleaved with real
//! content. These are attribution, not article text, and are dropped
//! entirely rather than partially redacted.

use crate::patterns::{BRAND_TOKEN_LOWER, DOC_INDICATOR, PHOTO_INDICATOR};

/// Returns true if the line is a photo credit or caption.
///
/// Purely lexical, case-insensitive checks: the brand marker with a slash at
/// line start, or the brand token co-occurring with a documentation or
/// photography indicator anywhere in the line.
#[must_use]
pub fn is_credit(line: &str) -> bool {
    let lower = line.trim().to_lowercase();

    // e.g. "KOMPAS.com/M LUKMAN PABRIYANTO ..."
    if lower.starts_with("kompas.com/") || lower.starts_with("kompas.com /") {
        return true;
    }

    // "dok." / "dokumentasi" alongside the brand
    if lower.contains(BRAND_TOKEN_LOWER) && lower.contains(DOC_INDICATOR) {
        return true;
    }

    // photographer credit alongside the brand
    if lower.contains(BRAND_TOKEN_LOWER) && lower.contains(PHOTO_INDICATOR) {
        return true;
    }

    false
}
