//! Section heading detection.
//!
//! Headings in scraped article bodies are short, capitalization-heavy,
//! punctuation-light lines. Detection is a strict funnel of ordered checks
//! tuned to minimize false positives (ordinary sentences promoted to
//! headings) while keeping recall acceptable. The order is required
//! behavior, not an optimization: later stages assume earlier ones passed.

use crate::patterns::URL_OR_MENTION;
use crate::rules::Rules;

/// Returns true if the line functions as a section subheading.
///
/// Decision procedure, in order:
///
/// 1. Reject lines containing a URL marker or an @-mention.
/// 2. Tokenize on whitespace; reject outside the word-count bounds.
/// 3. Reject on insufficient capitalized-word count or proportion. A word
///    counts as capitalized when its first character is uppercase per
///    Unicode, so extended Latin letters count and caseless tokens (digits,
///    symbols) are neutral evidence.
/// 4. Terminal punctuation governs final acceptance: "." always rejects;
///    "!" accepts only short exclamatory lines; "?" accepts only short,
///    strongly capitalized lines; no terminal punctuation accepts.
#[must_use]
pub fn is_heading(line: &str, rules: &Rules) -> bool {
    // Stage 1: headings never contain links or handles.
    if URL_OR_MENTION.is_match(line) {
        return false;
    }

    // Stage 2: word-count bounds.
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < rules.min_heading_words || words.len() > rules.max_heading_words {
        return false;
    }

    // Stage 3: capitalization evidence.
    let capitalized = words
        .iter()
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .count();
    if capitalized < rules.min_capitalized_words {
        return false;
    }
    let ratio = capitalized as f64 / words.len() as f64;
    if ratio < rules.min_capitalized_ratio {
        return false;
    }

    // Stage 4: terminal punctuation.
    if line.ends_with('.') {
        // ordinary sentences end in periods, headings typically do not
        return false;
    }
    if line.ends_with('!') {
        return words.len() <= rules.max_exclamation_words;
    }
    if line.ends_with('?') {
        return words.len() <= rules.max_question_words
            && ratio >= rules.min_question_capitalized_ratio;
    }

    true
}
