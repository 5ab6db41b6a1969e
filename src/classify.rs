//! The line classification chain.
//!
//! Each classifier is a named predicate+transform step producing a tagged
//! result; the chain applies them in fixed precedence and falls back to an
//! ordinary paragraph. This replaces the implicit pattern-fallthrough of the
//! source system with an explicit, independently testable rule list.

use crate::credit::is_credit;
use crate::heading::is_heading;
use crate::lead::{is_lead, split_lead};
use crate::rules::Rules;

/// Tagged result of classifying a single line.
///
/// Every trimmed, non-empty line resolves to exactly one variant; there is
/// no error case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Photo credit or caption; produces no block.
    Dropped,
    /// Section subheading.
    Heading,
    /// Dateline-prefixed lead paragraph, split for emphasized rendering.
    LeadParagraph {
        /// The dateline prefix, rendered emphasized.
        emphasized_prefix: String,
        /// Everything after the prefix.
        remainder: String,
    },
    /// Ordinary body paragraph.
    Paragraph,
}

/// One named step in the classification chain.
///
/// A step either claims the line with a `Classification` or passes it on
/// with `None`.
pub struct Rule {
    /// Step name, for diagnostics and tests.
    pub name: &'static str,
    /// The predicate+transform applied to the line.
    pub apply: fn(&str, &Rules) -> Option<Classification>,
}

fn credit_rule(line: &str, _rules: &Rules) -> Option<Classification> {
    is_credit(line).then_some(Classification::Dropped)
}

fn lead_rule(line: &str, _rules: &Rules) -> Option<Classification> {
    if !is_lead(line) {
        return None;
    }
    // The anchor matched, so this step claims the line either way: a clean
    // prefix split, or degradation to an ordinary paragraph when the strict
    // extraction fails.
    Some(match split_lead(line) {
        Some(split) => Classification::LeadParagraph {
            emphasized_prefix: split.emphasized_prefix.to_string(),
            remainder: split.remainder.to_string(),
        },
        None => Classification::Paragraph,
    })
}

fn heading_rule(line: &str, rules: &Rules) -> Option<Classification> {
    is_heading(line, rules).then_some(Classification::Heading)
}

/// The classification steps in fixed precedence order.
///
/// The order is not configurable: credit lines must never leak through as
/// headings, and the lead pattern can collide with the heading pattern on
/// short capitalized lines.
pub const RULE_CHAIN: &[Rule] = &[
    Rule {
        name: "credit-filter",
        apply: credit_rule,
    },
    Rule {
        name: "lead-paragraph",
        apply: lead_rule,
    },
    Rule {
        name: "heading",
        apply: heading_rule,
    },
];

/// Classifies one trimmed, non-empty line.
///
/// Total: always yields exactly one `Classification`. Lines claimed by no
/// step are ordinary paragraphs.
#[must_use]
pub fn classify_line(line: &str, rules: &Rules) -> Classification {
    for rule in RULE_CHAIN {
        if let Some(classification) = (rule.apply)(line, rules) {
            return classification;
        }
    }
    Classification::Paragraph
}
