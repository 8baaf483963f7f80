//! Line-grammar extraction of rating suggestions
//!
//! The ratings prompt asks for one `LABEL: RATING - explanation` line per
//! hypothesis, but the generator is unreliable: it decorates labels with
//! brackets, drops colons, changes case, and interleaves commentary. Each
//! line is therefore an independent parse attempt; lines that do not match
//! and labels that do not resolve are skipped, never escalated, so one bad
//! line cannot discard an otherwise useful batch.

use heuer_domain::{Analysis, RatingSuggestion, RatingValue};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Tolerant per-line pattern.
///
/// Accepts optional surrounding brackets around the label, an optional
/// colon after it, the rating token with two-letter alternatives listed
/// before their one-letter prefixes (so `II` never matches as `I`), a dash
/// or colon separator, and the rest of the line as the explanation.
static RATING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*[\[\(]?\s*([A-Za-z][A-Za-z0-9]*)\s*[\]\)]?\s*:?\s*(CC|II|C|N|I)\b\s*[-:\u{2013}]\s*(.+)$",
    )
    .expect("rating line pattern is valid")
});

/// Extract rating suggestions from completion text.
///
/// Labels resolve against the analysis hypothesis set by exact match after
/// uppercasing; suggestions come back in the order their lines appear.
pub(crate) fn extract(text: &str, analysis: &Analysis) -> Vec<RatingSuggestion> {
    let mut suggestions = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let Some(captures) = RATING_LINE.captures(line) else {
            skipped += 1;
            continue;
        };
        let label = &captures[1];
        let Some(rating) = RatingValue::parse_token(&captures[2]) else {
            skipped += 1;
            continue;
        };
        let Some(hypothesis) = analysis.hypothesis_by_label(label) else {
            warn!(label, "rating line references unknown hypothesis, dropping");
            skipped += 1;
            continue;
        };
        suggestions.push(RatingSuggestion {
            hypothesis_id: hypothesis.id,
            hypothesis_label: hypothesis.label.clone(),
            rating,
            explanation: captures[3].trim().to_string(),
        });
    }

    if skipped > 0 {
        warn!(skipped, kept = suggestions.len(), "rating lines dropped during extraction");
    }
    suggestions
}
