//! Textual rendering of analysis context for user messages
//!
//! Everything here is a pure transformation of an [`Analysis`] snapshot
//! into the canonical text shapes the prompts describe.

use heuer_domain::{Analysis, Evidence};
use std::fmt::Write;

/// Bulleted hypothesis descriptions, for non-duplication context
pub(crate) fn hypothesis_descriptions(analysis: &Analysis) -> String {
    let mut out = String::new();
    for h in &analysis.hypotheses {
        let _ = writeln!(out, "- {}", h.description);
    }
    out
}

/// Bulleted `label: description` hypothesis list
pub(crate) fn hypothesis_list(analysis: &Analysis) -> String {
    let mut out = String::new();
    for h in &analysis.hypotheses {
        let _ = writeln!(out, "- {}: {}", h.label, h.description);
    }
    out
}

/// Bulleted evidence descriptions, for non-duplication context
pub(crate) fn evidence_descriptions(analysis: &Analysis) -> String {
    let mut out = String::new();
    for e in &analysis.evidence {
        let _ = writeln!(out, "- {}", e.description);
    }
    out
}

/// Bulleted evidence list with type and reliability
pub(crate) fn evidence_list(analysis: &Analysis) -> String {
    let mut out = String::new();
    for e in &analysis.evidence {
        let _ = writeln!(
            out,
            "- {}: {} (type: {}, reliability: {})",
            e.label, e.description, e.evidence_type, e.reliability
        );
    }
    out
}

/// One evidence item in full, for single-item tasks
pub(crate) fn evidence_detail(evidence: &Evidence) -> String {
    let mut out = format!(
        "{} (type: {}, reliability: {})",
        evidence.description, evidence.evidence_type, evidence.reliability
    );
    if let Some(source) = &evidence.source {
        let _ = write!(out, " [source: {}]", source);
    }
    out
}

/// The consistency matrix, one line per evidence item.
///
/// Each line lists `label:rating` pairs across every hypothesis, with `-`
/// standing in for cells that have not been rated.
pub(crate) fn matrix_lines(analysis: &Analysis) -> String {
    let mut out = String::new();
    for e in &analysis.evidence {
        let cells: Vec<String> = analysis
            .hypotheses
            .iter()
            .map(|h| {
                let token = analysis
                    .rating_for(e.id, h.id)
                    .map(|r| r.as_token())
                    .unwrap_or("-");
                format!("{}:{}", h.label, token)
            })
            .collect();
        let _ = writeln!(out, "{}: {}", e.label, cells.join(", "));
    }
    out
}

/// Existing milestones as `hypothesisLabel: description` lines.
///
/// A milestone whose hypothesis reference dangles renders with `?` in
/// place of the label rather than being dropped.
pub(crate) fn milestone_lines(analysis: &Analysis) -> String {
    let mut out = String::new();
    for m in &analysis.milestones {
        let label = analysis
            .hypothesis_by_id(m.hypothesis_id)
            .map(|h| h.label.as_str())
            .unwrap_or("?");
        let _ = writeln!(out, "- {}: {}", label, m.description);
    }
    out
}
