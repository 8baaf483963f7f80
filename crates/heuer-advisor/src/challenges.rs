//! JSON-with-fences extraction of devil's-advocate challenges
//!
//! The devil's-advocate prompt demands bare JSON, but models routinely
//! wrap it in a markdown code fence anyway. Extraction strips one fence
//! pair when present, parses the remainder, and resolves each element
//! independently: elements with an unknown hypothesis label are dropped,
//! missing string fields default to empty, and only an outright parse
//! failure fails the batch.

use crate::error::AdvisorError;
use heuer_domain::{Analysis, Challenge};
use serde::Deserialize;
use tracing::warn;

#[derive(Deserialize)]
struct ChallengesPayload {
    #[serde(default)]
    challenges: Vec<ChallengeCandidate>,
}

#[derive(Deserialize)]
struct ChallengeCandidate {
    #[serde(default)]
    hypothesis_label: String,
    #[serde(default)]
    counter_argument: String,
    #[serde(default)]
    disproof_evidence: String,
    #[serde(default)]
    alternative_angle: String,
}

/// Extract challenges from completion text.
pub(crate) fn extract(text: &str, analysis: &Analysis) -> Result<Vec<Challenge>, AdvisorError> {
    let stripped = strip_fences(text);
    let payload: ChallengesPayload = serde_json::from_str(stripped).map_err(|e| {
        warn!(error = %e, "challenge payload is not valid JSON");
        AdvisorError::ParseFailure
    })?;

    let mut challenges = Vec::new();
    let mut dropped = 0usize;
    for candidate in payload.challenges {
        let Some(hypothesis) = analysis.hypothesis_by_label(&candidate.hypothesis_label) else {
            warn!(
                label = %candidate.hypothesis_label,
                "challenge references unknown hypothesis, dropping"
            );
            dropped += 1;
            continue;
        };
        challenges.push(Challenge {
            hypothesis_id: hypothesis.id,
            hypothesis_label: hypothesis.label.clone(),
            counter_argument: candidate.counter_argument,
            disproof_evidence: candidate.disproof_evidence,
            alternative_angle: candidate.alternative_angle,
        });
    }

    if dropped > 0 {
        warn!(dropped, kept = challenges.len(), "challenges dropped during extraction");
    }
    Ok(challenges)
}

/// Take the segment between the first pair of fence delimiters when the
/// text is wrapped in a ```json or bare ``` block, else the raw text.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(after_open) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop an optional language tag on the opening line
    let body = match after_open.find('\n') {
        Some(idx) => &after_open[idx + 1..],
        None => return trimmed,
    };
    match body.find("```") {
        Some(idx) => body[..idx].trim(),
        None => body.trim(),
    }
}
