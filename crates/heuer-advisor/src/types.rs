//! Boundary result types for the structured tasks
//!
//! Like the completion layer, structured outcomes travel as data: exactly
//! one of the payload or the error is populated, and the error strings are
//! rendered verbatim to the analyst.

use heuer_domain::{Challenge, RatingSuggestion};
use serde::Serialize;

/// Outcome of the rating-suggestion task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingsOutcome {
    /// Whether the task completed
    pub success: bool,
    /// Suggestions extracted from the completion; possibly fewer than the
    /// hypothesis count when lines failed to match
    pub suggestions: Vec<RatingSuggestion>,
    /// Diagnostic message; absent on success
    pub error: Option<String>,
}

impl RatingsOutcome {
    /// A successful batch, possibly partial
    pub fn ok(suggestions: Vec<RatingSuggestion>) -> Self {
        Self {
            success: true,
            suggestions,
            error: None,
        }
    }

    /// A failed task with no suggestions
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            suggestions: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Outcome of the devil's-advocate task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengesOutcome {
    /// Whether the task completed
    pub success: bool,
    /// Challenges extracted from the completion
    pub challenges: Vec<Challenge>,
    /// Diagnostic message; absent on success
    pub error: Option<String>,
}

impl ChallengesOutcome {
    /// A successful batch, possibly partial
    pub fn ok(challenges: Vec<Challenge>) -> Self {
        Self {
            success: true,
            challenges,
            error: None,
        }
    }

    /// A failed task with no challenges
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            challenges: Vec::new(),
            error: Some(error.into()),
        }
    }
}
