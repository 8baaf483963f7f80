//! Milestone - a future observable tied to one hypothesis

use crate::ids::{HypothesisId, MilestoneId};
use serde::{Deserialize, Serialize};

/// An indicator to watch for that would support or undercut a hypothesis.
///
/// The hypothesis reference may dangle if the hypothesis was deleted after
/// the milestone was recorded; renderers fall back to `?` in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier
    pub id: MilestoneId,

    /// The hypothesis this milestone would inform
    pub hypothesis_id: HypothesisId,

    /// What to watch for
    pub description: String,
}

impl Milestone {
    /// Create a new milestone with a fresh identifier
    pub fn new(hypothesis_id: HypothesisId, description: impl Into<String>) -> Self {
        Self {
            id: MilestoneId::new(),
            hypothesis_id,
            description: description.into(),
        }
    }
}
