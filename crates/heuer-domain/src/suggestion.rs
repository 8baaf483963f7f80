//! Transient suggestion records produced by the AI advisor
//!
//! These are derived value objects: they reference a hypothesis by id and
//! label but have no identity or storage of their own. Persisting anything
//! an analyst accepts is the UI layer's job.

use crate::ids::HypothesisId;
use crate::rating::RatingValue;
use serde::{Deserialize, Serialize};

/// A model-proposed rating for one hypothesis against one evidence item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSuggestion {
    /// The hypothesis the rating applies to
    pub hypothesis_id: HypothesisId,

    /// The hypothesis label as resolved ("H1")
    pub hypothesis_label: String,

    /// The suggested consistency rating
    pub rating: RatingValue,

    /// The model's reasoning for the rating
    pub explanation: String,
}

/// A devil's-advocate challenge against one hypothesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// The hypothesis being challenged
    pub hypothesis_id: HypothesisId,

    /// The hypothesis label as resolved ("H1")
    pub hypothesis_label: String,

    /// The strongest argument against the hypothesis
    pub counter_argument: String,

    /// Evidence that, if found, would disprove the hypothesis
    pub disproof_evidence: String,

    /// An alternative way of framing the situation
    pub alternative_angle: String,
}
