//! Analysis - the ACH aggregate root

use crate::evidence::Evidence;
use crate::hypothesis::Hypothesis;
use crate::ids::{EvidenceId, HypothesisId};
use crate::milestone::Milestone;
use crate::rating::RatingValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One complete ACH analysis: the focus question, the competing hypotheses,
/// the evidence, the consistency matrix, and any milestones.
///
/// Hypotheses and evidence keep their insertion order; the matrix is sparse,
/// keyed by (evidence, hypothesis). The advisor receives a snapshot per call
/// and never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    /// The question the analysis is trying to answer
    pub focus_question: String,

    /// Competing hypotheses, in presentation order
    pub hypotheses: Vec<Hypothesis>,

    /// Evidence items, in presentation order
    pub evidence: Vec<Evidence>,

    /// Sparse consistency matrix
    pub ratings: HashMap<(EvidenceId, HypothesisId), RatingValue>,

    /// Future indicators, each tied to one hypothesis
    pub milestones: Vec<Milestone>,
}

impl Analysis {
    /// Create an empty analysis around a focus question
    pub fn new(focus_question: impl Into<String>) -> Self {
        Self {
            focus_question: focus_question.into(),
            ..Self::default()
        }
    }

    /// Look up the rating for one matrix cell
    pub fn rating_for(
        &self,
        evidence_id: EvidenceId,
        hypothesis_id: HypothesisId,
    ) -> Option<RatingValue> {
        self.ratings.get(&(evidence_id, hypothesis_id)).copied()
    }

    /// Record a rating for one matrix cell
    pub fn set_rating(
        &mut self,
        evidence_id: EvidenceId,
        hypothesis_id: HypothesisId,
        rating: RatingValue,
    ) {
        self.ratings.insert((evidence_id, hypothesis_id), rating);
    }

    /// Resolve a hypothesis by its short label, case-insensitively.
    ///
    /// This is the resolution step the response extractors rely on: labels
    /// coming back from the model are matched exactly after uppercasing.
    pub fn hypothesis_by_label(&self, label: &str) -> Option<&Hypothesis> {
        let wanted = label.trim().to_uppercase();
        self.hypotheses
            .iter()
            .find(|h| h.label.to_uppercase() == wanted)
    }

    /// Resolve a hypothesis by identifier
    pub fn hypothesis_by_id(&self, id: HypothesisId) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|h| h.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::{EvidenceType, Reliability};

    fn sample() -> Analysis {
        let mut analysis = Analysis::new("Who leaked the memo?");
        analysis
            .hypotheses
            .push(Hypothesis::new("H1", "An insider leaked it"));
        analysis
            .hypotheses
            .push(Hypothesis::new("H2", "It was obtained by intrusion"));
        analysis.evidence.push(Evidence::new(
            "E1",
            "No intrusion alerts were recorded that week",
            EvidenceType::Document,
            Reliability::Medium,
        ));
        analysis
    }

    #[test]
    fn test_rating_for_missing_cell() {
        let analysis = sample();
        let e = analysis.evidence[0].id;
        let h = analysis.hypotheses[0].id;
        assert_eq!(analysis.rating_for(e, h), None);
    }

    #[test]
    fn test_set_and_get_rating() {
        let mut analysis = sample();
        let e = analysis.evidence[0].id;
        let h = analysis.hypotheses[1].id;
        analysis.set_rating(e, h, RatingValue::Inconsistent);
        assert_eq!(analysis.rating_for(e, h), Some(RatingValue::Inconsistent));
    }

    #[test]
    fn test_label_lookup_is_case_insensitive() {
        let analysis = sample();
        assert!(analysis.hypothesis_by_label("h1").is_some());
        assert!(analysis.hypothesis_by_label(" H2 ").is_some());
        assert!(analysis.hypothesis_by_label("H9").is_none());
    }

    #[test]
    fn test_hypotheses_keep_order() {
        let analysis = sample();
        assert_eq!(analysis.hypotheses[0].label, "H1");
        assert_eq!(analysis.hypotheses[1].label, "H2");
    }
}
