//! Hypothesis - a candidate explanation under analysis

use crate::ids::HypothesisId;
use serde::{Deserialize, Serialize};

/// A candidate explanation for the focus question.
///
/// The label is the short code analysts and the AI advisor refer to the
/// hypothesis by ("H1", "H2", ...). Labels are compared case-insensitively
/// when resolving advisor output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Unique identifier
    pub id: HypothesisId,

    /// Short code, e.g. "H1"
    pub label: String,

    /// Full statement of the hypothesis
    pub description: String,
}

impl Hypothesis {
    /// Create a new hypothesis with a fresh identifier
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: HypothesisId::new(),
            label: label.into(),
            description: description.into(),
        }
    }

    /// Validate invariants the UI layer relies on
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("hypothesis label is empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("hypothesis description is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_id() {
        let a = Hypothesis::new("H1", "The server was misconfigured");
        let b = Hypothesis::new("H2", "The outage was an attack");
        assert_ne!(a.id, b.id);
        assert_eq!(a.label, "H1");
    }

    #[test]
    fn test_validate_rejects_blank_label() {
        let h = Hypothesis::new("  ", "Something");
        assert!(h.validate().is_err());
    }
}
