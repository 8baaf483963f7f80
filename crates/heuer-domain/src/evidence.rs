//! Evidence - the items rated against each hypothesis

use crate::ids::EvidenceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of evidence, in decreasing order of directness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceType {
    /// Directly observed or verifiable fact
    Fact,
    /// Statement from a person
    Testimony,
    /// Written or recorded material
    Document,
    /// Something taken as given without verification
    Assumption,
    /// Inference or line of reasoning
    Argument,
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EvidenceType::Fact => "fact",
            EvidenceType::Testimony => "testimony",
            EvidenceType::Document => "document",
            EvidenceType::Assumption => "assumption",
            EvidenceType::Argument => "argument",
        };
        write!(f, "{}", s)
    }
}

/// Ordinal reliability of an evidence item.
///
/// Declaration order carries the ordering: Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    /// Unverified or doubtful source
    Low,
    /// Plausible but not corroborated
    Medium,
    /// Corroborated or authoritative
    High,
}

impl fmt::Display for Reliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Reliability::Low => "low",
            Reliability::Medium => "medium",
            Reliability::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// One evidence item in an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Unique identifier
    pub id: EvidenceId,

    /// Short code, e.g. "E1"
    pub label: String,

    /// What the evidence says
    pub description: String,

    /// Kind of evidence
    pub evidence_type: EvidenceType,

    /// How trustworthy the item is
    pub reliability: Reliability,

    /// Where the evidence came from, if recorded
    pub source: Option<String>,
}

impl Evidence {
    /// Create a new evidence item with a fresh identifier
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        evidence_type: EvidenceType,
        reliability: Reliability,
    ) -> Self {
        Self {
            id: EvidenceId::new(),
            label: label.into(),
            description: description.into(),
            evidence_type,
            reliability,
            source: None,
        }
    }

    /// Attach a source reference
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
