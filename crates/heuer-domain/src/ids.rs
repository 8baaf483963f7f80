//! Identifier newtypes for the ACH domain entities
//!
//! All identifiers are UUIDv7-backed, which gives chronological sortability
//! for free and needs no coordination when the UI creates records offline.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generate a fresh UUIDv7-based identifier
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            /// Parse an identifier from its string form
            pub fn parse(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| format!("Invalid identifier: {}", e))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id! {
    /// Unique identifier for a hypothesis
    HypothesisId
}

entity_id! {
    /// Unique identifier for an evidence item
    EvidenceId
}

entity_id! {
    /// Unique identifier for a milestone
    MilestoneId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = HypothesisId::new();
        let b = HypothesisId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_roundtrip() {
        let id = EvidenceId::new();
        let parsed = EvidenceId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(MilestoneId::parse("not-a-uuid").is_err());
    }
}
