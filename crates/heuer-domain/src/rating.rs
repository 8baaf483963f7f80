//! Consistency rating scale
//!
//! ACH rates each evidence item against each hypothesis on an ordered
//! five-step scale from strongly inconsistent to strongly consistent. The
//! token vocabulary exposed at every boundary is `II, I, N, C, CC` and any
//! renderer must preserve the total order `II < I < N < C < CC`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Consistency of one evidence item with one hypothesis.
///
/// Variant declaration order carries the domain ordering, so the derived
/// `Ord` gives `II < I < N < C < CC`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RatingValue {
    /// `II` - strongly inconsistent
    VeryInconsistent,
    /// `I` - inconsistent
    Inconsistent,
    /// `N` - neutral / not diagnostic
    Neutral,
    /// `C` - consistent
    Consistent,
    /// `CC` - strongly consistent
    VeryConsistent,
}

impl RatingValue {
    /// All ratings in ascending order of consistency
    pub const ALL: [RatingValue; 5] = [
        RatingValue::VeryInconsistent,
        RatingValue::Inconsistent,
        RatingValue::Neutral,
        RatingValue::Consistent,
        RatingValue::VeryConsistent,
    ];

    /// The boundary token for this rating
    pub fn as_token(&self) -> &'static str {
        match self {
            RatingValue::VeryInconsistent => "II",
            RatingValue::Inconsistent => "I",
            RatingValue::Neutral => "N",
            RatingValue::Consistent => "C",
            RatingValue::VeryConsistent => "CC",
        }
    }

    /// Parse a boundary token, case-insensitively.
    ///
    /// Two-character tokens are checked before their one-character prefixes
    /// so that `II` is never read as `I` (and `CC` never as `C`).
    pub fn parse_token(s: &str) -> Option<RatingValue> {
        match s.trim().to_uppercase().as_str() {
            "II" => Some(RatingValue::VeryInconsistent),
            "CC" => Some(RatingValue::VeryConsistent),
            "I" => Some(RatingValue::Inconsistent),
            "N" => Some(RatingValue::Neutral),
            "C" => Some(RatingValue::Consistent),
            _ => None,
        }
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
    }
}
