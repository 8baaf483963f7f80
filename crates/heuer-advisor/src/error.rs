//! Error types for the advisor

use thiserror::Error;

/// Errors the advisor reports as data at the UI boundary.
///
/// The `Display` strings are the contract: the UI renders them verbatim to
/// the analyst, so they stay fixed and human-readable.
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// The challenge task was invoked with nothing to challenge
    #[error("No hypotheses to challenge")]
    NoHypotheses,

    /// Structured output could not be parsed after fence-stripping
    #[error("Failed to parse AI response as JSON")]
    ParseFailure,

    /// The completion itself failed; carries the client's diagnostic
    #[error("{0}")]
    Completion(String),
}
