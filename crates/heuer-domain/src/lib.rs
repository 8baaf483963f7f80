//! Heuer Domain Layer
//!
//! Core domain model for the Analysis of Competing Hypotheses (ACH) method.
//! This crate defines the value objects shared by every other layer: the
//! analysis aggregate, hypotheses, evidence, the consistency rating scale,
//! and the transient suggestion records produced by the AI advisor.
//!
//! ## Key Concepts
//!
//! - **Hypothesis**: a candidate explanation, carrying a short label ("H1")
//! - **Evidence**: a fact, testimony, document, assumption, or argument
//! - **Rating**: how consistent one evidence item is with one hypothesis,
//!   on the ordered scale II < I < N < C < CC
//! - **Analysis**: the aggregate root tying the above together
//!
//! ## Architecture
//!
//! This crate carries near-zero dependencies: `uuid` for identifiers and
//! `serde` because the suggestion records cross the UI boundary as data.
//! Infrastructure (HTTP, LLM providers, parsing) lives in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod evidence;
pub mod hypothesis;
pub mod ids;
pub mod milestone;
pub mod rating;
pub mod suggestion;

// Re-exports for convenience
pub use analysis::Analysis;
pub use evidence::{Evidence, EvidenceType, Reliability};
pub use hypothesis::Hypothesis;
pub use ids::{EvidenceId, HypothesisId, MilestoneId};
pub use milestone::Milestone;
pub use rating::RatingValue;
pub use suggestion::{Challenge, RatingSuggestion};
