//! Heuer AI Advisor
//!
//! Generates analytic artifacts for an Analysis of Competing Hypotheses
//! (ACH) through a pluggable LLM backend, and extracts typed suggestions
//! back out of the model's unreliable output.
//!
//! # Architecture
//!
//! ```text
//! Task builder → Completion client → provider → Response extractor → typed result
//! ```
//!
//! The prompt catalog ([`TaskKind`], [`system_prompt`]) fixes the output
//! format each task demands; the extractors accept exactly those formats,
//! with per-line and per-element tolerance because the upstream generator
//! is untrusted. Failures travel as data, never as panics or bare errors,
//! so the UI can render every diagnostic string directly to the analyst.
//!
//! # Example
//!
//! ```no_run
//! use heuer_advisor::Advisor;
//! use heuer_domain::Analysis;
//! use heuer_llm::{Completions, ProviderConfig};
//!
//! # async fn example() {
//! let config = ProviderConfig::openai_compatible("http://localhost:11434/v1", "llama3");
//! let advisor = Advisor::new(Completions::new());
//! let analysis = Analysis::new("Who leaked the memo?");
//! let result = advisor.suggest_hypotheses(&config, &analysis).await;
//! if result.success {
//!     println!("{}", result.content);
//! }
//! # }
//! ```

#![warn(missing_docs)]

mod advisor;
mod challenges;
mod error;
mod prompt;
mod ratings;
mod render;
mod types;

pub use advisor::Advisor;
pub use error::AdvisorError;
pub use prompt::{system_prompt, TaskKind};
pub use types::{ChallengesOutcome, RatingsOutcome};
