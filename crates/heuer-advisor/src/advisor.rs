//! Task builders - one method per analytic task
//!
//! Each method assembles a user message from an [`Analysis`] snapshot,
//! pairs it with the matching catalog prompt, and runs one completion.
//! Free-text tasks hand the raw [`CompletionResult`] back to the caller;
//! the two structured tasks run their extractor over the content first.

use crate::error::AdvisorError;
use crate::prompt::{system_prompt, TaskKind};
use crate::render;
use crate::types::{ChallengesOutcome, RatingsOutcome};
use crate::{challenges, ratings};
use heuer_llm::{ChatCompleter, ChatMessage, CompletionResult, ProviderConfig};
use heuer_domain::{Analysis, Evidence, Hypothesis, HypothesisId};
use std::fmt::Write;
use tracing::{debug, info};

/// AI advisor for one ACH analysis.
///
/// Generic over the completion backend so tests run against
/// [`heuer_llm::MockCompleter`] and production against
/// [`heuer_llm::Completions`]. Holds no analysis state: every call takes a
/// fresh config and snapshot, and identical calls make independent
/// requests.
pub struct Advisor<C: ChatCompleter> {
    completer: C,
}

impl<C: ChatCompleter> Advisor<C> {
    /// Create an advisor over a completion backend
    pub fn new(completer: C) -> Self {
        Self { completer }
    }

    async fn run(
        &self,
        config: &ProviderConfig,
        kind: TaskKind,
        user_message: String,
    ) -> CompletionResult {
        info!(task = ?kind, "running advisor task");
        debug!(chars = user_message.len(), "user message assembled");
        let messages = [
            ChatMessage::system(system_prompt(kind)),
            ChatMessage::user(user_message),
        ];
        self.completer.complete(config, &messages).await
    }

    /// Propose new hypotheses for the focus question.
    ///
    /// Returns the raw completion; splitting the numbered list into records
    /// is left to the caller.
    pub async fn suggest_hypotheses(
        &self,
        config: &ProviderConfig,
        analysis: &Analysis,
    ) -> CompletionResult {
        let mut msg = format!("Focus question: {}\n", analysis.focus_question);
        if analysis.hypotheses.is_empty() {
            msg.push_str("\nThere are no hypotheses yet.\n");
        } else {
            let _ = write!(
                msg,
                "\nHypotheses already under consideration (do not repeat these):\n{}",
                render::hypothesis_descriptions(analysis)
            );
        }
        self.run(config, TaskKind::Hypotheses, msg).await
    }

    /// Propose evidence worth collecting
    pub async fn suggest_evidence(
        &self,
        config: &ProviderConfig,
        analysis: &Analysis,
    ) -> CompletionResult {
        let mut msg = format!(
            "Focus question: {}\n\nHypotheses:\n{}",
            analysis.focus_question,
            render::hypothesis_list(analysis)
        );
        if !analysis.evidence.is_empty() {
            let _ = write!(
                msg,
                "\nEvidence already recorded (do not repeat these):\n{}",
                render::evidence_descriptions(analysis)
            );
        }
        self.run(config, TaskKind::Evidence, msg).await
    }

    /// Talk through rating one evidence item against one hypothesis
    pub async fn rating_help(
        &self,
        config: &ProviderConfig,
        analysis: &Analysis,
        hypothesis: &Hypothesis,
        evidence: &Evidence,
    ) -> CompletionResult {
        let msg = format!(
            "Focus question: {}\n\nHypothesis {}: {}\n\nEvidence: {}\n",
            analysis.focus_question,
            hypothesis.label,
            hypothesis.description,
            render::evidence_detail(evidence)
        );
        self.run(config, TaskKind::RatingHelp, msg).await
    }

    /// Review the full analysis: hypotheses, evidence, and the matrix
    pub async fn analysis_insights(
        &self,
        config: &ProviderConfig,
        analysis: &Analysis,
    ) -> CompletionResult {
        let msg = format!(
            "Focus question: {}\n\nHypotheses:\n{}\nEvidence:\n{}\nMatrix (one row per evidence item, '-' = unrated):\n{}",
            analysis.focus_question,
            render::hypothesis_list(analysis),
            render::evidence_list(analysis),
            render::matrix_lines(analysis)
        );
        self.run(config, TaskKind::AnalysisInsights, msg).await
    }

    /// Propose future milestones tied to specific hypotheses
    pub async fn suggest_milestones(
        &self,
        config: &ProviderConfig,
        analysis: &Analysis,
    ) -> CompletionResult {
        let mut msg = format!(
            "Focus question: {}\n\nHypotheses:\n{}",
            analysis.focus_question,
            render::hypothesis_list(analysis)
        );
        if !analysis.milestones.is_empty() {
            let _ = write!(
                msg,
                "\nMilestones already tracked (do not repeat these):\n{}",
                render::milestone_lines(analysis)
            );
        }
        self.run(config, TaskKind::Milestones, msg).await
    }

    /// Rate one evidence item against every hypothesis.
    ///
    /// Runs the line-grammar extractor over the completion. An upstream
    /// completion failure is forwarded unchanged; unparseable lines inside
    /// a successful completion are dropped, not escalated.
    pub async fn suggest_ratings(
        &self,
        config: &ProviderConfig,
        analysis: &Analysis,
        evidence: &Evidence,
    ) -> RatingsOutcome {
        let msg = format!(
            "Focus question: {}\n\nHypotheses:\n{}\nEvidence to rate against every hypothesis:\n{}\n",
            analysis.focus_question,
            render::hypothesis_list(analysis),
            render::evidence_detail(evidence)
        );
        let result = self.run(config, TaskKind::Ratings, msg).await;
        if !result.success {
            return RatingsOutcome::failure(
                result
                    .error
                    .unwrap_or_else(|| "completion failed".to_string()),
            );
        }
        RatingsOutcome::ok(ratings::extract(&result.content, analysis))
    }

    /// Challenge hypotheses as a devil's advocate.
    ///
    /// With a target id, only that hypothesis is challenged. Fails fast
    /// with no network call when the resulting set is empty, including
    /// when the target id resolves to nothing.
    pub async fn challenge_hypotheses(
        &self,
        config: &ProviderConfig,
        analysis: &Analysis,
        target: Option<HypothesisId>,
    ) -> ChallengesOutcome {
        let targets: Vec<&Hypothesis> = match target {
            Some(id) => analysis.hypothesis_by_id(id).into_iter().collect(),
            None => analysis.hypotheses.iter().collect(),
        };
        if targets.is_empty() {
            return ChallengesOutcome::failure(AdvisorError::NoHypotheses.to_string());
        }

        let mut msg = format!(
            "Focus question: {}\n\nHypotheses to challenge:\n",
            analysis.focus_question
        );
        for h in &targets {
            let _ = writeln!(msg, "- {}: {}", h.label, h.description);
        }

        let result = self.run(config, TaskKind::DevilsAdvocate, msg).await;
        if !result.success {
            return ChallengesOutcome::failure(
                result
                    .error
                    .unwrap_or_else(|| "completion failed".to_string()),
            );
        }
        match challenges::extract(&result.content, analysis) {
            Ok(challenges) => ChallengesOutcome::ok(challenges),
            Err(e) => ChallengesOutcome::failure(e.to_string()),
        }
    }
}
