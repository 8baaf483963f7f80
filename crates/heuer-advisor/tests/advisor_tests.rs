//! Integration tests for the advisor over a mock completion backend

use heuer_advisor::Advisor;
use heuer_domain::{
    Analysis, Evidence, EvidenceType, Hypothesis, HypothesisId, Milestone, RatingValue,
    Reliability,
};
use heuer_llm::{MockCompleter, ProviderConfig, Role};

fn config() -> ProviderConfig {
    ProviderConfig::openai_compatible("http://localhost:11434/v1", "test-model")
}

fn sample_analysis() -> Analysis {
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

#[tokio::test]
async fn test_suggest_hypotheses_composes_context() {
    let mock = MockCompleter::new("1. A contractor leaked it");
    let advisor = Advisor::new(mock.clone());
    let analysis = sample_analysis();

    let result = advisor.suggest_hypotheses(&config(), &analysis).await;
    assert!(result.success);

    let request = mock.last_request();
    assert_eq!(request[0].role, Role::System);
    assert_eq!(request[1].role, Role::User);
    assert!(request[1].content.contains("Who leaked the memo?"));
    assert!(request[1].content.contains("- An insider leaked it"));
    assert!(request[1].content.contains("- It was obtained by intrusion"));
}

#[tokio::test]
async fn test_insights_render_matrix_with_dash_for_missing() {
    let mut analysis = sample_analysis();
    let e = analysis.evidence[0].id;
    let h1 = analysis.hypotheses[0].id;
    analysis.set_rating(e, h1, RatingValue::VeryConsistent);

    let mock = MockCompleter::new("looks thin");
    let advisor = Advisor::new(mock.clone());
    advisor.analysis_insights(&config(), &analysis).await;

    let user = &mock.last_request()[1].content;
    assert!(user.contains("E1: H1:CC, H2:-"));
    assert!(user.contains("type: document"));
    assert!(user.contains("reliability: medium"));
}

#[tokio::test]
async fn test_milestones_render_dangling_reference_as_question_mark() {
    let mut analysis = sample_analysis();
    analysis
        .milestones
        .push(Milestone::new(HypothesisId::new(), "Orphaned indicator"));

    let mock = MockCompleter::new("1. H1: watch for a second memo");
    let advisor = Advisor::new(mock.clone());
    advisor.suggest_milestones(&config(), &analysis).await;

    let user = &mock.last_request()[1].content;
    assert!(user.contains("- ?: Orphaned indicator"));
}

#[tokio::test]
async fn test_suggest_ratings_round_trip() {
    let mock = MockCompleter::new("H1: CC - strong support\nH2: II - contradicted");
    let advisor = Advisor::new(mock);
    let analysis = sample_analysis();

    let outcome = advisor
        .suggest_ratings(&config(), &analysis, &analysis.evidence[0])
        .await;
    assert!(outcome.success);
    assert!(outcome.error.is_none());
    assert_eq!(outcome.suggestions.len(), 2);
    assert_eq!(outcome.suggestions[0].hypothesis_label, "H1");
    assert_eq!(outcome.suggestions[0].rating, RatingValue::VeryConsistent);
    assert_eq!(outcome.suggestions[1].rating, RatingValue::VeryInconsistent);
}

#[tokio::test]
async fn test_suggest_ratings_drops_unknown_labels() {
    let mock = MockCompleter::new("H1: C - fits\nH9: C - unknown");
    let advisor = Advisor::new(mock);
    let analysis = sample_analysis();

    let outcome = advisor
        .suggest_ratings(&config(), &analysis, &analysis.evidence[0])
        .await;
    assert!(outcome.success);
    assert_eq!(outcome.suggestions.len(), 1);
}

#[tokio::test]
async fn test_suggest_ratings_forwards_completion_failure() {
    let mut mock = MockCompleter::new("unused");
    mock.fail_with("HTTP 500: upstream fell over");
    let advisor = Advisor::new(mock);
    let analysis = sample_analysis();

    let outcome = advisor
        .suggest_ratings(&config(), &analysis, &analysis.evidence[0])
        .await;
    assert!(!outcome.success);
    assert!(outcome.suggestions.is_empty());
    assert_eq!(outcome.error.as_deref(), Some("HTTP 500: upstream fell over"));
}

#[tokio::test]
async fn test_challenges_fenced_and_bare_parse_identically() {
    let payload = r#"{"challenges":[{"hypothesis_label":"H1","counter_argument":"too neat","disproof_evidence":"alibi","alternative_angle":"accident"}]}"#;
    let analysis = sample_analysis();

    let advisor = Advisor::new(MockCompleter::new(payload));
    let bare = advisor
        .challenge_hypotheses(&config(), &analysis, None)
        .await;

    let fenced = format!("```json\n{}\n```", payload);
    let advisor = Advisor::new(MockCompleter::new(fenced));
    let from_fence = advisor
        .challenge_hypotheses(&config(), &analysis, None)
        .await;

    assert!(bare.success && from_fence.success);
    assert_eq!(bare.challenges, from_fence.challenges);
    assert_eq!(bare.challenges[0].counter_argument, "too neat");
}

#[tokio::test]
async fn test_challenges_malformed_json_reports_parse_failure() {
    let advisor = Advisor::new(MockCompleter::new("I refuse to answer in JSON."));
    let analysis = sample_analysis();

    let outcome = advisor
        .challenge_hypotheses(&config(), &analysis, None)
        .await;
    assert!(!outcome.success);
    assert!(outcome.challenges.is_empty());
    assert_eq!(
        outcome.error.as_deref(),
        Some("Failed to parse AI response as JSON")
    );
}

#[tokio::test]
async fn test_challenge_unknown_target_fails_fast_without_network() {
    let mock = MockCompleter::new("unused");
    let advisor = Advisor::new(mock.clone());
    let analysis = sample_analysis();

    let outcome = advisor
        .challenge_hypotheses(&config(), &analysis, Some(HypothesisId::new()))
        .await;
    assert!(!outcome.success);
    assert!(outcome.challenges.is_empty());
    assert_eq!(outcome.error.as_deref(), Some("No hypotheses to challenge"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_challenge_empty_analysis_fails_fast() {
    let mock = MockCompleter::new("unused");
    let advisor = Advisor::new(mock.clone());
    let analysis = Analysis::new("empty");

    let outcome = advisor
        .challenge_hypotheses(&config(), &analysis, None)
        .await;
    assert_eq!(outcome.error.as_deref(), Some("No hypotheses to challenge"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_challenge_target_restricts_message_to_one_hypothesis() {
    let payload = r#"{"challenges":[{"hypothesis_label":"H2","counter_argument":"x","disproof_evidence":"y","alternative_angle":"z"}]}"#;
    let mock = MockCompleter::new(payload);
    let advisor = Advisor::new(mock.clone());
    let analysis = sample_analysis();
    let h2 = analysis.hypotheses[1].id;

    let outcome = advisor
        .challenge_hypotheses(&config(), &analysis, Some(h2))
        .await;
    assert!(outcome.success);
    assert_eq!(outcome.challenges.len(), 1);

    let user = &mock.last_request()[1].content;
    assert!(user.contains("H2: It was obtained by intrusion"));
    assert!(!user.contains("H1: An insider leaked it"));
}

#[tokio::test]
async fn test_identical_calls_are_independent_and_deterministic() {
    let mock = MockCompleter::new("H1: N - nothing diagnostic");
    let advisor = Advisor::new(mock.clone());
    let analysis = sample_analysis();

    let first = advisor
        .suggest_ratings(&config(), &analysis, &analysis.evidence[0])
        .await;
    let second = advisor
        .suggest_ratings(&config(), &analysis, &analysis.evidence[0])
        .await;

    // no caching: two calls, two requests, identical extraction
    assert_eq!(mock.call_count(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_rating_help_names_both_sides() {
    let mock = MockCompleter::new("Lean C.");
    let advisor = Advisor::new(mock.clone());
    let analysis = sample_analysis();

    advisor
        .rating_help(
            &config(),
            &analysis,
            &analysis.hypotheses[0],
            &analysis.evidence[0],
        )
        .await;

    let user = &mock.last_request()[1].content;
    assert!(user.contains("Hypothesis H1: An insider leaked it"));
    assert!(user.contains("No intrusion alerts were recorded that week"));
}
