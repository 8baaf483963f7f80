//! Chat messages and the completion outcome type

use serde::{Deserialize, Serialize};

/// Role of a chat message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Task framing, sent once per conversation
    System,
    /// The analyst's side of the conversation
    User,
    /// The model's side of the conversation
    Assistant,
}

/// One message in a completion request.
///
/// A request is an ordered sequence of these; ordering is significant and
/// preserved verbatim on the OpenAI-compatible path. Serializes as
/// `{"role": ..., "content": ...}`, which both wire formats accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored the message
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Build a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Build a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Build an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Outcome of one completion call, always returned as data.
///
/// Invariant, enforced by the constructors: `success` implies `error` is
/// absent, and failure implies `content` is empty. There is no partial
/// state in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    /// Whether the call produced usable text
    pub success: bool,
    /// The completion text; empty on failure
    pub content: String,
    /// Diagnostic text the caller renders to the analyst; absent on success
    pub error: Option<String>,
}

impl CompletionResult {
    /// A successful completion carrying the model's text
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
            error: None,
        }
    }

    /// A failed completion carrying a diagnostic message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: String::new(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::system("framing");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "framing");
    }

    #[test]
    fn test_result_invariant_ok() {
        let r = CompletionResult::ok("text");
        assert!(r.success);
        assert!(r.error.is_none());
    }

    #[test]
    fn test_result_invariant_failure() {
        let r = CompletionResult::failure("bad");
        assert!(!r.success);
        assert_eq!(r.content, "");
        assert_eq!(r.error.as_deref(), Some("bad"));
    }
}
