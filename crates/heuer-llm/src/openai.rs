//! OpenAI-compatible wire format
//!
//! Pure request/response translation for `/chat/completions` endpoints.
//! The full message sequence, system message included, goes out verbatim;
//! the completion text comes back at `choices[0].message.content`.

use crate::message::ChatMessage;
use crate::{LlmError, ProviderConfig, MAX_COMPLETION_TOKENS, SAMPLING_TEMPERATURE};
use serde::{Deserialize, Serialize};

/// Request body for the chat completions API
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Endpoint URL for a given base endpoint
pub fn request_url(config: &ProviderConfig) -> String {
    format!("{}/chat/completions", config.endpoint.trim_end_matches('/'))
}

/// Build the request body; message order is preserved exactly
pub fn request_body<'a>(config: &'a ProviderConfig, messages: &'a [ChatMessage]) -> ChatRequest<'a> {
    ChatRequest {
        model: &config.model,
        messages,
        max_tokens: MAX_COMPLETION_TOKENS,
        temperature: SAMPLING_TEMPERATURE,
    }
}

/// Decode the completion text from a raw response body.
///
/// An absent `content` field decodes as the empty string; a body that is
/// not the expected JSON shape is an error.
pub fn extract_content(body: &str) -> Result<String, LlmError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProviderConfig {
        ProviderConfig::openai_compatible("https://api.openai.com/v1", "gpt-4o-mini")
    }

    #[test]
    fn test_request_url_strips_trailing_slash() {
        let mut c = config();
        c.endpoint = "http://localhost:11434/v1/".to_string();
        assert_eq!(request_url(&c), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_body_preserves_message_order() {
        let messages = vec![
            ChatMessage::system("framing"),
            ChatMessage::user("first"),
            ChatMessage::assistant("reply"),
            ChatMessage::user("second"),
        ];
        let body = serde_json::to_value(request_body(&config(), &messages)).unwrap();
        let wire = body["messages"].as_array().unwrap();
        assert_eq!(wire.len(), 4);
        assert_eq!(wire[0]["role"], "system");
        assert_eq!(wire[1]["content"], "first");
        assert_eq!(wire[3]["content"], "second");
        assert_eq!(body["max_tokens"], 4096);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_system_message_goes_out_verbatim() {
        let messages = vec![ChatMessage::system("you are an analyst")];
        let body = serde_json::to_value(request_body(&config(), &messages)).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "you are an analyst");
    }

    #[test]
    fn test_extract_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "hello");
    }

    #[test]
    fn test_extract_content_defaults_to_empty() {
        let body = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "");
        let body = r#"{"choices":[]}"#;
        assert_eq!(extract_content(body).unwrap(), "");
    }

    #[test]
    fn test_extract_content_rejects_garbage() {
        assert!(matches!(
            extract_content("not json"),
            Err(LlmError::InvalidResponse(_))
        ));
    }
}
