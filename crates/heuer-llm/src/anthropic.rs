//! Anthropic-style wire format
//!
//! Pure request/response translation for `/messages` endpoints. The first
//! system message is lifted into the dedicated `system` field; everything
//! else goes out as the conversation array. Authentication uses `x-api-key`
//! plus a version header, never `Authorization`.

use crate::message::{ChatMessage, Role};
use crate::{LlmError, ProviderConfig, MAX_COMPLETION_TOKENS};
use serde::{Deserialize, Serialize};

/// Value of the required `anthropic-version` header
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Request body for the messages API
#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<&'a ChatMessage>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Endpoint URL for a given base endpoint
pub fn request_url(config: &ProviderConfig) -> String {
    format!("{}/messages", config.endpoint.trim_end_matches('/'))
}

/// Build the request body.
///
/// The first message with role `system` (if any) becomes the `system`
/// field; the conversation array never carries a system role.
pub fn request_body<'a>(
    config: &'a ProviderConfig,
    messages: &'a [ChatMessage],
) -> MessagesRequest<'a> {
    let system = messages
        .iter()
        .find(|m| m.role == Role::System)
        .map(|m| m.content.as_str());
    let conversation = messages
        .iter()
        .filter(|m| m.role != Role::System)
        .collect();

    MessagesRequest {
        model: &config.model,
        max_tokens: MAX_COMPLETION_TOKENS,
        system,
        messages: conversation,
    }
}

/// Decode the completion text from a raw response body.
///
/// Takes the first content block's text, defaulting to the empty string
/// when no block or no text is present.
pub fn extract_content(body: &str) -> Result<String, LlmError> {
    let response: MessagesResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
    Ok(response
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .unwrap_or_default())
}
