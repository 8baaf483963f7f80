//! Completion client - one HTTP round trip per call

use crate::message::{ChatMessage, CompletionResult};
use crate::{anthropic, openai, ChatCompleter, LlmError, ProviderConfig, ProviderKind};
use crate::NOT_ENABLED_ERROR;
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for one completion request (120 seconds; long-form
/// analytic completions routinely run past 30)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Diagnostic shown when the endpoint could not be reached at all.
///
/// Network-level failures against local endpoints are almost always either
/// a server that is not running or a cross-origin block, so the raw
/// transport message alone is unhelpful to an analyst.
pub const NETWORK_HINT: &str = "Could not reach the LLM endpoint. Check that \
the server is running and that it allows cross-origin (CORS) requests if \
the UI is browser-hosted.";

/// HTTP chat completion client.
///
/// Stateless apart from the connection pool: the provider configuration
/// travels with every call, exactly one request goes out per call, and no
/// retry or caching happens at this layer.
#[derive(Debug, Clone)]
pub struct Completions {
    client: reqwest::Client,
}

impl Completions {
    /// Create a client with the default request timeout
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a specific request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("default reqwest client configuration is valid");
        Self { client }
    }

    async fn dispatch(
        &self,
        config: &ProviderConfig,
        messages: &[ChatMessage],
    ) -> Result<String, LlmError> {
        if !config.enabled {
            return Err(LlmError::Disabled);
        }

        let request = match config.provider {
            ProviderKind::Anthropic => {
                let mut request = self
                    .client
                    .post(anthropic::request_url(config))
                    .header("anthropic-version", anthropic::ANTHROPIC_VERSION)
                    .json(&anthropic::request_body(config, messages));
                if let Some(key) = &config.api_key {
                    request = request.header("x-api-key", key);
                }
                request
            }
            ProviderKind::OpenaiCompatible => {
                let mut request = self
                    .client
                    .post(openai::request_url(config))
                    .json(&openai::request_body(config, messages));
                if let Some(key) = &config.api_key {
                    request = request.bearer_auth(key);
                }
                request
            }
        };

        debug!(
            provider = ?config.provider,
            model = %config.model,
            messages = messages.len(),
            "sending completion request"
        );

        let response = request
            .send()
            .await
            .map_err(|e| LlmError::Transport(classify_transport(&e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(LlmError::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        let content = match config.provider {
            ProviderKind::Anthropic => anthropic::extract_content(&body)?,
            ProviderKind::OpenaiCompatible => openai::extract_content(&body)?,
        };

        debug!(chars = content.len(), "completion received");
        Ok(content)
    }
}

impl Default for Completions {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatCompleter for Completions {
    async fn complete(
        &self,
        config: &ProviderConfig,
        messages: &[ChatMessage],
    ) -> CompletionResult {
        match self.dispatch(config, messages).await {
            Ok(content) => CompletionResult::ok(content),
            Err(LlmError::Disabled) => CompletionResult::failure(NOT_ENABLED_ERROR),
            Err(e) => {
                warn!(error = %e, "completion failed");
                CompletionResult::failure(e.to_string())
            }
        }
    }
}

/// Map a transport error message to something an analyst can act on.
///
/// Connection-level failures get the local-server/CORS hint; anything else
/// passes through verbatim.
fn classify_transport(message: &str) -> String {
    let lowered = message.to_lowercase();
    let network_level = lowered.contains("failed to fetch")
        || lowered.contains("error sending request")
        || lowered.contains("connection refused")
        || lowered.contains("dns error");
    if network_level {
        NETWORK_HINT.to_string()
    } else {
        message.to_string()
    }
}
