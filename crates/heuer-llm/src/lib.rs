//! Heuer LLM Completion Layer
//!
//! Provider-agnostic chat completions over pluggable LLM backends.
//!
//! # Architecture
//!
//! Two wire formats hide behind one call signature. The adapter modules
//! (`openai`, `anthropic`) are pure translations between the shared
//! [`ChatMessage`] sequence and each provider's request/response shapes;
//! [`Completions`] owns the single HTTP round trip and turns every failure
//! into data via [`CompletionResult`]. Nothing in this crate retries,
//! caches, or keeps per-session state.
//!
//! # Providers
//!
//! - `openai`: OpenAI-compatible `POST {endpoint}/chat/completions`
//! - `anthropic`: Anthropic-style `POST {endpoint}/messages`
//! - [`MockCompleter`]: deterministic mock for testing, no network
//!
//! # Examples
//!
//! ```no_run
//! use heuer_llm::{ChatCompleter, ChatMessage, Completions, ProviderConfig};
//!
//! # async fn example() {
//! let config = ProviderConfig::openai_compatible("https://api.openai.com/v1", "gpt-4o-mini");
//! let client = Completions::new();
//! let result = client
//!     .complete(&config, &[ChatMessage::user("Say hello")])
//!     .await;
//! if result.success {
//!     println!("{}", result.content);
//! }
//! # }
//! ```

#![warn(missing_docs)]

pub mod anthropic;
mod client;
mod config;
mod message;
pub mod openai;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use client::Completions;
pub use config::{ProviderConfig, ProviderKind};
pub use message::{ChatMessage, CompletionResult, Role};

/// Hard ceiling on completion length, shared by both wire formats
pub const MAX_COMPLETION_TOKENS: u32 = 4096;

/// Sampling temperature sent on the OpenAI-compatible path
pub const SAMPLING_TEMPERATURE: f32 = 0.7;

/// Fixed error text returned when the provider is disabled
pub const NOT_ENABLED_ERROR: &str = "LLM is not enabled";

/// Errors that can occur while performing a completion.
///
/// These stay internal to the crate: the public surface flattens them into
/// [`CompletionResult`] so callers render failures as text, never unwind.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Provider is disabled in configuration
    #[error("{}", NOT_ENABLED_ERROR)]
    Disabled,

    /// Network-level failure before an HTTP status was obtained
    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP status from the provider
    #[error("HTTP {status}: {body}")]
    Protocol {
        /// The HTTP status code
        status: u16,
        /// The response body, verbatim
        body: String,
    },

    /// Provider returned a body the adapter could not decode
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// One chat completion round trip.
///
/// The configuration travels with every call; implementations hold no
/// per-provider session state. [`Completions`] is the HTTP implementation,
/// [`MockCompleter`] the deterministic test double.
pub trait ChatCompleter {
    /// Run one completion and return the outcome as data
    fn complete(
        &self,
        config: &ProviderConfig,
        messages: &[ChatMessage],
    ) -> impl Future<Output = CompletionResult> + Send;
}

/// Mock completer for deterministic testing
///
/// Returns pre-configured responses without making any network calls and
/// counts invocations so tests can assert on call behavior.
///
/// # Examples
///
/// ```
/// use heuer_llm::{ChatCompleter, ChatMessage, MockCompleter, ProviderConfig};
///
/// # async fn example() {
/// let mock = MockCompleter::new("canned reply");
/// let config = ProviderConfig::openai_compatible("http://localhost", "test");
/// let result = mock.complete(&config, &[ChatMessage::user("hi")]).await;
/// assert!(result.success);
/// assert_eq!(result.content, "canned reply");
/// assert_eq!(mock.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockCompleter {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Vec<ChatMessage>>>,
}

impl MockCompleter {
    /// Create a mock returning a fixed response for every call
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response keyed on the content of the last message in a request
    pub fn add_response(&mut self, last_message: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(last_message.into(), response.into());
    }

    /// Make every subsequent call fail with the given error text
    pub fn fail_with(&mut self, error: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(error.into());
    }

    /// Number of times `complete` was invoked
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the invocation counter
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    /// The message sequence of the most recent call
    pub fn last_request(&self) -> Vec<ChatMessage> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Default for MockCompleter {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl ChatCompleter for MockCompleter {
    async fn complete(
        &self,
        _config: &ProviderConfig,
        messages: &[ChatMessage],
    ) -> CompletionResult {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = messages.to_vec();

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return CompletionResult::failure(error);
        }

        let responses = self.responses.lock().unwrap();
        if let Some(last) = messages.last() {
            if let Some(response) = responses.get(&last.content) {
                return CompletionResult::ok(response.clone());
            }
        }

        CompletionResult::ok(self.default_response.clone())
    }
}
