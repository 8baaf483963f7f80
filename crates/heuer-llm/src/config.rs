//! Provider configuration
//!
//! The configuration travels with every call; nothing here is cached or
//! held as session state. The UI typically loads it from a TOML fragment.

use serde::{Deserialize, Serialize};

/// Which wire format the endpoint speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// OpenAI-style `/chat/completions` endpoints (OpenAI, Ollama, LM
    /// Studio, vLLM, most local servers)
    OpenaiCompatible,
    /// Anthropic-style `/messages` endpoints
    Anthropic,
}

/// Configuration for one LLM backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// When false, no network call is ever attempted
    #[serde(default)]
    pub enabled: bool,

    /// Wire format of the endpoint
    pub provider: ProviderKind,

    /// Base URL, e.g. `https://api.openai.com/v1`
    pub endpoint: String,

    /// API key; omitted for keyless local servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name the endpoint should serve
    pub model: String,
}

impl ProviderConfig {
    /// Convenience constructor for an enabled OpenAI-compatible backend
    pub fn openai_compatible(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            enabled: true,
            provider: ProviderKind::OpenaiCompatible,
            endpoint: endpoint.into(),
            api_key: None,
            model: model.into(),
        }
    }

    /// Convenience constructor for an enabled Anthropic-style backend
    pub fn anthropic(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            enabled: true,
            provider: ProviderKind::Anthropic,
            endpoint: endpoint.into(),
            api_key: None,
            model: model.into(),
        }
    }

    /// Attach an API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Parse a configuration from a TOML fragment
    ///
    /// # Examples
    ///
    /// ```
    /// use heuer_llm::{ProviderConfig, ProviderKind};
    ///
    /// let config = ProviderConfig::from_toml_str(r#"
    ///     enabled = true
    ///     provider = "anthropic"
    ///     endpoint = "https://api.anthropic.com/v1"
    ///     model = "claude-sonnet-4"
    /// "#).unwrap();
    /// assert_eq!(config.provider, ProviderKind::Anthropic);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, String> {
        toml::from_str(s).map_err(|e| format!("Invalid provider config: {}", e))
    }

    /// Validate fields a request cannot be built without
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let config = ProviderConfig::openai_compatible("http://localhost:11434/v1", "llama3")
            .with_api_key("sk-test");
        let toml_str = toml::to_string(&config).unwrap();
        let parsed = ProviderConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_enabled_defaults_to_false() {
        let config = ProviderConfig::from_toml_str(
            r#"
            provider = "openai-compatible"
            endpoint = "http://localhost:1234/v1"
            model = "local"
            "#,
        )
        .unwrap();
        assert!(!config.enabled);
    }

    #[test]
    fn test_kind_tags() {
        let json = serde_json::to_value(ProviderKind::OpenaiCompatible).unwrap();
        assert_eq!(json, "openai-compatible");
        let json = serde_json::to_value(ProviderKind::Anthropic).unwrap();
        assert_eq!(json, "anthropic");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut config = ProviderConfig::openai_compatible("", "model");
        assert!(config.validate().is_err());
        config.endpoint = "http://localhost".to_string();
        config.model = "  ".to_string();
        assert!(config.validate().is_err());
        config.model = "model".to_string();
        assert!(config.validate().is_ok());
    }
}
