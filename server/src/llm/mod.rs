//! LLM: upstream provider adapter for the revision relay.
//!
//! DESIGN
//! ======
//! The provider is any OpenAI-compatible gateway reached over
//! `/chat/completions`. Configuration comes from environment variables.
//! `LlmClient` pins the model so handlers only supply a prompt and history.

pub mod config;
pub mod openai;
pub mod types;

use std::time::Duration;

use config::LlmConfig;
use frames::Message;
use types::LlmError;

/// Configured client for the upstream chat provider.
pub struct LlmClient {
    inner: openai::OpenAiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables. See [`LlmConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = openai::OpenAiClient::new(
            config.api_key,
            config.base_url,
            Duration::from_secs(config.connect_timeout_secs),
        )?;
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name (e.g. `"google/gemini-2.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Open a streamed completion for `system` + `messages`.
    ///
    /// # Errors
    ///
    /// See [`openai::OpenAiClient::stream_chat`].
    pub async fn stream_chat(&self, system: &str, messages: &[Message]) -> Result<reqwest::Response, LlmError> {
        self.inner.stream_chat(&self.model, system, messages).await
    }
}
