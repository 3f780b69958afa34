//! OpenAI-compatible streaming chat-completions client.
//!
//! Only `/chat/completions` with `stream: true` is used. A success response is
//! handed back unread so the caller can forward its body as-is; failure
//! statuses are classified here.

use std::time::Duration;

use frames::{Message, Role};

use super::types::{LlmError, StreamRequest, WireMessage};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(api_key: String, base_url: String, connect_timeout: Duration) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// Start a streamed completion. The system prompt is sent first, followed
    /// by `messages` in their original order.
    ///
    /// # Errors
    ///
    /// - [`LlmError::ApiRequest`] when no response arrives
    /// - [`LlmError::RateLimited`] for 429, [`LlmError::CreditsExhausted`] for 402
    /// - [`LlmError::ApiResponse`] with the upstream body for any other failure
    pub async fn stream_chat(
        &self,
        model: &str,
        system: &str,
        messages: &[Message],
    ) -> Result<reqwest::Response, LlmError> {
        let msgs = build_messages(system, messages);
        let body = StreamRequest { model, messages: &msgs, stream: true };
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status.as_u16() {
            429 => Err(LlmError::RateLimited),
            402 => Err(LlmError::CreditsExhausted),
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
                Err(LlmError::ApiResponse { status, body })
            }
        }
    }
}

fn build_messages<'a>(system: &'a str, messages: &'a [Message]) -> Vec<WireMessage<'a>> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    out.push(WireMessage { role: Role::System, content: system });
    out.extend(messages.iter().map(|m| WireMessage { role: m.role, content: &m.content }));
    out
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
