//! LLM types: upstream error taxonomy and chat-completions wire shapes.

use frames::Role;
use serde::Serialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The provider credential is absent or empty.
    #[error("{var} is not configured")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed before a response arrived.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider answered 429.
    #[error("rate limit exceeded upstream")]
    RateLimited,

    /// The provider answered 402.
    #[error("upstream credits exhausted")]
    CreditsExhausted,

    /// The provider returned any other non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// CHAT COMPLETIONS WIRE TYPES
// =============================================================================

/// Streaming chat-completions request body.
#[derive(Debug, Serialize)]
pub struct StreamRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [WireMessage<'a>],
    pub stream: bool,
}

/// Borrowed message so forwarding never clones conversation text.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WireMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}
