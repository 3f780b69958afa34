//! Relay error surface.
//!
//! Every failure the relay reports becomes a JSON `{ "error": ... }` body with
//! a status the consumer can branch on: 429 rate limit, 402 credits, 400 bad
//! input, 413 oversized body, 500 everything else. Upstream detail stays in the logs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use frames::ErrorBody;

use crate::llm::types::LlmError;

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";
pub const CREDITS_MESSAGE: &str = "AI credits depleted. Please add more credits.";
pub const UPSTREAM_MESSAGE: &str = "AI service error";

/// Grepable error code and retryable flag for structured error logs.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid request body: {0}")]
    InvalidRequest(String),
    #[error("request body exceeds {0} bytes")]
    TooLarge(usize),
    #[error("{0}")]
    ConfigMissing(String),
    #[error("{}", RATE_LIMIT_MESSAGE)]
    RateLimited,
    #[error("{}", CREDITS_MESSAGE)]
    CreditsExhausted,
    #[error("upstream returned status {status}")]
    Upstream { status: u16, body: String },
    #[error("{0}")]
    Transport(String),
}

impl ErrorCode for RelayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "E_INVALID_REQUEST",
            Self::TooLarge(_) => "E_TOO_LARGE",
            Self::ConfigMissing(_) => "E_CONFIG_MISSING",
            Self::RateLimited => "E_RATE_LIMITED",
            Self::CreditsExhausted => "E_CREDITS_EXHAUSTED",
            Self::Upstream { .. } => "E_UPSTREAM",
            Self::Transport(_) => "E_TRANSPORT",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Transport(_) | Self::Upstream { status: 500..=599, .. })
    }
}

impl RelayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::CreditsExhausted => StatusCode::PAYMENT_REQUIRED,
            Self::ConfigMissing(_) | Self::Upstream { .. } | Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Upstream { .. } => UPSTREAM_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<LlmError> for RelayError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::RateLimited => Self::RateLimited,
            LlmError::CreditsExhausted => Self::CreditsExhausted,
            LlmError::ApiResponse { status, body } => Self::Upstream { status, body },
            LlmError::ApiRequest(msg) => Self::Transport(msg),
            LlmError::MissingApiKey { .. } | LlmError::ConfigParse(_) | LlmError::HttpClientBuild(_) => {
                Self::ConfigMissing(e.to_string())
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
