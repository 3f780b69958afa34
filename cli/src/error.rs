//! Exchange failures and the notice each one raises.

use frames::ErrorBody;

use crate::render::Notice;

/// Failure of one chat exchange with the relay.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("an exchange is already in progress")]
    Busy,
    #[error("message is empty")]
    EmptyInput,
    #[error("relay rate limit: {message}")]
    RateLimited { message: String },
    #[error("relay credits exhausted: {message}")]
    CreditsExhausted { message: String },
    #[error("relay returned status {status}: {message}")]
    Relay { status: u16, message: String },
    #[error("request to relay failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response stream failed: {0}")]
    Stream(String),
}

impl ExchangeError {
    /// Classify a non-success relay response. `body` is the raw response text;
    /// the `{ "error": ... }` message is used when present.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_owned());
        match status {
            429 => Self::RateLimited { message },
            402 => Self::CreditsExhausted { message },
            status => Self::Relay { status, message },
        }
    }

    /// User-facing notice for this failure. Rejected sends get none; nothing
    /// was sent, so there is nothing to report.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Busy | Self::EmptyInput => None,
            Self::RateLimited { .. } => Some(Notice::RateLimit),
            Self::CreditsExhausted { .. } => Some(Notice::CreditsRequired),
            Self::Relay { .. } | Self::Transport(_) | Self::Stream(_) => Some(Notice::Failed),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
