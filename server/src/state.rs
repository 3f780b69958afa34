//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream LLM client, or the configuration error that prevented
//! building one. A missing credential does not stop the process from serving
//! `/healthz`; every relay request reports it instead.

use std::sync::Arc;

use crate::llm::LlmClient;
use crate::llm::types::LlmError;

/// Largest relay request body accepted by default (16 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    llm: Arc<Result<LlmClient, LlmError>>,
    body_limit: usize,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Result<LlmClient, LlmError>) -> Self {
        Self { llm: Arc::new(llm), body_limit: DEFAULT_BODY_LIMIT }
    }

    #[must_use]
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = bytes;
        self
    }

    /// Maximum relay request body size in bytes.
    #[must_use]
    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    /// The upstream client, or why it is unavailable.
    ///
    /// # Errors
    ///
    /// Returns the startup configuration error.
    pub fn llm(&self) -> Result<&LlmClient, &LlmError> {
        (*self.llm).as_ref()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
