//! Revision relay endpoint.
//!
//! DESIGN
//! ======
//! `POST` body is `{ messages, mode }`. The handler prepends the mode's system
//! prompt, opens one streamed upstream completion, and on success returns the
//! upstream body untouched as `text/event-stream`. The body is never parsed
//! or re-chunked here; the consumer owns decoding.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use frames::ChatRequest;
use futures::TryStreamExt;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::{ErrorCode, RelayError};
use crate::prompts::system_prompt;
use crate::state::AppState;

pub async fn relay(State(state): State<AppState>, body: Result<Bytes, BytesRejection>) -> Result<Response, RelayError> {
    let request_id = Uuid::new_v4();
    let result = match body {
        Ok(body) => forward(&state, request_id, &body).await,
        Err(rejection) => Err(rejected_body(&rejection, state.body_limit())),
    };
    result.inspect_err(|e| log_failure(request_id, e))
}

/// Body extraction failures answer in the same `{ "error" }` shape as the rest.
fn rejected_body(rejection: &BytesRejection, limit: usize) -> RelayError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        RelayError::TooLarge(limit)
    } else {
        RelayError::InvalidRequest(rejection.body_text())
    }
}

async fn forward(state: &AppState, request_id: Uuid, body: &[u8]) -> Result<Response, RelayError> {
    let request: ChatRequest =
        serde_json::from_slice(body).map_err(|e| RelayError::InvalidRequest(e.to_string()))?;
    let llm = state
        .llm()
        .map_err(|e| RelayError::ConfigMissing(e.to_string()))?;

    info!(
        %request_id,
        mode = %request.mode,
        messages = request.messages.len(),
        model = llm.model(),
        "relay: forwarding request"
    );

    let upstream = llm
        .stream_chat(system_prompt(request.mode), &request.messages)
        .await?;
    let stream = upstream
        .bytes_stream()
        .inspect_err(move |e| warn!(%request_id, error = %e, "relay: upstream stream interrupted"));

    Ok(([(header::CONTENT_TYPE, "text/event-stream")], Body::from_stream(stream)).into_response())
}

fn log_failure(request_id: Uuid, e: &RelayError) {
    let code = e.error_code();
    let retryable = e.retryable();
    match e {
        RelayError::Upstream { status, body } => {
            error!(%request_id, code, retryable, status, body = %body, "relay: upstream error");
        }
        RelayError::ConfigMissing(_) | RelayError::Transport(_) => {
            error!(%request_id, code, retryable, error = %e, "relay: request failed");
        }
        RelayError::InvalidRequest(_)
        | RelayError::TooLarge(_)
        | RelayError::RateLimited
        | RelayError::CreditsExhausted => {
            warn!(%request_id, code, retryable, error = %e, "relay: request rejected");
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
