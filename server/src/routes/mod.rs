//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One relay endpoint plus a health check. CORS is open to any origin so a
//! browser client on another host can call the relay directly; preflight
//! `OPTIONS` requests are answered by the CORS layer.

pub mod chat;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Method, StatusCode, header};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Path of the relay endpoint.
pub const RELAY_PATH: &str = "/functions/v1/revision-assistant";

pub fn app(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.body_limit());
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route(RELAY_PATH, post(chat::relay).layer(body_limit))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
