mod error;
mod llm;
mod prompts;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "server=info,tower_http=info".into()))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // A missing credential is reported on every relay request, not swallowed.
    let llm = llm::LlmClient::from_env();
    match &llm {
        Ok(client) => tracing::info!(model = client.model(), "LLM client initialized"),
        Err(e) => tracing::warn!(error = %e, "LLM client not configured; relay requests will fail"),
    }

    let body_limit: usize = std::env::var("RELAY_MAX_BODY_BYTES")
        .map_or(Ok(state::DEFAULT_BODY_LIMIT), |raw| raw.parse())
        .expect("invalid RELAY_MAX_BODY_BYTES");

    let state = state::AppState::new(llm).with_body_limit(body_limit);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, path = routes::RELAY_PATH, "revision relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
