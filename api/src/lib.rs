pub mod chat_payload;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use extractor::CompletionService;
use tower_http::cors::CorsLayer;

pub struct AppState {
    pub completions: CompletionService,
}

/// Build the application router. Split out from `main` so tests can run
/// the real routes against a stubbed upstream.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(handlers::handle_chat))
        .route("/health", get(handlers::handle_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
