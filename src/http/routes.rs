use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Meeting lifecycle
        .route("/start", post(handlers::start_meeting))
        .route("/transcribe", post(handlers::transcribe))
        .route("/end", post(handlers::end_meeting))
        // Questions and history
        .route("/chat", post(handlers::chat))
        .route("/history", get(handlers::get_history))
        .layer(cors)
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
