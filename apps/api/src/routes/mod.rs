pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::explanation::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/matches/explain", post(handlers::handle_explain))
        .route(
            "/api/v1/matches/explain/text",
            post(handlers::handle_explain_text),
        )
        .route(
            "/api/v1/matches/explain/batch",
            post(handlers::handle_explain_batch),
        )
        .fallback(not_found)
        .with_state(state)
}
