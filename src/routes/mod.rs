//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the prompt JSON API under `/api/prompt` plus a health probe. All
//! routes share one `AppState`; CORS is open because the graph widget may be
//! served from a different origin.

pub mod prompts;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/prompt/random", get(prompts::random_prompt_id))
        .route("/api/prompt/{id}", get(prompts::get_prompt))
        .route("/api/prompt/{id}/next", get(prompts::next_prompt_id))
        .route("/api/prompt/{id}/graph", get(prompts::prompt_graph))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
