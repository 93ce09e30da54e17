//! Prompt record, navigation, and graph routes.
//!
//! ERROR HANDLING
//! ==============
//! Each failure is logged and answered with a small JSON body. Not-found is a
//! 404; any store failure is a 500. Nothing is retried here: the client's
//! next/random actions are the retry path.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::layout::graph::GraphOutput;
use crate::layout::layout;
use crate::prompt::store::StoreError;
use crate::prompt::{Language, PromptRecord};
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

/// JSON error response: `{ "<field>": "<message>" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    field: &'static str,
    message: &'static str,
}

impl ApiError {
    const fn new(status: StatusCode, field: &'static str, message: &'static str) -> Self {
        Self { status, field, message }
    }

    const PROMPT_NOT_FOUND: Self = Self::new(StatusCode::NOT_FOUND, "error", "Prompt not found");
    const PROMPT_FAILED: Self = Self::new(StatusCode::INTERNAL_SERVER_ERROR, "error", "Internal Server Error");
    const NO_MORE_PROMPTS: Self = Self::new(StatusCode::NOT_FOUND, "message", "No more prompts available");
    const NEXT_FAILED: Self = Self::new(StatusCode::INTERNAL_SERVER_ERROR, "message", "Internal Server Error");
    const RANDOM_FAILED: Self =
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "error", "Failed to fetch random prompt");
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::Map::new();
        body.insert(self.field.to_owned(), self.message.into());
        (self.status, Json(serde_json::Value::Object(body))).into_response()
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextIdResponse {
    #[serde(rename = "nextId")]
    pub next_id: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RandomIdResponse {
    pub id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct GraphQuery {
    #[serde(default)]
    pub lang: Language,
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn fetch_record(state: &AppState, id: i64) -> Result<PromptRecord, ApiError> {
    match state.store.get_by_id(id).await {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(ApiError::PROMPT_NOT_FOUND),
        Err(StoreError::Database(e)) => {
            error!(error = %e, id, "failed to fetch prompt");
            Err(ApiError::PROMPT_FAILED)
        }
    }
}

/// `GET /api/prompt/:id` — the raw prompt record.
pub async fn get_prompt(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<PromptRecord>, ApiError> {
    fetch_record(&state, id).await.map(Json)
}

/// `GET /api/prompt/:id/next` — next id with a structure.
pub async fn next_prompt_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<NextIdResponse>, ApiError> {
    match state.store.next_id(id).await {
        Ok(Some(next_id)) => Ok(Json(NextIdResponse { next_id })),
        Ok(None) => Err(ApiError::NO_MORE_PROMPTS),
        Err(e) => {
            error!(error = %e, id, "failed to find next prompt");
            Err(ApiError::NEXT_FAILED)
        }
    }
}

/// `GET /api/prompt/random` — a random id with a usable structure.
pub async fn random_prompt_id(State(state): State<AppState>) -> Result<Json<RandomIdResponse>, ApiError> {
    match state.store.random_id().await {
        Ok(Some(id)) => Ok(Json(RandomIdResponse { id })),
        Ok(None) => Err(ApiError::NO_MORE_PROMPTS),
        Err(e) => {
            error!(error = %e, "failed to fetch random prompt");
            Err(ApiError::RANDOM_FAILED)
        }
    }
}

/// `GET /api/prompt/:id/graph?lang=en|cn` — laid-out nodes and edges.
pub async fn prompt_graph(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<GraphQuery>,
) -> Result<Json<GraphOutput>, ApiError> {
    let record = fetch_record(&state, id).await?;
    let structure = record.decoded_structure();
    Ok(Json(layout(&record, &structure, query.lang, &state.labels, &state.layout)))
}

#[cfg(test)]
#[path = "prompts_test.rs"]
mod tests;
