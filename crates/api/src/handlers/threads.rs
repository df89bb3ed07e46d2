//! Handlers for the `/threads` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yarn_core::thread::{self, CreateThread, Thread};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/threads
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Thread>>> {
    let threads = thread::list(state.store.as_ref()).await?;
    Ok(Json(threads))
}

/// GET /api/threads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Thread>> {
    let thread = thread::get(state.store.as_ref(), &id).await?;
    Ok(Json(thread))
}

/// POST /api/threads
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateThread>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Thread>)> {
    let Json(input) = payload?;
    let thread = thread::create(state.store.as_ref(), input, &state.config.validation).await?;

    tracing::info!(
        thread_id = %thread.id,
        tags = thread.tags.len(),
        "Thread created",
    );

    Ok((StatusCode::CREATED, Json(thread)))
}
