//! Handlers for the `/strands` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yarn_core::strand::{self, CreateStrand, Strand};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/strands/thread/{thread_id}
///
/// Returns an empty array, not 404, when the thread has no strands or
/// does not exist.
pub async fn list_for_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> AppResult<Json<Vec<Strand>>> {
    let strands = strand::list_for_thread(state.store.as_ref(), &thread_id).await?;
    Ok(Json(strands))
}

/// POST /api/strands
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateStrand>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Strand>)> {
    let Json(input) = payload?;
    let strand = strand::create(state.store.as_ref(), input, &state.config.validation).await?;

    tracing::info!(
        strand_id = %strand.id,
        thread_id = %strand.thread_id,
        "Strand created",
    );

    Ok((StatusCode::CREATED, Json(strand)))
}
