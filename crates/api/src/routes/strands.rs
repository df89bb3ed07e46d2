//! Route definitions for strands.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::strands;
use crate::state::AppState;

/// Strand routes mounted at `/strands`.
///
/// ```text
/// POST   /                       -> create
/// GET    /thread/{thread_id}     -> list_for_thread
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(strands::create))
        .route("/thread/{thread_id}", get(strands::list_for_thread))
}
