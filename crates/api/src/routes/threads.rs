//! Route definitions for threads.

use axum::routing::get;
use axum::Router;

use crate::handlers::threads;
use crate::state::AppState;

/// Thread routes mounted at `/threads`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(threads::list).post(threads::create))
        .route("/{id}", get(threads::get_by_id))
}
