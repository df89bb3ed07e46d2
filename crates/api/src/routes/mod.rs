pub mod health;
pub mod strands;
pub mod threads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /threads                       list, create
/// /threads/{id}                  get
///
/// /strands                       create
/// /strands/thread/{thread_id}    list by thread (oldest first)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/threads", threads::router())
        .nest("/strands", strands::router())
}
