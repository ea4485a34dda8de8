use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::suggestions;
use crate::state::AppState;

/// Suggestion routes mounted at `/suggestions`.
///
/// ```text
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(suggestions::create))
        .route("/{id}", delete(suggestions::delete))
}
