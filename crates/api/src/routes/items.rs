use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes mounted at `/items`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list).post(items::create))
        .route(
            "/{id}",
            get(items::get_by_id)
                .put(items::update)
                .delete(items::delete),
        )
}
