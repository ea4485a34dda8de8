pub mod health;
pub mod images;
pub mod items;
pub mod suggestions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                 list (?q=), create (multipart)
/// /items/{id}            get, update (multipart), delete
///
/// /suggestions           create (JSON or form)
/// /suggestions/{id}      delete (idempotent)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/suggestions", suggestions::router())
}
