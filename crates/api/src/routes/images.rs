use axum::routing::get;
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Image serving, mounted at the root.
///
/// ```text
/// GET /product-img/{filename}  -> serve
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/product-img/{filename}", get(images::serve))
}
