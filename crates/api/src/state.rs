use std::sync::Arc;

use glossary_db::Catalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// File-backed catalog storage (items, suggestions, images).
    pub catalog: Arc<Catalog>,
}
