//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?q=` filter for the item list. Blank means "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct ItemListParams {
    pub q: Option<String>,
}
