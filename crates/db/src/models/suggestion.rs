//! Suggestion (alternate item name) model and DTOs.

use glossary_core::types::RecordId;
use serde::{Deserialize, Serialize};

/// An entry in `suggestions.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: RecordId,
    pub item_id: RecordId,
    #[serde(default)]
    pub suggested_name: String,
    #[serde(default)]
    pub suggester_name: String,
}

/// Fields for a new suggestion. All three are required (non-empty after trim);
/// missing keys deserialize to `""` so validation reports them uniformly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSuggestion {
    pub item_id: String,
    pub suggested_name: String,
    pub suggester_name: String,
}
