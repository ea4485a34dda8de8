//! Repository for `suggestions.json`.

use glossary_core::error::CoreError;
use glossary_core::types::new_record_id;
use glossary_core::validation::require_non_empty;

use crate::error::DbError;
use crate::models::suggestion::{CreateSuggestion, Suggestion};
use crate::Catalog;

/// Provides CRUD operations for suggestions.
pub struct SuggestionRepo;

impl SuggestionRepo {
    /// Create a suggestion for an existing item.
    ///
    /// The items lock is held until the suggestion is saved, so the parent
    /// cannot be deleted in between.
    pub async fn create(
        catalog: &Catalog,
        input: &CreateSuggestion,
    ) -> Result<Suggestion, DbError> {
        let item_id = require_non_empty("itemId", &input.item_id)?;
        let suggested_name = require_non_empty("suggestedName", &input.suggested_name)?;
        let suggester_name = require_non_empty("suggesterName", &input.suggester_name)?;

        let items_guard = catalog.items().lock().await;
        let items = items_guard.load().await?;
        if !items.iter().any(|item| item.id == item_id) {
            return Err(CoreError::NotFound {
                entity: "Item",
                id: item_id,
            }
            .into());
        }

        let guard = catalog.suggestions().lock().await;
        let mut suggestions = guard.load().await?;

        let mut id = new_record_id();
        while suggestions.iter().any(|s| s.id == id) {
            id = new_record_id();
        }

        let suggestion = Suggestion {
            id,
            item_id,
            suggested_name,
            suggester_name,
        };
        suggestions.push(suggestion.clone());
        guard.save(&suggestions).await?;

        Ok(suggestion)
    }

    /// All suggestions attached to `item_id`, in stored order.
    pub async fn list_for_item(
        catalog: &Catalog,
        item_id: &str,
    ) -> Result<Vec<Suggestion>, DbError> {
        Ok(catalog
            .suggestions()
            .load()
            .await?
            .into_iter()
            .filter(|s| s.item_id == item_id)
            .collect())
    }

    /// Delete a suggestion by id. Returns whether anything was removed.
    pub async fn delete(catalog: &Catalog, id: &str) -> Result<bool, DbError> {
        let guard = catalog.suggestions().lock().await;
        let mut suggestions = guard.load().await?;
        let before = suggestions.len();
        suggestions.retain(|s| s.id != id);

        if suggestions.len() == before {
            return Ok(false);
        }
        guard.save(&suggestions).await?;
        Ok(true)
    }

    /// Remove every suggestion for `item_id` and return them. Used by the
    /// item cascade delete, which already holds the items lock.
    pub(crate) async fn delete_all_for_item(
        catalog: &Catalog,
        item_id: &str,
    ) -> Result<Vec<Suggestion>, DbError> {
        let guard = catalog.suggestions().lock().await;
        let suggestions = guard.load().await?;
        let (removed, kept): (Vec<_>, Vec<_>) =
            suggestions.into_iter().partition(|s| s.item_id == item_id);

        if !removed.is_empty() {
            guard.save(&kept).await?;
        }
        Ok(removed)
    }

    /// Append suggestions taken out by [`Self::delete_all_for_item`] after the
    /// cascade could not be completed. Best effort: failures are logged.
    pub(crate) async fn restore(catalog: &Catalog, removed: Vec<Suggestion>) {
        if removed.is_empty() {
            return;
        }
        let count = removed.len();
        let guard = catalog.suggestions().lock().await;
        let restored = match guard.load().await {
            Ok(mut suggestions) => {
                suggestions.extend(removed);
                guard.save(&suggestions).await
            }
            Err(err) => Err(err),
        };

        match restored {
            Ok(()) => tracing::warn!(count, "Restored suggestions after failed item delete"),
            Err(err) => {
                tracing::error!(count, error = %err, "Failed to restore suggestions after failed item delete")
            }
        }
    }
}
