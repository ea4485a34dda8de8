//! Repository for `items.json` and the item image directory.

use std::collections::HashSet;

use glossary_core::types::new_record_id;
use glossary_core::validation::{require_non_empty, trimmed_or_empty};

use crate::assets::StagedImage;
use crate::error::DbError;
use crate::models::item::{CreateItem, ImageUpload, Item, ItemDetail, UpdateItem};
use crate::repositories::SuggestionRepo;
use crate::Catalog;

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// List items, optionally filtered by a case-insensitive substring.
    ///
    /// An item matches when its name contains the filter or any of its
    /// suggestions' `suggested_name` does. Suggestions are read fresh on
    /// every call.
    pub async fn list(catalog: &Catalog, filter: Option<&str>) -> Result<Vec<Item>, DbError> {
        let mut items = catalog.items().load().await?;

        let needle = filter.map(|q| q.trim().to_lowercase()).unwrap_or_default();
        if !needle.is_empty() {
            let suggestions = catalog.suggestions().load().await?;
            let matched_by_suggestion: HashSet<&str> = suggestions
                .iter()
                .filter(|s| s.suggested_name.to_lowercase().contains(&needle))
                .map(|s| s.item_id.as_str())
                .collect();

            items.retain(|item| {
                item.name.to_lowercase().contains(&needle)
                    || matched_by_suggestion.contains(item.id.as_str())
            });
        }

        let mut resolved = Vec::with_capacity(items.len());
        for item in items {
            resolved.push(resolve_image(catalog, item).await);
        }
        Ok(resolved)
    }

    /// Find an item by id, together with its suggestions.
    pub async fn find_by_id(catalog: &Catalog, id: &str) -> Result<Option<ItemDetail>, DbError> {
        let found = catalog
            .items()
            .load()
            .await?
            .into_iter()
            .find(|item| item.id == id);
        let Some(item) = found else {
            return Ok(None);
        };

        let item = resolve_image(catalog, item).await;
        let suggestions = SuggestionRepo::list_for_item(catalog, id).await?;
        Ok(Some(ItemDetail { item, suggestions }))
    }

    /// Create an item, storing `image` first when it has an allowed extension.
    ///
    /// The image is staged before the items lock is taken and kept only once
    /// the record is saved.
    pub async fn create(
        catalog: &Catalog,
        input: &CreateItem,
        image: Option<&ImageUpload>,
    ) -> Result<Item, DbError> {
        let name = require_non_empty("name", &input.name)?;
        let staged = stage(catalog, image).await?;

        let guard = catalog.items().lock().await;
        let mut items = guard.load().await?;

        let mut id = new_record_id();
        while items.iter().any(|item| item.id == id) {
            id = new_record_id();
        }

        let item = Item {
            id,
            name,
            description: trimmed_or_empty(input.description.as_deref()),
            shipping_method: trimmed_or_empty(input.shipping_method.as_deref()),
            box_quantity: trimmed_or_empty(input.box_quantity.as_deref()),
            image_file: staged.as_ref().map(|image| image.name().to_string()),
        };
        items.push(item.clone());
        guard.save(&items).await?;

        if let Some(image) = staged {
            image.commit();
        }
        Ok(item)
    }

    /// Apply a partial update. Returns `None` if the item does not exist.
    ///
    /// A new image replaces the old one; the old file is removed only after
    /// the updated record has been saved.
    pub async fn update(
        catalog: &Catalog,
        id: &str,
        input: &UpdateItem,
        image: Option<&ImageUpload>,
    ) -> Result<Option<Item>, DbError> {
        let name = input
            .name
            .as_deref()
            .map(|name| require_non_empty("name", name))
            .transpose()?;

        let guard = catalog.items().lock().await;
        let mut items = guard.load().await?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        if let Some(name) = name {
            item.name = name;
        }
        if let Some(description) = &input.description {
            item.description = description.trim().to_string();
        }
        if let Some(shipping_method) = &input.shipping_method {
            item.shipping_method = shipping_method.trim().to_string();
        }
        if let Some(box_quantity) = &input.box_quantity {
            item.box_quantity = box_quantity.trim().to_string();
        }

        let staged = stage(catalog, image).await?;
        let previous = match &staged {
            Some(image) => item.image_file.replace(image.name().to_string()),
            None => None,
        };
        let updated = item.clone();

        guard.save(&items).await?;
        drop(guard);

        let current = staged.map(StagedImage::commit);
        if let (Some(previous), Some(current)) = (previous, current) {
            if let Err(err) = catalog.images().replace(&previous, &current).await {
                tracing::warn!(item_id = %id, image_file = %previous, error = %err, "Failed to remove replaced image");
            }
        }

        Ok(Some(updated))
    }

    /// Delete an item, its suggestions and its image. Returns `false` if absent.
    ///
    /// Suggestions are removed before the item while the items lock is held,
    /// so an interrupted delete never leaves suggestions pointing at a
    /// missing item. If the items save then fails, the removed suggestions
    /// are written back before the error is returned.
    pub async fn delete(catalog: &Catalog, id: &str) -> Result<bool, DbError> {
        let guard = catalog.items().lock().await;
        let mut items = guard.load().await?;
        let Some(position) = items.iter().position(|item| item.id == id) else {
            return Ok(false);
        };

        let removed_suggestions = SuggestionRepo::delete_all_for_item(catalog, id).await?;
        let removed_count = removed_suggestions.len();

        let item = items.remove(position);
        if let Err(err) = guard.save(&items).await {
            SuggestionRepo::restore(catalog, removed_suggestions).await;
            return Err(err.into());
        }
        drop(guard);

        if let Some(image_file) = &item.image_file {
            if let Err(err) = catalog.images().delete(image_file).await {
                tracing::warn!(item_id = %id, image_file = %image_file, error = %err, "Failed to delete item image");
            }
        }

        tracing::debug!(item_id = %id, removed_suggestions = removed_count, "Item deleted with cascade");
        Ok(true)
    }
}

/// Stage an upload, if any. Unsupported extensions stage nothing.
async fn stage(
    catalog: &Catalog,
    image: Option<&ImageUpload>,
) -> Result<Option<StagedImage>, DbError> {
    match image {
        Some(upload) => Ok(catalog
            .images()
            .stage(&upload.bytes, &upload.file_name)
            .await?),
        None => Ok(None),
    }
}

/// Drop `image_file` when the referenced file is gone.
async fn resolve_image(catalog: &Catalog, mut item: Item) -> Item {
    if let Some(name) = &item.image_file {
        if !catalog.images().exists(name).await {
            item.image_file = None;
        }
    }
    item
}
