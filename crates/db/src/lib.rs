//! File-backed storage for the catalog.
//!
//! A [`Catalog`] owns the two record stores (`items.json`,
//! `suggestions.json`) and the image directory under one data root. Build
//! it once at startup with [`open_catalog`] and share it behind an `Arc`;
//! repositories take it by reference.

pub mod assets;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use std::path::PathBuf;

pub use assets::{ImageStore, StagedImage};
pub use error::{DbError, StoreError};
pub use store::{JsonStore, StoreGuard};

use models::item::Item;
use models::suggestion::Suggestion;

/// Items collection file name, relative to the data root.
pub const ITEMS_FILE: &str = "items.json";

/// Suggestions collection file name, relative to the data root.
pub const SUGGESTIONS_FILE: &str = "suggestions.json";

/// Image directory, relative to the data root.
pub const IMAGE_DIR: &str = "Img/Productos";

/// The process-wide handle to all catalog storage.
pub struct Catalog {
    root: PathBuf,
    items: JsonStore<Item>,
    suggestions: JsonStore<Suggestion>,
    images: ImageStore,
}

impl Catalog {
    /// Lay out the catalog under `root` without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            items: JsonStore::new(root.join(ITEMS_FILE)),
            suggestions: JsonStore::new(root.join(SUGGESTIONS_FILE)),
            images: ImageStore::new(root.join(IMAGE_DIR)),
            root,
        }
    }

    pub fn items(&self) -> &JsonStore<Item> {
        &self.items
    }

    pub fn suggestions(&self) -> &JsonStore<Suggestion> {
        &self.suggestions
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }
}

/// Open the catalog at `root`, creating directories and empty store files.
pub async fn open_catalog(root: impl Into<PathBuf>) -> Result<Catalog, StoreError> {
    let catalog = Catalog::new(root);

    catalog.items.ensure_exists().await?;
    catalog.suggestions.ensure_exists().await?;
    catalog.images.ensure_exists().await?;

    tracing::info!(root = %catalog.root.display(), "Catalog opened");
    Ok(catalog)
}

/// Check that the store files and image directory are reachable.
pub async fn health_check(catalog: &Catalog) -> Result<(), StoreError> {
    for path in [
        catalog.items.path(),
        catalog.suggestions.path(),
        catalog.images.dir(),
    ] {
        tokio::fs::metadata(path)
            .await
            .map_err(StoreError::io(path))?;
    }
    Ok(())
}
