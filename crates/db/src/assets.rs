//! Image asset files backing `Item::image_file`.
//!
//! Every path handed to the filesystem is the image directory joined with a
//! single sanitized leaf name; see [`glossary_core::naming`].

use std::path::{Path, PathBuf};

use glossary_core::naming::{served_file_name, stored_image_name};

use crate::error::StoreError;

/// Manages the directory that holds uploaded item images.
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(StoreError::io(&self.dir))
    }

    /// Resolve `name` to a path inside the image directory, or `None` if unsafe.
    fn path_for(&self, name: &str) -> Option<PathBuf> {
        served_file_name(name).map(|leaf| self.dir.join(leaf))
    }

    /// Write an upload under a generated name.
    ///
    /// Returns `Ok(None)` when `original_filename` has no allowed image
    /// extension; the caller carries on without an image. The file stays
    /// only if the returned [`StagedImage`] is committed.
    pub async fn stage(
        &self,
        bytes: &[u8],
        original_filename: &str,
    ) -> Result<Option<StagedImage>, StoreError> {
        let Some(name) = stored_image_name(original_filename) else {
            tracing::debug!(original_filename, "Ignoring upload with unsupported extension");
            return Ok(None);
        };
        let path = self.dir.join(&name);

        if let Err(err) = tokio::fs::write(&path, bytes).await {
            let _ = tokio::fs::remove_file(&path).await;
            return Err(StoreError::Io { path, source: err });
        }

        tracing::debug!(image_file = %name, size = bytes.len(), "Staged image");
        Ok(Some(StagedImage {
            path,
            name,
            committed: false,
        }))
    }

    /// Retire `previous` now that `current` is the committed image.
    ///
    /// Only called after the record referencing `current` has been saved.
    pub async fn replace(&self, previous: &str, current: &str) -> Result<(), StoreError> {
        if previous == current {
            return Ok(());
        }
        self.delete(previous).await
    }

    /// Remove an image. Missing files and unsafe names are not errors.
    pub async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let Some(path) = self.path_for(name) else {
            return Ok(());
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(image_file = %name, "Deleted image");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io { path, source: err }),
        }
    }

    /// Whether `name` refers to an existing file in the image directory.
    pub async fn exists(&self, name: &str) -> bool {
        match self.path_for(name) {
            Some(path) => tokio::fs::metadata(&path)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false),
            None => false,
        }
    }

    /// Read an image's bytes, `None` if the name is unsafe or the file is absent.
    pub async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let Some(path) = self.path_for(name) else {
            return Ok(None);
        };
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io { path, source: err }),
        }
    }
}

/// An uploaded image written to disk but not yet referenced by a saved record.
///
/// Dropping it without [`StagedImage::commit`] removes the file, which covers
/// failed saves as well as requests cancelled mid-write.
#[derive(Debug)]
pub struct StagedImage {
    path: PathBuf,
    name: String,
    committed: bool,
}

impl StagedImage {
    /// Generated file name inside the image directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keep the file; the record referencing it has been saved.
    pub fn commit(mut self) -> String {
        self.committed = true;
        std::mem::take(&mut self.name)
    }
}

impl Drop for StagedImage {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(image_file = %self.name, "Discarded uncommitted image"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(image_file = %self.name, error = %err, "Failed to discard uncommitted image")
            }
        }
    }
}
