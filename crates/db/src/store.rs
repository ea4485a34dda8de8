//! File-backed record collections.
//!
//! A [`JsonStore`] owns one JSON file holding an array of records and the
//! lock that serializes every access to it. Callers doing read-modify-write
//! take a [`StoreGuard`] via [`JsonStore::lock`] and perform both the load
//! and the save through it, so no other writer can interleave.
//!
//! Writes go to `<file>.tmp` first and are renamed over the target; readers
//! only ever see the old or the new contents.

use std::ffi::OsString;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::StoreError;

/// A durable, ordered collection of `T` backed by a single JSON file.
pub struct JsonStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

/// Exclusive access to a [`JsonStore`] for the lifetime of the guard.
pub struct StoreGuard<'a, T> {
    store: &'a JsonStore<T>,
    _lock: MutexGuard<'a, ()>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and seed the file with `[]` if missing.
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        let _lock = self.lock.lock().await;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StoreError::io(parent))?;
        }
        let present = tokio::fs::try_exists(&self.path)
            .await
            .map_err(StoreError::io(&self.path))?;
        if !present {
            write_atomic::<T>(&self.path, &[]).await?;
            tracing::info!(path = %self.path.display(), "Seeded empty store file");
        }
        Ok(())
    }

    /// Acquire the store's lock. Held until the returned guard is dropped.
    pub async fn lock(&self) -> StoreGuard<'_, T> {
        StoreGuard {
            store: self,
            _lock: self.lock.lock().await,
        }
    }

    /// Locked read of all records. See [`StoreGuard::load`] for the recovery policy.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        self.lock().await.load().await
    }

    /// Locked atomic write of all records.
    pub async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        self.lock().await.save(records).await
    }
}

impl<T> StoreGuard<'_, T>
where
    T: Serialize + DeserializeOwned,
{
    /// Read every record from disk.
    ///
    /// Recovery policy: a missing file or one that does not parse as an
    /// array of `T` yields an empty collection. Parse failures are logged at
    /// `warn`; the next save replaces the file. Any other I/O failure is an
    /// error, so a read-modify-write never overwrites records it could not see.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let path = &self.store.path;
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Store file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::io(path)(err)),
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => Ok(records),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Store file unparseable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Replace the file's contents with `records`.
    pub async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        write_atomic(&self.store.path, records).await?;
        tracing::debug!(
            path = %self.store.path.display(),
            count = records.len(),
            "Store file saved",
        );
        Ok(())
    }
}

/// Sibling temp path used while writing `path`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Serialize `records` as indented JSON, write to a temp file, fsync, rename.
async fn write_atomic<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(records)?;
    let tmp = temp_path(path);

    let mut file = tokio::fs::File::create(&tmp)
        .await
        .map_err(StoreError::io(&tmp))?;
    file.write_all(&json).await.map_err(StoreError::io(&tmp))?;
    file.sync_all().await.map_err(StoreError::io(&tmp))?;
    drop(file);

    tokio::fs::rename(&tmp, path)
        .await
        .map_err(StoreError::io(path))
}
