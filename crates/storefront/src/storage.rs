//! Durable key-value storage backing the cart and the login record.
//!
//! Each key maps to a small JSON document at `<data_dir>/<key>.json`. Writes
//! replace the whole document through a temp file and rename, so a crash
//! cannot leave a torn document behind. The store is single-process and
//! last-write-wins; there is no merging.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// The cart line-item sequence.
    pub const CART: &str = "cart";
    /// The demo login record.
    pub const LOGIN: &str = "login";
}

/// Errors raised by [`LocalStore`] operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("storage io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized to JSON.
    #[error("storage encode error for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed key-value store, one JSON document per key.
///
/// Reads are forgiving: a missing or unparseable document reads as `None`
/// and the caller falls back to a fresh state. Writes are strict and
/// surface [`StorageError`] so the failure can be reported.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Read and deserialize the document stored under `key`.
    ///
    /// Returns `None` when the document is absent or does not parse; a
    /// parse failure is logged and the stored value is treated as lost.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", path.display());
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("discarding unparseable document {}: {e}", path.display());
                None
            }
        }
    }

    /// Serialize `value` and overwrite the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] if `value` does not serialize, or
    /// [`StorageError::Io`] if the document cannot be written.
    pub fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Encode {
            key: key.to_owned(),
            source,
        })?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })
    }

    /// Delete the document stored under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if an existing document cannot be
    /// deleted.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    /// Whether the backing directory is reachable. Used by the readiness
    /// check.
    #[must_use]
    pub fn ping(&self) -> bool {
        fs::metadata(&self.dir).is_ok()
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_owned(),
        source,
    };

    let mut file = fs::File::create(path).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)
}

// ============================================================================
// Tests
// ============================================================================
