//! JSON file persistence for small pieces of local state.
//!
//! Files live in the directory chosen by [`crate::config::ClientConfig`]:
//! - Linux: `~/.config/aivyra/`
//! - macOS: `~/Library/Application Support/aivyra/`
//! - Windows: `%APPDATA%\aivyra\`

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Save a value as JSON.
///
/// Writes a sibling temp file and renames it over `path`, so readers see
/// either the old value or the new one, never a partial write.
pub async fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_vec_pretty(value)?;
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await.map_err(io_err)?;
    tokio::fs::rename(&tmp, path).await.map_err(io_err)
}

/// Load a value.
///
/// Returns `None` if the file doesn't exist or doesn't parse.
pub async fn load<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let bytes = tokio::fs::read(path).await.ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable stored value");
            None
        }
    }
}

/// Remove a stored value. A missing file is not an error.
pub async fn remove(path: &Path) -> Result<(), StorageError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Remove a stored value, overwriting it with `empty` when the file cannot be
/// removed. Either way the old contents are gone once this returns `Ok`.
pub async fn clear<T: Serialize>(path: &Path, empty: &T) -> Result<(), StorageError> {
    overwrite_unless_removed(remove(path).await, path, empty).await
}

async fn overwrite_unless_removed<T: Serialize>(
    removed: Result<(), StorageError>,
    path: &Path,
    empty: &T,
) -> Result<(), StorageError> {
    match removed {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::debug!(error = %e, "remove failed; overwriting stored value");
            save(path, empty).await
        }
    }
}
