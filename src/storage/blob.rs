//! Blob storage
//!
//! Named, opaque byte blobs grouped in a container. The filesystem backend
//! maps a container to a directory and each blob to one file in it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncRead;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Readable blob content
pub type BlobReader = Box<dyn AsyncRead + Send + Unpin>;

/// Operations on a single blob container
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Whether a blob with this name exists
    async fn exists(&self, name: &str) -> AppResult<bool>;

    /// Create an empty blob, replacing nothing if it already exists
    async fn create_empty(&self, name: &str) -> AppResult<()>;

    /// Names of all blobs starting with `prefix`
    async fn list_names(&self, prefix: &str) -> AppResult<Vec<String>>;

    /// Open a blob for streaming. Fails with `StorageNotFound` when absent.
    async fn open(&self, name: &str) -> AppResult<BlobReader>;

    /// Replace the content of an existing blob. Fails with `StorageNotFound` when absent.
    async fn overwrite(&self, name: &str, content: Vec<u8>) -> AppResult<()>;

    /// Remove a blob. Fails with `StorageNotFound` when absent.
    async fn delete(&self, name: &str) -> AppResult<()>;
}

/// Filesystem-backed blob container
#[derive(Debug, Clone)]
pub struct FsBlobStorage {
    container: PathBuf,
}

impl FsBlobStorage {
    pub fn new(container: impl Into<PathBuf>) -> Self {
        Self {
            container: container.into(),
        }
    }

    /// Create the container directory if it does not exist yet
    pub async fn ensure_container(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.container)
            .await
            .map_err(|e| storage_error(&self.container, e))
    }

    pub fn container(&self) -> &Path {
        &self.container
    }

    fn blob_path(&self, name: &str) -> AppResult<PathBuf> {
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !valid {
            return Err(AppError::Validation(format!("Invalid blob name: {}", name)));
        }

        Ok(self.container.join(name))
    }

    /// One staging file per write
    fn staging_path(&self, name: &str) -> PathBuf {
        self.container
            .join(format!(".{}.{}.tmp", name, Uuid::new_v4().simple()))
    }
}

fn storage_error(path: &Path, err: std::io::Error) -> AppError {
    AppError::Storage(format!("{}: {}", path.display(), err))
}

fn map_missing(name: &str, path: &Path, err: std::io::Error) -> AppError {
    if err.kind() == ErrorKind::NotFound {
        AppError::StorageNotFound(name.to_string())
    } else {
        storage_error(path, err)
    }
}

#[async_trait]
impl BlobStorage for FsBlobStorage {
    async fn exists(&self, name: &str) -> AppResult<bool> {
        let path = self.blob_path(name)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| storage_error(&path, e))
    }

    async fn create_empty(&self, name: &str) -> AppResult<()> {
        let path = self.blob_path(name)?;
        let created = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;

        match created {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(storage_error(&path, e)),
        }
    }

    async fn list_names(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(&self.container).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error(&self.container, e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| storage_error(&self.container, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| storage_error(&entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }

            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(prefix) && !name.starts_with('.') {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    async fn open(&self, name: &str) -> AppResult<BlobReader> {
        let path = self.blob_path(name)?;
        let file = tokio::fs::File::open(&path)
            .await
            .map_err(|e| map_missing(name, &path, e))?;

        Ok(Box::new(file))
    }

    async fn overwrite(&self, name: &str, content: Vec<u8>) -> AppResult<()> {
        let path = self.blob_path(name)?;
        if !self.exists(name).await? {
            return Err(AppError::StorageNotFound(name.to_string()));
        }

        // Write aside and rename so readers never see a partial blob
        let staging = self.staging_path(name);
        if let Err(e) = tokio::fs::write(&staging, &content).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(storage_error(&staging, e));
        }
        if let Err(e) = tokio::fs::rename(&staging, &path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(storage_error(&path, e));
        }

        Ok(())
    }

    async fn delete(&self, name: &str) -> AppResult<()> {
        let path = self.blob_path(name)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| map_missing(name, &path, e))
    }
}
