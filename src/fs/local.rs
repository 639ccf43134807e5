//! Local disk listing backend.
//!
//! Entry paths are resolved under a canonical root directory. Symbolic links
//! are skipped rather than followed.

use super::{ChildInfo, FileSystemBackend, ListingCursor};
use crate::config::ListingConfig;
use crate::entry::path;
use crate::error::{ListingError, ListingResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::trace;

/// A directory on the local disk exposed as a file system root.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    root: PathBuf,
    batch_size: usize,
}

impl LocalBackend {
    /// Create a backend rooted at `root`, which must be an existing directory.
    pub fn new(root: impl AsRef<Path>) -> ListingResult<Self> {
        Self::with_config(root, &ListingConfig::default())
    }

    /// Create a backend using the batch size from `config`.
    pub fn with_config(root: impl AsRef<Path>, config: &ListingConfig) -> ListingResult<Self> {
        Ok(Self {
            root: path::canonicalize_root(root.as_ref())?,
            batch_size: config.batch_size.max(1),
        })
    }

    /// Canonical root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, entry_path: &str) -> PathBuf {
        let normalized = path::normalize_path_string(entry_path);
        let relative = normalized.trim_start_matches('/');
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }
}

fn map_io_error(entry_path: &str, err: std::io::Error) -> ListingError {
    match err.kind() {
        std::io::ErrorKind::NotFound => ListingError::not_found(entry_path),
        _ => ListingError::Io(err),
    }
}

#[async_trait]
impl FileSystemBackend for LocalBackend {
    async fn open_dir(&self, entry_path: &str) -> ListingResult<Box<dyn ListingCursor>> {
        let dir = self.resolve(entry_path);
        let metadata = tokio::fs::symlink_metadata(&dir)
            .await
            .map_err(|e| map_io_error(entry_path, e))?;
        if !metadata.is_dir() {
            return Err(ListingError::not_a_directory(entry_path));
        }

        let read_dir = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| map_io_error(entry_path, e))?;
        trace!(path = %dir.display(), "Opened directory listing");

        Ok(Box::new(LocalCursor {
            read_dir,
            batch_size: self.batch_size,
            exhausted: false,
        }))
    }
}

struct LocalCursor {
    read_dir: tokio::fs::ReadDir,
    batch_size: usize,
    exhausted: bool,
}

#[async_trait]
impl ListingCursor for LocalCursor {
    async fn next_batch(&mut self) -> ListingResult<Vec<ChildInfo>> {
        let mut batch = Vec::new();
        while !self.exhausted && batch.len() < self.batch_size {
            let Some(dir_entry) = self.read_dir.next_entry().await? else {
                self.exhausted = true;
                break;
            };

            let file_type = dir_entry.file_type().await?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if file_type.is_dir() {
                batch.push(ChildInfo::directory(name));
            } else if file_type.is_file() {
                let size = dir_entry.metadata().await.ok().map(|m| m.len());
                batch.push(ChildInfo::file(name, size));
            }
            // Skip symlinks and special files
        }
        Ok(batch)
    }
}
