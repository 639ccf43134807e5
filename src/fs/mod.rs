//! Directory listing capability.
//!
//! Real entries never enumerate their children themselves; they go through a
//! [`FileSystemBackend`] that hands out a [`ListingCursor`] per directory.
//! A cursor returns successive, possibly partial batches and signals the end
//! of the directory with an empty batch.
//!
//! - [`MemoryBackend`] - In-memory tree with configurable batch size and
//!   failure injection (testing)
//! - [`LocalBackend`] - A directory on the local disk, read with `tokio::fs`

pub mod local;
pub mod memory;

pub use local::LocalBackend;
pub use memory::MemoryBackend;

use crate::entry::{path, DirectoryEntry, FileEntry};
use crate::error::ListingResult;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Kind of a listed child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    File,
    Directory,
}

/// One child reported by a listing cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildInfo {
    pub name: String,
    pub kind: ChildKind,
    /// Size in bytes, when the backend knows it
    pub size: Option<u64>,
}

impl ChildInfo {
    pub fn file(name: impl Into<String>, size: Option<u64>) -> Self {
        Self {
            name: name.into(),
            kind: ChildKind::File,
            size,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChildKind::Directory,
            size: None,
        }
    }
}

/// Pull-based reader over one directory's children.
#[async_trait]
pub trait ListingCursor: Send {
    /// Read the next batch. An empty batch means the directory is exhausted.
    async fn next_batch(&mut self) -> ListingResult<Vec<ChildInfo>>;
}

/// Source of directory listings for one file system.
///
/// Paths are normalized entry paths (`/`, `/dir_a`, ...).
#[async_trait]
pub trait FileSystemBackend: Send + Sync {
    async fn open_dir(&self, path: &str) -> ListingResult<Box<dyn ListingCursor>>;
}

/// A named file system whose root identifier qualifies every real entry.
pub struct FileSystem {
    name: String,
    backend: Arc<dyn FileSystemBackend>,
}

impl FileSystem {
    /// Create a file system handle over a backend.
    pub fn new(name: impl Into<String>, backend: impl FileSystemBackend + 'static) -> Arc<Self> {
        Self::from_backend(name, Arc::new(backend))
    }

    /// Create a file system handle over a shared backend.
    pub fn from_backend(name: impl Into<String>, backend: Arc<dyn FileSystemBackend>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            backend,
        })
    }

    /// Root identifier, e.g. `downloads`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root directory entry of this file system.
    pub fn root(self: &Arc<Self>) -> DirectoryEntry {
        DirectoryEntry::new(Arc::clone(self), path::ROOT)
    }

    /// Handle for a directory at `path`. Performs no I/O.
    pub fn directory(self: &Arc<Self>, path: &str) -> DirectoryEntry {
        DirectoryEntry::new(Arc::clone(self), path)
    }

    /// Handle for a file at `path`. Performs no I/O.
    pub fn file(self: &Arc<Self>, path: &str) -> FileEntry {
        FileEntry::new(Arc::clone(self), path, None)
    }

    pub(crate) async fn open_dir(&self, path: &str) -> ListingResult<Box<dyn ListingCursor>> {
        self.backend.open_dir(path).await
    }
}

impl fmt::Debug for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSystem").field("name", &self.name).finish()
    }
}

/// Cursor over a listing snapshot, handing it out in fixed-size chunks.
pub(crate) struct SnapshotCursor {
    children: std::vec::IntoIter<ChildInfo>,
    batch_size: usize,
}

impl SnapshotCursor {
    pub(crate) fn new(children: Vec<ChildInfo>, batch_size: usize) -> Self {
        Self {
            children: children.into_iter(),
            batch_size: batch_size.max(1),
        }
    }
}

#[async_trait]
impl ListingCursor for SnapshotCursor {
    async fn next_batch(&mut self) -> ListingResult<Vec<ChildInfo>> {
        // Suspend like a real listing call so sibling reads interleave.
        tokio::task::yield_now().await;
        Ok(self.children.by_ref().take(self.batch_size).collect())
    }
}
