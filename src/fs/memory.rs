//! In-memory listing backend.
//!
//! Used for testing. Paths are populated up front; listings are snapshots
//! handed out in batches of a configurable size.

use super::{ChildInfo, FileSystemBackend, ListingCursor, SnapshotCursor};
use crate::entry::path;
use crate::error::{ListingError, ListingResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of children returned per batch.
const DEFAULT_BATCH_SIZE: usize = 64;

#[derive(Debug, Clone)]
enum Node {
    File { size: u64 },
    Directory,
}

/// In-memory file tree.
///
/// Thread-safe via internal `RwLock`. The root directory always exists.
#[derive(Debug)]
pub struct MemoryBackend {
    nodes: RwLock<BTreeMap<String, Node>>,
    failures: RwLock<HashSet<String>>,
    batch_size: usize,
    opened: AtomicUsize,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Create an empty tree.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(path::ROOT.to_string(), Node::Directory);
        Self {
            nodes: RwLock::new(nodes),
            failures: RwLock::new(HashSet::new()),
            batch_size: DEFAULT_BATCH_SIZE,
            opened: AtomicUsize::new(0),
        }
    }

    /// Set how many children each batch carries (minimum 1).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Add paths to the tree. A trailing `/` marks a directory; every
    /// intermediate component is created as a directory.
    pub fn populate(&self, paths: &[&str]) {
        for raw in paths {
            let is_dir = raw.ends_with('/');
            let normalized = path::normalize_path_string(raw);
            self.ensure_parents(&normalized);
            let node = if is_dir {
                Node::Directory
            } else {
                Node::File { size: 0 }
            };
            self.nodes.write().insert(normalized, node);
        }
    }

    /// Add a file with a known size.
    pub fn add_file(&self, raw: &str, size: u64) {
        let normalized = path::normalize_path_string(raw);
        self.ensure_parents(&normalized);
        self.nodes.write().insert(normalized, Node::File { size });
    }

    /// Make every listing of `raw` fail.
    pub fn fail_on(&self, raw: &str) {
        self.failures.write().insert(path::normalize_path_string(raw));
    }

    /// Number of directory listings opened so far.
    pub fn opened_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    fn ensure_parents(&self, normalized: &str) {
        let mut nodes = self.nodes.write();
        let mut current = String::new();
        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        for segment in segments.iter().take(segments.len().saturating_sub(1)) {
            current.push('/');
            current.push_str(segment);
            nodes.entry(current.clone()).or_insert(Node::Directory);
        }
    }

    fn list(&self, normalized: &str) -> ListingResult<Vec<ChildInfo>> {
        let nodes = self.nodes.read();
        match nodes.get(normalized) {
            Some(Node::Directory) => {}
            Some(Node::File { .. }) => return Err(ListingError::not_a_directory(normalized)),
            None => return Err(ListingError::not_found(normalized)),
        }

        let children = nodes
            .iter()
            .filter(|(child_path, _)| is_direct_child(normalized, child_path))
            .map(|(child_path, node)| {
                let name = path::file_name(child_path);
                match node {
                    Node::File { size } => ChildInfo::file(name, Some(*size)),
                    Node::Directory => ChildInfo::directory(name),
                }
            })
            .collect();
        Ok(children)
    }
}

fn is_direct_child(parent: &str, candidate: &str) -> bool {
    if !path::is_strict_subpath(parent, candidate) {
        return false;
    }
    let rest = if parent == path::ROOT {
        &candidate[1..]
    } else {
        &candidate[parent.len() + 1..]
    };
    !rest.contains('/')
}

#[async_trait]
impl FileSystemBackend for MemoryBackend {
    async fn open_dir(&self, raw: &str) -> ListingResult<Box<dyn ListingCursor>> {
        let normalized = path::normalize_path_string(raw);
        self.opened.fetch_add(1, Ordering::SeqCst);

        if self.failures.read().contains(&normalized) {
            return Err(ListingError::Injected(normalized));
        }

        let children = self.list(&normalized)?;
        Ok(Box::new(SnapshotCursor::new(children, self.batch_size)))
    }
}
