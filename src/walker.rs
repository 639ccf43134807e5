//! Recursive directory reader
//!
//! Reads a directory tree level by level through [`DirectoryReader`] batches.
//! Subdirectories are read concurrently (fan-out) and the walk completes once
//! every scheduled read has drained (join). The pending set holds exactly one
//! outstanding batch read per directory being traversed, so batches of a
//! single directory are delivered in listing order.

use crate::entry::{DirectoryEntry, DirectoryReader, Entry, FileEntry};
use crate::error::{ListingResult, WalkError};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument, trace, warn};

/// Walker configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Levels of subdirectories expanded below the root (None = unlimited).
    /// `Some(0)` reads only the root's children.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Outcome of a completed walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Non-empty batches delivered to the callback
    pub batches: usize,
    /// Entries delivered across all batches
    pub entries: usize,
    /// Directories read to the end
    pub directories: usize,
    /// The stop predicate ended the walk early
    pub stopped: bool,
}

/// Depth-bounded, cancellable recursive reader.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with unlimited depth
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a walker with custom configuration
    pub fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self::with_config(WalkerConfig { max_depth })
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root`, handing every non-empty batch of children to `on_entries`.
    ///
    /// `should_stop` is polled before any read is issued, whenever a read
    /// completes, and after each callback. Once it returns true no further
    /// reads start, in-flight reads are dropped, and the walk returns `Ok`
    /// with `stopped` set. A batch whose read completed when the predicate
    /// turned true is discarded without reaching `on_entries`.
    /// The first listing failure at any depth drops all in-flight reads and
    /// is returned as the error.
    #[instrument(skip_all, fields(root = %root.to_url(), max_depth = ?self.config.max_depth))]
    pub async fn walk<F, S>(
        &self,
        root: &DirectoryEntry,
        mut on_entries: F,
        should_stop: S,
    ) -> Result<WalkSummary, WalkError>
    where
        F: FnMut(&[Entry]),
        S: Fn() -> bool,
    {
        let start = Instant::now();
        let mut summary = WalkSummary::default();
        debug!("Starting recursive read");

        if should_stop() {
            summary.stopped = true;
            debug!("Stopped before first read");
            return Ok(summary);
        }

        let mut pending = FuturesUnordered::new();
        pending.push(read_batch(root.create_reader(), 0));

        while let Some((reader, depth, result)) = pending.next().await {
            // Stopping here discards the batch just read.
            if should_stop() {
                summary.stopped = true;
                debug!(in_flight = pending.len(), "Recursive read stopped");
                return Ok(summary);
            }

            let entries = match result {
                Ok(entries) => entries,
                Err(source) => {
                    let path = reader.directory().full_path().to_string();
                    warn!(path = %path, depth, error = %source, "Directory listing failed");
                    return Err(WalkError::Listing { path, source });
                }
            };

            if entries.is_empty() {
                summary.directories += 1;
                continue;
            }

            summary.batches += 1;
            summary.entries += entries.len();
            trace!(
                path = %reader.directory().full_path(),
                depth,
                batch_len = entries.len(),
                "Delivering batch"
            );
            on_entries(&entries);

            // The callback may have requested a stop.
            if should_stop() {
                summary.stopped = true;
                debug!(in_flight = pending.len(), "Recursive read stopped");
                return Ok(summary);
            }

            if self.should_descend(depth) {
                for entry in &entries {
                    if let Entry::Directory(dir) = entry {
                        pending.push(read_batch(dir.create_reader(), depth + 1));
                    }
                }
            }
            pending.push(read_batch(reader, depth));
        }

        debug!(
            batches = summary.batches,
            entries = summary.entries,
            directories = summary.directories,
            duration_ms = start.elapsed().as_millis(),
            "Recursive read completed"
        );
        Ok(summary)
    }

    /// Collect every file under `root`, honoring the configured depth.
    pub async fn collect_files(&self, root: &DirectoryEntry) -> Result<Vec<FileEntry>, WalkError> {
        let mut files = Vec::new();
        self.walk(
            root,
            |entries| files.extend(entries.iter().filter_map(Entry::as_file).cloned()),
            || false,
        )
        .await?;
        Ok(files)
    }

    /// Subdirectories found in a directory at `depth` are expanded while
    /// `depth < max_depth`.
    fn should_descend(&self, depth: usize) -> bool {
        self.config.max_depth.map_or(true, |max| depth < max)
    }
}

async fn read_batch(
    mut reader: DirectoryReader,
    depth: usize,
) -> (DirectoryReader, usize, ListingResult<Vec<Entry>>) {
    let result = reader.read_entries().await;
    (reader, depth, result)
}

/// Read `root` recursively, reporting through callbacks.
///
/// `entries_callback` receives each non-empty batch. Exactly one of
/// `success_callback` (all reads finished, or `should_stop` ended the walk)
/// and `error_callback` (first listing failure) is invoked, once.
/// `max_depth` bounds how many levels below `root` are expanded; `None` is
/// unbounded.
pub async fn read_entries_recursively<E, S, OnSuccess, OnError>(
    root: &DirectoryEntry,
    entries_callback: E,
    success_callback: OnSuccess,
    error_callback: OnError,
    should_stop: S,
    max_depth: Option<usize>,
) where
    E: FnMut(&[Entry]),
    S: Fn() -> bool,
    OnSuccess: FnOnce(WalkSummary),
    OnError: FnOnce(WalkError),
{
    match Walker::with_max_depth(max_depth)
        .walk(root, entries_callback, should_stop)
        .await
    {
        Ok(summary) => success_callback(summary),
        Err(err) => error_callback(err),
    }
}

/// Collect every file under `root` down to `max_depth`.
pub async fn collect_files(
    root: &DirectoryEntry,
    max_depth: Option<usize>,
) -> Result<Vec<FileEntry>, WalkError> {
    Walker::with_max_depth(max_depth).collect_files(root).await
}
