//! Entry hierarchy
//!
//! An [`Entry`] is any node shown in a file hierarchy. Real entries
//! ([`FileEntry`], [`DirectoryEntry`]) are handles into a [`FileSystem`];
//! virtual entries ([`FakeEntry`], [`EntryList`], [`VolumeEntry`]) are
//! grouping and labeling nodes with explicit children.
//!
//! Every entry is a cheap `Arc` handle. Identity is pointer identity
//! ([`Entry::ptr_eq`]); no two distinct entries compare equal by content.

pub mod path;
mod virtual_entry;

pub use virtual_entry::{EntryList, FakeEntry, VolumeEntry, VolumeInfo};

use crate::error::ListingResult;
use crate::fs::{ChildKind, FileSystem, ListingCursor};
use crate::types::RootType;
use std::fmt;
use std::sync::Arc;

struct RealNode {
    filesystem: Arc<FileSystem>,
    full_path: String,
    size: Option<u64>,
}

impl RealNode {
    fn new(filesystem: Arc<FileSystem>, raw_path: &str, size: Option<u64>) -> Arc<Self> {
        Arc::new(Self {
            filesystem,
            full_path: path::normalize_path_string(raw_path),
            size,
        })
    }

    fn to_url(&self) -> String {
        format!("filesystem:{}{}", self.filesystem.name(), self.full_path)
    }
}

/// A real file.
#[derive(Clone)]
pub struct FileEntry {
    node: Arc<RealNode>,
}

impl FileEntry {
    pub fn new(filesystem: Arc<FileSystem>, raw_path: &str, size: Option<u64>) -> Self {
        Self {
            node: RealNode::new(filesystem, raw_path, size),
        }
    }

    pub fn filesystem(&self) -> &Arc<FileSystem> {
        &self.node.filesystem
    }

    pub fn full_path(&self) -> &str {
        &self.node.full_path
    }

    pub fn name(&self) -> &str {
        path::file_name(&self.node.full_path)
    }

    /// Size reported by the listing, if any.
    pub fn size(&self) -> Option<u64> {
        self.node.size
    }

    /// Root-qualified URL, e.g. `filesystem:downloads/file_a.txt`.
    pub fn to_url(&self) -> String {
        self.node.to_url()
    }
}

impl fmt::Debug for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FileEntry").field(&self.to_url()).finish()
    }
}

/// A real directory. Children are only reachable through [`DirectoryReader`].
#[derive(Clone)]
pub struct DirectoryEntry {
    node: Arc<RealNode>,
}

impl DirectoryEntry {
    pub fn new(filesystem: Arc<FileSystem>, raw_path: &str) -> Self {
        Self {
            node: RealNode::new(filesystem, raw_path, None),
        }
    }

    pub fn filesystem(&self) -> &Arc<FileSystem> {
        &self.node.filesystem
    }

    pub fn full_path(&self) -> &str {
        &self.node.full_path
    }

    pub fn name(&self) -> &str {
        path::file_name(&self.node.full_path)
    }

    pub fn is_root(&self) -> bool {
        self.node.full_path == path::ROOT
    }

    /// Root-qualified URL, e.g. `filesystem:downloads/dir_a`.
    pub fn to_url(&self) -> String {
        self.node.to_url()
    }

    /// Start a batched listing of this directory. No I/O happens until the
    /// first [`DirectoryReader::read_entries`] call.
    pub fn create_reader(&self) -> DirectoryReader {
        DirectoryReader {
            directory: self.clone(),
            cursor: None,
            exhausted: false,
        }
    }
}

impl fmt::Debug for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DirectoryEntry").field(&self.to_url()).finish()
    }
}

/// Batched reader over one directory's children.
pub struct DirectoryReader {
    directory: DirectoryEntry,
    cursor: Option<Box<dyn ListingCursor>>,
    exhausted: bool,
}

impl DirectoryReader {
    /// Directory being read.
    pub fn directory(&self) -> &DirectoryEntry {
        &self.directory
    }

    /// Read the next batch of children. Returns an empty batch once the
    /// directory is exhausted, and keeps doing so on later calls.
    pub async fn read_entries(&mut self) -> ListingResult<Vec<Entry>> {
        if self.exhausted {
            return Ok(Vec::new());
        }

        if self.cursor.is_none() {
            let fs = self.directory.filesystem();
            let opened = fs.open_dir(self.directory.full_path()).await?;
            self.cursor = Some(opened);
        }
        let Some(cursor) = self.cursor.as_mut() else {
            return Ok(Vec::new());
        };

        let batch = cursor.next_batch().await?;
        if batch.is_empty() {
            self.exhausted = true;
            self.cursor = None;
            return Ok(Vec::new());
        }

        let parent = self.directory.full_path();
        let fs = self.directory.filesystem();
        Ok(batch
            .into_iter()
            .map(|child| {
                let child_path = path::join(parent, &child.name);
                match child.kind {
                    ChildKind::File => {
                        Entry::File(FileEntry::new(Arc::clone(fs), &child_path, child.size))
                    }
                    ChildKind::Directory => {
                        Entry::Directory(DirectoryEntry::new(Arc::clone(fs), &child_path))
                    }
                }
            })
            .collect())
    }
}

/// Any node in a displayed file hierarchy.
#[derive(Clone, Debug)]
pub enum Entry {
    File(FileEntry),
    Directory(DirectoryEntry),
    Fake(FakeEntry),
    List(EntryList),
    Volume(VolumeEntry),
}

impl Entry {
    /// Pointer identity.
    pub fn ptr_eq(&self, other: &Entry) -> bool {
        match (self, other) {
            (Entry::File(a), Entry::File(b)) => Arc::ptr_eq(&a.node, &b.node),
            (Entry::Directory(a), Entry::Directory(b)) => Arc::ptr_eq(&a.node, &b.node),
            (Entry::Fake(a), Entry::Fake(b)) => a.ptr_eq(b),
            (Entry::List(a), Entry::List(b)) => a.ptr_eq(b),
            (Entry::Volume(a), Entry::Volume(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// True for entries that can be expanded: directories and virtual containers.
    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory(_) | Entry::List(_) | Entry::Volume(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Entry::File(_))
    }

    /// True for entries backed by a file system handle.
    pub fn is_real(&self) -> bool {
        matches!(self, Entry::File(_) | Entry::Directory(_))
    }

    /// Full path; virtual entries sit at `/`.
    pub fn full_path(&self) -> &str {
        match self {
            Entry::File(file) => file.full_path(),
            Entry::Directory(dir) => dir.full_path(),
            Entry::Volume(volume) => volume.root().full_path(),
            Entry::Fake(_) | Entry::List(_) => path::ROOT,
        }
    }

    /// Display name: last path component for real entries, label otherwise.
    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => file.name(),
            Entry::Directory(dir) => dir.name(),
            Entry::Fake(fake) => fake.label(),
            Entry::List(list) => list.label(),
            Entry::Volume(volume) => volume.label(),
        }
    }

    pub fn to_url(&self) -> String {
        match self {
            Entry::File(file) => file.to_url(),
            Entry::Directory(dir) => dir.to_url(),
            Entry::Fake(fake) => fake.to_url(),
            Entry::List(list) => list.to_url(),
            Entry::Volume(volume) => volume.to_url(),
        }
    }

    /// Root category for virtual entries.
    pub fn root_type(&self) -> Option<RootType> {
        match self {
            Entry::Fake(fake) => Some(fake.root_type()),
            Entry::List(list) => Some(list.root_type()),
            Entry::Volume(volume) => Some(volume.root_type()),
            Entry::File(_) | Entry::Directory(_) => None,
        }
    }

    /// File system backing the entry; a volume reports its root's.
    pub fn filesystem(&self) -> Option<&Arc<FileSystem>> {
        match self {
            Entry::File(file) => Some(file.filesystem()),
            Entry::Directory(dir) => Some(dir.filesystem()),
            Entry::Volume(volume) => Some(volume.root().filesystem()),
            Entry::Fake(_) | Entry::List(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryEntry> {
        match self {
            Entry::Directory(dir) => Some(dir),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileEntry> {
        match self {
            Entry::File(file) => Some(file),
            _ => None,
        }
    }

    /// Variant name, e.g. `EntryList`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Entry::File(_) => "FileEntry",
            Entry::Directory(_) => "DirectoryEntry",
            Entry::Fake(_) => "FakeEntry",
            Entry::List(_) => "EntryList",
            Entry::Volume(_) => "VolumeEntry",
        }
    }
}

impl From<FileEntry> for Entry {
    fn from(entry: FileEntry) -> Self {
        Entry::File(entry)
    }
}

impl From<DirectoryEntry> for Entry {
    fn from(entry: DirectoryEntry) -> Self {
        Entry::Directory(entry)
    }
}

impl From<FakeEntry> for Entry {
    fn from(entry: FakeEntry) -> Self {
        Entry::Fake(entry)
    }
}

impl From<EntryList> for Entry {
    fn from(entry: EntryList) -> Self {
        Entry::List(entry)
    }
}

impl From<VolumeEntry> for Entry {
    fn from(entry: VolumeEntry) -> Self {
        Entry::Volume(entry)
    }
}
