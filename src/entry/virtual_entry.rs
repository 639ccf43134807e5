//! Virtual entries: labels and containers with no backing storage of their own.

use super::{DirectoryEntry, Entry};
use crate::error::EntryError;
use crate::fs::FileSystem;
use crate::relation::is_descendant_entry;
use crate::types::{RootType, VolumeType};
use parking_lot::{const_mutex, Mutex, RwLock};
use std::sync::Arc;

#[derive(Debug)]
struct FakeInner {
    label: String,
    root_type: RootType,
}

/// A labeled virtual leaf, e.g. a placeholder for a volume not mounted yet.
#[derive(Debug, Clone)]
pub struct FakeEntry {
    inner: Arc<FakeInner>,
}

impl FakeEntry {
    pub fn new(label: impl Into<String>, root_type: RootType) -> Self {
        Self {
            inner: Arc::new(FakeInner {
                label: label.into(),
                root_type,
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    pub fn root_type(&self) -> RootType {
        self.inner.root_type
    }

    /// `fake-entry://<root type>`
    pub fn to_url(&self) -> String {
        format!("fake-entry://{}", self.inner.root_type)
    }

    pub(crate) fn ptr_eq(&self, other: &FakeEntry) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Ordered explicit children shared by the container types.
#[derive(Debug, Default)]
struct Children {
    entries: RwLock<Vec<Entry>>,
}

/// Serializes container mutations that can add edges, so the cycle check and
/// the insert it guards happen atomically across all containers.
static LINK_LOCK: Mutex<()> = const_mutex(());

impl Children {
    fn snapshot(&self) -> Vec<Entry> {
        self.entries.read().clone()
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn add(&self, container: &Entry, entry: Entry) -> Result<(), EntryError> {
        let _link = LINK_LOCK.lock();
        if entry.ptr_eq(container) || is_descendant_entry(&entry, container) {
            return Err(EntryError::WouldCycle {
                container: container.to_url(),
                child: entry.to_url(),
            });
        }
        self.entries.write().push(entry);
        Ok(())
    }

    fn remove(&self, entry: &Entry) -> bool {
        let mut entries = self.entries.write();
        match entries.iter().position(|e| e.ptr_eq(entry)) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    fn position(&self, entry: &Entry) -> Option<usize> {
        self.entries.read().iter().position(|e| e.ptr_eq(entry))
    }
}

#[derive(Debug)]
struct ListInner {
    label: String,
    root_type: RootType,
    children: Children,
}

/// A labeled virtual container holding explicitly added children of any kind.
#[derive(Debug, Clone)]
pub struct EntryList {
    inner: Arc<ListInner>,
}

impl EntryList {
    pub fn new(label: impl Into<String>, root_type: RootType) -> Self {
        Self {
            inner: Arc::new(ListInner {
                label: label.into(),
                root_type,
                children: Children::default(),
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    pub fn root_type(&self) -> RootType {
        self.inner.root_type
    }

    /// `entry-list://<root type>`
    pub fn to_url(&self) -> String {
        format!("entry-list://{}", self.inner.root_type)
    }

    /// Snapshot of the explicit children in insertion order.
    pub fn children(&self) -> Vec<Entry> {
        self.inner.children.snapshot()
    }

    pub fn len(&self) -> usize {
        self.inner.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a child. Fails if the child is this list or contains it.
    pub fn add_entry(&self, entry: impl Into<Entry>) -> Result<(), EntryError> {
        let me = Entry::List(self.clone());
        self.inner.children.add(&me, entry.into())
    }

    /// Remove the first occurrence of `entry`. Returns whether it was present.
    pub fn remove_entry(&self, entry: &Entry) -> bool {
        self.inner.children.remove(entry)
    }

    /// Position of `entry` among the explicit children.
    pub fn find_index(&self, entry: &Entry) -> Option<usize> {
        self.inner.children.position(entry)
    }

    pub(crate) fn ptr_eq(&self, other: &EntryList) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A mounted volume as seen by the entry hierarchy.
#[derive(Debug, Clone)]
pub struct VolumeInfo {
    pub volume_id: String,
    pub volume_type: VolumeType,
    pub label: String,
    pub filesystem: Arc<FileSystem>,
}

impl VolumeInfo {
    pub fn new(
        volume_id: impl Into<String>,
        volume_type: VolumeType,
        label: impl Into<String>,
        filesystem: Arc<FileSystem>,
    ) -> Self {
        Self {
            volume_id: volume_id.into(),
            volume_type,
            label: label.into(),
            filesystem,
        }
    }

    /// Root directory shown for this volume.
    pub fn display_root(&self) -> DirectoryEntry {
        self.filesystem.root()
    }
}

#[derive(Debug)]
struct VolumeInner {
    info: VolumeInfo,
    root: DirectoryEntry,
    children: Children,
}

/// A virtual container bound to one real volume root, plus explicitly added
/// virtual children.
#[derive(Debug, Clone)]
pub struct VolumeEntry {
    inner: Arc<VolumeInner>,
}

impl VolumeEntry {
    pub fn new(info: VolumeInfo) -> Self {
        let root = info.display_root();
        Self {
            inner: Arc::new(VolumeInner {
                info,
                root,
                children: Children::default(),
            }),
        }
    }

    pub fn volume_info(&self) -> &VolumeInfo {
        &self.inner.info
    }

    /// Wrapped real root directory.
    pub fn root(&self) -> &DirectoryEntry {
        &self.inner.root
    }

    pub fn label(&self) -> &str {
        &self.inner.info.label
    }

    pub fn root_type(&self) -> RootType {
        self.inner.info.volume_type.root_type()
    }

    /// URL of the wrapped root, e.g. `filesystem:downloads/`.
    pub fn to_url(&self) -> String {
        self.inner.root.to_url()
    }

    /// Snapshot of the explicit virtual children in insertion order.
    pub fn children(&self) -> Vec<Entry> {
        self.inner.children.snapshot()
    }

    /// Append a virtual child. Fails if the child is this volume or contains it.
    pub fn add_entry(&self, entry: impl Into<Entry>) -> Result<(), EntryError> {
        let me = Entry::Volume(self.clone());
        self.inner.children.add(&me, entry.into())
    }

    /// Remove the first occurrence of `entry`. Returns whether it was present.
    pub fn remove_entry(&self, entry: &Entry) -> bool {
        self.inner.children.remove(entry)
    }

    pub(crate) fn ptr_eq(&self, other: &VolumeEntry) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
