//! Ancestor/descendant relation across real and virtual entries.
//!
//! All queries here are pure: real entries are compared by file system
//! identifier and path string, virtual entries by identity. No I/O.

use crate::entry::{path, DirectoryEntry, Entry};

/// True if `descendant` is reachable from `ancestor` by repeatedly expanding
/// real children and/or explicit virtual children. No entry is its own
/// descendant, and leaves have no descendants.
pub fn is_descendant_entry(ancestor: &Entry, descendant: &Entry) -> bool {
    if is_same_entry(ancestor, descendant) {
        return false;
    }

    match ancestor {
        Entry::File(_) | Entry::Fake(_) => false,
        Entry::Directory(dir) => is_real_descendant(dir, descendant),
        Entry::List(list) => list
            .children()
            .iter()
            .any(|child| is_child_or_descendant(child, descendant)),
        Entry::Volume(volume) => {
            is_real_descendant(volume.root(), descendant)
                || volume
                    .children()
                    .iter()
                    .any(|child| is_child_or_descendant(child, descendant))
        }
    }
}

/// Same entry: real entries by URL, virtual entries by identity.
pub fn is_same_entry(a: &Entry, b: &Entry) -> bool {
    match (a, b) {
        (Entry::File(_) | Entry::Directory(_), Entry::File(_) | Entry::Directory(_)) => {
            a.ptr_eq(b) || a.to_url() == b.to_url()
        }
        _ => a.ptr_eq(b),
    }
}

/// Both entries are backed by the file system with the same root identifier.
pub fn is_same_file_system(a: &Entry, b: &Entry) -> bool {
    match (a.filesystem(), b.filesystem()) {
        (Some(fs_a), Some(fs_b)) => fs_a.name() == fs_b.name(),
        _ => false,
    }
}

/// A volume listed as a child also brings in its real root directory.
fn is_child_or_descendant(child: &Entry, descendant: &Entry) -> bool {
    if let Entry::Volume(volume) = child {
        let root = Entry::Directory(volume.root().clone());
        if is_same_entry(&root, descendant) {
            return true;
        }
    }
    is_same_entry(child, descendant) || is_descendant_entry(child, descendant)
}

fn is_real_descendant(dir: &DirectoryEntry, descendant: &Entry) -> bool {
    let (filesystem, full_path) = match descendant {
        Entry::File(file) => (file.filesystem(), file.full_path()),
        Entry::Directory(sub) => (sub.filesystem(), sub.full_path()),
        Entry::Fake(_) | Entry::List(_) | Entry::Volume(_) => return false,
    };

    filesystem.name() == dir.filesystem().name()
        && path::is_strict_subpath(dir.full_path(), full_path)
}
