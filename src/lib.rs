//! Entrykit: file hierarchy entries and traversal
//!
//! Models the entries shown in a file hierarchy (real files and directories,
//! plus virtual labels, lists and volume wrappers), reads directory trees
//! asynchronously with bounded depth and cooperative cancellation, answers
//! ancestor/descendant queries across real and virtual entries, and formats
//! entries and byte counts for display.

pub mod config;
pub mod debug;
pub mod entry;
pub mod error;
pub mod fs;
pub mod logging;
pub mod relation;
pub mod size;
pub mod types;
pub mod walker;

pub use debug::{entry_debug_string, DebugTarget, Describe};
pub use entry::{DirectoryEntry, DirectoryReader, Entry, EntryList, FakeEntry, FileEntry, VolumeEntry, VolumeInfo};
pub use error::{ConfigError, EntryError, ListingError, WalkError};
pub use fs::{FileSystem, FileSystemBackend, ListingCursor};
pub use relation::{is_descendant_entry, is_same_entry, is_same_file_system};
pub use size::{bytes_to_string, bytes_to_string_with_precision, format_size};
pub use types::{RootType, VolumeType};
pub use walker::{collect_files, read_entries_recursively, WalkSummary, Walker, WalkerConfig};
