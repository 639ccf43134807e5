//! Integration tests for entry diagnostic strings

use super::test_utils::{downloads_volume, fixture_fs};
use entrykit::{entry_debug_string, DebugTarget, Entry, EntryList, FakeEntry, RootType, VolumeEntry};
use serde_json::json;

#[test]
fn test_static_values() {
    assert_eq!(entry_debug_string(DebugTarget::Null), "entry is null");
    assert_eq!(entry_debug_string(DebugTarget::Undefined), "entry is undefined");
    assert_eq!(entry_debug_string(&json!({})), "(Object) ");
}

#[test]
fn test_real_entries() {
    let (fs, _) = fixture_fs(64);
    let root: Entry = fs.root().into();
    let folder: Entry = fs.directory("/dir_a").into();
    let file: Entry = fs.file("/file_a.txt").into();

    assert_eq!(entry_debug_string(&root), "(Object) / filesystem:fake-volume/");
    assert_eq!(
        entry_debug_string(&folder),
        "(Object) /dir_a filesystem:fake-volume/dir_a"
    );
    assert_eq!(
        entry_debug_string(&file),
        "(Object) /file_a.txt filesystem:fake-volume/file_a.txt"
    );
}

#[test]
fn test_virtual_entries() {
    let fake = FakeEntry::new("fake-entry-label", RootType::Crostini);
    let list = EntryList::new("entry-list-label", RootType::MyFiles);
    list.add_entry(fake.clone()).unwrap();
    let volume = VolumeEntry::new(downloads_volume());
    volume.add_entry(fake.clone()).unwrap();

    assert_eq!(
        entry_debug_string(&Entry::from(fake)),
        "(FakeEntry) / fake-entry://crostini"
    );
    assert_eq!(
        entry_debug_string(&Entry::from(list)),
        "(EntryList) / entry-list://my_files"
    );
    assert_eq!(
        entry_debug_string(&Entry::from(volume)),
        "(VolumeEntry) / filesystem:downloads/"
    );
}

#[test]
fn test_optional_entries() {
    let (fs, _) = fixture_fs(64);
    let file: Entry = fs.file("/dir_a/file_e.txt").into();

    assert_eq!(entry_debug_string(None::<&Entry>), "entry is null");
    assert_eq!(
        entry_debug_string(Some(&file)),
        "(Object) /dir_a/file_e.txt filesystem:fake-volume/dir_a/file_e.txt"
    );
}
