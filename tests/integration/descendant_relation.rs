//! Integration tests for ancestor/descendant queries across entry kinds

use super::test_utils::{downloads_volume, fixture_fs};
use entrykit::{
    is_descendant_entry, is_same_entry, is_same_file_system, Entry, EntryError, EntryList,
    FakeEntry, RootType, VolumeEntry,
};

struct Fixture {
    root: Entry,
    folder: Entry,
    sub_folder: Entry,
    file: Entry,
    deep_file: Entry,
    fake_entry: Entry,
    entry_list: Entry,
    volume_entry: Entry,
    folder1: Entry,
}

fn fixture() -> Fixture {
    let (fs, _) = fixture_fs(64);

    let fake = FakeEntry::new("fake-entry-label", RootType::Crostini);
    let list = EntryList::new("entry-list-label", RootType::MyFiles);
    list.add_entry(fake.clone()).unwrap();

    let info = downloads_volume();
    let folder1 = info.filesystem.directory("/folder1");
    let volume = VolumeEntry::new(info);
    volume.add_entry(fake.clone()).unwrap();

    Fixture {
        root: fs.root().into(),
        folder: fs.directory("/dir_a").into(),
        sub_folder: fs.directory("/dir_a/dir_b").into(),
        file: fs.file("/file_a.txt").into(),
        deep_file: fs.file("/dir_a/dir_b/dir_c/file_g.txt").into(),
        fake_entry: fake.into(),
        entry_list: list.into(),
        volume_entry: volume.into(),
        folder1: folder1.into(),
    }
}

#[test]
fn test_no_descendants() {
    let f = fixture();

    assert!(!is_descendant_entry(&f.file, &f.file));
    assert!(!is_descendant_entry(&f.root, &f.root));
    assert!(!is_descendant_entry(&f.deep_file, &f.root));
    assert!(!is_descendant_entry(&f.sub_folder, &f.root));
    assert!(!is_descendant_entry(&f.fake_entry, &f.root));
    assert!(!is_descendant_entry(&f.root, &f.fake_entry));
    assert!(!is_descendant_entry(&f.fake_entry, &f.entry_list));
    assert!(!is_descendant_entry(&f.fake_entry, &f.volume_entry));
    assert!(!is_descendant_entry(&f.folder1, &f.volume_entry));
}

#[test]
fn test_descendants() {
    let f = fixture();

    assert!(is_descendant_entry(&f.root, &f.file));
    assert!(is_descendant_entry(&f.root, &f.sub_folder));
    assert!(is_descendant_entry(&f.root, &f.deep_file));
    assert!(is_descendant_entry(&f.root, &f.folder));
    assert!(is_descendant_entry(&f.folder, &f.sub_folder));
    assert!(is_descendant_entry(&f.folder, &f.deep_file));
    assert!(is_descendant_entry(&f.entry_list, &f.fake_entry));
    assert!(is_descendant_entry(&f.volume_entry, &f.fake_entry));
    assert!(is_descendant_entry(&f.volume_entry, &f.folder1));
}

#[test]
fn test_volume_does_not_contain_other_file_system() {
    let f = fixture();
    assert!(!is_descendant_entry(&f.volume_entry, &f.deep_file));
    assert!(!is_descendant_entry(&f.root, &f.folder1));
}

#[test]
fn test_nested_virtual_containers() {
    let f = fixture();
    let outer = EntryList::new("outer", RootType::MyFiles);
    outer.add_entry(f.entry_list.clone()).unwrap();
    let outer: Entry = outer.into();

    // Reached through the inner list's explicit children
    assert!(is_descendant_entry(&outer, &f.entry_list));
    assert!(is_descendant_entry(&outer, &f.fake_entry));
    assert!(!is_descendant_entry(&f.entry_list, &outer));
}

#[test]
fn test_list_reaches_real_tree_of_child_volume() {
    let f = fixture();
    let list = EntryList::new("my files", RootType::MyFiles);
    list.add_entry(f.volume_entry.clone()).unwrap();
    let list: Entry = list.into();

    assert!(is_descendant_entry(&list, &f.volume_entry));
    assert!(is_descendant_entry(&list, &f.folder1));
}

#[test]
fn test_list_contains_root_of_child_volume() {
    let f = fixture();
    let list = EntryList::new("my files", RootType::MyFiles);
    list.add_entry(f.volume_entry.clone()).unwrap();
    let list: Entry = list.into();
    let volume_root: Entry = volume_root_of(&f).into();

    assert!(is_descendant_entry(&list, &volume_root));
    // The volume alone does not contain its own root
    assert!(!is_descendant_entry(&f.volume_entry, &volume_root));
    // The root of an unrelated file system stays outside the list
    assert!(!is_descendant_entry(&list, &f.root));
}

fn volume_root_of(f: &Fixture) -> entrykit::DirectoryEntry {
    match &f.volume_entry {
        Entry::Volume(volume) => volume.root().clone(),
        other => panic!("expected a volume, got {:?}", other),
    }
}

#[test]
fn test_adding_ancestor_is_rejected() {
    let list = EntryList::new("a", RootType::MyFiles);
    let inner = EntryList::new("b", RootType::MyFiles);
    list.add_entry(inner.clone()).unwrap();

    let err = inner.add_entry(list.clone()).unwrap_err();
    assert!(matches!(err, EntryError::WouldCycle { .. }));
    assert!(list.add_entry(list.clone()).is_err());
    assert_eq!(inner.len(), 0);
}

#[test]
fn test_same_entry_and_file_system() {
    let f = fixture();
    let (fs, _) = fixture_fs(64);
    let other_root: Entry = fs.root().into();
    let fake_twin: Entry = FakeEntry::new("fake-entry-label", RootType::Crostini).into();

    // Real entries compare by location
    assert!(is_same_entry(&f.root, &other_root));
    // Virtual entries compare by identity
    assert!(!is_same_entry(&f.fake_entry, &fake_twin));
    assert!(is_same_entry(&f.fake_entry, &f.fake_entry.clone()));

    assert!(is_same_file_system(&f.file, &f.deep_file));
    assert!(!is_same_file_system(&f.file, &f.folder1));
    assert!(is_same_file_system(&f.volume_entry, &f.folder1));
    assert!(!is_same_file_system(&f.fake_entry, &f.file));
}
