//! Integration tests walking a real directory tree on disk

use entrykit::config::ListingConfig;
use entrykit::fs::{FileSystem, LocalBackend};
use entrykit::{collect_files, Walker};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

fn create_tree(root: &Path) {
    for dir in ["dir_a/dir_b/dir_c", "dir_d", "empty"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    for file in [
        "file_a.txt",
        "file_b.txt",
        "dir_a/file_e.txt",
        "dir_a/file_f.txt",
        "dir_a/dir_b/dir_c/file_g.txt",
        "dir_d/file_h.txt",
    ] {
        fs::write(root.join(file), file).unwrap();
    }
}

/// Files `walkdir` sees when descending `max_depth` levels below the root.
fn oracle_paths(root: &Path, max_depth: Option<usize>) -> Vec<String> {
    let mut walker = WalkDir::new(root).min_depth(1);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth + 1);
    }
    let mut paths: Vec<String> = walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(root).unwrap();
            format!("/{}", relative.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    paths.sort();
    paths
}

async fn walked_paths(root: &Path, max_depth: Option<usize>, batch_size: usize) -> Vec<String> {
    let backend = LocalBackend::with_config(root, &ListingConfig { batch_size }).unwrap();
    let volume = FileSystem::new("local", backend);
    let mut paths: Vec<String> = collect_files(&volume.root(), max_depth)
        .await
        .unwrap()
        .iter()
        .map(|f| f.full_path().to_string())
        .collect();
    paths.sort();
    paths
}

#[tokio::test]
async fn test_matches_walkdir_at_every_depth() {
    let temp_dir = TempDir::new().unwrap();
    create_tree(temp_dir.path());

    for max_depth in [Some(0), Some(1), Some(2), Some(3), None] {
        for batch_size in [1, 2, 64] {
            assert_eq!(
                walked_paths(temp_dir.path(), max_depth, batch_size).await,
                oracle_paths(temp_dir.path(), max_depth),
                "max_depth={:?} batch_size={}",
                max_depth,
                batch_size
            );
        }
    }
}

#[tokio::test]
async fn test_file_sizes_are_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("data.bin"), vec![0u8; 2049]).unwrap();

    let volume = FileSystem::new("local", LocalBackend::new(temp_dir.path()).unwrap());
    let files = collect_files(&volume.root(), None).await.unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].size(), Some(2049));
    assert_eq!(files[0].to_url(), "filesystem:local/data.bin");
}

#[tokio::test]
async fn test_missing_subdirectory_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let volume = FileSystem::new("local", LocalBackend::new(temp_dir.path()).unwrap());

    let err = Walker::new()
        .walk(&volume.directory("/gone"), |_| {}, || false)
        .await
        .unwrap_err();
    assert_eq!(err.path(), "/gone");
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlinks_are_not_followed() {
    let temp_dir = TempDir::new().unwrap();
    create_tree(temp_dir.path());
    std::os::unix::fs::symlink(temp_dir.path().join("dir_a"), temp_dir.path().join("link")).unwrap();

    let paths = walked_paths(temp_dir.path(), None, 64).await;
    assert!(paths.iter().all(|p| !p.starts_with("/link")));
    assert_eq!(paths.len(), 6);
}
