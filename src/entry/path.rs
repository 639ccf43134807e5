//! Entry path normalization utilities
//!
//! Entry paths are absolute within their file system, `/`-separated and
//! Unicode-normalized, so that relation queries can work on strings alone.

use crate::error::ListingError;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Path of a file system root.
pub const ROOT: &str = "/";

/// Normalize an entry path (without filesystem access)
///
/// This function:
/// 1. Normalizes Unicode to NFC
/// 2. Resolves `.` and `..` components (never above the root)
/// 3. Collapses repeated separators and removes trailing slashes
/// 4. Ensures a leading `/`
pub fn normalize_path_string(path: &str) -> String {
    let normalized: String = path.nfc().collect();

    let mut segments: Vec<&str> = Vec::new();
    for segment in normalized.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }

    if segments.is_empty() {
        return ROOT.to_string();
    }

    let mut result = String::with_capacity(normalized.len() + 1);
    for segment in segments {
        result.push('/');
        result.push_str(segment);
    }
    result
}

/// Join a child name onto a normalized parent path.
pub fn join(parent: &str, name: &str) -> String {
    if parent == ROOT {
        normalize_path_string(&format!("/{}", name))
    } else {
        normalize_path_string(&format!("{}/{}", parent, name))
    }
}

/// Final component of a normalized path; empty for the root.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// True when `candidate` lies strictly below `ancestor`.
///
/// Both paths must already be normalized. Containment is prefix-delimited:
/// `/dir_a` contains `/dir_a/x` but not `/dir_ab`.
pub fn is_strict_subpath(ancestor: &str, candidate: &str) -> bool {
    if ancestor == candidate {
        return false;
    }
    if ancestor == ROOT {
        return candidate.starts_with('/') && candidate.len() > 1;
    }
    candidate
        .strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Canonicalize an on-disk root directory for a local backend.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, ListingError> {
    let canonical = dunce::canonicalize(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ListingError::not_found(path.display().to_string()),
        _ => ListingError::Io(e),
    })?;

    if !canonical.is_dir() {
        return Err(ListingError::not_a_directory(
            canonical.display().to_string(),
        ));
    }

    Ok(canonical)
}
