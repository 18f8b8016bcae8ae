//! Remote destination naming.
//!
//! A destination is `<folder>/<user>_<basename>`, so two users uploading a
//! file with the same name do not collide, and re-uploading the same file
//! name always targets the same key.

use std::path::Path;

/// Final path component of `local_path` as UTF-8, if it has one.
///
/// Paths ending in `..` or a bare root have no file name and yield `None`,
/// as do names that are not valid UTF-8 (they cannot form a remote key).
pub fn trace_basename(local_path: &Path) -> Option<&str> {
    local_path.file_name().and_then(|name| name.to_str())
}

/// Joins `folder` with `<user>_<file_name>`.
///
/// Trailing slashes on `folder` are ignored; an empty folder yields the bare
/// object name.
pub fn destination_path(folder: &str, user: &str, file_name: &str) -> String {
    let folder = folder.trim_end_matches('/');
    if folder.is_empty() {
        format!("{user}_{file_name}")
    } else {
        format!("{folder}/{user}_{file_name}")
    }
}
