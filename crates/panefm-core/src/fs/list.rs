//! Directory listing operations: shallow reads and recursive flattening.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// Reads the immediate contents of a directory and returns them as
/// [`FileEntry`] values.
///
/// The returned entries are **unsorted** — filesystem enumeration order.
/// Children that vanish between enumeration and construction are dropped
/// silently; a watcher can fire mid-deletion.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::PermissionDenied(path.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;

    let mut entries = Vec::new();

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let child = dir_entry.path();
        if !child.exists() {
            continue;
        }
        entries.push(FileEntry::new(child));
    }

    Ok(entries)
}

/// The result of a successful flatten traversal.
#[derive(Debug)]
pub struct FlatListing {
    /// Every regular file under the root, display names relative to it.
    pub entries: Vec<FileEntry>,
    /// Paths that could not be read during the walk, with the reason.
    pub skipped: Vec<SkippedEntry>,
}

/// A path skipped during a flatten traversal.
#[derive(Debug)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: std::io::Error,
}

/// Walks the tree under `root` depth-first and collects every regular file
/// as a [`FileEntry`] whose display name is its path relative to `root`,
/// joined with `/` separators.
///
/// The accumulated count is checked against `max_entries` after each
/// directory's children are appended, so the walk may overshoot the cap by
/// at most one directory's worth of entries but never descends further once
/// the overage is detected. Per-entry failures (permission denied, transient
/// disappearance) are logged, recorded in [`FlatListing::skipped`], and never
/// abort the traversal.
///
/// # Errors
///
/// - [`CoreError::NotFound`] / [`CoreError::NotADirectory`] — `root` is not
///   a readable directory.
/// - [`CoreError::FlatModeOverflow`] — more than `max_entries` files were
///   found; no listing is returned.
pub fn flatten_directory(root: &Path, max_entries: usize) -> CoreResult<FlatListing> {
    if !root.exists() {
        return Err(CoreError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CoreError::NotADirectory(root.to_path_buf()));
    }

    let mut listing = FlatListing {
        entries: Vec::new(),
        skipped: Vec::new(),
    };
    walk(root, root, max_entries, &mut listing);

    if listing.entries.len() > max_entries {
        return Err(CoreError::FlatModeOverflow(max_entries));
    }
    Ok(listing)
}

fn walk(root: &Path, dir: &Path, max_entries: usize, out: &mut FlatListing) {
    if out.entries.len() > max_entries {
        return;
    }

    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "skipping unreadable directory");
            out.skipped.push(SkippedEntry {
                path: dir.to_path_buf(),
                reason: e,
            });
            return;
        }
    };

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = dir_entry.path();
        // Follows symlinks, matching the shallow listing's view of the tree.
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => walk(root, &path, max_entries, out),
            Ok(meta) if meta.is_file() => {
                let name = relative_display_name(root, &path);
                out.entries.push(FileEntry::with_display_name(path, &name));
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                out.skipped.push(SkippedEntry { path, reason: e });
            }
        }
    }
}

/// Renders `path` relative to `root` with forward-slash separators.
fn relative_display_name(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
