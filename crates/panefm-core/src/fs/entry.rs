//! File entry representation.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

/// A single row in a panel listing.
///
/// Entries are rebuilt wholesale on every reload; the only field that ever
/// mutates is the selection flag. The display name normally equals the
/// path's final segment, but flat mode overrides it with a path relative to
/// the panel root (see [`FileEntry::with_display_name`]).
///
/// Names are normalized to NFC. macOS stores filenames in NFD (decomposed),
/// which makes composed-character names render as individual marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    display_name: String,
    selected: bool,
}

impl FileEntry {
    /// Creates an entry whose display name is the path's final segment.
    pub fn new(path: PathBuf) -> Self {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        Self {
            path,
            display_name,
            selected: false,
        }
    }

    /// Creates an entry with an explicit display name.
    ///
    /// Flat mode uses this to show the path relative to the panel root.
    pub fn with_display_name(path: PathBuf, display_name: &str) -> Self {
        Self {
            path,
            display_name: display_name.nfc().collect(),
            selected: false,
        }
    }

    /// Returns the full (absolute) path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the name shown to the user.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns `true` if the display name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.display_name.starts_with('.')
    }

    /// Returns `true` if this entry is marked selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Flips the selection flag.
    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }
}
