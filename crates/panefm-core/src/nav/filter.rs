//! The visible-entry projection: filter text and hidden-file suppression.
//!
//! The visible list is recomputed from scratch on every access; it is a
//! view over the loaded entries, never cached state.

use crate::fs::entry::FileEntry;

/// Returns `true` if `entry`'s display name contains `filter`,
/// case-insensitively. An empty filter matches everything.
pub fn matches_filter(entry: &FileEntry, filter: &str) -> bool {
    filter.is_empty()
        || entry
            .display_name()
            .to_lowercase()
            .contains(&filter.to_lowercase())
}

/// Returns `true` if `entry` survives both the filter text and the
/// hidden-file rule.
pub fn is_visible(entry: &FileEntry, filter: &str, show_hidden: bool) -> bool {
    matches_filter(entry, filter) && (show_hidden || !entry.is_hidden())
}

/// Returns the indices into `entries` of the visible entries, in order.
///
/// Indices rather than references so callers can mutate the selection flags
/// of visible entries through the original slice.
pub fn visible_indices(entries: &[FileEntry], filter: &str, show_hidden: bool) -> Vec<usize> {
    let needle = filter.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            (needle.is_empty() || entry.display_name().to_lowercase().contains(&needle))
                && (show_hidden || !entry.is_hidden())
        })
        .map(|(i, _)| i)
        .collect()
}
