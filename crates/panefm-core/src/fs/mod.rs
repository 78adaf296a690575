//! File system abstractions.
//!
//! [`entry::FileEntry`] represents one listing row, [`list`] holds the
//! shallow read and the recursive flatten, and [`watcher`] is the change
//! notification capability.

pub mod entry;
pub mod list;
pub mod watcher;

pub use entry::FileEntry;
pub use list::{FlatListing, SkippedEntry};
