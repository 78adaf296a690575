//! PaneFM core library — UI-agnostic panel state and navigation.
//!
//! `panefm-core` is the state machine behind one panel of a dual-pane file
//! browser: the current directory, its listing, a cursor/selection model
//! over the visible entries, back/forward history, an optional recursive
//! "flat" listing mode, and the filesystem watch that keeps the listing in
//! sync with the disk. It is intentionally decoupled from any UI framework;
//! the hosting frontend injects the capabilities in [`host`] and drains the
//! watch-event channel on its control thread.
//!
//! # Modules
//!
//! - [`fs`] — [`FileEntry`], shallow/flat directory listing, the watch capability.
//! - [`nav`] — the [`Panel`] state machine, [`History`], visible-entry filtering.
//! - [`host`] — capabilities the hosting application provides.
//! - [`config`] — TOML-based settings.
//! - [`error`] — unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod fs;
pub mod host;
pub mod nav;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use fs::entry::FileEntry;
pub use fs::list::{flatten_directory, read_directory, FlatListing, SkippedEntry};
pub use fs::watcher::{
    ChangeCallback, DirectoryWatcher, NoopHandle, NotifyWatcher, WatchHandle,
};
pub use host::{
    Notifier, NullNotifier, NullViewport, NullVisitTracker, ViewportReporter, VisitTracker,
};
pub use nav::filter::{is_visible, matches_filter, visible_indices};
pub use nav::history::History;
pub use nav::panel::{ChangeEvent, Panel};
