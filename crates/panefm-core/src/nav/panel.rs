//! The panel state machine: one navigable file listing.
//!
//! A [`Panel`] owns a current directory, the entries loaded from it, a
//! cursor/selection model over the *visible* projection of those entries,
//! back/forward history, and the single live filesystem watch that keeps
//! the listing in sync with the disk.
//!
//! All mutation happens on one control thread. Watch callbacks only send a
//! [`ChangeEvent`] into the channel supplied at construction; the host
//! drains that channel on the control thread and hands each event to
//! [`Panel::on_fs_change`].

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use crate::config::Config;
use crate::error::CoreError;
use crate::fs::entry::FileEntry;
use crate::fs::list::{flatten_directory, read_directory};
use crate::fs::watcher::{ChangeCallback, DirectoryWatcher, NoopHandle, WatchHandle};
use crate::host::{Notifier, ViewportReporter, VisitTracker};
use crate::nav::filter::visible_indices;
use crate::nav::history::History;

/// Rows kept above the cursor when the viewport scrolls to follow it.
const SCROLL_MARGIN: usize = 10;

/// A filesystem change notification, tagged with the watch generation it
/// was installed under.
///
/// Hosts treat this as opaque: receive it from the channel, pass it to
/// [`Panel::on_fs_change`]. Events from a watch that has since been
/// replaced are dropped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    generation: u64,
}

/// A navigable file-listing state machine.
pub struct Panel {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    // Stored unclamped; may transiently sit outside the visible range
    // until the next read through `clamped_cursor`.
    cursor: isize,
    filter: String,
    flat_mode: bool,
    show_hidden: bool,
    max_flat_mode_size: usize,
    history: History,
    watcher: Box<dyn DirectoryWatcher>,
    watch_handle: Box<dyn WatchHandle>,
    generation: u64,
    changes: Sender<ChangeEvent>,
    visits: Box<dyn VisitTracker>,
    notifier: Box<dyn Notifier>,
    viewport: Box<dyn ViewportReporter>,
}

impl Panel {
    /// Creates a panel with no directory loaded.
    ///
    /// `changes` is the sending half of the host's change-event channel;
    /// the host drains the receiving half on its control thread and calls
    /// [`Panel::on_fs_change`] for each event.
    pub fn new(
        config: &Config,
        watcher: Box<dyn DirectoryWatcher>,
        visits: Box<dyn VisitTracker>,
        notifier: Box<dyn Notifier>,
        viewport: Box<dyn ViewportReporter>,
        changes: Sender<ChangeEvent>,
    ) -> Self {
        Self {
            current_dir: PathBuf::new(),
            entries: Vec::new(),
            cursor: 0,
            filter: String::new(),
            flat_mode: false,
            show_hidden: config.general.show_hidden,
            max_flat_mode_size: config.general.max_flat_mode_size,
            history: History::new(),
            watcher,
            watch_handle: Box::new(NoopHandle),
            generation: 0,
            changes,
            visits,
            notifier,
            viewport,
        }
    }

    /// Returns the directory currently being shown.
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Returns the full loaded listing, before filtering.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Returns the navigation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the current filter text.
    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// Returns `true` while the panel shows a recursive flat listing.
    pub fn flat_mode(&self) -> bool {
        self.flat_mode
    }

    /// Returns `true` if dot-prefixed entries are shown.
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Sets the filter text. The stored cursor is left alone; because the
    /// cursor is clamped on every read, narrowing the list may change which
    /// entry is "current".
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    /// Clears the filter text.
    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Flips hidden-file visibility.
    pub fn toggle_show_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
    }

    /// Returns the entries surviving the filter text and the hidden-file
    /// rule, in listing order. Recomputed on every call.
    pub fn visible_entries(&self) -> Vec<&FileEntry> {
        self.visible()
            .into_iter()
            .map(|i| &self.entries[i])
            .collect()
    }

    /// The cursor clamped into the visible range: `0` when the visible list
    /// is empty, otherwise within `[0, visible_count - 1]`.
    pub fn clamped_cursor(&self) -> usize {
        let count = self.visible().len();
        if count == 0 {
            0
        } else {
            self.cursor.clamp(0, count as isize - 1) as usize
        }
    }

    /// Returns the entry under the cursor, if any entry is visible.
    pub fn current_entry(&self) -> Option<&FileEntry> {
        self.visible()
            .get(self.clamped_cursor())
            .map(|&i| &self.entries[i])
    }

    /// Moves the cursor by `delta` rows, scrolling the viewport to follow.
    ///
    /// With `extend_selection`, every visible entry between the pre-move and
    /// post-move cursor positions (inclusive, either direction) is marked
    /// selected. Without it the selection is untouched.
    pub fn move_cursor(&mut self, delta: isize, extend_selection: bool) {
        let from = self.clamped_cursor();
        self.cursor = from as isize + delta;

        let to = self.clamped_cursor();
        self.viewport.scroll_to(to.saturating_sub(SCROLL_MARGIN));

        if extend_selection {
            self.select_range(from, to);
        }
    }

    /// Marks the visible entries at positions `[a, b]` (either order)
    /// selected. Positions outside the visible range are logged and skipped.
    pub fn select_range(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let visible = self.visible();
        for pos in lo..=hi {
            match visible.get(pos) {
                Some(&i) => self.entries[i].set_selected(true),
                None => {
                    tracing::debug!(index = pos, visible = visible.len(), "selection index out of range");
                }
            }
        }
    }

    /// Marks the entry under the cursor selected.
    pub fn select_current(&mut self) {
        if let Some(&i) = self.visible().get(self.clamped_cursor()) {
            self.entries[i].set_selected(true);
        }
    }

    /// Flips the selection of the entry under the cursor.
    pub fn toggle_current_selection(&mut self) {
        if let Some(&i) = self.visible().get(self.clamped_cursor()) {
            self.entries[i].toggle_selected();
        }
    }

    /// Marks every visible entry selected.
    pub fn select_all(&mut self) {
        for i in self.visible() {
            self.entries[i].set_selected(true);
        }
    }

    /// Clears the selection of every visible entry.
    pub fn deselect_all(&mut self) {
        for i in self.visible() {
            self.entries[i].set_selected(false);
        }
    }

    /// Returns every visible selected entry, plus the entry under the
    /// cursor even when unselected, in visible order.
    pub fn selected_entries(&self) -> Vec<&FileEntry> {
        let cursor = self.clamped_cursor();
        self.visible()
            .iter()
            .enumerate()
            .filter(|(pos, &i)| self.entries[i].is_selected() || *pos == cursor)
            .map(|(_, &i)| &self.entries[i])
            .collect()
    }

    /// Full paths of [`Panel::selected_entries`].
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        self.selected_entries()
            .into_iter()
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    /// Rows per viewport page, as reported by the host.
    pub fn page_rows(&self) -> usize {
        self.viewport.row_count()
    }

    /// Title line for the panel: directory, flat-mode marker, filter,
    /// hidden-files marker.
    pub fn title(&self) -> String {
        let mut title = self.current_dir.display().to_string();
        if self.flat_mode {
            title.push_str("/** ");
        }
        if !self.filter.is_empty() {
            title.push_str(&format!(" [{}]", self.filter));
        }
        if self.show_hidden {
            title.push_str(" .");
        }
        title
    }

    /// Navigates to `target`, recording it in history.
    ///
    /// Silently ignored unless `target` exists and is a directory.
    pub fn change_directory(&mut self, target: &Path) {
        self.cd(target, true);
    }

    /// Navigates back in history.
    pub fn back(&mut self) {
        if let Some(path) = self.history.back() {
            self.cd(&path, false);
        }
    }

    /// Navigates forward in history.
    pub fn forward(&mut self) {
        if let Some(path) = self.history.forward() {
            self.cd(&path, false);
        }
    }

    fn cd(&mut self, target: &Path, record_history: bool) {
        if !target.exists() || !target.is_dir() {
            return;
        }

        if record_history {
            self.history.push(target.to_path_buf());
        }
        self.visits.visit(target);

        self.current_dir = target.to_path_buf();
        self.flat_mode = false;
        self.filter.clear();

        self.watch_handle.close();
        self.load_entries();
        self.install_watch(false);
    }

    /// Toggles between the shallow listing and the recursive flat listing.
    ///
    /// Enabling runs the flatten traversal first; if it exceeds the
    /// configured cap the mode change is rolled back, the listing and the
    /// live watch are untouched, and the failure is reported through the
    /// notifier. Disabling re-issues a normal navigation into the current
    /// directory, restoring a fresh shallow listing and watch.
    pub fn toggle_flat_mode(&mut self) {
        if self.flat_mode {
            self.watch_handle.close();
            self.flat_mode = false;
            let dir = self.current_dir.clone();
            self.change_directory(&dir);
            self.notifier.warn("flat mode: off");
            return;
        }

        match flatten_directory(&self.current_dir, self.max_flat_mode_size) {
            Ok(listing) => {
                self.entries = listing.entries;
                self.flat_mode = true;
                self.watch_handle.close();
                self.install_watch(true);
                self.notifier.warn("flat mode: on");
            }
            Err(e @ CoreError::FlatModeOverflow(_)) => {
                self.notifier.err(&format!("flat mode: {e}"));
            }
            Err(e) => {
                self.notifier.err(&format!("flat mode failed: {e}"));
            }
        }
    }

    /// Handles one change event drained from the watch channel.
    ///
    /// Events from a watch that has since been replaced are dropped; the
    /// rest re-run the load for the current mode.
    pub fn on_fs_change(&mut self, event: ChangeEvent) {
        if event.generation != self.generation {
            tracing::trace!(
                event = event.generation,
                current = self.generation,
                "dropping stale watch event"
            );
            return;
        }

        if self.flat_mode {
            match flatten_directory(&self.current_dir, self.max_flat_mode_size) {
                Ok(listing) => self.entries = listing.entries,
                // Keep the previous flattened listing; the user can still
                // toggle out of flat mode.
                Err(e) => self.notifier.err(&format!("flat mode: {e}")),
            }
        } else {
            self.load_entries();
        }
    }

    fn visible(&self) -> Vec<usize> {
        visible_indices(&self.entries, &self.filter, self.show_hidden)
    }

    fn load_entries(&mut self) {
        match read_directory(&self.current_dir) {
            Ok(entries) => self.entries = entries,
            Err(e) => {
                tracing::warn!(dir = %self.current_dir.display(), error = %e, "directory load failed");
                self.notifier
                    .warn(&format!("cannot read {}: {e}", self.current_dir.display()));
            }
        }
    }

    fn install_watch(&mut self, recursive: bool) {
        self.generation += 1;
        let generation = self.generation;
        let tx = self.changes.clone();
        let on_change: ChangeCallback = Box::new(move || {
            let _ = tx.send(ChangeEvent { generation });
        });

        self.watch_handle = match self.watcher.watch(&self.current_dir, recursive, on_change) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(dir = %self.current_dir.display(), error = %e, "failed to watch directory");
                Box::new(NoopHandle)
            }
        };
    }
}
