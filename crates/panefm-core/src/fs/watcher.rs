//! Filesystem watch capability.
//!
//! A panel keeps its listing live by holding exactly one [`WatchHandle`] at
//! a time: non-recursive for a shallow listing, recursive for flat mode.
//! [`NotifyWatcher`] is the production implementation, built on [`notify`]
//! with debouncing; tests substitute their own [`DirectoryWatcher`].

use std::path::Path;
use std::time::Duration;

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};

use crate::error::{CoreError, CoreResult};

/// Callback invoked when the watched tree changes.
///
/// Delivery may happen on a watcher-internal thread; implementations of the
/// callback are expected to do no more than signal the control thread.
pub type ChangeCallback = Box<dyn Fn() + Send>;

/// Capability to watch a directory (optionally its whole subtree) for
/// changes.
pub trait DirectoryWatcher {
    /// Starts watching `path`, invoking `on_change` on every change batch.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Watch`] if the watch cannot be established.
    fn watch(
        &mut self,
        path: &Path,
        recursive: bool,
        on_change: ChangeCallback,
    ) -> CoreResult<Box<dyn WatchHandle>>;
}

/// A live watch subscription.
pub trait WatchHandle {
    /// Stops the watch. Idempotent; later calls are no-ops.
    fn close(&mut self);
}

/// Inert handle held before the first navigation and during teardown.
pub struct NoopHandle;

impl WatchHandle for NoopHandle {
    fn close(&mut self) {}
}

/// [`DirectoryWatcher`] backed by [`notify`] with a small debounce window,
/// so bursts of filesystem events collapse into one reload.
pub struct NotifyWatcher {
    debounce: Duration,
}

impl NotifyWatcher {
    /// Creates a watcher with the default 200 ms debounce window.
    pub fn new() -> Self {
        Self {
            debounce: Duration::from_millis(200),
        }
    }

    /// Creates a watcher with a custom debounce window.
    pub fn with_debounce(debounce: Duration) -> Self {
        Self { debounce }
    }
}

impl Default for NotifyWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryWatcher for NotifyWatcher {
    fn watch(
        &mut self,
        path: &Path,
        recursive: bool,
        on_change: ChangeCallback,
    ) -> CoreResult<Box<dyn WatchHandle>> {
        let mut debouncer = new_debouncer(
            self.debounce,
            move |result: Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>| {
                match result {
                    Ok(events) => {
                        let has_change = events
                            .iter()
                            .any(|e| matches!(e.kind, DebouncedEventKind::Any));
                        if has_change {
                            on_change();
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "watch delivery error");
                    }
                }
            },
        )
        .map_err(|e| CoreError::Watch(e.to_string()))?;

        let mode = if recursive {
            notify::RecursiveMode::Recursive
        } else {
            notify::RecursiveMode::NonRecursive
        };
        debouncer
            .watcher()
            .watch(path, mode)
            .map_err(|e| CoreError::Watch(e.to_string()))?;

        Ok(Box::new(NotifyHandle {
            debouncer: Some(debouncer),
        }))
    }
}

/// Handle over a live debouncer; dropping the debouncer stops the watch.
struct NotifyHandle {
    debouncer: Option<Debouncer<notify::RecommendedWatcher>>,
}

impl WatchHandle for NotifyHandle {
    fn close(&mut self) {
        self.debouncer.take();
    }
}
