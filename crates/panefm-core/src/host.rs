//! Capabilities the hosting application injects into a panel.
//!
//! The panel never talks to a rendering surface, a status line, or a
//! "recently visited" store directly; it calls these traits. Hosts that do
//! not care about one of them pass the corresponding `Null*` implementation.

use std::path::Path;

/// Sink for directory-visit notifications (a frecency/recency store).
pub trait VisitTracker {
    /// Records that `path` was navigated to. Fire-and-forget.
    fn visit(&self, path: &Path);
}

/// Sink for user-facing status messages.
pub trait Notifier {
    /// Reports a non-fatal condition.
    fn warn(&self, message: &str);
    /// Reports an error.
    fn err(&self, message: &str);
}

/// The scrollable surface the panel's rows are rendered on.
pub trait ViewportReporter {
    /// Number of rows that fit in one page of the viewport.
    fn row_count(&self) -> usize;
    /// Scrolls so that `row` is the first visible row.
    fn scroll_to(&self, row: usize);
}

/// [`VisitTracker`] that discards all notifications.
pub struct NullVisitTracker;

impl VisitTracker for NullVisitTracker {
    fn visit(&self, _path: &Path) {}
}

/// [`Notifier`] that discards all messages.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn warn(&self, _message: &str) {}
    fn err(&self, _message: &str) {}
}

/// [`ViewportReporter`] for headless hosts; reports a zero-row viewport.
pub struct NullViewport;

impl ViewportReporter for NullViewport {
    fn row_count(&self) -> usize {
        0
    }
    fn scroll_to(&self, _row: usize) {}
}
