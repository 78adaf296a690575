//! Navigation history with back/forward support.

use std::path::PathBuf;

/// Back/forward stacks of visited directories, browser style.
///
/// The history tracks the currently-visited entry itself: [`History::push`]
/// moves the previous current entry onto the back stack, so callers push the
/// directory they are navigating *to* and the directory they are leaving is
/// what `back()` later returns. Pushing clears the forward stack.
#[derive(Debug, Clone, Default)]
pub struct History {
    back_stack: Vec<PathBuf>,
    forward_stack: Vec<PathBuf>,
    current: Option<PathBuf>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a navigation to `path`, clearing the forward stack.
    pub fn push(&mut self, path: PathBuf) {
        if let Some(previous) = self.current.take() {
            self.back_stack.push(previous);
        }
        self.current = Some(path);
        self.forward_stack.clear();
    }

    /// Steps back one entry and returns the directory to navigate to,
    /// or `None` if the back stack is empty.
    pub fn back(&mut self) -> Option<PathBuf> {
        let target = self.back_stack.pop()?;
        if let Some(previous) = self.current.take() {
            self.forward_stack.push(previous);
        }
        self.current = Some(target.clone());
        Some(target)
    }

    /// Steps forward one entry and returns the directory to navigate to,
    /// or `None` if the forward stack is empty.
    pub fn forward(&mut self) -> Option<PathBuf> {
        let target = self.forward_stack.pop()?;
        if let Some(previous) = self.current.take() {
            self.back_stack.push(previous);
        }
        self.current = Some(target.clone());
        Some(target)
    }

    /// Returns `true` if there is at least one entry on the back stack.
    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Returns `true` if there is at least one entry on the forward stack.
    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }
}
