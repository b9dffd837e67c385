//! Scroll restoration across nested detail views
//!
//! When a list row opens a child view (which may itself open a further
//! child), the list's scroll offset is captured into a frame before the
//! child is shown. Closing a child pops the matching frame and the owning
//! list re-applies the saved offset on its next draw. Frames are LIFO:
//! closing any child restores exactly the parent it was opened from, level
//! by level, no matter how long the child stayed open.

use log::debug;

/// One saved scroll position, tagged with the list it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavFrame {
    source_list: String,
    scroll_offset_at_open: u64,
}

/// LIFO stack of [`NavFrame`]s for all currently-open nested views
#[derive(Debug, Default)]
pub struct NavStack {
    frames: Vec<NavFrame>,
}

impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `scroll_offset` for `source_list` before its child opens.
    ///
    /// Must be called before the child view is shown so the offset reflects
    /// the state the user will expect to come back to.
    pub fn push(&mut self, source_list: &str, scroll_offset: u64) {
        self.frames.push(NavFrame {
            source_list: source_list.to_string(),
            scroll_offset_at_open: scroll_offset,
        });
    }

    /// Pop the most recent frame for `source_list` and return its offset.
    ///
    /// Returns `None` when no frame was recorded for that list; callers
    /// treat that as a restoration miss and carry on.
    pub fn pop(&mut self, source_list: &str) -> Option<u64> {
        let idx = self
            .frames
            .iter()
            .rposition(|f| f.source_list == source_list)?;
        let frame = self.frames.remove(idx);
        Some(frame.scroll_offset_at_open)
    }

    /// Drop every frame recorded for `source_list`.
    ///
    /// Called when a list unmounts entirely; any restoration its frames
    /// would have driven becomes a no-op instead of targeting a dead list.
    pub fn forget(&mut self, source_list: &str) {
        let before = self.frames.len();
        self.frames.retain(|f| f.source_list != source_list);
        if self.frames.len() != before {
            debug!(
                "dropped {} nav frame(s) for closed list {}",
                before - self.frames.len(),
                source_list
            );
        }
    }

    /// Number of currently recorded frames (equals open nested views whose
    /// parent is a list).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
