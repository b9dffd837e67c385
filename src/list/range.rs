//! Frame-coalesced "showing X–Y of N" tracking
//!
//! Scroll input can arrive far faster than the draw loop runs. The tracker
//! recomputes the human-readable range at most once per drawn frame; offsets
//! that come and go between frames are simply never observed, which is safe
//! because the window math is idempotent given an offset. The result only
//! feeds the indicator text, never row content, so updating it cannot loop
//! back into the renderer.

use super::window::{Viewport, visible_rows};

/// 1-based display range for the list footer/title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeIndicator {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl RangeIndicator {
    /// "21-28 of 200" style label
    pub fn label(&self) -> String {
        format!("{}-{} of {}", self.start, self.end, self.total)
    }
}

/// Recomputes the visible range at most once per draw frame
#[derive(Debug, Default)]
pub struct VisibleRangeTracker {
    last_frame: Option<u64>,
    cached: Option<RangeIndicator>,
}

impl VisibleRangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute for `frame` unless this frame was already handled.
    ///
    /// `frame` is the draw-loop counter; repeated calls with the same value
    /// return the cached indicator unchanged.
    pub fn on_frame(
        &mut self,
        frame: u64,
        n: usize,
        row_height: u32,
        viewport: Viewport,
    ) -> Option<RangeIndicator> {
        if self.last_frame == Some(frame) {
            return self.cached;
        }
        self.last_frame = Some(frame);
        self.cached = visible_rows(n, row_height, viewport).map(|(first, end)| RangeIndicator {
            start: first + 1,
            end,
            total: n,
        });
        self.cached
    }

    /// Last computed indicator, if any frame has been handled yet.
    pub fn current(&self) -> Option<RangeIndicator> {
        self.cached
    }

    /// Drop the cache so the next frame recomputes even if the offset is
    /// unchanged (used after removals change `n`).
    pub fn invalidate(&mut self) {
        self.last_frame = None;
        self.cached = None;
    }
}
