//! Render-mode selection for event lists
//!
//! Below the threshold a list is cheap enough to materialize in full and
//! page through; above it only the windowed path keeps the row count
//! bounded. The decision is made once when a list opens and never revisited
//! mid-session, so a collection hovering around the threshold cannot flap
//! between strategies while the user is scrolled mid-list.

/// Collection size above which a list switches to windowed rendering.
pub const DEFAULT_VIRTUALIZATION_THRESHOLD: usize = 50;

/// How a list renders its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Full materialization of one bounded page with Prev/Next controls
    Paginated,
    /// Only near-viewport rows materialized over a virtual scroll range
    Windowed,
}

impl RenderMode {
    pub fn label(&self) -> &'static str {
        match self {
            RenderMode::Paginated => "paged",
            RenderMode::Windowed => "windowed",
        }
    }
}

/// Pick the render mode for a collection of `total` items.
///
/// Pure and deterministic: `total > threshold` selects [`RenderMode::Windowed`],
/// anything else (including `total == threshold`) selects
/// [`RenderMode::Paginated`].
pub fn select_mode(total: usize, threshold: usize) -> RenderMode {
    if total > threshold {
        RenderMode::Windowed
    } else {
        RenderMode::Paginated
    }
}
