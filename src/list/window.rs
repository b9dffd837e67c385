//! Window geometry for virtualized lists
//!
//! All heights and offsets are terminal cells. Row height is a fixed
//! estimate supplied by the caller; real rows that wrap differently are
//! tolerated and never remeasured, which keeps every computation here
//! O(visible rows) per scroll event.

/// Live scroll state of one list surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Distance scrolled from the top of the virtual list, in cells
    pub scroll_offset: u64,
    /// Height of the visible surface, in cells
    pub height: u32,
}

/// The contiguous index range that must be materialized for one frame
///
/// Derived from the live [`Viewport`] on every use and never stored, so it
/// cannot desynchronize from the actual scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    /// First materialized row (inclusive)
    pub start_index: usize,
    /// Last materialized row (inclusive)
    pub end_index: usize,
    /// Cell offset at which the materialized block is positioned
    pub top_offset: u64,
}

/// Height of the full virtual list: depends only on the row count and the
/// estimated row height, never on scroll position.
pub fn total_virtual_height(n: usize, row_height: u32) -> u64 {
    n as u64 * u64::from(row_height.max(1))
}

/// Largest scroll offset that still keeps the viewport inside the list.
pub fn max_scroll_offset(n: usize, row_height: u32, viewport_height: u32) -> u64 {
    total_virtual_height(n, row_height).saturating_sub(u64::from(viewport_height))
}

/// Compute the window of rows to materialize for the current viewport.
///
/// Returns `None` for an empty collection (nothing rendered, zero reserved
/// height). Otherwise the window covers every row at least partially inside
/// `[scroll_offset, scroll_offset + height]` plus up to `overscan` extra
/// rows on each side, clamped to `[0, n - 1]`.
pub fn compute_window(
    n: usize,
    row_height: u32,
    viewport: Viewport,
    overscan: usize,
) -> Option<VisibleWindow> {
    if n == 0 {
        return None;
    }
    let row_height = u64::from(row_height.max(1));

    let first_visible = (viewport.scroll_offset / row_height) as usize;
    let bottom = viewport.scroll_offset + u64::from(viewport.height);
    let last_visible = bottom.div_ceil(row_height) as usize;

    let start_index = first_visible.saturating_sub(overscan).min(n - 1);
    let end_index = last_visible.saturating_add(overscan).min(n - 1);

    Some(VisibleWindow {
        start_index,
        end_index,
        top_offset: start_index as u64 * row_height,
    })
}

/// The rows actually visible in the viewport, without overscan.
///
/// Returns a half-open `(first, end)` pair of 0-based indices, `end`
/// exclusive and clamped to `n`. `None` for an empty collection.
pub fn visible_rows(n: usize, row_height: u32, viewport: Viewport) -> Option<(usize, usize)> {
    if n == 0 {
        return None;
    }
    let row_height = u64::from(row_height.max(1));

    let first = ((viewport.scroll_offset / row_height) as usize).min(n - 1);
    let bottom = viewport.scroll_offset + u64::from(viewport.height);
    let end = (bottom.div_ceil(row_height) as usize).min(n);

    Some((first, end.max(first + 1)))
}
