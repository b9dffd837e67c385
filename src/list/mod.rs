//! Adaptive list rendering engine
//!
//! Large event collections are rendered through one of two strategies:
//! small collections get plain page-at-a-time rendering ([`Pager`]), large
//! ones get windowed rendering where only the rows near the viewport are
//! materialized ([`compute_window`]). The strategy is picked once per list
//! open ([`select_mode`]) and kept for the life of the session.
//!
//! [`ListSession`] owns everything one open list needs: the fetched rows,
//! the viewport, the fetch generation counter, and the per-frame visible
//! range. [`NavStack`] records scroll positions across nested detail views
//! so that backing out of a child view lands exactly where the user left.

pub mod mode;
pub mod nav;
pub mod pager;
pub mod range;
pub mod session;
pub mod window;

#[cfg(test)]
mod tests;

pub use mode::{DEFAULT_VIRTUALIZATION_THRESHOLD, RenderMode, select_mode};
pub use nav::NavStack;
pub use pager::{MAX_PAGE_SIZE, Pager};
pub use range::{RangeIndicator, VisibleRangeTracker};
pub use session::{FetchRequest, ListKnobs, ListSession};
pub use window::{VisibleWindow, Viewport, compute_window, total_virtual_height};
