//! Per-list state owner
//!
//! A [`ListSession`] is created when a collection is opened and dropped when
//! it closes; nothing in it is shared between lists. It owns the fetched
//! rows, the viewport, the render-mode decision (made once, at open), the
//! pager or window geometry depending on that decision, and the generation
//! counter that makes stale fetch responses detectable on arrival.

use log::debug;

use super::mode::{RenderMode, select_mode};
use super::pager::Pager;
use super::range::{RangeIndicator, VisibleRangeTracker};
use super::window::{self, VisibleWindow, Viewport};

/// Tunables for one list session, fixed at open time
#[derive(Debug, Clone, Copy)]
pub struct ListKnobs {
    /// Rows per fetch (and per page in paginated mode)
    pub page_size: usize,
    /// Collection size above which the list renders windowed
    pub virtualization_threshold: usize,
    /// Extra rows materialized beyond each viewport edge
    pub overscan: usize,
    /// Estimated row height in cells
    pub row_height: u32,
}

impl Default for ListKnobs {
    fn default() -> Self {
        Self {
            page_size: 50,
            virtualization_threshold: super::mode::DEFAULT_VIRTUALIZATION_THRESHOLD,
            overscan: 5,
            row_height: 3,
        }
    }
}

/// A fetch the session wants its owner to run against the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Generation the response must still match to be applied
    pub generation: u64,
    pub offset: usize,
    pub limit: usize,
}

/// State for one open list
#[derive(Debug)]
pub struct ListSession<T> {
    list_id: String,
    knobs: ListKnobs,
    mode: RenderMode,
    items: Vec<T>,
    /// Authoritative collection size from the server, optimistically
    /// decremented on confirmed removals
    total: usize,
    viewport: Viewport,
    pager: Pager,
    selected: usize,
    tracker: VisibleRangeTracker,
    generation: u64,
    loading: bool,
    pending_restore: Option<u64>,
}

impl<T> ListSession<T> {
    /// Open a list from its first fetched page.
    ///
    /// The render mode is decided here from the server total and stays fixed
    /// for the life of the session, even if later removals cross back under
    /// the threshold.
    pub fn open(list_id: impl Into<String>, first_page: Vec<T>, total: usize, knobs: ListKnobs) -> Self {
        let mode = select_mode(total, knobs.virtualization_threshold);
        Self {
            list_id: list_id.into(),
            knobs,
            mode,
            items: first_page,
            total,
            viewport: Viewport::default(),
            pager: Pager::new(total, knobs.page_size),
            selected: 0,
            tracker: VisibleRangeTracker::new(),
            generation: 0,
            loading: false,
            pending_restore: None,
        }
    }

    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn knobs(&self) -> ListKnobs {
        self.knobs
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    // ---- fetching ----------------------------------------------------

    /// Next fetch needed to finish materializing a windowed list, if any.
    ///
    /// Windowed lists load the collection page by page; the owner keeps
    /// running these until `None`.
    pub fn fill_request(&self) -> Option<FetchRequest> {
        if self.mode == RenderMode::Windowed && self.items.len() < self.total {
            Some(FetchRequest {
                generation: self.generation,
                offset: self.items.len(),
                limit: self.knobs.page_size,
            })
        } else {
            None
        }
    }

    /// Move to the next page (paginated mode); returns the fetch to run.
    pub fn next_page(&mut self) -> Option<FetchRequest> {
        if self.mode != RenderMode::Paginated || !self.pager.next_page() {
            return None;
        }
        Some(self.page_request())
    }

    /// Move to the previous page (paginated mode); returns the fetch to run.
    pub fn prev_page(&mut self) -> Option<FetchRequest> {
        if self.mode != RenderMode::Paginated || !self.pager.prev_page() {
            return None;
        }
        Some(self.page_request())
    }

    fn page_request(&mut self) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        FetchRequest {
            generation: self.generation,
            offset: self.pager.offset(),
            limit: self.knobs.page_size,
        }
    }

    /// Refetch the region currently on screen: the current page in
    /// paginated mode, the page covering the top of the window otherwise.
    pub fn refetch_request(&mut self) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        let offset = match self.mode {
            RenderMode::Paginated => self.pager.offset(),
            RenderMode::Windowed => {
                let first = (self.viewport.scroll_offset
                    / u64::from(self.knobs.row_height.max(1))) as usize;
                (first / self.knobs.page_size) * self.knobs.page_size
            }
        };
        FetchRequest {
            generation: self.generation,
            offset,
            limit: self.knobs.page_size,
        }
    }

    /// Apply a fetched page.
    ///
    /// Returns `false` (and changes nothing) when the response generation no
    /// longer matches: a newer fetch was issued for this list in the interim
    /// and this response lost the race.
    pub fn apply_fetch(&mut self, generation: u64, offset: usize, events: Vec<T>, total: usize) -> bool {
        if generation != self.generation {
            debug!(
                "list {}: discarding stale fetch (gen {} != {})",
                self.list_id, generation, self.generation
            );
            return false;
        }
        self.loading = false;
        self.total = total;
        self.pager.set_total(total);
        match self.mode {
            RenderMode::Paginated => {
                self.items = events;
            }
            RenderMode::Windowed => {
                // Splice into place; a fill lands exactly at the tail.
                if offset >= self.items.len() {
                    self.items.extend(events);
                } else {
                    let end = (offset + events.len()).min(self.items.len());
                    self.items.splice(offset..end, events);
                }
                self.items.truncate(total);
            }
        }
        self.clamp_scroll();
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        self.tracker.invalidate();
        true
    }

    /// Mark a fetch as failed so the loading affordance clears; the owner
    /// surfaces the error itself.
    pub fn fetch_failed(&mut self, generation: u64) {
        if generation == self.generation {
            self.loading = false;
        }
    }

    // ---- row removal -------------------------------------------------

    /// Drop a row after its removal was confirmed by the gateway.
    ///
    /// The scroll offset is deliberately untouched; only the row count and
    /// the derived window change, so the list stays visually in place
    /// modulo the removed row. The owner follows up with
    /// [`Self::refetch_request`] to reconcile against the server.
    pub fn remove_row(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.total = self.total.saturating_sub(1);
        self.pager.set_total(self.total);
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        self.clamp_scroll();
        self.tracker.invalidate();
        Some(removed)
    }

    // ---- viewport ----------------------------------------------------

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record the surface height measured during layout.
    pub fn set_viewport_height(&mut self, height: u32) {
        self.viewport.height = height;
        self.clamp_scroll();
    }

    pub fn scroll_to(&mut self, offset: u64) {
        self.viewport.scroll_offset = offset.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let next = if delta < 0 {
            self.viewport.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.viewport.scroll_offset.saturating_add(delta as u64)
        };
        self.scroll_to(next);
    }

    pub fn max_scroll(&self) -> u64 {
        window::max_scroll_offset(self.items.len(), self.knobs.row_height, self.viewport.height)
    }

    fn clamp_scroll(&mut self) {
        self.viewport.scroll_offset = self.viewport.scroll_offset.min(self.max_scroll());
    }

    // ---- selection ---------------------------------------------------

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    /// Select a row and scroll just enough to keep it fully visible.
    pub fn set_selected_index(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.selected = index.min(self.items.len() - 1);
        if self.mode == RenderMode::Windowed {
            self.scroll_selected_into_view();
        }
    }

    fn scroll_selected_into_view(&mut self) {
        let row_height = u64::from(self.knobs.row_height.max(1));
        let row_top = self.selected as u64 * row_height;
        let row_bottom = row_top + row_height;
        let view_bottom = self.viewport.scroll_offset + u64::from(self.viewport.height);
        if row_top < self.viewport.scroll_offset {
            self.scroll_to(row_top);
        } else if row_bottom > view_bottom {
            self.scroll_to(row_bottom.saturating_sub(u64::from(self.viewport.height)));
        }
    }

    // ---- per-frame geometry ------------------------------------------

    /// Start a draw frame: applies any scroll restoration scheduled by the
    /// navigation stack. Call once per frame before `window`/`visible_range`.
    pub fn begin_frame(&mut self) {
        if let Some(offset) = self.pending_restore.take() {
            self.scroll_to(offset);
        }
    }

    /// The window of rows to materialize this frame (windowed mode).
    pub fn window(&self) -> Option<VisibleWindow> {
        window::compute_window(
            self.items.len(),
            self.knobs.row_height,
            self.viewport,
            self.knobs.overscan,
        )
    }

    /// Reserved scrollable height for the full (virtual) list.
    pub fn virtual_height(&self) -> u64 {
        window::total_virtual_height(self.items.len(), self.knobs.row_height)
    }

    /// Frame-coalesced "showing X–Y of N" indicator (windowed mode).
    pub fn visible_range(&mut self, frame: u64) -> Option<RangeIndicator> {
        self.tracker
            .on_frame(frame, self.items.len(), self.knobs.row_height, self.viewport)
    }

    // ---- navigation-stack restoration --------------------------------

    /// Queue a scroll offset to re-apply on the next draw frame, after the
    /// closing child view has unmounted.
    pub fn schedule_restore(&mut self, offset: u64) {
        self.pending_restore = Some(offset);
    }
}
