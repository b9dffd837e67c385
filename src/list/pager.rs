//! Page state for small collections
//!
//! Collections at or below the virtualization threshold render one fully
//! materialized page at a time. Page size is bounded, so no window math is
//! needed; Prev/Next clamp at the ends instead of wrapping.

/// Upper bound on page size; callers asking for more are clamped.
pub const MAX_PAGE_SIZE: usize = 100;

/// Current page over a bounded collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            total,
        }
    }

    /// Current page, 0-based
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Fetch offset for the current page
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    /// Advance one page; returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Update the authoritative total, clamping the current page if the
    /// collection shrank underneath it.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.min(self.total_pages() - 1);
    }

    /// 1-based item range on the current page, e.g. "21-30 of 30".
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0 of 0".to_string();
        }
        let first = self.offset() + 1;
        let last = (self.offset() + self.page_size).min(self.total);
        format!("{}-{} of {}", first, last, self.total)
    }
}
