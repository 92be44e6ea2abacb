//! Page window state: current page, page size, and the server-reported total.
//!
//! The window is the single writer for all three fields; the fetch cycle
//! feeds totals back through [`PageWindow::set_total_items`] and the pager UI
//! navigates through the page setters.

/// Page sizes the UI offers, mirroring the backend's supported windows.
pub const PAGE_SIZES: [u64; 3] = [5, 10, 20];

/// Default page size when settings do not override it.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// 1-based paging window over the filtered result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    current_page: u64,
    page_size: u64,
    total_items: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindow {
    /// Construct a window on page 1 with the given size.
    ///
    /// Sizes outside [`PAGE_SIZES`] fall back to [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn new(page_size: u64) -> Self {
        let page_size = if PAGE_SIZES.contains(&page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            current_page: 1,
            page_size,
            total_items: 0,
        }
    }

    /// Current 1-based page index.
    #[must_use]
    pub const fn current_page(self) -> u64 {
        self.current_page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(self) -> u64 {
        self.page_size
    }

    /// Server-reported total across all pages.
    #[must_use]
    pub const fn total_items(self) -> u64 {
        self.total_items
    }

    /// Record a new total and snap back to page 1.
    ///
    /// A changed result-set size would otherwise leave the view on a page
    /// past the end of a shrunk set. The fetch cycle only calls this when the
    /// fetched total differs from the stored one, so ordinary page navigation
    /// does not reset.
    pub const fn set_total_items(&mut self, n: u64) {
        self.total_items = n;
        self.current_page = 1;
    }

    /// Switch to one of the allowed page sizes and snap back to page 1.
    /// Unknown sizes are ignored.
    pub fn set_page_size(&mut self, n: u64) {
        if PAGE_SIZES.contains(&n) {
            self.page_size = n;
            self.current_page = 1;
        }
    }

    /// Rotate through [`PAGE_SIZES`].
    pub fn cycle_page_size(&mut self) {
        let idx = PAGE_SIZES
            .iter()
            .position(|&s| s == self.page_size)
            .unwrap_or(0);
        self.set_page_size(PAGE_SIZES[(idx + 1) % PAGE_SIZES.len()]);
    }

    /// Jump directly to page `p` (clamped to at least 1).
    ///
    /// No upper clamp happens here; [`Self::clamp_current`] re-syncs after
    /// each fetch completes.
    pub const fn set_current_page(&mut self, p: u64) {
        self.current_page = if p == 0 { 1 } else { p };
    }

    /// Advance one page if not already on the last. Returns whether the
    /// page changed.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.page_count() {
            self.current_page += 1;
            return true;
        }
        false
    }

    /// Go back one page if not already on the first. Returns whether the
    /// page changed.
    pub const fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            return true;
        }
        false
    }

    /// Number of pages needed for the current total, 0 when empty.
    #[must_use]
    pub const fn page_count(self) -> u64 {
        self.total_items.div_ceil(self.page_size)
    }

    /// Pull the current page back into `1..=page_count` after the count may
    /// have shrunk.
    pub fn clamp_current(&mut self) {
        self.current_page = self.current_page.min(self.page_count().max(1));
    }
}
