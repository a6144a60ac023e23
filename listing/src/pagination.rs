//! Page, page size and total.
//!
//! Two invariants hold after every call:
//!
//! - `1 <= page <= total_pages()`, where `total_pages()` is
//!   `max(1, ceil(total / page_size))` and is recomputed on every read.
//! - if `total > 0` then `page_size <= total`. Larger sizes are coerced down
//!   to `total` rather than rejected, so the size selector never offers more
//!   rows than exist.

/// Page-size choices offered when the table config does not override them.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 8] = [5, 10, 20, 50, 100, 150, 200, 300];

/// A change applied by a pagination call, in the order it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    Page(usize),
    PageSize(usize),
}

/// One entry of the page-size selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeOption {
    pub size: usize,
    /// `"{size} / {total}"`, or `"{size} / total"` while the total is unknown.
    pub label: String,
}

/// Pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Pagination {
    /// Start on page 1 with no known total. A zero size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of rows reported by the data source.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Zero-based offset of the first row on the current page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// 1-based inclusive range of rows shown on the current page.
    ///
    /// Returns `None` when there are no rows.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.total == 0 {
            return None;
        }
        let start = self.offset() + 1;
        let end = (self.offset() + self.page_size).min(self.total);
        Some((start, end))
    }

    /// Go to a page, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) -> Option<PageChange> {
        let page = page.clamp(1, self.total_pages());
        if page == self.page {
            return None;
        }
        self.page = page;
        Some(PageChange::Page(page))
    }

    pub fn next_page(&mut self) -> Option<PageChange> {
        self.set_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Option<PageChange> {
        self.set_page(self.page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> Option<PageChange> {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> Option<PageChange> {
        self.set_page(self.total_pages())
    }

    /// Replace the page size.
    ///
    /// The size is coerced down to `total` when it exceeds a non-zero total,
    /// then the current page is re-clamped.
    pub fn set_page_size(&mut self, page_size: usize) -> Vec<PageChange> {
        let mut changes = Vec::new();
        let page_size = page_size.max(1);
        if page_size != self.page_size {
            self.page_size = page_size;
            changes.push(PageChange::PageSize(page_size));
        }
        self.settle(changes)
    }

    /// Record a new total from the data source.
    pub fn set_total(&mut self, total: usize) -> Vec<PageChange> {
        self.total = total;
        self.settle(Vec::new())
    }

    /// Apply the page-size coercion and the page clamp, collecting changes.
    fn settle(&mut self, mut changes: Vec<PageChange>) -> Vec<PageChange> {
        if self.total > 0 && self.page_size > self.total {
            self.page_size = self.total;
            changes.retain(|c| !matches!(c, PageChange::PageSize(_)));
            changes.push(PageChange::PageSize(self.total));
        }

        let clamped = self.page.clamp(1, self.total_pages());
        if clamped != self.page {
            self.page = clamped;
            changes.push(PageChange::Page(clamped));
        }

        changes
    }

    /// Page-size selector entries.
    ///
    /// Keeps the `available` sizes that do not exceed the total (all of them
    /// while the total is 0). The current size is injected when missing so the
    /// active value is always selectable. Sorted ascending, deduplicated.
    pub fn page_size_options(&self, available: &[usize]) -> Vec<PageSizeOption> {
        let mut sizes: Vec<usize> = available
            .iter()
            .copied()
            .filter(|&size| size > 0 && (self.total == 0 || size <= self.total))
            .collect();
        if !sizes.contains(&self.page_size) {
            sizes.push(self.page_size);
        }
        sizes.sort_unstable();
        sizes.dedup();

        sizes
            .into_iter()
            .map(|size| PageSizeOption {
                size,
                label: self.option_label(size),
            })
            .collect()
    }

    fn option_label(&self, size: usize) -> String {
        if self.total == 0 {
            format!("{} / total", size)
        } else {
            format!("{} / {}", size, self.total)
        }
    }
}
