//! Pagination of a derived view.
//!
//! Pages are 1-based. The page bar shows a fixed-width window of page
//! numbers centred on the current page, shifted when it would run past
//! either end.

pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number
    pub number: usize,
    pub total_pages: usize,
    /// 1-based position of the first row shown (0 when empty)
    pub first: usize,
    /// 1-based position of the last row shown (0 when empty)
    pub last: usize,
    /// Rows in the whole view
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current: usize,
    per_page: usize,
}

impl Paginator {
    pub fn new(per_page: usize) -> Self {
        Self {
            current: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page)
    }

    /// Back to the first page. Called whenever the filters change the view.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Jump to `page`, clamped to the available pages.
    ///
    /// Returns `false` if the request had to be clamped.
    pub fn go_to(&mut self, page: usize, total: usize) -> bool {
        let last = self.total_pages(total).max(1);
        self.current = page.clamp(1, last);
        self.current == page
    }

    pub fn next(&mut self, total: usize) {
        if self.current < self.total_pages(total) {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Slice the current page out of `items`.
    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        let total = items.len();
        let start = ((self.current - 1) * self.per_page).min(total);
        let end = (self.current * self.per_page).min(total);
        Page {
            items: &items[start..end],
            number: self.current,
            total_pages: self.total_pages(total),
            first: (start + 1).min(total),
            last: end,
            total,
        }
    }

    /// Page numbers for the page bar.
    pub fn window(&self, total: usize, max_visible: usize) -> Vec<usize> {
        let total_pages = self.total_pages(total);
        let max_visible = max_visible.max(1);

        let mut start = self.current.saturating_sub(max_visible / 2).max(1);
        let end = (start + max_visible - 1).min(total_pages);
        if end + 1 < start + max_visible {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }

        (start..=end).collect()
    }
}
