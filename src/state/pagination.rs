//! Page selection over an ordered record list.
//!
//! DESIGN
//! ======
//! Only `current_page` is stored; everything else (page count, visible slice,
//! control state) is derived from the list length on each call, so the view
//! can never disagree with the data it is showing.
//!
//! Invariant: `current_page < page_count(len)` whenever `len > 0`, and
//! `current_page == 0` when the list is empty. Callers keep this by calling
//! `resync` whenever the list length changes.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::config::DEFAULT_PAGE_SIZE;

/// One numbered entry in the page indicator list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageIndicator {
    /// Zero-based page index.
    pub index: usize,
    /// One-based label shown to the user.
    pub label: usize,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Start at the first page. A zero `page_size` is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self { current_page: 0, page_size: page_size.max(1) }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Records on the current page.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.current_page.saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// Move to `index` if it names an existing page. Returns whether it moved.
    pub fn go_to_page(&mut self, index: usize, len: usize) -> bool {
        if index >= self.page_count(len) {
            log::debug!("rejecting page {index}; {} pages available", self.page_count(len));
            return false;
        }
        self.current_page = index;
        true
    }

    pub fn previous(&mut self, len: usize) -> bool {
        if self.prev_disabled() {
            return false;
        }
        self.go_to_page(self.current_page - 1, len)
    }

    pub fn next(&mut self, len: usize) -> bool {
        if self.next_disabled(len) {
            return false;
        }
        self.go_to_page(self.current_page + 1, len)
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_page == 0
    }

    pub fn next_disabled(&self, len: usize) -> bool {
        let count = self.page_count(len);
        count == 0 || self.current_page >= count - 1
    }

    pub fn indicators(&self, len: usize) -> Vec<PageIndicator> {
        (0..self.page_count(len))
            .map(|index| PageIndicator { index, label: index + 1, active: index == self.current_page })
            .collect()
    }

    /// Clamp the current page after the list length changed.
    pub fn resync(&mut self, len: usize) {
        let count = self.page_count(len);
        if count == 0 {
            self.current_page = 0;
        } else if self.current_page >= count {
            self.current_page = count - 1;
        }
    }
}
