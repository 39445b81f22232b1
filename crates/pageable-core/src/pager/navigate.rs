//! Programmatic navigation.

use tracing::debug;

use super::Pager;
use crate::location::normalize_hash;

impl Pager {
    /// Animate to page `index`
    ///
    /// Ignored when busy, out of range or already on that page.
    pub fn scroll_to_index(&mut self, index: usize) -> bool {
        if !self.initialised || self.is_scrolling() {
            return false;
        }
        if index >= self.page_count() || index == self.index {
            return false;
        }

        let origin = self.index;
        self.old_index = origin;
        self.index = index;

        let amount = self.layout.amount_between(origin as isize, index as isize);
        self.scroll_by(origin, amount, index as isize)
    }

    /// Animate to the 1-based page `page`
    pub fn scroll_to_page(&mut self, page: usize) -> bool {
        match page.checked_sub(1) {
            Some(index) => self.scroll_to_index(index),
            None => false,
        }
    }

    /// Animate to the page with hash `#id` (`id` is accepted too)
    pub fn scroll_to_anchor(&mut self, anchor: &str) -> bool {
        match self.anchor_index(anchor) {
            Some(index) => self.scroll_to_index(index),
            None => {
                debug!(anchor = %normalize_hash(anchor), "Unknown anchor");
                false
            }
        }
    }

    /// Next page, wrapping onto the first page in infinite mode
    pub fn next(&mut self) -> bool {
        if !self.initialised {
            return false;
        }
        if self.is_infinite() && self.index == self.last_index() {
            return self.overscroll(true, 0.0);
        }
        self.scroll_to_index(self.index + 1)
    }

    /// Previous page, wrapping onto the last page in infinite mode
    pub fn prev(&mut self) -> bool {
        if !self.initialised {
            return false;
        }
        if self.is_infinite() && self.index == 0 {
            return self.overscroll(false, 0.0);
        }
        match self.index.checked_sub(1) {
            Some(index) => self.scroll_to_index(index),
            None => false,
        }
    }
}
