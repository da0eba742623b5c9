// SPDX-License-Identifier: MPL-2.0
//! Page arithmetic for the gallery grid and list views.
//!
//! Pages are 1-based. The pager never holds photos itself; it maps between
//! positions on the visible page and indices into the photo sequence.

use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use std::ops::Range;

/// Pages shown on each side of the current one in the page strip.
const PAGE_STRIP_DELTA: usize = 2;

/// One entry of the page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// A clickable page number.
    Page(usize),
    /// Elided pages.
    Gap,
}

/// Pager over a sequence of `total` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Creates a pager on page 1. A zero page size falls back to the default.
    #[must_use]
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: Self::sanitize_size(page_size),
            total,
        }
    }

    fn sanitize_size(size: usize) -> usize {
        if size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            size
        }
    }

    /// Page sizes offered to the user.
    #[must_use]
    pub fn size_options() -> &'static [usize] {
        &PAGE_SIZE_OPTIONS
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages, `ceil(total / page_size)`. Zero for an empty sequence.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Returns true if more than one page exists.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        self.total_pages() > 1
    }

    /// Jumps to `page`, clamped into `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    /// Moves to the next page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page. Returns false on page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = Self::sanitize_size(size);
        self.page = 1;
    }

    /// Updates the item count, keeping the current page in range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.set_page(self.page);
    }

    /// Sequence indices shown on the current page.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (self.page * self.page_size).min(self.total);
        start..end
    }

    /// Maps a position on the current page to its sequence index.
    ///
    /// Returns `None` if `local` is past the end of the page.
    #[must_use]
    pub fn global_index(&self, local: usize) -> Option<usize> {
        let range = self.range();
        let index = range.start + local;
        range.contains(&index).then_some(index)
    }

    /// 1-based `(first, last)` item numbers shown, for "showing a–b of n".
    #[must_use]
    pub fn showing(&self) -> Option<(usize, usize)> {
        let range = self.range();
        (!range.is_empty()).then(|| (range.start + 1, range.end))
    }

    /// Page strip: first page, a window of two pages around the current one,
    /// the last page, with gaps where pages are elided.
    #[must_use]
    pub fn visible_pages(&self) -> Vec<PageLink> {
        let total_pages = self.total_pages();
        if total_pages == 0 {
            return Vec::new();
        }

        let mut links = vec![PageLink::Page(1)];
        if self.page > PAGE_STRIP_DELTA + 2 {
            links.push(PageLink::Gap);
        }

        let low = self.page.saturating_sub(PAGE_STRIP_DELTA).max(2);
        let high = (self.page + PAGE_STRIP_DELTA).min(total_pages.saturating_sub(1));
        links.extend((low..=high).map(PageLink::Page));

        if self.page + PAGE_STRIP_DELTA + 1 < total_pages {
            links.push(PageLink::Gap);
            links.push(PageLink::Page(total_pages));
        } else if total_pages > 1 {
            links.push(PageLink::Page(total_pages));
        }
        links
    }
}
