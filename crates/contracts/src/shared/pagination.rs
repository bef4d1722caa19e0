//! Page math for in-memory list screens.
//!
//! `PageState` only slices. Filtering and sorting happen before the
//! collection reaches it, so `total_items` is always the size of the
//! post-filter, post-sort collection.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Current page of a list (1-based) and its size.
///
/// Every mutation keeps `1 <= page <= total_pages()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: usize,
    per_page: usize,
    total_items: usize,
}

impl PageState {
    /// `per_page` values below 1 are clamped to 1.
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total_items,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.per_page)
    }

    /// Requests a page. Zero, negative and past-the-end values are clamped.
    pub fn set_page(&mut self, page: i64) {
        self.page = clamp_page(page, self.total_pages());
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.reclamp();
    }

    /// Called whenever the underlying collection changes size.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.reclamp();
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Index range of the current page within the full collection.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page.saturating_sub(1) * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    /// Slices the current page out of `items`.
    ///
    /// `items` is expected to have `total_items` elements; a shorter slice
    /// yields a shorter (possibly empty) view instead of panicking.
    pub fn view<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    fn reclamp(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// `max(1, ceil(total_items / per_page))`, with `per_page` clamped to 1.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1)).max(1)
}

pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1) as i64;
    page.clamp(1, last) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_total_pages_matches_ceil_for_ranges() {
        for n in 0..60usize {
            for per_page in 1..12usize {
                let expected = ((n as f64) / (per_page as f64)).ceil().max(1.0) as usize;
                assert_eq!(total_pages(n, per_page), expected, "n={n} per_page={per_page}");
            }
        }
    }

    #[test]
    fn test_twenty_three_items() {
        let data = items(23);
        let mut state = PageState::new(data.len(), 10);
        assert_eq!(state.total_pages(), 3);

        state.set_page(3);
        assert_eq!(state.page(), 3);
        assert_eq!(state.view(&data), &[20, 21, 22]);

        state.set_per_page(50);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page(), 1);
        assert_eq!(state.view(&data).len(), 23);
    }

    #[test]
    fn test_empty_collection() {
        let data: Vec<usize> = Vec::new();
        let mut state = PageState::new(0, 10);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page(), 1);
        assert!(state.view(&data).is_empty());

        state.set_page(4);
        assert_eq!(state.page(), 1);
        assert!(!state.has_next());
        assert!(!state.has_prev());
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = PageState::new(45, 10);
        for (requested, expected) in [(0, 1), (-7, 1), (2, 2), (5, 5), (6, 5), (i64::MAX, 5)] {
            state.set_page(requested);
            assert_eq!(state.page(), expected, "requested {requested}");
        }
    }

    #[test]
    fn test_per_page_keeps_valid_page() {
        let mut state = PageState::new(100, 10);
        state.set_page(2);
        state.set_per_page(20);
        assert_eq!(state.page(), 2);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn test_per_page_clamps_down() {
        let mut state = PageState::new(50, 10);
        state.set_page(5);
        state.set_per_page(50);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_per_page_zero_is_clamped() {
        let mut state = PageState::new(3, 0);
        assert_eq!(state.per_page(), 1);
        state.set_per_page(0);
        assert_eq!(state.per_page(), 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_shrinking_collection_reclamps() {
        let mut state = PageState::new(30, 10);
        state.set_page(3);
        state.set_total_items(12);
        assert_eq!(state.page(), 2);
        state.set_total_items(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_view_length() {
        for n in 0..40usize {
            let data = items(n);
            for per_page in 1..9usize {
                let mut state = PageState::new(n, per_page);
                for page in 1..=state.total_pages() {
                    state.set_page(page as i64);
                    let expected = if n == 0 {
                        0
                    } else {
                        per_page.min(n - (page - 1) * per_page)
                    };
                    assert_eq!(state.view(&data).len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_pages_reconstruct_collection() {
        let data = items(37);
        let mut state = PageState::new(data.len(), 8);
        let mut collected = Vec::new();
        for page in 1..=state.total_pages() {
            state.set_page(page as i64);
            collected.extend_from_slice(state.view(&data));
        }
        assert_eq!(collected, data);
    }

    #[test]
    fn test_view_tolerates_short_slice() {
        let state = {
            let mut s = PageState::new(30, 10);
            s.set_page(3);
            s
        };
        let data = items(22);
        assert_eq!(state.view(&data), &[20, 21]);
    }

    #[test]
    fn test_first_page_range_starts_at_zero() {
        let state = PageState::new(0, 0);
        assert_eq!(state.page(), 1);
        assert_eq!(state.range(), 0..0);
        assert!(state.view(&items(3)).is_empty());

        let state = PageState::new(5, 10);
        assert_eq!(state.range(), 0..5);
    }
}
