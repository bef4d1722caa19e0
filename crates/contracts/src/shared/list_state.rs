//! State of one list screen: source rows, filters, sort and page.
//!
//! Derivation order is fixed: filter the source, sort the result, slice the
//! current page. The source vector is never reordered.

use super::filtering::FilterSet;
use super::pagination::PageState;
use super::sorting::{sort_list, SortState, Sortable};

#[derive(Debug, Clone)]
pub struct ListState<T> {
    source: Vec<T>,
    filters: FilterSet<T>,
    sort: SortState,
    page: PageState,
    // filtered + sorted rows, rebuilt on every change of source/filters/sort
    derived: Vec<T>,
}

impl<T: Sortable + Clone + 'static> ListState<T> {
    pub fn new(sort: SortState, per_page: usize) -> Self {
        Self {
            source: Vec::new(),
            filters: FilterSet::new(),
            sort,
            page: PageState::new(0, per_page),
            derived: Vec::new(),
        }
    }

    /// Replaces the source rows (after a fetch). The page is re-clamped, not reset.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.source = items;
        self.rebuild();
    }

    /// Replaces the filters and goes back to page 1.
    pub fn set_filters(&mut self, filters: FilterSet<T>) {
        self.filters = filters;
        self.rebuild();
        self.page.reset();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
        self.rebuild();
        self.page.reset();
    }

    pub fn set_page(&mut self, page: i64) {
        self.page.set_page(page);
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.page.set_per_page(per_page);
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Full post-filter, post-sort collection.
    pub fn filtered(&self) -> &[T] {
        &self.derived
    }

    pub fn total_items(&self) -> usize {
        self.derived.len()
    }

    /// Rows of the current page.
    pub fn view(&self) -> &[T] {
        self.page.view(&self.derived)
    }

    fn rebuild(&mut self) {
        let mut rows = if self.filters.is_empty() {
            self.source.clone()
        } else {
            self.filters.apply(&self.source)
        };
        sort_list(&mut rows, &self.sort);
        self.page.set_total_items(rows.len());
        self.derived = rows;
    }
}
