//! `use_list`: reactive wrapper over `ListState` for list screens that own
//! their filters and sort.

use contracts::shared::filtering::FilterSet;
use contracts::shared::list_state::ListState;
use contracts::shared::pagination::PageState;
use contracts::shared::sorting::{SortState, Sortable};
use leptos::prelude::*;

pub struct ListController<T: Send + Sync + 'static> {
    state: RwSignal<ListState<T>>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Sortable + Clone + Send + Sync + 'static,
{
    pub fn set_items(&self, items: Vec<T>) {
        self.state.update(|s| s.set_items(items));
    }

    /// Resets to page 1.
    pub fn set_filters(&self, filters: FilterSet<T>) {
        self.state.update(|s| s.set_filters(filters));
    }

    pub fn clear_filters(&self) {
        self.set_filters(FilterSet::new());
    }

    pub fn toggle_sort(&self, field: &str) {
        self.state.update(|s| s.toggle_sort(field));
    }

    pub fn set_page(&self, page: i64) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn set_per_page(&self, per_page: usize) {
        self.state.update(|s| s.set_per_page(per_page));
    }

    pub fn view(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.view().to_vec()))
    }

    pub fn page(&self) -> Signal<PageState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| *s.page()))
    }

    pub fn sort(&self) -> Signal<SortState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort().clone()))
    }

    pub fn total_items(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.total_items()))
    }
}

pub fn use_list<T>(sort: SortState, per_page: usize) -> ListController<T>
where
    T: Sortable + Clone + Send + Sync + 'static,
{
    ListController {
        state: RwSignal::new(ListState::new(sort, per_page)),
    }
}
