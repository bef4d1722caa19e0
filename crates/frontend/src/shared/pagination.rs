//! `use_pagination`: page math over an already filtered and sorted collection.
//!
//! The hook never filters or sorts. Callers hand it the final collection and
//! reset to page 1 themselves when their filters change.

use contracts::shared::pagination::PageState;
use leptos::prelude::*;

pub struct Pagination<T: Send + Sync + 'static> {
    /// Current page, 1-based, always within `[1, total_pages]`.
    pub page: Signal<usize>,
    pub per_page: Signal<usize>,
    pub total_pages: Signal<usize>,
    pub total_items: Signal<usize>,
    /// Rows of the current page.
    pub view: Signal<Vec<T>>,
    /// Page state with `total_items` synced to the collection.
    pub state: Signal<PageState>,
    /// Last explicit request and its sequence number.
    requested: RwSignal<(PageState, u64)>,
}

impl<T: Send + Sync + 'static> Clone for Pagination<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Pagination<T> {}

impl<T: Send + Sync + 'static> Pagination<T> {
    /// Clamps into `[1, total_pages]`.
    pub fn set_page(&self, page: i64) {
        self.request(|s| s.set_page(page));
    }

    /// Changes the page size and re-clamps the current page.
    pub fn set_per_page(&self, per_page: usize) {
        self.request(|s| s.set_per_page(per_page));
    }

    fn request(&self, change: impl FnOnce(&mut PageState)) {
        let mut next = self.state.get_untracked();
        change(&mut next);
        self.requested.update(|(s, seq)| {
            *s = next;
            *seq += 1;
        });
    }
}

pub fn use_pagination<T>(items: Signal<Vec<T>>, initial_per_page: usize) -> Pagination<T>
where
    T: Clone + Send + Sync + 'static,
{
    let requested = RwSignal::new((PageState::new(0, initial_per_page), 0u64));
    let total = Memo::new(move |_| items.with(|v| v.len()));

    // Until the next request the memo builds on its own previous value, so a
    // page clamped by a shrinking collection stays clamped when it grows back.
    let current = Memo::new(move |prev: Option<&(PageState, u64)>| {
        let (request, seq) = requested.get();
        let mut s = match prev {
            Some((last, last_seq)) if *last_seq == seq => *last,
            _ => request,
        };
        s.set_total_items(total.get());
        (s, seq)
    });
    let state = Signal::derive(move || current.get().0);

    let view = Signal::derive(move || {
        let s = state.get();
        items.with(|v| s.view(v).to_vec())
    });

    Pagination {
        page: Signal::derive(move || state.get().page()),
        per_page: Signal::derive(move || state.get().per_page()),
        total_pages: Signal::derive(move || state.get().total_pages()),
        total_items: total.into(),
        view,
        state,
        requested,
    }
}
