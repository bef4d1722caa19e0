use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use contracts::shared::pagination::{PageState, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-based. The parent clamps requested pages; the buttons only
/// avoid asking for pages that obviously do not exist.
#[component]
pub fn PaginationControls(
    /// Current page state (page, page size, total items)
    #[prop(into)]
    state: Signal<PageState>,

    /// Callback when page changes
    on_page_change: Callback<i64>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to PAGE_SIZE_OPTIONS)
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());
    let locale = use_locale();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !state.get().has_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(state.get().page() as i64 - 1)
                disabled=move || !state.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let s = state.get();
                    locale.get().page_summary(s.page(), s.total_pages(), s.total_items())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(state.get().page() as i64 + 1)
                disabled=move || !state.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(state.get().total_pages() as i64)
                disabled=move || !state.get().has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev)
                        .parse()
                        .unwrap_or(contracts::shared::pagination::DEFAULT_PAGE_SIZE);
                    on_page_size_change.run(val);
                }
                prop:value=move || state.get().per_page().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || state.get().per_page() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
