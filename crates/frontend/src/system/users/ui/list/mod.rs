mod state;

use contracts::shared::sorting::SortState;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_datetime, format_datetime_opt};
use crate::shared::icons::icon;
use crate::shared::list::use_list;
use crate::shared::list_utils::{highlight_matches, SortHeader};
use crate::shared::locale::use_locale;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::guard::PermissionGate;
use crate::system::users::api;
use state::{StatusFilter, UsersFilterState, DEFAULT_SORT_FIELD, PAGE_SIZE};

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <PermissionGate permission="usuarios" action="read">
            <UsersList />
        </PermissionGate>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let list = use_list::<User>(SortState::ascending(DEFAULT_SORT_FIELD), PAGE_SIZE);
    let locale = use_locale();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let filters = RwSignal::new(UsersFilterState::default());
    let search_signal = RwSignal::new(String::new());
    let status_signal = RwSignal::new(String::from(StatusFilter::All.as_str()));
    let from_signal = RwSignal::new(String::new());
    let to_signal = RwSignal::new(String::new());

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    log::debug!("Loaded {} users", data.len());
                    list.set_items(data);
                }
                Err(e) => {
                    log::error!("Failed to load users: {}", e);
                    set_error.set(Some(locale.get_untracked().load_failed("users", &e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    let apply_filters = move || {
        let state = UsersFilterState {
            search_query: search_signal.get_untracked(),
            status: StatusFilter::from_str(&status_signal.get_untracked()),
            created_from: from_signal.get_untracked(),
            created_to: to_signal.get_untracked(),
        };
        list.set_filters(state.to_filter_set());
        filters.set(state);
    };

    let reset_filters = move || {
        search_signal.set(String::new());
        status_signal.set(StatusFilter::All.as_str().to_string());
        from_signal.set(String::new());
        to_signal.set(String::new());
        filters.set(UsersFilterState::default());
        list.clear_filters();
    };

    let delete_user = move |id: String| {
        spawn_local(async move {
            match api::delete_user(&id).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Failed to delete user {}: {}", id, e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let sort = list.sort();
    let on_sort = Callback::new(move |field: &'static str| list.toggle_sort(field));
    let query = Signal::derive(move || filters.with(|f| f.search_query.clone()));

    view! {
        <PageFrame page_id="sys_users--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{icon("users")}" Users"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || list.total_items().get().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <PermissionGate permission="usuarios" action="create" fallback=|| ()>
                        <a class="button button--primary" href="/users/new">
                            {icon("plus")}
                            " New"
                        </a>
                    </PermissionGate>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                state=list.page()
                                on_page_change=Callback::new(move |page: i64| list.set_page(page))
                                on_page_size_change=Callback::new(move |size: usize| list.set_per_page(size))
                            />
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input
                                    value=search_signal
                                    placeholder=Signal::derive(move || locale.get().search_placeholder().to_string())
                                />
                            </div>
                            <select
                                class="filter-select"
                                prop:value=move || status_signal.get()
                                on:change=move |ev| status_signal.set(event_target_value(&ev))
                            >
                                <option value="all">"All"</option>
                                <option value="active">"Active"</option>
                                <option value="blocked">"Blocked"</option>
                            </select>
                            <input
                                type="date"
                                class="filter-date"
                                prop:value=move || from_signal.get()
                                on:change=move |ev| from_signal.set(event_target_value(&ev))
                            />
                            <input
                                type="date"
                                class="filter-date"
                                prop:value=move || to_signal.get()
                                on:change=move |ev| to_signal.set(event_target_value(&ev))
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_filters()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Apply"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| reset_filters()
                                disabled=Signal::derive(move || filters.with(|f| f.is_empty()))
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    <SortHeader label="Username" field="username" sort=sort on_sort=on_sort />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>
                                    <SortHeader label="Full name" field="full_name" sort=sort on_sort=on_sort />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>
                                    <SortHeader label="Email" field="email" sort=sort on_sort=on_sort />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    <SortHeader label="Status" field="is_active" sort=sort on_sort=on_sort />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>
                                    <SortHeader label="Created" field="created_at" sort=sort on_sort=on_sort />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>
                                    <SortHeader label="Last login" field="last_login_at" sort=sort on_sort=on_sort />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=60.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.view().get()
                                key=|u| u.id.clone()
                                children=move |user| {
                                    let user_id = user.id.clone();
                                    let loc = locale.get_untracked();
                                    let created = format_datetime(&user.created_at, loc);
                                    let last_login = format_datetime_opt(user.last_login_at.as_deref(), loc);
                                    let username = user.username.clone();
                                    let full_name = user.full_name.clone().unwrap_or_default();
                                    let email = user.email.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {move || highlight_matches(&username, &query.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&full_name, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&email, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if user.is_active {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Blocked"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{last_login}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <PermissionGate permission="usuarios" action="delete" fallback=|| ()>
                                                    {
                                                        let user_id = user_id.clone();
                                                        view! {
                                                            <button
                                                                class="button button--icon"
                                                                title="Delete"
                                                                on:click=move |_| delete_user(user_id.clone())
                                                            >
                                                                {icon("trash")}
                                                            </button>
                                                        }
                                                    }
                                                </PermissionGate>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
