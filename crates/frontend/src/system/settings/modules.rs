//! Module enablement page: switch application modules on and off per browser.

use contracts::shared::locale::Locale;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::locale::{use_locale, use_set_locale};
use crate::shared::module_settings::{use_module_settings, MODULES};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::pagination::use_pagination;
use crate::system::auth::guard::PermissionGate;

const PAGE_SIZE: usize = 5;

type ModuleEntry = (&'static str, &'static str, &'static str);

fn module_name(entry: &ModuleEntry, locale: Locale) -> &'static str {
    match locale {
        Locale::En => entry.1,
        Locale::Es => entry.2,
    }
}

#[component]
pub fn ModulesPage() -> impl IntoView {
    view! {
        <PermissionGate permission="settings" action="update">
            <ModulesSettings />
        </PermissionGate>
    }
}

#[component]
fn ModulesSettings() -> impl IntoView {
    let settings = use_module_settings();
    let locale = use_locale();
    let set_locale = use_set_locale();

    let items = Signal::derive(|| MODULES.to_vec());
    let pagination = use_pagination::<ModuleEntry>(items, PAGE_SIZE);

    view! {
        <PageFrame page_id="sys_settings--system" category=PageCategory::System>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{icon("settings")}" Modules"</h1>
                </div>
                <div class="page__header-right">
                    <select
                        class="filter-select"
                        prop:value=move || locale.get().as_str()
                        on:change=move |ev| set_locale(Locale::from_tag(&event_target_value(&ev)))
                    >
                        {Locale::all()
                            .into_iter()
                            .map(|l| view! { <option value=l.as_str()>{l.label()}</option> })
                            .collect_view()}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| settings.reset()
                    >
                        "Reset"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <PaginationControls
                    state=pagination.state
                    on_page_change=Callback::new(move |page: i64| pagination.set_page(page))
                    on_page_size_change=Callback::new(move |size: usize| pagination.set_per_page(size))
                    page_size_options=vec![5, 10]
                />

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=200.0>"Module"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Enabled"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || pagination.view.get()
                            key=|entry| entry.0
                            children=move |entry| {
                                let key = entry.0;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                {move || module_name(&entry, locale.get())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || settings.is_enabled(key)
                                                on:change=move |_| settings.toggle(key)
                                            />
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
