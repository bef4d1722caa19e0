use contracts::shared::locale::Locale;
use contracts::system::auth::PermissionCheck;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::shared::module_settings::{use_module_settings, MODULES};
use crate::system::auth::context::{use_auth, use_can};
use crate::system::auth::guard::RequireAuth;
use crate::system::settings::modules::ModulesPage;
use crate::system::users::ui::details::UserCreatePage;
use crate::system::users::ui::list::UsersListPage;

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavItem {
    /// Key in module settings; `None` for items that cannot be switched off.
    module: Option<&'static str>,
    path: &'static str,
    label: &'static str,
    icon: &'static str,
    permission: &'static str,
    action: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        module: Some("users"),
        path: "/users",
        label: "Users",
        icon: "users",
        permission: "usuarios",
        action: "read",
    },
    NavItem {
        module: None,
        path: "/settings/modules",
        label: "Modules",
        icon: "settings",
        permission: "settings",
        action: "update",
    },
];

/// Menu entries whose module is enabled and which the user may open.
fn visible_nav_items<C: PermissionCheck>(
    is_enabled: impl Fn(&str) -> bool,
    can: &C,
) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.module.map_or(true, &is_enabled))
        .filter(|item| can.can(item.permission, Some(item.action)))
        .copied()
        .collect()
}

#[component]
fn Navbar() -> impl IntoView {
    let settings = use_module_settings();
    let can = use_can();
    let (auth_state, _) = use_auth();

    view! {
        <nav class="navbar">
            <A href="/">
                <span class="navbar__brand">"ERP"</span>
            </A>
            <ul class="navbar__menu">
                {move || {
                    visible_nav_items(|m| settings.is_enabled(m), &can)
                        .into_iter()
                        .map(|item| view! {
                            <li class="navbar__item">
                                <A href=item.path>
                                    {icon(item.icon)}
                                    " "
                                    {item.label}
                                </A>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
            <span class="navbar__user">
                {move || auth_state.get().user_info.map(|u| u.username).unwrap_or_default()}
            </span>
        </nav>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let settings = use_module_settings();
    let locale = use_locale();

    view! {
        <div class="page">
            <h1 class="page__title">"ERP"</h1>
            <ul class="module-list">
                {move || {
                    let locale = locale.get();
                    MODULES
                        .iter()
                        .filter(|(key, _, _)| settings.is_enabled(key))
                        .map(|(_, en, es)| {
                            let name = if locale == Locale::Es { *es } else { *en };
                            view! { <li class="module-list__item">{name}</li> }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"404"</h1>
            <p>"Page not found"</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <RequireAuth>
                <Navbar />
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/users") view=UsersListPage />
                        <Route path=path!("/users/new") view=UserCreatePage />
                        <Route path=path!("/settings/modules") view=ModulesPage />
                    </Routes>
                </main>
            </RequireAuth>
        </Router>
    }
}
