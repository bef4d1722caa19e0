use crate::routes::routes::AppRoutes;
use crate::shared::locale::provide_locale;
use crate::shared::module_settings::provide_module_settings;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // UI language from the browser, shared by every module.
    provide_locale();

    // Module enablement, loaded once from localStorage.
    provide_module_settings();

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
