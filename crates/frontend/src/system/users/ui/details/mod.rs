use contracts::shared::field_config::{missing_required, FieldConfigMap};
use contracts::system::users::{default_form_fields, CreateUserDto, USER_FORM_KEY};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use std::collections::HashMap;
use thaw::*;

use crate::shared::components::field_config_form::FieldConfigForm;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::guard::PermissionGate;
use crate::system::users::api;

#[component]
pub fn UserCreatePage() -> impl IntoView {
    view! {
        <PermissionGate permission="usuarios" action="create">
            <CreateUserForm />
        </PermissionGate>
    }
}

#[component]
fn CreateUserForm() -> impl IntoView {
    let config = RwSignal::new(default_form_fields());
    let values = RwSignal::new(HashMap::<String, String>::new());
    let missing = RwSignal::new(Vec::<String>::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);
    let navigate = use_navigate();

    // Tenant overrides of the form layout; defaults stay when the request fails
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_form_settings(USER_FORM_KEY).await {
                Ok(settings) => config.set(settings.apply_to(&default_form_fields())),
                Err(e) => log::warn!("Form settings for {} not loaded: {}", USER_FORM_KEY, e),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = values.get_untracked();
        let not_filled = config.with_untracked(|c: &FieldConfigMap| missing_required(c, &current));
        if !not_filled.is_empty() {
            missing.set(not_filled);
            return;
        }
        missing.set(Vec::new());

        let dto = CreateUserDto::from_values(&current);
        set_is_saving.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_user(dto).await {
                Ok(id) => {
                    log::info!("User created: {}", id);
                    navigate("/users", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to create user: {}", e);
                    set_error_message.set(Some(format!("Failed to create user: {}", e)));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="sys_users--detail" category=PageCategory::Detail>
            <div class="page__header">
                <h1 class="page__title">"New user"</h1>
            </div>

            <Show when=move || error_message.get().is_some()>
                <div class="alert alert--error">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <form class="form" on:submit=on_submit>
                <FieldConfigForm config=config values=values missing=missing />

                <Flex gap=FlexGap::Small>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_saving.get()
                    >
                        {move || if is_saving.get() { "Saving..." } else { "Create" }}
                    </button>
                    <a class="button button--secondary" href="/users">"Cancel"</a>
                </Flex>
            </form>
        </PageFrame>
    }
}
