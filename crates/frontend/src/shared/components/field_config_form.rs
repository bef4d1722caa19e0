//! Form body driven by a merged `FieldConfigMap`.
//!
//! Hidden fields are not rendered, the rest follow `order`. Values are kept
//! as strings keyed by field name; the page converts them into its DTO.

use contracts::shared::field_config::{ordered_fields, FieldConfigMap};
use leptos::prelude::*;
use std::collections::HashMap;

#[component]
pub fn FieldConfigForm(
    #[prop(into)] config: Signal<FieldConfigMap>,
    values: RwSignal<HashMap<String, String>>,
    /// Names of required fields that failed validation.
    #[prop(into)]
    missing: Signal<Vec<String>>,
) -> impl IntoView {
    move || {
        config.with(|c| {
            ordered_fields(c)
                .into_iter()
                .map(|(name, field)| {
                    let name = name.to_string();
                    let input_name = name.clone();
                    let value_name = name.clone();
                    let invalid_name = name.clone();
                    let required = field.required;
                    view! {
                        <div class=move || if missing.with(|m| m.contains(&invalid_name)) {
                            "form__group form__group--invalid"
                        } else {
                            "form__group"
                        }>
                            <label class="form__label" for=name.clone()>
                                {field.label.clone()}
                                {required.then(|| view! { <span class="form__required">" *"</span> })}
                            </label>
                            <input
                                class="form__input"
                                id=name
                                type="text"
                                required=required
                                prop:value=move || values.with(|v| v.get(&value_name).cloned().unwrap_or_default())
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    values.update(|v| {
                                        v.insert(input_name.clone(), val);
                                    });
                                }
                            />
                        </div>
                    }
                })
                .collect_view()
        })
    }
}
