use contracts::system::auth::{gate_decision, GateOutcome};
use leptos::prelude::*;

use super::context::{use_auth, use_can};
use crate::shared::locale::use_locale;

/// Component that requires authentication
/// Shows fallback if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let locale = use_locale();

    move || {
        let state = auth_state.get();
        if state.loading {
            view! { <div class="page__loading">"..."</div> }.into_any()
        } else if state.is_authenticated() {
            children().into_any()
        } else {
            view! { <div class="alert alert--error">{locale.get().not_authenticated()}</div> }.into_any()
        }
    }
}

/// Renders `children` only when the current user has the capability.
///
/// The checked capability is `permission:action` when `action` is given,
/// `permission` otherwise. On denial the `fallback` is rendered if one was
/// passed (`fallback=|| ()` renders nothing); without a fallback a denial
/// message naming the capability is shown. The check re-runs whenever the
/// auth state changes.
#[component]
pub fn PermissionGate(
    #[prop(into)] permission: String,
    #[prop(optional, into)] action: Option<String>,
    #[prop(optional, into)] fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let can = use_can();
    let locale = use_locale();
    let has_fallback = fallback.is_some();

    move || {
        let outcome = gate_decision(&can, &permission, action.as_deref(), has_fallback, locale.get());
        render_outcome(outcome, fallback.as_ref(), &children)
    }
}

fn render_outcome(outcome: GateOutcome, fallback: Option<&ViewFn>, children: &ChildrenFn) -> AnyView {
    match outcome {
        GateOutcome::Children => children().into_any(),
        GateOutcome::Fallback => match fallback {
            Some(fallback) => fallback.run(),
            None => ().into_any(),
        },
        GateOutcome::Denied(message) => view! {
            <div class="alert alert--error" role="alert">{message}</div>
        }
        .into_any(),
    }
}
