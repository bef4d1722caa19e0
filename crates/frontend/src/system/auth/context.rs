use contracts::system::auth::{PermissionCheck, PermissionSet, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user_info: Option<UserInfo>,
    pub permissions: PermissionSet,
    /// True until the stored session has been checked against the backend.
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user_info: UserInfo) -> Self {
        Self {
            permissions: user_info.permission_set(),
            user_info: Some(user_info),
            loading: false,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_info.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    // Restore the session from the stored token on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if storage::get_access_token().is_none() {
                set_auth_state.set(AuthState::anonymous());
                return;
            }
            match api::get_current_user().await {
                Ok(user_info) => {
                    log::info!(
                        "Signed in as {} ({} permissions)",
                        user_info.username,
                        user_info.permissions.len()
                    );
                    set_auth_state.set(AuthState::signed_in(user_info));
                }
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    storage::clear_access_token();
                    set_auth_state.set(AuthState::anonymous());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Permission predicate backed by the live auth state.
///
/// Reads the signal on every call, so a reactive scope that calls `can`
/// re-runs when permissions change.
#[derive(Clone, Copy)]
pub struct AuthCan {
    state: Signal<AuthState>,
}

impl AuthCan {
    pub fn new(state: impl Into<Signal<AuthState>>) -> Self {
        Self { state: state.into() }
    }
}

impl PermissionCheck for AuthCan {
    fn can(&self, permission: &str, action: Option<&str>) -> bool {
        self.state.with(|s| s.permissions.can(permission, action))
    }
}

pub fn use_can() -> AuthCan {
    let (auth_state, _) = use_auth();
    AuthCan::new(auth_state)
}
