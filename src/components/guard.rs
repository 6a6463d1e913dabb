//! Route Guards
//!
//! Wrappers that gate routes on the session signal.

use leptos::*;
use leptos_router::Redirect;

use crate::auth::AuthState;

/// Renders its children only for an authenticated user; anyone else is
/// sent to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    // Re-derive the session on entry so a token that expired since app
    // start reads as logged out instead of riding until reload.
    let auth_for_check = auth.clone();
    create_effect(move |_| {
        auth_for_check.current_user();
    });

    view! {
        {move || {
            if auth.user.get().is_some() {
                children().into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}

/// Renders its children only for a visitor; an authenticated user is
/// sent to the dashboard instead (no point showing login/register).
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        {move || {
            if auth.user.get().is_none() {
                children().into_view()
            } else {
                view! { <Redirect path="/dashboard" /> }.into_view()
            }
        }}
    }
}
