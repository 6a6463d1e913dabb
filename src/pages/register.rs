//! Register Page

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api::types::RegisterRequest;
use crate::auth::AuthState;

/// Account creation form. Registration logs the new user straight in.
#[component]
pub fn Register() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (full_name, set_full_name) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let profile = RegisterRequest {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            full_name: full_name.get(),
        };
        if profile.username.is_empty()
            || profile.email.is_empty()
            || profile.password.is_empty()
            || profile.full_name.is_empty()
        {
            set_error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_error.set(None);
        set_loading.set(true);

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.register(&profile).await {
                Ok(()) => navigate("/dashboard", Default::default()),
                Err(e) => set_error.set(Some(format!("Registration failed: {}", e))),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="max-w-sm mx-auto mt-16">
            <div class="bg-gray-800 rounded-xl p-8 border border-gray-700">
                <h1 class="text-2xl font-bold text-center mb-6">"Join Ripple"</h1>

                {move || error.get().map(|message| view! {
                    <div class="bg-red-900/50 border border-red-700 text-red-200 text-sm
                                rounded-lg px-4 py-3 mb-4">
                        {message}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <Field label="Username" kind="text" value=username set_value=set_username disabled=loading />
                    <Field label="Email" kind="email" value=email set_value=set_email disabled=loading />
                    <Field label="Full Name" kind="text" value=full_name set_value=set_full_name disabled=loading />
                    <Field label="Password" kind="password" value=password set_value=set_password disabled=loading />

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if loading.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="text-sm text-gray-400 text-center mt-6">
                    "Already have an account? "
                    <A href="/login" class="text-primary-400 hover:underline">"Sign In"</A>
                </p>
            </div>
        </div>
    }
}

/// Labeled text input bound to a signal pair.
#[component]
fn Field(
    label: &'static str,
    kind: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    disabled: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                disabled=move || disabled.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
