//! Login Page

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api::types::LoginRequest;
use crate::api::ApiError;
use crate::auth::AuthState;

/// Credential form. On success the session is started and the user lands
/// on the dashboard.
#[component]
pub fn Login() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            set_error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_error.set(None);
        set_loading.set(true);

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let credentials = LoginRequest {
                username: user,
                password: pass,
            };
            match auth.login(&credentials).await {
                Ok(()) => navigate("/dashboard", Default::default()),
                Err(ApiError::Unauthorized) => {
                    set_error.set(Some(
                        "Login failed. Please check your credentials.".to_string(),
                    ));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Login error: {}", e).into());
                    set_error.set(Some(format!("Login failed: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="max-w-sm mx-auto mt-16">
            <div class="bg-gray-800 rounded-xl p-8 border border-gray-700">
                <h1 class="text-2xl font-bold text-center mb-6">"Welcome Back"</h1>

                {move || error.get().map(|message| view! {
                    <div class="bg-red-900/50 border border-red-700 text-red-200 text-sm
                                rounded-lg px-4 py-3 mb-4">
                        {message}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || loading.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || loading.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg py-3 font-semibold transition-colors
                               flex items-center justify-center space-x-2"
                    >
                        {move || if loading.get() {
                            view! {
                                <div class="loading-spinner w-5 h-5" />
                                <span>"Signing in..."</span>
                            }.into_view()
                        } else {
                            view! { <span>"Sign In"</span> }.into_view()
                        }}
                    </button>
                </form>

                <p class="text-sm text-gray-400 text-center mt-6">
                    "Don't have an account? "
                    <A href="/register" class="text-primary-400 hover:underline">"Sign Up"</A>
                </p>
            </div>
        </div>
    }
}
