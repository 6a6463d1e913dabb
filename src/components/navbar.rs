//! Navigation Component
//!
//! Header bar with the brand link, the live user/hashtag search box, and
//! the account menu.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api::types::User;
use crate::api::Api;
use crate::auth::AuthState;
use crate::components::Avatar;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16 space-x-4">
                    // Brand
                    <A href="/" class="flex items-center space-x-2 shrink-0">
                        <span class="text-2xl">"🌊"</span>
                        <span class="text-xl font-bold text-white hidden sm:inline">"Ripple"</span>
                    </A>

                    // Live search
                    <SearchBox />

                    // Account area
                    <AccountMenu auth=auth />
                </div>
            </div>
        </nav>
    }
}

/// Search box querying users and hashtags as the user types.
#[component]
fn SearchBox() -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let navigate = use_navigate();

    let (query, set_query) = create_signal(String::new());
    let (user_results, set_user_results) = create_signal(Vec::<User>::new());
    let (hashtag_results, set_hashtag_results) = create_signal(Vec::<String>::new());
    let (open, set_open) = create_signal(false);

    let api_for_input = api.clone();
    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());

        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            set_user_results.set(Vec::new());
            set_hashtag_results.set(Vec::new());
            set_open.set(false);
            return;
        }
        set_open.set(true);

        // Users and hashtags are fetched as independent tasks; either one
        // failing just leaves its own list empty.
        let api_users = api_for_input.clone();
        let term = trimmed.clone();
        spawn_local(async move {
            set_user_results.set(api_users.search_users(&term).await.unwrap_or_default());
        });

        if trimmed.len() > 1 {
            let api_tags = api_for_input.clone();
            spawn_local(async move {
                let term = trimmed.strip_prefix('#').unwrap_or(&trimmed);
                set_hashtag_results.set(api_tags.hashtag_suggestions(term).await.unwrap_or_default());
            });
        } else {
            set_hashtag_results.set(Vec::new());
        }
    };

    let clear = move || {
        set_query.set(String::new());
        set_user_results.set(Vec::new());
        set_hashtag_results.set(Vec::new());
        set_open.set(false);
    };

    let navigate_for_users = navigate.clone();
    let navigate_for_tags = navigate;
    let clear_for_users = clear;
    let clear_for_tags = clear;

    view! {
        <div class="relative flex-1 max-w-md">
            <input
                type="text"
                placeholder="Search users or hashtags..."
                prop:value=move || query.get()
                on:input=on_input
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        set_open.set(false);
                    }
                }
                class="w-full bg-gray-700 rounded-full px-4 py-2 text-sm
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />

            // Results dropdown
            {move || {
                let users = user_results.get();
                let hashtags = hashtag_results.get();
                if !open.get() || (users.is_empty() && hashtags.is_empty()) {
                    return view! {}.into_view();
                }

                let navigate_users = navigate_for_users.clone();
                let navigate_tags = navigate_for_tags.clone();

                view! {
                    <div class="absolute top-full left-0 right-0 mt-2 bg-gray-800 border border-gray-700
                                rounded-xl shadow-lg max-h-80 overflow-y-auto z-40">
                        {(!users.is_empty()).then(|| view! {
                            <p class="px-3 pt-3 pb-1 text-xs font-semibold text-gray-500 uppercase">
                                "Users"
                            </p>
                            {users.into_iter().map(|user| {
                                let name = user.display_name().to_string();
                                let target = format!("/users/{}", user.username);
                                let username = user.username.clone();
                                let navigate = navigate_users.clone();
                                view! {
                                    <button
                                        on:click=move |_| {
                                            clear_for_users();
                                            navigate(&target, Default::default());
                                        }
                                        class="w-full flex items-center space-x-2 px-3 py-2
                                               hover:bg-gray-700 transition-colors text-left"
                                    >
                                        <Avatar name=name.clone() src=user.profile_picture.clone() size="w-7 h-7" />
                                        <span class="min-w-0">
                                            <span class="block text-sm truncate">{name}</span>
                                            <span class="block text-xs text-gray-400 truncate">
                                                {format!("@{}", username)}
                                            </span>
                                        </span>
                                    </button>
                                }
                            }).collect_view()}
                        })}

                        {(!hashtags.is_empty()).then(|| view! {
                            <p class="px-3 pt-3 pb-1 text-xs font-semibold text-gray-500 uppercase">
                                "Hashtags"
                            </p>
                            {hashtags.into_iter().map(|tag| {
                                let target = format!("/search/hashtag/{}", tag);
                                let navigate = navigate_tags.clone();
                                view! {
                                    <button
                                        on:click=move |_| {
                                            clear_for_tags();
                                            navigate(&target, Default::default());
                                        }
                                        class="w-full px-3 py-2 hover:bg-gray-700 transition-colors text-left"
                                    >
                                        <span class="bg-gray-700 text-primary-400 text-xs px-2 py-0.5 rounded-full">
                                            {format!("#{}", tag)}
                                        </span>
                                    </button>
                                }
                            }).collect_view()}
                        })}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Avatar dropdown for a signed-in user, sign-in links otherwise.
#[component]
fn AccountMenu(auth: AuthState) -> impl IntoView {
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = create_signal(false);

    let auth_for_view = auth.clone();

    view! {
        <div class="relative shrink-0">
            {move || {
                match auth_for_view.user.get() {
                    Some(user) => {
                        let auth = auth_for_view.clone();
                        let navigate = navigate.clone();
                        view! {
                            <button on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                                <Avatar
                                    name=user.display_name().to_string()
                                    src=user.profile_picture.clone()
                                />
                            </button>

                            {move || {
                                if !menu_open.get() {
                                    return view! {}.into_view();
                                }
                                let auth = auth.clone();
                                let navigate = navigate.clone();
                                view! {
                                    <div class="absolute right-0 top-full mt-2 w-40 bg-gray-800 border
                                                border-gray-700 rounded-xl shadow-lg py-1 z-40">
                                        <MenuLink href="/profile" label="Profile" on_pick=move || set_menu_open.set(false) />
                                        <MenuLink href="/dashboard" label="Dashboard" on_pick=move || set_menu_open.set(false) />
                                        <button
                                            on:click=move |_| {
                                                set_menu_open.set(false);
                                                auth.logout();
                                                navigate("/", Default::default());
                                            }
                                            class="w-full px-4 py-2 text-sm text-left text-red-400
                                                   hover:bg-gray-700 transition-colors"
                                        >
                                            "Logout"
                                        </button>
                                    </div>
                                }.into_view()
                            }}
                        }.into_view()
                    }
                    None => view! {
                        <div class="flex items-center space-x-2">
                            <A
                                href="/login"
                                class="px-3 py-2 text-sm text-gray-300 hover:text-white transition-colors"
                            >
                                "Sign In"
                            </A>
                            <A
                                href="/register"
                                class="px-3 py-2 text-sm bg-primary-600 hover:bg-primary-700
                                       rounded-lg font-medium transition-colors"
                            >
                                "Join"
                            </A>
                        </div>
                    }.into_view(),
                }
            }}
        </div>
    }
}

/// Single entry of the account dropdown.
#[component]
fn MenuLink(
    href: &'static str,
    label: &'static str,
    on_pick: impl Fn() + 'static,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <button
            on:click=move |_| {
                on_pick();
                navigate(href, Default::default());
            }
            class="w-full px-4 py-2 text-sm text-left text-gray-300 hover:bg-gray-700 transition-colors"
        >
            {label}
        </button>
    }
}
