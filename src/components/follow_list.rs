//! Follow List Dialog
//!
//! Modal listing one side of a user's follow graph.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::types::PublicProfile;
use crate::api::Api;
use crate::components::{Avatar, Modal};

/// Which side of the follow graph a dialog shows.
#[derive(Clone, Copy, PartialEq)]
pub enum FollowSide {
    Followers,
    Following,
}

impl FollowSide {
    fn title(self) -> &'static str {
        match self {
            FollowSide::Followers => "Followers",
            FollowSide::Following => "Following",
        }
    }
}

/// Followers/following list for `username`. Mount it when opening; the
/// list is fetched on mount.
#[component]
pub fn FollowListDialog(
    #[prop(into)]
    username: String,
    side: FollowSide,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");

    let (profiles, set_profiles) = create_signal(Vec::<PublicProfile>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let username_for_fetch = username.clone();
    create_effect(move |_| {
        let api = api.clone();
        let username = username_for_fetch.clone();
        spawn_local(async move {
            let result = match side {
                FollowSide::Followers => api.followers(&username).await,
                FollowSide::Following => api.following(&username).await,
            };
            match result {
                Ok(list) => set_profiles.set(list),
                Err(e) => set_error.set(Some(format!("Failed to load list: {}", e))),
            }
            set_loading.set(false);
        });
    });

    let on_close_for_item = on_close.clone();
    let navigate = use_navigate();

    view! {
        <Modal title=side.title() on_close=on_close>
            {move || {
                if loading.get() {
                    return view! {
                        <div class="flex justify-center py-6">
                            <div class="loading-spinner w-6 h-6" />
                        </div>
                    }.into_view();
                }

                if let Some(message) = error.get() {
                    return view! {
                        <p class="text-red-400 text-sm text-center py-4">{message}</p>
                    }.into_view();
                }

                let list = profiles.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-sm text-center py-4">"Nobody here yet."</p>
                    }.into_view();
                }

                let on_close = on_close_for_item.clone();
                let navigate = navigate.clone();
                list.into_iter().map(|profile| {
                    let name = profile.display_name().to_string();
                    let target = format!("/users/{}", profile.username);
                    let close = on_close.clone();
                    let navigate = navigate.clone();

                    view! {
                        <button
                            on:click=move |_| {
                                close();
                                navigate(&target, Default::default());
                            }
                            class="w-full flex items-center space-x-3 px-2 py-2 rounded-lg
                                   hover:bg-gray-700 transition-colors text-left"
                        >
                            <Avatar name=name.clone() src=profile.profile_picture.clone() />
                            <span class="min-w-0">
                                <span class="block text-sm font-medium truncate">{name}</span>
                                <span class="block text-xs text-gray-400 truncate">
                                    {format!("@{}", profile.username)}
                                </span>
                            </span>
                        </button>
                    }
                }).collect_view()
            }}
        </Modal>
    }
}
