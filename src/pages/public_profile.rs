//! Public Profile Page
//!
//! Another user's profile: their card, follow counts, a follow/unfollow
//! control, and their posts.

use leptos::*;
use leptos_router::use_params_map;
use std::collections::HashMap;

use crate::api::types::{Blog, PublicProfile as Profile};
use crate::api::Api;
use crate::auth::AuthState;
use crate::components::blog_card::{load_like_state, LikeState};
use crate::components::{
    Avatar, BlogCard, CommentsSection, FollowListDialog, FollowSide, Loading, Modal,
};
use crate::state::global::GlobalState;

/// Public profile page component
#[component]
pub fn PublicProfile() -> impl IntoView {
    let params = use_params_map();
    let api = use_context::<Api>().expect("Api not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (profile, set_profile) = create_signal(None::<Profile>);
    let (blogs, set_blogs) = create_signal(Vec::<Blog>::new());
    let (followers, set_followers) = create_signal(0u64);
    let (following, set_following) = create_signal(0u64);
    let (is_following, set_is_following) = create_signal(false);
    let (follow_busy, set_follow_busy) = create_signal(false);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (list_open, set_list_open) = create_signal(None::<FollowSide>);
    let (comments_for, set_comments_for) = create_signal(None::<i64>);
    let like_states = create_rw_signal(HashMap::<i64, LikeState>::new());

    let username = create_memo(move |_| {
        params.with(|map| map.get("username").cloned().unwrap_or_default())
    });

    // Profile, posts, counts, and follow state are fetched as independent
    // tasks keyed off the route; a failed count just stays at zero.
    let api_for_fetch = api.clone();
    let auth_for_fetch = auth.clone();
    create_effect(move |_| {
        let name = username.get();
        if name.is_empty() {
            return;
        }
        let api = api_for_fetch.clone();
        set_loading.set(true);
        set_profile.set(None);

        let api_profile = api.clone();
        let profile_name = name.clone();
        spawn_local(async move {
            match api_profile.public_profile(&profile_name).await {
                Ok(found) => {
                    set_profile.set(Some(found));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Failed to load profile: {}", e))),
            }
            set_loading.set(false);
        });

        let api_blogs = api.clone();
        let blogs_name = name.clone();
        spawn_local(async move {
            if let Ok(list) = api_blogs.blogs_by_user(&blogs_name).await {
                for blog in &list {
                    load_like_state(api_blogs.clone(), like_states, blog.id);
                }
                set_blogs.set(list);
            }
        });

        let api_followers = api.clone();
        let followers_name = name.clone();
        spawn_local(async move {
            set_followers.set(api_followers.followers_count(&followers_name).await.unwrap_or(0));
        });

        let api_following = api.clone();
        let following_name = name.clone();
        spawn_local(async move {
            set_following.set(api_following.following_count(&following_name).await.unwrap_or(0));
        });

        // Follow state only matters for someone else's signed-in view
        let me = auth_for_fetch.username();
        if me.as_deref().is_some_and(|mine| mine != name) {
            let api_follow = api.clone();
            spawn_local(async move {
                set_is_following.set(api_follow.is_following(&name).await.unwrap_or(false));
            });
        }
    });

    let api_for_toggle = api.clone();
    let toggle_follow = move || {
        if follow_busy.get_untracked() {
            return;
        }
        let name = username.get_untracked();
        set_follow_busy.set(true);

        let api = api_for_toggle.clone();
        spawn_local(async move {
            let result = if is_following.get_untracked() {
                api.unfollow(&name).await
            } else {
                api.follow(&name).await
            };

            match result {
                Ok(()) => {
                    // Re-read both so the button and count match the server
                    set_is_following.set(api.is_following(&name).await.unwrap_or(false));
                    set_followers.set(api.followers_count(&name).await.unwrap_or(0));
                }
                Err(e) => state.show_error(&format!("Follow action failed: {}", e)),
            }
            set_follow_busy.set(false);
        });
    };

    let auth_for_view = auth.clone();

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <p class="text-red-400 text-center py-12">{message}</p>
                    }.into_view();
                }
                let Some(found) = profile.get() else {
                    return view! {}.into_view();
                };

                let me = auth_for_view.username();
                let show_follow = me.as_deref().is_some_and(|mine| mine != found.username);
                let toggle = toggle_follow.clone();

                view! {
                    <section class="bg-gray-800 rounded-xl border border-gray-700 p-6">
                        <div class="flex items-center space-x-4">
                            <Avatar
                                name=found.display_name().to_string()
                                src=found.profile_picture.clone()
                                size="w-20 h-20"
                            />
                            <div class="min-w-0 flex-1">
                                <h1 class="text-2xl font-bold truncate">
                                    {found.display_name().to_string()}
                                </h1>
                                <p class="text-gray-400 text-sm">{format!("@{}", found.username)}</p>
                                {found.bio.clone().filter(|bio| !bio.is_empty()).map(|bio| view! {
                                    <p class="text-gray-300 text-sm mt-2">{bio}</p>
                                })}
                            </div>

                            {show_follow.then(|| {
                                let toggle = toggle.clone();
                                view! {
                                    <button
                                        on:click=move |_| toggle()
                                        disabled=move || follow_busy.get()
                                        class=move || {
                                            let base = "px-4 py-2 rounded-lg text-sm font-medium \
                                                        transition-colors shrink-0 disabled:opacity-50";
                                            if is_following.get() {
                                                format!("{} bg-gray-700 hover:bg-gray-600", base)
                                            } else {
                                                format!("{} bg-primary-600 hover:bg-primary-700", base)
                                            }
                                        }
                                    >
                                        {move || if is_following.get() { "Unfollow" } else { "Follow" }}
                                    </button>
                                }
                            })}
                        </div>

                        <div class="flex space-x-6 mt-4">
                            <button
                                on:click=move |_| set_list_open.set(Some(FollowSide::Followers))
                                class="text-sm text-gray-300 hover:text-white"
                            >
                                <span class="font-bold">{move || followers.get()}</span>
                                " Followers"
                            </button>
                            <button
                                on:click=move |_| set_list_open.set(Some(FollowSide::Following))
                                class="text-sm text-gray-300 hover:text-white"
                            >
                                <span class="font-bold">{move || following.get()}</span>
                                " Following"
                            </button>
                        </div>
                    </section>
                }.into_view()
            }}

            // Their posts
            {move || {
                let list = blogs.get();
                if loading.get() {
                    return view! {}.into_view();
                }
                if list.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-center py-8">"No posts yet."</p>
                    }.into_view();
                }
                view! {
                    <div class="space-y-4">
                        {list.into_iter().map(|blog| view! {
                            <BlogCard
                                blog=blog
                                like_states=like_states
                                on_comments=move |id| set_comments_for.set(Some(id))
                            />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}

            // Follow list dialog
            {move || {
                list_open.get().map(|side| view! {
                    <FollowListDialog
                        username=username.get_untracked()
                        side=side
                        on_close=move || set_list_open.set(None)
                    />
                })
            }}

            // Comments dialog
            {move || {
                comments_for.get().map(|blog_id| view! {
                    <Modal title="Comments" on_close=move || set_comments_for.set(None)>
                        <CommentsSection blog_id=blog_id />
                    </Modal>
                })
            }}
        </div>
    }
}
