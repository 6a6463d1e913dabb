//! Blog Details Page
//!
//! Full view of one post with inline comments. The author gets edit and
//! delete controls.

use leptos::*;
use leptos_router::{use_navigate, use_params_map, A};
use std::collections::HashMap;

use crate::api::types::{Blog, BlogInput};
use crate::api::Api;
use crate::auth::AuthState;
use crate::components::blog_card::{
    format_timestamp, load_like_state, toggle_like, LikeState, FALLBACK_IMAGE,
};
use crate::components::{Avatar, CommentsSection, Loading, Modal};
use crate::state::global::GlobalState;

/// Post details page component
#[component]
pub fn BlogDetails() -> impl IntoView {
    let params = use_params_map();
    let api = use_context::<Api>().expect("Api not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (blog, set_blog) = create_signal(None::<Blog>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (show_edit, set_show_edit) = create_signal(false);
    let (show_delete, set_show_delete) = create_signal(false);
    let (deleting, set_deleting) = create_signal(false);
    let like_states = create_rw_signal(HashMap::<i64, LikeState>::new());

    let blog_id = create_memo(move |_| {
        params.with(|map| map.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    // Fetch the post whenever the route id changes
    let api_for_fetch = api.clone();
    create_effect(move |_| {
        let Some(id) = blog_id.get() else {
            set_error.set(Some("Invalid post id".to_string()));
            set_loading.set(false);
            return;
        };
        let api = api_for_fetch.clone();
        set_loading.set(true);

        spawn_local(async move {
            match api.get_blog(id).await {
                Ok(fetched) => {
                    load_like_state(api.clone(), like_states, id);
                    set_blog.set(Some(fetched));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Failed to fetch post: {}", e))),
            }
            set_loading.set(false);
        });
    });

    let api_for_delete = api.clone();
    let navigate_for_delete = navigate;
    let delete_post = move || {
        let Some(id) = blog_id.get_untracked() else {
            return;
        };
        set_deleting.set(true);

        let api = api_for_delete.clone();
        let navigate = navigate_for_delete.clone();
        spawn_local(async move {
            match api.delete_blog(id).await {
                Ok(()) => {
                    state.show_success("Post deleted");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => state.show_error(&format!("Failed to delete post: {}", e)),
            }
            set_deleting.set(false);
        });
    };

    let auth_for_view = auth.clone();
    let api_for_like = api.clone();

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <div class="text-center py-12 space-y-4">
                            <p class="text-red-400">{message}</p>
                            <A
                                href="/dashboard"
                                class="inline-block px-4 py-2 bg-primary-600 hover:bg-primary-700
                                       rounded-lg font-medium transition-colors"
                            >
                                "Back to Feed"
                            </A>
                        </div>
                    }.into_view();
                }

                let Some(post) = blog.get() else {
                    return view! {}.into_view();
                };

                let id = post.id;
                let author_name = post.author.display_name().to_string();
                let author_link = format!("/users/{}", post.author.username);
                let author_picture = post.author.profile_picture.clone();
                let stamp = if post.updated_at != post.created_at {
                    format!("Updated {}", format_timestamp(&post.updated_at))
                } else {
                    format!("Posted {}", format_timestamp(&post.created_at))
                };
                let image = post
                    .image_url
                    .clone()
                    .filter(|url| !url.is_empty())
                    .unwrap_or_else(|| FALLBACK_IMAGE.to_string());
                let hashtags = post.hashtags.clone().unwrap_or_default();
                // Only the author may edit or delete
                let mine = auth_for_view
                    .username()
                    .is_some_and(|me| me == post.author.username);
                let api_like = api_for_like.clone();

                view! {
                    <article class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
                        <img src=image alt=post.title.clone() class="w-full max-h-96 object-cover bg-gray-700" />

                        <div class="p-6 space-y-4">
                            <div class="flex items-start justify-between">
                                <h1 class="text-3xl font-bold">{post.title.clone()}</h1>

                                {mine.then(|| view! {
                                    <div class="flex space-x-2 shrink-0">
                                        <button
                                            on:click=move |_| set_show_edit.set(true)
                                            class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600
                                                   rounded-lg text-sm transition-colors"
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            on:click=move |_| set_show_delete.set(true)
                                            class="px-3 py-1.5 bg-red-900/60 hover:bg-red-900
                                                   text-red-200 rounded-lg text-sm transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                })}
                            </div>

                            <div class="flex items-center space-x-2">
                                <A href=author_link class="flex items-center space-x-2">
                                    <Avatar name=author_name.clone() src=author_picture size="w-7 h-7" />
                                    <span class="text-sm text-gray-300">{author_name}</span>
                                </A>
                                <span class="text-xs text-gray-500">{stamp}</span>
                            </div>

                            <p class="text-gray-200 whitespace-pre-wrap">{post.content.clone()}</p>

                            {(!hashtags.is_empty()).then(move || view! {
                                <div class="flex flex-wrap gap-2">
                                    {hashtags.into_iter().map(|tag| view! {
                                        <A
                                            href=format!("/search/hashtag/{}", tag)
                                            class="bg-gray-700 hover:bg-gray-600 text-primary-400
                                                   text-xs px-2 py-0.5 rounded-full"
                                        >
                                            {format!("#{}", tag)}
                                        </A>
                                    }).collect_view()}
                                </div>
                            })}

                            <button
                                on:click=move |_| toggle_like(api_like.clone(), like_states, id)
                                class="text-sm text-gray-400 hover:text-red-400"
                            >
                                {move || {
                                    let likes = like_states
                                        .with(|all| all.get(&id).copied().unwrap_or_default());
                                    format!(
                                        "{} {} likes",
                                        if likes.liked { "♥" } else { "♡" },
                                        likes.count
                                    )
                                }}
                            </button>
                        </div>
                    </article>

                    <section class="bg-gray-800 rounded-xl border border-gray-700 p-6">
                        <CommentsSection blog_id=id />
                    </section>
                }.into_view()
            }}

            // Edit dialog
            {move || {
                if !show_edit.get() {
                    return None;
                }
                blog.get().map(|post| view! {
                    <EditPostDialog
                        post=post
                        on_close=move || set_show_edit.set(false)
                        on_saved=move |updated| {
                            set_blog.set(Some(updated));
                            set_show_edit.set(false);
                        }
                    />
                })
            }}

            // Delete confirmation
            {move || {
                show_delete.get().then(|| {
                    let delete = delete_post.clone();
                    view! {
                        <Modal title="Delete Post" on_close=move || set_show_delete.set(false)>
                            <p class="text-gray-300 mb-6">
                                "This permanently removes the post and its comments."
                            </p>
                            <div class="flex space-x-3">
                                <button
                                    on:click=move |_| set_show_delete.set(false)
                                    class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600
                                           rounded-lg font-medium transition-colors"
                                >
                                    "Cancel"
                                </button>
                                <button
                                    on:click=move |_| delete()
                                    disabled=move || deleting.get()
                                    class="flex-1 px-4 py-3 bg-red-700 hover:bg-red-600 disabled:bg-gray-600
                                           rounded-lg font-medium transition-colors"
                                >
                                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                                </button>
                            </div>
                        </Modal>
                    }
                })
            }}
        </div>
    }
}

/// Edit post dialog, prefilled from the current post.
#[component]
fn EditPostDialog(
    post: Blog,
    on_close: impl Fn() + 'static + Clone,
    on_saved: impl Fn(Blog) + 'static + Clone,
) -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let post_id = post.id;
    let (title, set_title) = create_signal(post.title.clone());
    let (content, set_content) = create_signal(post.content.clone());
    let (image_url, set_image_url) = create_signal(post.image_url.clone().unwrap_or_default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = BlogInput {
            title: title.get(),
            content: content.get(),
            image_url: Some(image_url.get()).filter(|url| !url.is_empty()),
        };
        if input.title.is_empty() || input.content.is_empty() {
            state.show_error("Title and content are required");
            return;
        }

        set_submitting.set(true);

        let api = api.clone();
        let on_saved = on_saved.clone();
        spawn_local(async move {
            match api.update_blog(post_id, &input).await {
                Ok(updated) => {
                    state.show_success("Post updated");
                    on_saved(updated);
                }
                Err(e) => state.show_error(&format!("Failed to update post: {}", e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title="Edit Post" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Content"</label>
                    <textarea
                        rows=6
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 resize-none
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Image URL (optional)"</label>
                    <input
                        type="text"
                        prop:value=move || image_url.get()
                        on:input=move |ev| set_image_url.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </Modal>
    }
}
