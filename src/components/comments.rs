//! Comments Section Component
//!
//! Comment list for one post with add, edit, and delete for the
//! comment's author.

use leptos::*;
use leptos_router::A;

use crate::api::types::Comment;
use crate::api::Api;
use crate::auth::AuthState;
use crate::components::blog_card::format_timestamp;
use crate::components::Avatar;
use crate::state::global::GlobalState;

/// Comments for one post.
#[component]
pub fn CommentsSection(blog_id: i64) -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (comments, set_comments) = create_signal(Vec::<Comment>::new());
    let (loading, set_loading) = create_signal(true);
    let (draft, set_draft) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (editing, set_editing) = create_signal(None::<i64>);
    let (edit_draft, set_edit_draft) = create_signal(String::new());

    // Initial fetch
    let api_for_fetch = api.clone();
    create_effect(move |_| {
        let api = api_for_fetch.clone();
        spawn_local(async move {
            match api.comments(blog_id).await {
                Ok(list) => set_comments.set(list),
                Err(e) => state.show_error(&format!("Failed to fetch comments: {}", e)),
            }
            set_loading.set(false);
        });
    });

    let api_for_add = api.clone();
    let add_comment = move || {
        let content = draft.get_untracked().trim().to_string();
        if content.is_empty() || submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let api = api_for_add.clone();
        spawn_local(async move {
            match api.add_comment(blog_id, &content).await {
                Ok(comment) => {
                    set_comments.update(|list| list.push(comment));
                    set_draft.set(String::new());
                }
                Err(e) => state.show_error(&format!("Failed to add comment: {}", e)),
            }
            set_submitting.set(false);
        });
    };

    let api_for_delete = api.clone();
    let delete_comment = move |comment_id: i64| {
        let api = api_for_delete.clone();
        spawn_local(async move {
            match api.delete_comment(blog_id, comment_id).await {
                Ok(()) => set_comments.update(|list| list.retain(|c| c.id != comment_id)),
                Err(e) => state.show_error(&format!("Failed to delete comment: {}", e)),
            }
        });
    };

    let api_for_edit = api.clone();
    let save_edit = move |comment_id: i64| {
        let content = edit_draft.get_untracked().trim().to_string();
        if content.is_empty() {
            return;
        }
        let api = api_for_edit.clone();
        spawn_local(async move {
            match api.update_comment(blog_id, comment_id, &content).await {
                Ok(_) => {
                    set_comments.update(|list| {
                        if let Some(comment) = list.iter_mut().find(|c| c.id == comment_id) {
                            comment.content = content;
                        }
                    });
                    set_editing.set(None);
                    set_edit_draft.set(String::new());
                }
                Err(e) => state.show_error(&format!("Failed to update comment: {}", e)),
            }
        });
    };

    let add_for_click = add_comment.clone();
    let add_for_key = add_comment;
    let auth_for_input = auth.clone();
    let auth_for_list = auth.clone();

    view! {
        <div class="space-y-4">
            <h3 class="text-lg font-semibold">"Comments"</h3>

            // Comment input (signed-in users only)
            {move || {
                auth_for_input.user.get().map(|user| {
                    let add_click = add_for_click.clone();
                    let add_key = add_for_key.clone();
                    view! {
                        <div class="flex items-start space-x-3 bg-gray-700/50 rounded-lg p-3">
                            <Avatar
                                name=user.display_name().to_string()
                                src=user.profile_picture.clone()
                            />
                            <textarea
                                placeholder="Write a comment..."
                                rows=2
                                prop:value=move || draft.get()
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                on:keydown=move |ev| {
                                    if ev.key() == "Enter" && !ev.shift_key() {
                                        ev.prevent_default();
                                        add_key();
                                    }
                                }
                                disabled=move || submitting.get()
                                class="flex-1 bg-gray-700 rounded-lg px-3 py-2 text-sm resize-none
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                            <button
                                on:click=move |_| add_click()
                                disabled=move || submitting.get()
                                class="px-3 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg text-sm font-medium transition-colors"
                            >
                                {move || if submitting.get() { "..." } else { "Send" }}
                            </button>
                        </div>
                    }
                })
            }}

            // Comment list
            {move || {
                if loading.get() {
                    return view! {
                        <div class="flex justify-center py-4">
                            <div class="loading-spinner w-5 h-5" />
                        </div>
                    }.into_view();
                }

                let list = comments.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-sm text-center py-4">
                            "No comments yet. Be the first to comment!"
                        </p>
                    }.into_view();
                }

                let me = auth_for_list.username();
                list.into_iter().map(|comment| {
                    let author = comment.author_username.clone().unwrap_or_else(|| "User".to_string());
                    // The author may edit and delete their own comment
                    let mine = me
                        .as_deref()
                        .is_some_and(|name| name.eq_ignore_ascii_case(&author));
                    let comment_id = comment.id;
                    let delete = delete_comment.clone();
                    let save = save_edit.clone();
                    let content_for_edit = comment.content.clone();

                    view! {
                        <div class="border-b border-gray-700 last:border-0 py-3">
                            <div class="flex items-center space-x-2">
                                <A
                                    href=format!("/users/{}", author)
                                    class="text-sm font-semibold hover:text-primary-400"
                                >
                                    {author.clone()}
                                </A>
                                <span class="text-xs text-gray-500">
                                    {format_timestamp(&comment.created_at)}
                                </span>

                                {mine.then(|| view! {
                                    <span class="ml-auto space-x-2">
                                        <button
                                            on:click=move |_| {
                                                set_edit_draft.set(content_for_edit.clone());
                                                set_editing.set(Some(comment_id));
                                            }
                                            class="text-xs text-gray-400 hover:text-white"
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            on:click=move |_| delete(comment_id)
                                            class="text-xs text-red-400 hover:text-red-300"
                                        >
                                            "Delete"
                                        </button>
                                    </span>
                                })}
                            </div>

                            {move || {
                                if editing.get() == Some(comment_id) {
                                    let save = save.clone();
                                    view! {
                                        <div class="flex items-center space-x-2 mt-2">
                                            <input
                                                type="text"
                                                prop:value=move || edit_draft.get()
                                                on:input=move |ev| set_edit_draft.set(event_target_value(&ev))
                                                class="flex-1 bg-gray-700 rounded px-3 py-1.5 text-sm
                                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                                            />
                                            <button
                                                on:click=move |_| save(comment_id)
                                                class="text-xs text-primary-400 hover:text-primary-300"
                                            >
                                                "Save"
                                            </button>
                                            <button
                                                on:click=move |_| set_editing.set(None)
                                                class="text-xs text-gray-400 hover:text-white"
                                            >
                                                "Cancel"
                                            </button>
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {
                                        <p class="text-sm text-gray-300 mt-1">{comment.content.clone()}</p>
                                    }.into_view()
                                }
                            }}
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
