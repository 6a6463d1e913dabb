//! Profile Page
//!
//! The signed-in user's own corner: profile card with follow counts, an
//! edit dialog, and tabs for their posts, liked posts, and comments.

use leptos::*;
use leptos_router::A;
use std::collections::HashMap;

use crate::api::types::{Blog, ProfileUpdate, User, UserComment};
use crate::api::Api;
use crate::auth::AuthState;
use crate::components::blog_card::{format_timestamp, load_like_state, LikeState};
use crate::components::{
    Avatar, BlogCard, CommentsSection, FollowListDialog, FollowSide, Modal,
};
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Posts,
    Liked,
    Comments,
}

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (tab, set_tab) = create_signal(Tab::Posts);
    let (my_blogs, set_my_blogs) = create_signal(Vec::<Blog>::new());
    let (liked_blogs, set_liked_blogs) = create_signal(Vec::<Blog>::new());
    let (my_comments, set_my_comments) = create_signal(Vec::<UserComment>::new());
    let (followers, set_followers) = create_signal(0u64);
    let (following, set_following) = create_signal(0u64);
    let (loading, set_loading) = create_signal(true);
    let (show_edit, set_show_edit) = create_signal(false);
    let (list_open, set_list_open) = create_signal(None::<FollowSide>);
    let (comments_for, set_comments_for) = create_signal(None::<i64>);
    let like_states = create_rw_signal(HashMap::<i64, LikeState>::new());

    // Each section is fetched as its own task; one failing leaves the
    // others standing.
    let api_for_fetch = api.clone();
    let auth_for_fetch = auth.clone();
    create_effect(move |_| {
        let Some(username) = auth_for_fetch.username() else {
            return;
        };
        let api = api_for_fetch.clone();

        let api_blogs = api.clone();
        let name = username.clone();
        spawn_local(async move {
            match api_blogs.blogs_by_user(&name).await {
                Ok(list) => {
                    for blog in &list {
                        load_like_state(api_blogs.clone(), like_states, blog.id);
                    }
                    set_my_blogs.set(list);
                }
                Err(e) => state.show_error(&format!("Failed to fetch your posts: {}", e)),
            }
            set_loading.set(false);
        });

        let api_liked = api.clone();
        spawn_local(async move {
            if let Ok(list) = api_liked.liked_blogs().await {
                for blog in &list {
                    load_like_state(api_liked.clone(), like_states, blog.id);
                }
                set_liked_blogs.set(list);
            }
        });

        let api_comments = api.clone();
        spawn_local(async move {
            if let Ok(list) = api_comments.my_comments().await {
                set_my_comments.set(list);
            }
        });

        let api_followers = api.clone();
        let name = username.clone();
        spawn_local(async move {
            set_followers.set(api_followers.followers_count(&name).await.unwrap_or(0));
        });

        let api_following = api.clone();
        let name = username;
        spawn_local(async move {
            set_following.set(api_following.following_count(&name).await.unwrap_or(0));
        });
    });

    let auth_for_card = auth.clone();
    let auth_for_dialog = auth.clone();

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            // Profile card
            {move || {
                auth_for_card.user.get().map(|user| view! {
                    <section class="bg-gray-800 rounded-xl border border-gray-700 p-6">
                        <div class="flex items-center space-x-4">
                            <Avatar
                                name=user.display_name().to_string()
                                src=user.profile_picture.clone()
                                size="w-20 h-20"
                            />
                            <div class="min-w-0 flex-1">
                                <h1 class="text-2xl font-bold truncate">
                                    {user.display_name().to_string()}
                                </h1>
                                <p class="text-gray-400 text-sm">{format!("@{}", user.username)}</p>
                                {user.bio.clone().filter(|bio| !bio.is_empty()).map(|bio| view! {
                                    <p class="text-gray-300 text-sm mt-2">{bio}</p>
                                })}
                            </div>
                            <button
                                on:click=move |_| set_show_edit.set(true)
                                class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                                       text-sm font-medium transition-colors shrink-0"
                            >
                                "Edit Profile"
                            </button>
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
                })
            }}

            // Tabs
            <div class="flex space-x-2">
                <TabButton label="My Posts" current=tab target=Tab::Posts
                    on_click=move |_| set_tab.set(Tab::Posts) />
                <TabButton label="Liked" current=tab target=Tab::Liked
                    on_click=move |_| set_tab.set(Tab::Liked) />
                <TabButton label="My Comments" current=tab target=Tab::Comments
                    on_click=move |_| set_tab.set(Tab::Comments) />
            </div>

            // Tab content
            {move || match tab.get() {
                Tab::Posts => view! {
                    <BlogList
                        blogs=my_blogs
                        like_states=like_states
                        loading=loading
                        empty_message="You have not posted anything yet."
                        on_comments=move |id| set_comments_for.set(Some(id))
                    />
                }.into_view(),
                Tab::Liked => view! {
                    <BlogList
                        blogs=liked_blogs
                        like_states=like_states
                        loading=loading
                        empty_message="Posts you like will show up here."
                        on_comments=move |id| set_comments_for.set(Some(id))
                    />
                }.into_view(),
                Tab::Comments => view! {
                    <CommentList comments=my_comments set_comments=set_my_comments />
                }.into_view(),
            }}

            // Follow list dialog
            {move || {
                list_open.get().and_then(|side| {
                    auth.username().map(|username| view! {
                        <FollowListDialog
                            username=username
                            side=side
                            on_close=move || set_list_open.set(None)
                        />
                    })
                })
            }}

            // Comments dialog for a post card
            {move || {
                comments_for.get().map(|blog_id| view! {
                    <Modal title="Comments" on_close=move || set_comments_for.set(None)>
                        <CommentsSection blog_id=blog_id />
                    </Modal>
                })
            }}

            // Edit profile dialog
            {move || {
                if !show_edit.get() {
                    return None;
                }
                auth_for_dialog.user.get().map(|user| {
                    let auth = auth_for_dialog.clone();
                    view! {
                        <EditProfileDialog
                            user=user
                            auth=auth
                            on_close=move || set_show_edit.set(false)
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<Tab>,
    target: Tab,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} bg-gray-800 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Post cards for one tab.
#[component]
fn BlogList(
    blogs: ReadSignal<Vec<Blog>>,
    like_states: RwSignal<HashMap<i64, LikeState>>,
    loading: ReadSignal<bool>,
    empty_message: &'static str,
    #[prop(into)]
    on_comments: Callback<i64>,
) -> impl IntoView {
    view! {
        {move || {
            if loading.get() {
                return view! {
                    <div class="flex justify-center py-8">
                        <div class="loading-spinner w-6 h-6" />
                    </div>
                }.into_view();
            }

            let list = blogs.get();
            if list.is_empty() {
                return view! {
                    <p class="text-gray-400 text-center py-8">{empty_message}</p>
                }.into_view();
            }

            view! {
                <div class="space-y-4">
                    {list.into_iter().map(|blog| view! {
                        <BlogCard blog=blog like_states=like_states on_comments=on_comments />
                    }).collect_view()}
                </div>
            }.into_view()
        }}
    }
}

/// The signed-in user's comments across all posts, with edit and delete.
#[component]
fn CommentList(
    comments: ReadSignal<Vec<UserComment>>,
    set_comments: WriteSignal<Vec<UserComment>>,
) -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (editing, set_editing) = create_signal(None::<i64>);
    let (edit_draft, set_edit_draft) = create_signal(String::new());

    let api_for_delete = api.clone();
    let delete_comment = move |blog_id: i64, comment_id: i64| {
        let api = api_for_delete.clone();
        spawn_local(async move {
            match api.delete_comment(blog_id, comment_id).await {
                Ok(()) => set_comments.update(|list| list.retain(|c| c.id != comment_id)),
                Err(e) => state.show_error(&format!("Failed to delete comment: {}", e)),
            }
        });
    };

    let api_for_edit = api.clone();
    let save_edit = move |blog_id: i64, comment_id: i64| {
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
                }
                Err(e) => state.show_error(&format!("Failed to update comment: {}", e)),
            }
        });
    };

    view! {
        {move || {
            let list = comments.get();
            if list.is_empty() {
                return view! {
                    <p class="text-gray-400 text-center py-8">"You have not commented yet."</p>
                }.into_view();
            }

            let delete = delete_comment.clone();
            let save = save_edit.clone();

            view! {
                <div class="space-y-3">
                    {list.into_iter().map(|comment| {
                        let comment_id = comment.id;
                        let blog_id = comment.blog_id;
                        let delete = delete.clone();
                        let save = save.clone();
                        let content_for_edit = comment.content.clone();

                        view! {
                            <div class="bg-gray-800 rounded-xl border border-gray-700 p-4">
                                <div class="flex items-center space-x-2">
                                    <A
                                        href=format!("/blogs/{}", blog_id)
                                        class="text-sm text-primary-400 hover:underline"
                                    >
                                        "View post"
                                    </A>
                                    <span class="text-xs text-gray-500">
                                        {format_timestamp(&comment.created_at)}
                                    </span>

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
                                            on:click=move |_| delete(blog_id, comment_id)
                                            class="text-xs text-red-400 hover:text-red-300"
                                        >
                                            "Delete"
                                        </button>
                                    </span>
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
                                                           border border-gray-600 focus:border-primary-500
                                                           focus:outline-none"
                                                />
                                                <button
                                                    on:click=move |_| save(blog_id, comment_id)
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
                                            <p class="text-sm text-gray-300 mt-1">
                                                {comment.content.clone()}
                                            </p>
                                        }.into_view()
                                    }
                                }}
                            </div>
                        }
                    }).collect_view()}
                </div>
            }.into_view()
        }}
    }
}

/// Edit profile dialog, prefilled from the current session.
#[component]
fn EditProfileDialog(
    user: User,
    auth: AuthState,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (full_name, set_full_name) = create_signal(user.full_name.clone().unwrap_or_default());
    let (bio, set_bio) = create_signal(user.bio.clone().unwrap_or_default());
    let (picture, set_picture) = create_signal(user.profile_picture.clone().unwrap_or_default());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let update = ProfileUpdate {
            full_name: full_name.get(),
            bio: bio.get(),
            profile_picture: picture.get(),
        };

        set_submitting.set(true);

        let api = api.clone();
        let auth = auth.clone();
        let on_close = on_close_for_submit.clone();
        spawn_local(async move {
            match api.update_profile(&update).await {
                Ok(updated) => {
                    // Reflect the new profile immediately; the token still
                    // carries the old claims until the next login.
                    auth.user.set(Some(updated));
                    state.show_success("Profile updated");
                    on_close();
                }
                Err(e) => state.show_error(&format!("Failed to update profile: {}", e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title="Edit Profile" on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Full Name"</label>
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Bio"</label>
                    <textarea
                        rows=3
                        prop:value=move || bio.get()
                        on:input=move |ev| set_bio.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 resize-none
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Profile Picture URL"</label>
                    <input
                        type="text"
                        prop:value=move || picture.get()
                        on:input=move |ev| set_picture.set(event_target_value(&ev))
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
