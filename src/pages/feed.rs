//! Feed Page
//!
//! Paginated view of everyone's posts with likes, comments, and a
//! create-post dialog.

use leptos::*;
use std::collections::HashMap;

use crate::api::types::{Blog, BlogInput};
use crate::api::Api;
use crate::components::blog_card::{load_like_state, LikeState};
use crate::components::{BlogCard, CommentsSection, Loading, Modal, Pager};
use crate::state::global::GlobalState;

const PAGE_SIZE: u32 = 20;

/// Feed page component
#[component]
pub fn Feed() -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");

    let (blogs, set_blogs) = create_signal(Vec::<Blog>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (page, set_page) = create_signal(1u32);
    let (total_pages, set_total_pages) = create_signal(0u32);
    let (refresh, set_refresh) = create_signal(0u32);
    let (show_create, set_show_create) = create_signal(false);
    let (comments_for, set_comments_for) = create_signal(None::<i64>);
    let like_states = create_rw_signal(HashMap::<i64, LikeState>::new());

    // Fetch the current page whenever it (or the refresh counter) changes
    let api_for_fetch = api.clone();
    create_effect(move |_| {
        let _ = refresh.get();
        let display_page = page.get();
        let api = api_for_fetch.clone();
        set_loading.set(true);

        spawn_local(async move {
            // The wire is zero-based; the pager is one-based.
            match api.list_blogs(display_page - 1, PAGE_SIZE).await {
                Ok(result) => {
                    set_total_pages.set(result.total_pages);
                    for blog in &result.content {
                        load_like_state(api.clone(), like_states, blog.id);
                    }
                    let mut content = result.content;
                    // Newest activity first
                    content.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
                    set_blogs.set(content);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Failed to fetch posts: {}", e))),
            }
            set_loading.set(false);
        });
    });

    let on_created = move || {
        set_show_create.set(false);
        if page.get_untracked() == 1 {
            set_refresh.update(|n| *n += 1);
        } else {
            set_page.set(1);
        }
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Feed"</h1>
                    <p class="text-gray-400 mt-1">"What everyone is talking about"</p>
                </div>

                <button
                    on:click=move |_| set_show_create.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "+ New Post"
                </button>
            </div>

            // Post list
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <p class="text-red-400 text-center py-8">{message}</p>
                    }.into_view();
                }

                let list = blogs.get();
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

            <Pager page=page total_pages=total_pages on_page=move |p| set_page.set(p) />

            // Comments dialog
            {move || {
                comments_for.get().map(|blog_id| view! {
                    <Modal title="Comments" on_close=move || set_comments_for.set(None)>
                        <CommentsSection blog_id=blog_id />
                    </Modal>
                })
            }}

            // Create post dialog
            {move || {
                show_create.get().then(|| {
                    let on_created = on_created;
                    view! {
                        <CreatePostDialog
                            on_close=move || set_show_create.set(false)
                            on_created=on_created
                        />
                    }
                })
            }}
        </div>
    }
}

/// Create post dialog
#[component]
fn CreatePostDialog(
    on_close: impl Fn() + 'static + Clone,
    on_created: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (image_url, set_image_url) = create_signal(String::new());
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
        let on_created = on_created.clone();
        spawn_local(async move {
            match api.create_blog(&input).await {
                Ok(_) => {
                    state.show_success("Post published");
                    on_created();
                }
                Err(e) => state.show_error(&format!("Failed to create post: {}", e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title="Create New Post" on_close=on_close>
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
                        placeholder="Share your thoughts... #hashtags welcome"
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

                // Live hashtag preview from the draft content
                {move || {
                    let tags = extract_hashtags(&content.get());
                    (!tags.is_empty()).then(|| view! {
                        <div class="flex flex-wrap gap-2">
                            {tags.into_iter().map(|tag| view! {
                                <span class="bg-gray-700 text-primary-400 text-xs px-2 py-0.5 rounded-full">
                                    {format!("#{}", tag)}
                                </span>
                            }).collect_view()}
                        </div>
                    })
                }}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Posting..." } else { "Post" }}
                </button>
            </form>
        </Modal>
    }
}

/// Pull `#tag` tokens out of draft content for the preview chips.
/// Tags are lowercased and deduplicated, preserving first-seen order.
fn extract_hashtags(text: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '#' {
            continue;
        }
        let mut tag = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_alphanumeric() || next == '_' {
                tag.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if !tag.is_empty() {
            let tag = tag.to_lowercase();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_tags_in_order() {
        assert_eq!(
            extract_hashtags("shipping #rust today, more #wasm tomorrow"),
            vec!["rust", "wasm"]
        );
    }

    #[test]
    fn dedupes_case_insensitively() {
        assert_eq!(extract_hashtags("#Rust and #rust and #RUST"), vec!["rust"]);
    }

    #[test]
    fn ignores_bare_hash_and_punctuation() {
        assert_eq!(extract_hashtags("# no tag here, #yes! though"), vec!["yes"]);
        assert!(extract_hashtags("nothing at all").is_empty());
    }
}
