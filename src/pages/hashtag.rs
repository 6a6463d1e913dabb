//! Hashtag Results Page
//!
//! Paginated listing of posts carrying one hashtag.

use leptos::*;
use leptos_router::use_params_map;
use std::collections::HashMap;

use crate::api::types::Blog;
use crate::api::Api;
use crate::components::blog_card::{load_like_state, LikeState};
use crate::components::{BlogCard, CommentsSection, Loading, Modal, Pager};

const PAGE_SIZE: u32 = 20;

/// Hashtag search results page component
#[component]
pub fn HashtagResults() -> impl IntoView {
    let params = use_params_map();
    let api = use_context::<Api>().expect("Api not found");

    let (blogs, set_blogs) = create_signal(Vec::<Blog>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (page, set_page) = create_signal(1u32);
    let (total_pages, set_total_pages) = create_signal(0u32);
    let (comments_for, set_comments_for) = create_signal(None::<i64>);
    let like_states = create_rw_signal(HashMap::<i64, LikeState>::new());

    let tag = create_memo(move |_| {
        params.with(|map| map.get("tag").cloned().unwrap_or_default())
    });

    let api_for_fetch = api.clone();
    create_effect(move |_| {
        let hashtag = tag.get();
        let display_page = page.get();
        if hashtag.is_empty() {
            return;
        }
        let api = api_for_fetch.clone();
        set_loading.set(true);

        spawn_local(async move {
            // The wire is zero-based; the pager is one-based.
            match api.search_by_hashtag(&hashtag, display_page - 1, PAGE_SIZE).await {
                Ok(result) => {
                    set_total_pages.set(result.total_pages);
                    for blog in &result.content {
                        load_like_state(api.clone(), like_states, blog.id);
                    }
                    set_blogs.set(result.content);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Search failed: {}", e))),
            }
            set_loading.set(false);
        });
    });

    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">
                        {move || format!("#{}", tag.get())}
                    </h1>
                    <p class="text-gray-400 mt-1">"Posts carrying this hashtag"</p>
                </div>

                <button
                    on:click=go_back
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                           text-sm font-medium transition-colors"
                >
                    "Back"
                </button>
            </div>

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
                        <p class="text-gray-400 text-center py-8">
                            "No posts found for this hashtag."
                        </p>
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
