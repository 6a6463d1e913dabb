//! Blog Card Component
//!
//! Post summary card used by the feed, hashtag results, and profile
//! listings, plus the per-card like-state plumbing those pages share.

use leptos::*;
use leptos_router::A;
use std::collections::HashMap;

use crate::api::types::Blog;
use crate::api::Api;
use crate::auth::AuthState;
use crate::components::Avatar;

/// Image shown when a post has no image URL of its own.
pub const FALLBACK_IMAGE: &str = "https://www.standardbio.com/Store/NoImageAvailable.jpeg";

/// Like state of one post, fetched independently per card.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct LikeState {
    pub liked: bool,
    pub count: u64,
}

/// Fetch the like state for one post into `states`.
///
/// Each post gets its own task; a failed fetch defaults that entry and
/// never disturbs sibling posts.
pub fn load_like_state(api: Api, states: RwSignal<HashMap<i64, LikeState>>, blog_id: i64) {
    spawn_local(async move {
        let liked = api.is_liked(blog_id).await;
        let count = api.like_count(blog_id).await;
        if liked.is_err() || count.is_err() {
            web_sys::console::warn_1(
                &format!("like state fetch failed for post {}", blog_id).into(),
            );
        }
        states.update(|all| {
            all.insert(
                blog_id,
                LikeState {
                    liked: liked.unwrap_or(false),
                    count: count.unwrap_or(0),
                },
            );
        });
    });
}

/// Toggle the like on one post, updating `states` when the server agrees.
pub fn toggle_like(api: Api, states: RwSignal<HashMap<i64, LikeState>>, blog_id: i64) {
    let current = states.with_untracked(|all| all.get(&blog_id).copied().unwrap_or_default());

    spawn_local(async move {
        let result = if current.liked {
            api.unlike(blog_id).await
        } else {
            api.like(blog_id).await
        };

        if result.is_ok() {
            states.update(|all| {
                let entry = all.entry(blog_id).or_default();
                if current.liked {
                    entry.liked = false;
                    entry.count = entry.count.saturating_sub(1);
                } else {
                    entry.liked = true;
                    entry.count += 1;
                }
            });
        }
    });
}

/// Render a server timestamp the way cards show it.
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Post summary card.
#[component]
pub fn BlogCard(
    blog: Blog,
    like_states: RwSignal<HashMap<i64, LikeState>>,
    /// Called with the post id when the comments affordance is clicked.
    #[prop(into)]
    on_comments: Callback<i64>,
) -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let blog_id = blog.id;
    let title = blog.title.clone();
    let title_alt = title.clone();
    let stamp = if blog.updated_at != blog.created_at {
        format!("Updated {}", format_timestamp(&blog.updated_at))
    } else {
        format!("Posted {}", format_timestamp(&blog.created_at))
    };
    let image = blog
        .image_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string());
    let hashtags = blog.hashtags.clone().unwrap_or_default();
    let comment_count = blog.comment_count.unwrap_or(0);
    let author_name = blog.author.display_name().to_string();
    let author_link = format!("/users/{}", blog.author.username);
    let author_picture = blog.author.profile_picture.clone();

    let logged_in = move || auth.user.get().is_some();

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 hover:border-gray-600
                    transition-colors overflow-hidden flex flex-col md:flex-row">
            <div class="flex-1 p-4 flex flex-col min-w-0">
                // Title
                <A
                    href=format!("/blogs/{}", blog_id)
                    class="text-lg font-bold truncate hover:text-primary-400"
                >
                    {title.clone()}
                </A>

                // Content preview
                <p class="text-gray-400 text-sm mt-1 line-clamp-3">{blog.content.clone()}</p>

                // Hashtag chips
                {(!hashtags.is_empty()).then(move || view! {
                    <div class="flex flex-wrap gap-2 mt-2">
                        {hashtags.into_iter().map(|tag| view! {
                            <A
                                href=format!("/search/hashtag/{}", tag)
                                class="bg-gray-700 hover:bg-gray-600 text-primary-400 text-xs
                                       px-2 py-0.5 rounded-full"
                            >
                                {format!("#{}", tag)}
                            </A>
                        }).collect_view()}
                    </div>
                })}

                // Author and timestamp
                <div class="flex items-center space-x-2 mt-auto pt-3">
                    <A href=author_link class="flex items-center space-x-2">
                        <Avatar name=author_name.clone() src=author_picture size="w-6 h-6" />
                        <span class="text-sm text-gray-300">{author_name}</span>
                    </A>
                    <span class="text-xs text-gray-500">{stamp}</span>
                </div>

                // Like and comment affordances
                <div class="flex items-center space-x-4 mt-2">
                    <button
                        on:click=move |_| toggle_like(api.clone(), like_states, blog_id)
                        disabled=move || !logged_in()
                        class=move || {
                            let liked = like_states
                                .with(|all| all.get(&blog_id).map(|s| s.liked).unwrap_or(false));
                            if liked {
                                "text-red-400 text-sm disabled:opacity-50"
                            } else {
                                "text-gray-400 hover:text-red-400 text-sm disabled:opacity-50"
                            }
                        }
                    >
                        {move || {
                            let state = like_states
                                .with(|all| all.get(&blog_id).copied().unwrap_or_default());
                            format!("{} {}", if state.liked { "♥" } else { "♡" }, state.count)
                        }}
                    </button>

                    <button
                        on:click=move |_| on_comments.call(blog_id)
                        class="text-gray-400 hover:text-primary-400 text-sm"
                    >
                        {format!("💬 {}", comment_count)}
                    </button>
                </div>
            </div>

            <img
                src=image
                alt=title_alt
                class="w-full md:w-48 h-40 md:h-auto object-cover bg-gray-700"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_human_readable() {
        assert_eq!(
            format_timestamp("2024-05-01T10:30:00Z"),
            "May 01, 2024 10:30"
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
