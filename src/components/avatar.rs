//! Avatar Component
//!
//! User picture with an initial-letter fallback.

use leptos::*;

/// Round user avatar. Falls back to the first letter of `name` when no
/// picture URL is available.
#[component]
pub fn Avatar(
    #[prop(into)]
    name: String,
    #[prop(optional_no_strip)]
    src: Option<String>,
    /// Tailwind size classes
    #[prop(default = "w-8 h-8")]
    size: &'static str,
) -> impl IntoView {
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    match src.filter(|url| !url.is_empty()) {
        Some(url) => view! {
            <img
                src=url
                alt=name
                class=format!("{} rounded-full object-cover bg-gray-700 shrink-0", size)
            />
        }
        .into_view(),
        None => view! {
            <div class=format!(
                "{} rounded-full bg-gray-600 flex items-center justify-center \
                 text-sm font-semibold text-white shrink-0",
                size
            )>
                {initial}
            </div>
        }
        .into_view(),
    }
}
