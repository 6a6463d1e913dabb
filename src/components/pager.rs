//! Pager Component
//!
//! Previous/next paging control. Pages shown here are one-based; callers
//! convert to the wire's zero-based pages when they fetch.

use leptos::*;

/// Paging control for paginated listings.
#[component]
pub fn Pager(
    #[prop(into)]
    page: Signal<u32>,
    #[prop(into)]
    total_pages: Signal<u32>,
    #[prop(into)]
    on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-4 mt-6">
            <button
                on:click=move |_| {
                    let current = page.get();
                    if current > 1 {
                        on_page.call(current - 1);
                    }
                }
                disabled=move || page.get() <= 1
                class="px-3 py-2 bg-gray-700 hover:bg-gray-600 disabled:opacity-50
                       disabled:cursor-not-allowed rounded-lg text-sm transition-colors"
            >
                "Previous"
            </button>

            <span class="text-sm text-gray-400">
                {move || format!("Page {} of {}", page.get(), total_pages.get().max(1))}
            </span>

            <button
                on:click=move |_| {
                    let current = page.get();
                    if current < total_pages.get() {
                        on_page.call(current + 1);
                    }
                }
                disabled=move || page.get() >= total_pages.get()
                class="px-3 py-2 bg-gray-700 hover:bg-gray-600 disabled:opacity-50
                       disabled:cursor-not-allowed rounded-lg text-sm transition-colors"
            >
                "Next"
            </button>
        </div>
    }
}
