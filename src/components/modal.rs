//! Modal Component
//!
//! Overlay dialog shell shared by the app's dialogs.

use leptos::*;

/// Centered dialog over a dimmed backdrop with a title bar and close
/// button. The caller owns the open/closed state.
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    on_close: impl Fn() + 'static + Clone,
    children: Children,
) -> impl IntoView {
    let on_close_for_x = on_close;

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4 max-h-[85vh] overflow-y-auto">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                {children()}
            </div>
        </div>
    }
}
