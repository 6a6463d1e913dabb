//! App Root Component
//!
//! Main application component with routing and global providers.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::auth::{provide_auth, AuthState, BrowserTokenStore};
use crate::components::{GuestOnly, Navbar, RequireAuth, Toast};
use crate::pages::{BlogDetails, Feed, HashtagResults, Login, Profile, PublicProfile, Register};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // One token store, shared by the session manager and the API client
    provide_auth(Rc::new(BrowserTokenStore));

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Navbar />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Landing />

                        // Auth routes - pointless once signed in
                        <Route path="/login" view=|| view! { <GuestOnly><Login /></GuestOnly> } />
                        <Route path="/register" view=|| view! { <GuestOnly><Register /></GuestOnly> } />

                        // Signed-in routes
                        <Route path="/dashboard" view=|| view! { <RequireAuth><Feed /></RequireAuth> } />
                        <Route path="/profile" view=|| view! { <RequireAuth><Profile /></RequireAuth> } />

                        // Public routes
                        <Route path="/blogs/:id" view=BlogDetails />
                        <Route path="/users/:username" view=PublicProfile />
                        <Route path="/search/hashtag/:tag" view=HashtagResults />

                        <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Landing page
#[component]
fn Landing() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🌊"</div>
            <h1 class="text-4xl font-bold mb-2">"Welcome to Ripple"</h1>
            <p class="text-xl text-gray-400 mb-8">"Share your thoughts with the world"</p>

            {move || {
                if auth.user.get().is_some() {
                    view! {
                        <A
                            href="/dashboard"
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                                   font-medium transition-colors"
                        >
                            "Go to Feed"
                        </A>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex space-x-4">
                            <A
                                href="/login"
                                class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                                       font-medium transition-colors"
                            >
                                "Sign In"
                            </A>
                            <A
                                href="/register"
                                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                                       font-medium transition-colors"
                            >
                                "Join Ripple"
                            </A>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
