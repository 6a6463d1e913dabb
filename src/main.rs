//! Ripple
//!
//! Browser client for the Ripple social blogging platform, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Post feed with likes, comments, and hashtags
//! - User profiles and follow relationships
//! - Live user and hashtag search
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All durable state lives server-side; the client keeps one
//! credential token in browser storage and renders views over the REST API.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
