//! Nourish Naturally
//!
//! Wellness and nutrition dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. All dashboard,
//! localization, location and identity logic lives in the `nourish` crate;
//! this crate renders it and supplies the browser implementations of its
//! platform seams (`localStorage`, geolocation, timers).

use leptos::*;

mod app;
mod components;
mod pages;
mod panels;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
