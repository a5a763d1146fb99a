//! Loading Component

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="w-8 h-8 border-4 border-emerald-200 border-t-emerald-600 rounded-full animate-spin" />
            {label.map(|text| view! { <p class="text-sm text-gray-500">{text}</p> })}
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block w-4 h-4 border-2 border-white/40 border-t-white rounded-full animate-spin" />
    }
}
