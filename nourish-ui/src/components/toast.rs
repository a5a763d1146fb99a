//! Toast Notification Component

use leptos::*;
use nourish::toast::ToastVariant;

use crate::state::use_app_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2 w-80">
            <For
                each=move || state.visible_toasts.get()
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    let bg_class = match toast.variant {
                        ToastVariant::Default => "bg-white border-emerald-200 text-gray-900",
                        ToastVariant::Destructive => "bg-red-600 border-red-700 text-white",
                    };
                    view! {
                        <div class=format!("border rounded-lg shadow-lg px-4 py-3 {}", bg_class)>
                            <div class="flex items-start justify-between">
                                <div>
                                    <p class="text-sm font-semibold">{toast.title}</p>
                                    <p class="text-sm opacity-90">{toast.description}</p>
                                </div>
                                <button
                                    class="ml-3 text-sm opacity-70 hover:opacity-100"
                                    on:click=move |_| state.dismiss_toast(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
