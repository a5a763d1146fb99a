//! Dashboard Sidebar
//!
//! Navigation over the nine dashboard views. On narrow screens it is an
//! overlay that closes after a selection.

use leptos::*;
use nourish::dashboard::{navigation_items, Layout};

use super::icon_glyph;
use crate::state::{use_app_state, ShellHandle};

#[component]
pub fn Sidebar(shell: ShellHandle) -> impl IntoView {
    let state = use_app_state();

    let visible = move || shell.with(|s| s.sidebar_visible());
    let overlay = move || shell.with(|s| s.sidebar_open() && s.layout() == Layout::Mobile);

    view! {
        <Show when=overlay>
            <div
                class="fixed inset-0 z-30 bg-black/40"
                on:click=move |_| {
                    shell.update(|s| s.close_sidebar());
                }
            />
        </Show>
        <Show when=visible>
            <aside class="fixed lg:static z-40 inset-y-0 left-0 w-64 bg-white border-r border-emerald-100 overflow-y-auto">
                <nav class="p-4 space-y-1">
                    {navigation_items()
                        .into_iter()
                        .map(|item| {
                            let active = move || shell.with(|s| s.active_view() == item.view);
                            view! {
                                <button
                                    class=move || {
                                        if active() {
                                            "w-full flex items-start space-x-3 px-3 py-2 rounded-lg bg-emerald-600 text-white"
                                        } else {
                                            "w-full flex items-start space-x-3 px-3 py-2 rounded-lg hover:bg-emerald-50"
                                        }
                                    }
                                    on:click=move |_| {
                                        shell.update(|s| s.select_from_sidebar(item.view));
                                    }
                                >
                                    <span>{icon_glyph(item.icon)}</span>
                                    <span class="text-left">
                                        <span class="block text-sm font-medium">
                                            {move || state.t(item.label_key)}
                                        </span>
                                        <span class="block text-xs opacity-75">{item.description}</span>
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
        </Show>
    }
}
