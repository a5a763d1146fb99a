//! Dashboard Header
//!
//! Brand, language switcher, notification badge and the account menu.

use leptos::*;
use nourish::dashboard::{HeaderView, Layout};
use nourish::i18n::Language;

use crate::state::{use_app_state, ShellHandle};

#[component]
pub fn Header(
    shell: ShellHandle,
    /// Sign-out handler; the header only reports the click
    #[prop(into)]
    on_sign_out: Callback<()>,
) -> impl IntoView {
    let state = use_app_state();
    let (menu_open, set_menu_open) = create_signal(false);

    let header = move || shell.with(|s| s.header());
    let is_mobile = move || shell.with(|s| s.layout() == Layout::Mobile);

    view! {
        <header class="sticky top-0 z-30 bg-white border-b border-emerald-100 px-4 py-3">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <Show when=is_mobile>
                        <button
                            class="p-2 rounded-lg hover:bg-emerald-50"
                            on:click=move |_| {
                                shell.update(|s| s.toggle_sidebar());
                            }
                        >
                            "☰"
                        </button>
                    </Show>
                    <span class="text-xl font-bold text-emerald-700">"🌿 Nourish Naturally"</span>
                </div>

                <div class="flex items-center space-x-4">
                    <select
                        class="border border-emerald-200 rounded-lg px-2 py-1 text-sm"
                        on:change=move |ev| {
                            if let Some(language) = Language::from_code(&event_target_value(&ev)) {
                                state.set_language(language);
                            }
                        }
                    >
                        {Language::ALL
                            .into_iter()
                            .map(|language| {
                                view! {
                                    <option
                                        value=language.code()
                                        selected=move || state.language.get() == language
                                    >
                                        {language.native_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    {move || {
                        header()
                            .map(|h| {
                                let HeaderView { initials, email, notifications } = h;
                                view! {
                                    <div class="relative">
                                        <span class="text-xl">"🔔"</span>
                                        <span class="absolute -top-1 -right-2 bg-red-500 text-white text-xs rounded-full px-1.5">
                                            {notifications}
                                        </span>
                                    </div>
                                    <div class="relative">
                                        <button
                                            class="w-9 h-9 rounded-full bg-emerald-600 text-white font-semibold"
                                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                                        >
                                            {initials}
                                        </button>
                                        <Show when=move || menu_open.get()>
                                            <div class="absolute right-0 mt-2 w-56 bg-white border border-gray-200 rounded-lg shadow-lg py-2">
                                                <p class="px-4 py-2 text-sm text-gray-500 truncate">{email.clone()}</p>
                                                <button
                                                    class="w-full text-left px-4 py-2 hover:bg-emerald-50"
                                                    on:click=move |_| {
                                                        set_menu_open.set(false);
                                                        shell.update(|s| s.open_profile());
                                                    }
                                                >
                                                    {move || state.t("nav.profile")}
                                                </button>
                                                <button
                                                    class="w-full text-left px-4 py-2 hover:bg-emerald-50"
                                                    on:click=move |_| {
                                                        set_menu_open.set(false);
                                                        shell.update(|s| s.open_settings());
                                                    }
                                                >
                                                    {move || state.t("nav.settings")}
                                                </button>
                                                <button
                                                    class="w-full text-left px-4 py-2 text-red-600 hover:bg-red-50"
                                                    on:click=move |_| {
                                                        set_menu_open.set(false);
                                                        on_sign_out.call(());
                                                    }
                                                >
                                                    "Sign out"
                                                </button>
                                            </div>
                                        </Show>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </header>
    }
}
