//! Update Password Page
//!
//! Landing page for password-reset links.

use leptos::*;
use leptos_router::use_navigate;
use nourish::auth::{IdentityProvider, PasswordUpdatePage, Subscription};
use std::rc::Rc;

use crate::state::use_app_state;

#[component]
pub fn UpdatePassword() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let tick = create_trigger();

    let identity = state.identity();
    let page = identity.as_ref().map(|provider| {
        let page = Rc::new(PasswordUpdatePage::mount(provider.as_ref()));
        let wake: Subscription = provider.subscribe(Rc::new(move |_, _| {
            tick.try_notify();
        }));
        (page, wake)
    });
    let (page, wake) = match page {
        Some((page, wake)) => (Some(page), Some(wake)),
        None => (None, None),
    };
    let page = store_value(page);
    let _wake = store_value(wake);

    create_effect(move |_| {
        tick.track();
        if let Some(route) = page.with_value(|p| p.as_ref().and_then(|p| p.take_redirect())) {
            navigate(route.path(), Default::default());
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(provider), Some(form)) = (state.identity(), page.get_value()) else {
            state.toasts().error("Update Password Error", "Identity service unavailable");
            return;
        };

        set_loading.set(true);
        spawn_local(async move {
            form.submit(
                provider.as_ref(),
                &state.toasts(),
                &password.get_untracked(),
                &confirm.get_untracked(),
            )
            .await;
            set_loading.try_set(false);
            tick.try_notify();
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-emerald-600 to-teal-700 flex items-center justify-center p-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-xl p-8 space-y-6">
                <div class="text-center space-y-2">
                    <h1 class="text-2xl font-bold text-emerald-700">"🌿 Nourish Naturally"</h1>
                    <h2 class="text-2xl font-bold">"Update Password"</h2>
                    <p class="text-gray-500">"Enter your new password below"</p>
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium" for="password">"New Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            minlength="6"
                            placeholder="Enter new password"
                            class="w-full border border-gray-300 rounded-lg px-4 py-2"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium" for="confirm-password">
                            "Confirm New Password"
                        </label>
                        <input
                            id="confirm-password"
                            type="password"
                            required
                            minlength="6"
                            placeholder="Confirm new password"
                            class="w-full border border-gray-300 rounded-lg px-4 py-2"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full bg-emerald-600 hover:bg-emerald-700 disabled:bg-emerald-300 text-white font-medium rounded-lg py-2"
                    >
                        {move || if loading.get() { "Updating Password..." } else { "Update Password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
