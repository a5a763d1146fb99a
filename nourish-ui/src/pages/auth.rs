//! Sign-in Page
//!
//! Password sign-in plus the "forgot password" email, both against the
//! identity client.

use leptos::*;
use leptos_router::use_navigate;
use nourish::auth::IdentityProvider;
use nourish::routes::Route as AppRoute;

use crate::components::InlineLoading;
use crate::state::use_app_state;

#[component]
pub fn SignIn() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(identity) = state.identity() else {
            state.toasts().error("Sign In Error", "Identity service unavailable");
            return;
        };

        set_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = identity
                .sign_in_with_password(&email.get_untracked(), &password.get_untracked())
                .await;
            set_loading.try_set(false);

            match result {
                Ok(_) => navigate(AppRoute::Dashboard.path(), Default::default()),
                Err(e) => state.toasts().error("Sign In Error", e.to_string()),
            }
        });
    };

    let on_forgot = move |_| {
        let address = email.get_untracked();
        if address.trim().is_empty() {
            state.toasts().error("Error", "Enter your email address first");
            return;
        }
        let Some(identity) = state.identity() else {
            state.toasts().error("Error", "Identity service unavailable");
            return;
        };

        let redirect = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .map(|origin| format!("{}{}", origin, AppRoute::UpdatePassword.path()));
        spawn_local(async move {
            match identity
                .request_password_recovery(address.trim(), redirect.as_deref())
                .await
            {
                Ok(()) => state
                    .toasts()
                    .success("Check your email", "We sent you a password reset link"),
                Err(e) => state.toasts().error("Error", e.to_string()),
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-emerald-600 to-teal-700 flex items-center justify-center p-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-xl p-8 space-y-6">
                <div class="text-center space-y-2">
                    <h1 class="text-2xl font-bold text-emerald-700">"🌿 Nourish Naturally"</h1>
                    <p class="text-gray-500">"Sign in to continue your wellness journey"</p>
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium" for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            required
                            placeholder="you@example.com"
                            class="w-full border border-gray-300 rounded-lg px-4 py-2"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium" for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            class="w-full border border-gray-300 rounded-lg px-4 py-2"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full flex items-center justify-center space-x-2 bg-emerald-600 hover:bg-emerald-700 disabled:bg-emerald-300 text-white font-medium rounded-lg py-2"
                    >
                        <Show when=move || loading.get()>
                            <InlineLoading />
                        </Show>
                        <span>{move || if loading.get() { "Signing In..." } else { "Sign In" }}</span>
                    </button>
                </form>

                <button class="w-full text-sm text-emerald-700 hover:underline" on:click=on_forgot>
                    "Forgot your password?"
                </button>
            </div>
        </div>
    }
}
