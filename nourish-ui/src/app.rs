//! App Root Component
//!
//! Routing and global providers.

use leptos::*;
use leptos_router::*;
use nourish::routes::Route as AppRoute;

use crate::components::Toast;
use crate::pages::{Dashboard, Landing, SignIn, UpdatePassword};
use crate::state::provide_app_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_app_state();

    view! {
        <Router>
            <Routes>
                <Route path=AppRoute::Landing.path() view=Landing />
                <Route path=AppRoute::SignIn.path() view=SignIn />
                <Route path=AppRoute::Dashboard.path() view=Dashboard />
                <Route path=AppRoute::UpdatePassword.path() view=UpdatePassword />
                <Route path=AppRoute::NotFound.path() view=NotFound />
            </Routes>
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center text-center bg-emerald-50">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"404"</h1>
            <p class="text-gray-500 mb-6">"Oops! Page not found"</p>
            <A
                href=AppRoute::Landing.path()
                class="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium"
            >
                "Return to Home"
            </A>
        </div>
    }
}
