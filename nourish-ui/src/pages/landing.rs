//! Landing Page

use leptos::*;
use leptos_router::A;
use nourish::routes::Route as AppRoute;

const FEATURES: [(&str, &str); 4] = [
    ("❤️", "Personalized Plans"),
    ("🛡️", "Health Analysis"),
    ("👥", "Community"),
    ("🌿", "Natural Solutions"),
];

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-emerald-600 to-teal-700 flex items-center justify-center p-4">
            <div class="text-center space-y-6 text-white">
                <div class="flex items-center justify-center gap-3 mb-8">
                    <div class="bg-white/10 p-4 rounded-xl text-5xl">"🌿"</div>
                    <h1 class="text-5xl font-bold">"Nourish Naturally"</h1>
                </div>

                <h2 class="text-3xl md:text-4xl font-bold leading-tight max-w-4xl">
                    "Your Complete Natural Medicine & Nutrition Platform"
                </h2>

                <p class="text-xl text-white/80 leading-relaxed max-w-2xl mx-auto">
                    "Discover personalized diet plans, regional cuisines, organ-specific nutrition, \
                     document analysis, and connect with a wellness community - all in one place."
                </p>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 max-w-2xl mx-auto my-8">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, label)| {
                            view! {
                                <div class="flex flex-col items-center gap-2 text-white/90">
                                    <span class="text-3xl">{icon}</span>
                                    <span class="text-sm font-medium">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <A
                    href=AppRoute::SignIn.path()
                    class="inline-block bg-white text-emerald-700 hover:bg-white/90 text-lg font-semibold px-8 py-4 rounded-lg"
                >
                    "Start Your Wellness Journey"
                </A>
            </div>
        </div>
    }
}
