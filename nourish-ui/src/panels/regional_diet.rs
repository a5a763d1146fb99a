use leptos::*;
use nourish::panels::regional_diet::{Region, REGION_RATING, REGION_USERS};
use nourish::panels::RegionalDietPanel;

use super::{read, write, BulletList, PanelTitle};
use crate::components::InlineLoading;
use crate::state::{use_app_state, ShellHandle};

#[component]
pub fn RegionalDiet(shell: ShellHandle) -> impl IntoView {
    let state = use_app_state();

    // A location that resolves while the panel is open preselects its region
    create_effect(move |_| {
        if let Some(location) = state.location.with(|probe| probe.location.clone()) {
            write(shell, |p: &mut RegionalDietPanel| p.apply_location(&location));
        }
    });

    let selected = move || read(shell, |p: &RegionalDietPanel| p.selected()).flatten();
    let locating = move || state.location.with(|probe| probe.loading);

    view! {
        <div class="space-y-6">
            <PanelTitle
                title="Regional Diets"
                subtitle="Traditional cuisines of India and the wisdom behind them"
            />

            <div class="bg-white rounded-xl p-4 border border-emerald-100 flex items-center justify-between">
                <div class="text-sm">
                    {move || {
                        state.location.with(|probe| match (&probe.location, &probe.error) {
                            (_, Some(error)) => view! {
                                <span class="text-red-600">
                                    {format!("Location error ({}): {}", error.code(), error.message)}
                                </span>
                            }
                                .into_view(),
                            (Some(location), None) => view! {
                                <span>{format!("📍 {}", location.label())}</span>
                            }
                                .into_view(),
                            (None, None) => view! {
                                <span class="text-gray-500">"Find the cuisine of your region"</span>
                            }
                                .into_view(),
                        })
                    }}
                </div>
                <button
                    class="flex items-center space-x-2 px-4 py-2 bg-emerald-600 hover:bg-emerald-700 disabled:bg-emerald-300 text-white rounded-lg text-sm"
                    disabled=locating
                    on:click=move |_| state.request_location()
                >
                    <Show when=locating>
                        <InlineLoading />
                    </Show>
                    <span>"Detect My Location"</span>
                </button>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    read(shell, |p: &RegionalDietPanel| p.regions())
                        .unwrap_or_default()
                        .iter()
                        .map(|region| view! { <RegionCard shell=shell region=region /> })
                        .collect_view()
                }}
            </div>

            {move || selected().map(|region| view! {
                <div class="bg-white rounded-xl p-6 border border-emerald-100 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-2xl font-bold">
                            {format!("{} {} Cuisine", region.emoji, region.cuisine)}
                        </h2>
                        <button
                            class="text-sm text-gray-500 hover:text-gray-900"
                            on:click=move |_| {
                                write(shell, |p: &mut RegionalDietPanel| p.clear_selection());
                            }
                        >
                            "✕"
                        </button>
                    </div>
                    <p class="text-gray-600">{region.description}</p>
                    <div class="grid md:grid-cols-2 gap-6">
                        <div>
                            <h3 class="font-semibold mb-2">"Traditional Specialties"</h3>
                            <BulletList items=region.specialties />
                        </div>
                        <div>
                            <h3 class="font-semibold mb-2">"Health Benefits"</h3>
                            <BulletList items=region.benefits marker="✓" />
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

#[component]
fn RegionCard(shell: ShellHandle, region: &'static Region) -> impl IntoView {
    let is_selected = move || read(shell, |p: &RegionalDietPanel| p.is_selected(region)).unwrap_or(false);
    let (preview, more) = region.specialty_preview();

    view! {
        <button
            class=move || {
                if is_selected() {
                    "text-left bg-white rounded-xl p-5 border-2 border-emerald-500 shadow"
                } else {
                    "text-left bg-white rounded-xl p-5 border border-emerald-100 hover:shadow"
                }
            }
            on:click=move |_| {
                write(shell, |p: &mut RegionalDietPanel| p.select(region.name));
            }
        >
            <div class="flex items-center justify-between mb-2">
                <span class="text-3xl">{region.emoji}</span>
                <span class="text-sm text-amber-600">{format!("★ {}", REGION_RATING)}</span>
            </div>
            <h3 class="text-lg font-semibold">{region.name}</h3>
            <p class="text-sm text-gray-500 mb-3">{region.description}</p>
            <div class="flex flex-wrap gap-1">
                {preview
                    .iter()
                    .map(|dish| view! {
                        <span class="text-xs bg-emerald-50 text-emerald-700 rounded-full px-2 py-0.5">{*dish}</span>
                    })
                    .collect_view()}
                {(more > 0).then(|| view! {
                    <span class="text-xs text-gray-500">{format!("+{} more", more)}</span>
                })}
            </div>
            <p class="text-xs text-gray-400 mt-3">{REGION_USERS}</p>
        </button>
    }
}
