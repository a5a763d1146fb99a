use leptos::*;
use nourish::panels::nutrition_tracker::{HealthRating, Macronutrient};
use nourish::panels::NutritionTrackerPanel;

use super::document_scanner::picked_file;
use super::{read, write, BulletList, PanelTitle};
use crate::components::Loading;
use crate::state::ShellHandle;

fn rating_class(rating: HealthRating) -> &'static str {
    match rating {
        HealthRating::Good => "bg-emerald-100 text-emerald-700",
        HealthRating::Fair => "bg-amber-100 text-amber-700",
        HealthRating::Poor => "bg-red-100 text-red-700",
    }
}

#[component]
fn MacroCard(label: &'static str, nutrient: Macronutrient) -> impl IntoView {
    view! {
        <div class="p-4 bg-emerald-50 rounded-lg text-center">
            <p class="text-sm text-gray-500">{label}</p>
            <p class="text-xl font-bold">{format!("{}{}", nutrient.amount, nutrient.unit)}</p>
            <p class="text-xs text-gray-400">{format!("{}% of calories", nutrient.percentage)}</p>
        </div>
    }
}

#[component]
pub fn NutritionTracker(shell: ShellHandle) -> impl IntoView {
    let image = move || read(shell, |p: &NutritionTrackerPanel| p.image().map(str::to_string)).flatten();
    let analysing = move || read(shell, |p: &NutritionTrackerPanel| p.is_loading()).unwrap_or(false);
    let report = move || read(shell, |p: &NutritionTrackerPanel| p.report()).flatten();

    let on_pick = move |ev: ev::Event| {
        let Some(file) = picked_file(&ev) else {
            return;
        };
        let preview = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_else(|_| file.name());
        if let Some(pending) = write(shell, |p: &mut NutritionTrackerPanel| p.upload_image(preview)) {
            shell.run(pending);
        }
    };

    let on_clear = move |_| {
        if let Some(url) = image().filter(|url| url.starts_with("blob:")) {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
        write(shell, |p: &mut NutritionTrackerPanel| p.clear());
    };

    view! {
        <div class="space-y-6">
            <PanelTitle
                title="Nutrition Tracker"
                subtitle="Snap a photo of your meal to see what's on your plate"
            />

            {move || match image() {
                None => view! {
                    <label class="block bg-white rounded-xl p-8 border-2 border-dashed border-emerald-200 text-center cursor-pointer hover:bg-emerald-50">
                        <div class="text-4xl mb-2">"📷"</div>
                        <p class="font-medium">"Upload a food photo"</p>
                        <input type="file" accept="image/*" class="hidden" on:change=on_pick />
                    </label>
                }
                    .into_view(),
                Some(src) => view! {
                    <div class="bg-white rounded-xl p-4 border border-emerald-100 space-y-3">
                        <img src=src class="max-h-72 mx-auto rounded-lg" alt="Uploaded meal" />
                        <button class="text-sm text-gray-500 hover:text-gray-900" on:click=on_clear>
                            "Analyze another photo"
                        </button>
                    </div>
                }
                    .into_view(),
            }}

            <Show when=analysing>
                <Loading label="Identifying food and calculating nutrition..." />
            </Show>

            {move || report().map(|report| view! {
                <div class="bg-white rounded-xl p-6 border border-emerald-100 space-y-6">
                    <div class="flex justify-between items-start">
                        <div>
                            <h2 class="text-2xl font-bold">{report.food_name}</h2>
                            <p class="text-sm text-gray-500">
                                {format!("{}% confidence · {}", report.confidence, report.portion_size)}
                            </p>
                        </div>
                        <span class=format!("rounded-full px-3 py-1 text-sm {}", rating_class(report.rating()))>
                            {format!("Health score {}/100", report.health_score)}
                        </span>
                    </div>

                    <p class="text-3xl font-bold text-emerald-700">{format!("{} kcal", report.total_calories)}</p>

                    <div class="grid grid-cols-3 gap-3">
                        <MacroCard label="Protein" nutrient=report.protein />
                        <MacroCard label="Carbs" nutrient=report.carbs />
                        <MacroCard label="Fat" nutrient=report.fat />
                    </div>

                    <div>
                        <h3 class="font-semibold mb-2">"Micronutrients"</h3>
                        <div class="space-y-2">
                            {report.micronutrients
                                .iter()
                                .map(|m| view! {
                                    <div>
                                        <div class="flex justify-between text-sm">
                                            <span>{m.name}</span>
                                            <span>{format!("{}{} · {}% DV", m.amount, m.unit, m.daily_value)}</span>
                                        </div>
                                        <div class="h-2 bg-emerald-100 rounded-full">
                                            <div
                                                class="h-2 bg-emerald-500 rounded-full"
                                                style=format!("width: {}%", m.daily_value.min(100))
                                            />
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="grid md:grid-cols-3 gap-6">
                        <div>
                            <h3 class="font-semibold text-emerald-700 mb-2">"Benefits"</h3>
                            <BulletList items=report.benefits marker="✓" />
                        </div>
                        <div>
                            <h3 class="font-semibold text-amber-600 mb-2">"Considerations"</h3>
                            <BulletList items=report.concerns marker="!" />
                        </div>
                        <div>
                            <h3 class="font-semibold mb-2">"Recommendations"</h3>
                            <BulletList items=report.recommendations />
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
