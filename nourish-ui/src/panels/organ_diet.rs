use leptos::*;
use nourish::panels::OrganDietPanel;

use super::{read, write, BulletList, PanelTitle};
use crate::components::icon_glyph;
use crate::state::ShellHandle;

#[component]
pub fn OrganDiet(shell: ShellHandle) -> impl IntoView {
    let selected = move || read(shell, |p: &OrganDietPanel| p.selected());

    view! {
        <div class="space-y-6">
            <PanelTitle
                title="Organ-Specific Nutrition"
                subtitle="Targeted foods for the organs you want to support"
            />

            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-3">
                {move || {
                    let current = selected().map(|o| o.name);
                    read(shell, |p: &OrganDietPanel| p.organs())
                        .unwrap_or_default()
                        .iter()
                        .map(|organ| {
                            let class = if current == Some(organ.name) {
                                "p-4 rounded-xl bg-emerald-600 text-white text-center"
                            } else {
                                "p-4 rounded-xl bg-white border border-emerald-100 hover:bg-emerald-50 text-center"
                            };
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| {
                                        write(shell, |p: &mut OrganDietPanel| p.select(organ.name));
                                    }
                                >
                                    <div class="text-2xl">{icon_glyph(organ.icon)}</div>
                                    <div class="font-medium">{organ.name}</div>
                                    <div class="text-xs opacity-75">{organ.short_description()}</div>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || selected().map(|organ| view! {
                <div class="bg-white rounded-xl p-6 border border-emerald-100 space-y-6">
                    <div>
                        <h2 class="text-2xl font-bold">
                            {format!("{} {} Health", icon_glyph(organ.icon), organ.name)}
                        </h2>
                        <p class="text-gray-600">{organ.description}</p>
                    </div>
                    <div class="grid md:grid-cols-2 gap-6">
                        <div>
                            <h3 class="font-semibold text-emerald-700 mb-2">"Foods to Include"</h3>
                            <BulletList items=organ.good_foods marker="✓" />
                        </div>
                        <div>
                            <h3 class="font-semibold text-red-600 mb-2">"Foods to Avoid"</h3>
                            <BulletList items=organ.avoid_foods marker="✕" />
                        </div>
                        <div>
                            <h3 class="font-semibold mb-2">"Benefits"</h3>
                            <BulletList items=organ.benefits />
                        </div>
                        <div>
                            <h3 class="font-semibold mb-2">"Key Nutrients"</h3>
                            <BulletList items=organ.nutrients />
                        </div>
                    </div>
                    <div>
                        <h3 class="font-semibold mb-2">"Sample Weekly Plan"</h3>
                        <div class="overflow-x-auto">
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="text-left text-gray-500">
                                        <th class="py-1 pr-4">"Day"</th>
                                        <th class="py-1 pr-4">"Breakfast"</th>
                                        <th class="py-1 pr-4">"Lunch"</th>
                                        <th class="py-1">"Dinner"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {organ
                                        .weekly_plan()
                                        .into_iter()
                                        .map(|day| view! {
                                            <tr class="border-t border-gray-100">
                                                <td class="py-1 pr-4">{format!("Day {}", day.day)}</td>
                                                <td class="py-1 pr-4">{day.breakfast}</td>
                                                <td class="py-1 pr-4">{day.lunch}</td>
                                                <td class="py-1">{day.dinner}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
