use leptos::*;
use nourish::panels::overview::{
    COMMUNITY_HIGHLIGHTS, QUICK_ACTIONS, QUICK_STATS, RECOMMENDATIONS, STREAK_DAYS_THIS_WEEK,
};
use nourish::panels::OverviewPanel;

use super::read;
use crate::state::ShellHandle;

const WEEKDAYS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

#[component]
pub fn Overview(shell: ShellHandle) -> impl IntoView {
    let greeting = move || read(shell, |p: &OverviewPanel| p.greeting()).unwrap_or_default();

    view! {
        <div class="space-y-6">
            <div class="bg-gradient-to-r from-emerald-600 to-teal-600 rounded-xl p-6 text-white">
                <h1 class="text-3xl font-bold">{greeting}</h1>
                <p class="text-white/80 mt-1">"Here's your wellness summary for today"</p>
            </div>

            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                {QUICK_STATS
                    .iter()
                    .map(|stat| view! {
                        <div class="bg-white rounded-xl p-4 border border-emerald-100">
                            <p class="text-sm text-gray-500">{stat.label}</p>
                            <p class="text-2xl font-bold">{stat.value}</p>
                            <p class="text-xs text-gray-400">{stat.detail}</p>
                            {stat.progress.map(|pct| view! {
                                <div class="mt-2 h-2 bg-emerald-100 rounded-full">
                                    <div
                                        class="h-2 bg-emerald-500 rounded-full"
                                        style=format!("width: {}%", pct)
                                    />
                                </div>
                            })}
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="bg-white rounded-xl p-6 border border-emerald-100">
                <h2 class="text-lg font-semibold mb-3">"This Week"</h2>
                <div class="flex space-x-2">
                    {WEEKDAYS
                        .iter()
                        .enumerate()
                        .map(|(i, day)| {
                            let class = if i < STREAK_DAYS_THIS_WEEK {
                                "w-9 h-9 rounded-full bg-emerald-500 text-white flex items-center justify-center text-sm"
                            } else {
                                "w-9 h-9 rounded-full bg-gray-100 text-gray-400 flex items-center justify-center text-sm"
                            };
                            view! { <div class=class>{*day}</div> }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                <div class="bg-white rounded-xl p-6 border border-emerald-100">
                    <h2 class="text-lg font-semibold mb-3">"Today's Nutrition Focus"</h2>
                    <div class="space-y-3">
                        {RECOMMENDATIONS
                            .iter()
                            .map(|rec| view! {
                                <div class="p-3 bg-emerald-50 rounded-lg">
                                    <p class="font-medium">{rec.title}</p>
                                    <p class="text-sm text-gray-500">{rec.detail}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="bg-white rounded-xl p-6 border border-emerald-100">
                    <h2 class="text-lg font-semibold mb-3">"Community Highlights"</h2>
                    <div class="space-y-3">
                        {COMMUNITY_HIGHLIGHTS
                            .iter()
                            .map(|h| view! {
                                <div class="flex items-start space-x-3">
                                    <div class="w-9 h-9 rounded-full bg-teal-500 text-white flex items-center justify-center text-sm font-semibold">
                                        {h.initials}
                                    </div>
                                    <div>
                                        <p class="font-medium">{h.headline}</p>
                                        <p class="text-sm text-gray-500">{h.detail}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-xl p-6 border border-emerald-100">
                <h2 class="text-lg font-semibold mb-3">"Quick Actions"</h2>
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-3">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|action| {
                            let target = action.target;
                            view! {
                                <button
                                    class="px-4 py-3 rounded-lg border border-emerald-200 hover:bg-emerald-50 font-medium"
                                    on:click=move |_| {
                                        shell.update(|s| s.set_active_view(target));
                                    }
                                >
                                    {action.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
