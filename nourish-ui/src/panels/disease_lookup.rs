use leptos::*;
use nourish::panels::disease_lookup::{Condition, ConditionKind};
use nourish::panels::DiseaseLookupPanel;

use super::{read, write, BulletList, PanelTitle};
use crate::components::icon_glyph;
use crate::state::{use_app_state, AppState, ShellHandle};

const TABS: [ConditionKind; 2] = [ConditionKind::Disease, ConditionKind::Disorder];

#[component]
pub fn DiseaseLookup(shell: ShellHandle) -> impl IntoView {
    let state = use_app_state();

    let query = move || read(shell, |p: &DiseaseLookupPanel| p.query().to_string()).unwrap_or_default();
    let tab = move || read(shell, |p: &DiseaseLookupPanel| p.tab()).unwrap_or_default();
    let results = move || read(shell, |p: &DiseaseLookupPanel| p.results()).unwrap_or_default();
    let selected = move || read(shell, |p: &DiseaseLookupPanel| p.selected()).flatten();

    view! {
        <div class="space-y-6">
            <PanelTitle
                title=Signal::derive(move || state.t("disease.title"))
                subtitle=Signal::derive(move || state.t("disease.subtitle"))
            />

            <input
                type="search"
                placeholder=move || state.t("common.search")
                class="w-full border border-gray-300 rounded-lg px-4 py-3"
                prop:value=query
                on:input=move |ev| {
                    write(shell, |p: &mut DiseaseLookupPanel| p.set_query(event_target_value(&ev)));
                }
            />

            <div class="flex space-x-2">
                {TABS
                    .into_iter()
                    .map(|kind| view! {
                        <button
                            class=move || {
                                if tab() == kind {
                                    "px-4 py-2 rounded-lg bg-emerald-600 text-white"
                                } else {
                                    "px-4 py-2 rounded-lg bg-white border border-emerald-100"
                                }
                            }
                            on:click=move |_| {
                                write(shell, |p: &mut DiseaseLookupPanel| p.set_tab(kind));
                            }
                        >
                            {kind.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="grid lg:grid-cols-3 gap-6">
                <div class="space-y-2">
                    {move || {
                        let list = results();
                        if list.is_empty() {
                            return view! {
                                <p class="text-gray-500 text-sm">"No conditions match your search."</p>
                            }
                                .into_view();
                        }
                        list.into_iter()
                            .map(|condition| {
                                let active = selected().is_some_and(|s| s.name == condition.name);
                                view! {
                                    <button
                                        class=if active {
                                            "w-full text-left p-3 rounded-lg bg-emerald-50 border-2 border-emerald-500"
                                        } else {
                                            "w-full text-left p-3 rounded-lg bg-white border border-emerald-100"
                                        }
                                        on:click=move |_| {
                                            write(shell, |p: &mut DiseaseLookupPanel| p.select(condition.name));
                                        }
                                    >
                                        <div class="font-medium">{condition.name}</div>
                                        <div class="text-xs text-gray-500">
                                            {format!("{} · {}", condition.category, condition.severity)}
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="lg:col-span-2">
                    {move || match selected() {
                        Some(condition) => view! { <ConditionDetails condition=condition shell=shell state=state /> }.into_view(),
                        None => view! {
                            <div class="bg-white rounded-xl p-8 border border-emerald-100 text-center text-gray-500">
                                "Select a condition to see symptoms, causes and dietary guidance."
                            </div>
                        }
                            .into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ConditionDetails(condition: &'static Condition, shell: ShellHandle, state: AppState) -> impl IntoView {
    let sections: [(&str, &'static [&'static str]); 5] = [
        ("disease.symptoms", condition.symptoms),
        ("disease.causes", condition.causes),
        ("disease.prevention", condition.prevention),
        ("disease.treatment", condition.treatment),
        ("disease.dietary", condition.dietary),
    ];

    view! {
        <div class="bg-white rounded-xl p-6 border border-emerald-100 space-y-4">
            <div class="flex items-start justify-between">
                <div>
                    <h2 class="text-2xl font-bold">
                        {format!("{} {}", icon_glyph(condition.icon()), condition.name)}
                    </h2>
                    <p class="text-sm text-gray-500">
                        {format!("{} · {}", condition.category, condition.severity)}
                    </p>
                </div>
                <button
                    class="text-gray-500 hover:text-gray-900"
                    on:click=move |_| {
                        write(shell, |p: &mut DiseaseLookupPanel| p.clear_selection());
                    }
                >
                    "✕"
                </button>
            </div>
            <p class="text-gray-600">{condition.description}</p>
            <div class="grid md:grid-cols-2 gap-6">
                {sections
                    .into_iter()
                    .map(|(key, items)| view! {
                        <div>
                            <h3 class="font-semibold mb-2">{move || state.t(key)}</h3>
                            <BulletList items=items />
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
