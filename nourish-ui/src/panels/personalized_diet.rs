use leptos::*;
use nourish::panels::personalized_diet::{ActivityLevel, Gender, HealthProfileForm};
use nourish::panels::PersonalizedDietPanel;

use super::{read, write, BulletList, PanelTitle};
use crate::components::{InlineLoading, Loading};
use crate::state::ShellHandle;

fn form_value(shell: ShellHandle, f: fn(&HealthProfileForm) -> String) -> String {
    read(shell, |p: &PersonalizedDietPanel| f(p.form())).unwrap_or_default()
}

fn set_form(shell: ShellHandle, f: impl FnOnce(&mut HealthProfileForm)) {
    write(shell, |p: &mut PersonalizedDietPanel| f(p.form_mut()));
}

#[component]
fn TextField(
    shell: ShellHandle,
    label: &'static str,
    get: fn(&HealthProfileForm) -> String,
    set: fn(&mut HealthProfileForm, String),
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input_class = "w-full border border-gray-300 rounded-lg px-3 py-2";
    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium">{label}</label>
            {if multiline {
                view! {
                    <textarea
                        class=input_class
                        rows="2"
                        prop:value=move || form_value(shell, get)
                        on:input=move |ev| set_form(shell, |form| set(form, event_target_value(&ev)))
                    />
                }
                    .into_view()
            } else {
                view! {
                    <input
                        class=input_class
                        prop:value=move || form_value(shell, get)
                        on:input=move |ev| set_form(shell, |form| set(form, event_target_value(&ev)))
                    />
                }
                    .into_view()
            }}
        </div>
    }
}

#[component]
pub fn PersonalizedDiet(shell: ShellHandle) -> impl IntoView {
    let generating =
        move || read(shell, |p: &PersonalizedDietPanel| p.is_generating()).unwrap_or(false);
    let plan = move || read(shell, |p: &PersonalizedDietPanel| p.plan()).flatten();

    let on_generate = move |_| {
        if let Some(pending) = write(shell, |p: &mut PersonalizedDietPanel| p.generate()).flatten() {
            shell.run(pending);
        }
    };

    view! {
        <div class="space-y-6">
            <PanelTitle
                title="Personalized Diet Plan"
                subtitle="Tell us about yourself to get a plan built around your health"
            />

            <div class="bg-white rounded-xl p-6 border border-emerald-100 grid md:grid-cols-2 gap-4">
                <TextField shell=shell label="Age" get=|f| f.age.clone() set=|f, v| f.age = v />
                <div class="space-y-1">
                    <label class="block text-sm font-medium">"Gender"</label>
                    <select
                        class="w-full border border-gray-300 rounded-lg px-3 py-2"
                        on:change=move |ev| {
                            let gender = event_target_value(&ev).parse::<Gender>().ok();
                            set_form(shell, |form| form.gender = gender);
                        }
                    >
                        <option value="">"Select gender"</option>
                        {Gender::ALL
                            .into_iter()
                            .map(|g| view! { <option value=g.value()>{g.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <TextField shell=shell label="Weight (kg)" get=|f| f.weight.clone() set=|f, v| f.weight = v />
                <TextField shell=shell label="Height (cm)" get=|f| f.height.clone() set=|f, v| f.height = v />
                <div class="space-y-1 md:col-span-2">
                    <label class="block text-sm font-medium">"Activity Level"</label>
                    <select
                        class="w-full border border-gray-300 rounded-lg px-3 py-2"
                        on:change=move |ev| {
                            let level = event_target_value(&ev).parse::<ActivityLevel>().ok();
                            set_form(shell, |form| form.activity_level = level);
                        }
                    >
                        <option value="">"Select activity level"</option>
                        {ActivityLevel::ALL
                            .into_iter()
                            .map(|a| view! { <option value=a.value()>{a.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <TextField
                    shell=shell
                    label="Health Conditions"
                    get=|f| f.health_conditions.clone()
                    set=|f, v| f.health_conditions = v
                    multiline=true
                />
                <TextField
                    shell=shell
                    label="Dietary Restrictions"
                    get=|f| f.dietary_restrictions.clone()
                    set=|f, v| f.dietary_restrictions = v
                    multiline=true
                />
                <div class="md:col-span-2">
                    <TextField shell=shell label="Goals" get=|f| f.goals.clone() set=|f, v| f.goals = v multiline=true />
                </div>
                <button
                    class="md:col-span-2 flex items-center justify-center space-x-2 bg-emerald-600 hover:bg-emerald-700 disabled:bg-emerald-300 text-white font-medium rounded-lg py-3"
                    disabled=generating
                    on:click=on_generate
                >
                    <Show when=generating>
                        <InlineLoading />
                    </Show>
                    <span>{move || if generating() { "Generating Your Plan..." } else { "Generate My Diet Plan" }}</span>
                </button>
            </div>

            <Show when=generating>
                <Loading label="Analyzing your health profile..." />
            </Show>

            {move || plan().map(|plan| view! {
                <div class="bg-white rounded-xl p-6 border border-emerald-100 space-y-4">
                    <div>
                        <h2 class="text-2xl font-bold">{plan.title}</h2>
                        <p class="text-gray-500">
                            {format!("{} · {} · {} kcal in sample day", plan.duration, plan.calories, plan.total_calories())}
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 gap-4">
                        {plan.meals
                            .iter()
                            .map(|meal| view! {
                                <div class="p-4 bg-emerald-50 rounded-lg">
                                    <div class="flex justify-between">
                                        <span class="font-semibold">{meal.time}</span>
                                        <span class="text-sm text-gray-500">{format!("{} kcal", meal.calories)}</span>
                                    </div>
                                    <p class="my-2">{meal.food}</p>
                                    <BulletList items=meal.benefits marker="✓" />
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            })}
        </div>
    }
}
