use leptos::*;
use nourish::i18n::Language;
use nourish::panels::profile::{NotificationSetting, PrivacySetting, ProfileData, ProfileTab, BLOOD_TYPES};
use nourish::panels::ProfilePanel;

use super::{read, write, PanelTitle};
use crate::state::{use_app_state, AppState, ShellHandle};

const TABS: [(ProfileTab, &str); 5] = [
    (ProfileTab::Personal, "profile.personalInfo"),
    (ProfileTab::Health, "profile.healthProfile"),
    (ProfileTab::Medical, "profile.medicalConditions"),
    (ProfileTab::Settings, "settings.title"),
    (ProfileTab::Achievements, "profile.achievements"),
];

type Getter = fn(&ProfileData) -> &String;
type Setter = fn(&mut ProfileData) -> &mut String;

/// One editable profile field, labelled through the translation table
#[component]
fn Field(
    shell: ShellHandle,
    state: AppState,
    label_key: &'static str,
    get: Getter,
    set: Setter,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || read(shell, |p: &ProfilePanel| get(p.data()).clone()).unwrap_or_default();
    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        write(shell, |p: &mut ProfilePanel| *set(p.data_mut()) = text);
    };
    let input_class = "w-full border border-gray-300 rounded-lg px-3 py-2";

    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium">{move || state.t(label_key)}</label>
            {if multiline {
                view! { <textarea rows="3" class=input_class prop:value=value on:input=on_input /> }.into_view()
            } else {
                view! { <input class=input_class prop:value=value on:input=on_input /> }.into_view()
            }}
        </div>
    }
}

/// A profile field without a translated label
#[component]
fn PlainField(shell: ShellHandle, label: &'static str, get: Getter, set: Setter) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium">{label}</label>
            <input
                class="w-full border border-gray-300 rounded-lg px-3 py-2"
                prop:value=move || read(shell, |p: &ProfilePanel| get(p.data()).clone()).unwrap_or_default()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    write(shell, |p: &mut ProfilePanel| *set(p.data_mut()) = text);
                }
            />
        </div>
    }
}

#[component]
fn Toggle(#[prop(into)] label: String, checked: Signal<bool>, on_toggle: Callback<bool>) -> impl IntoView {
    view! {
        <label class="flex items-center justify-between py-2">
            <span class="text-sm">{label}</span>
            <input
                type="checkbox"
                class="w-5 h-5 accent-emerald-600"
                prop:checked=checked
                on:change=move |ev| on_toggle.call(event_target_checked(&ev))
            />
        </label>
    }
}

#[component]
pub fn Profile(shell: ShellHandle) -> impl IntoView {
    let state = use_app_state();

    let tab = move || read(shell, |p: &ProfilePanel| p.tab()).unwrap_or_default();
    let initials = move || read(shell, |p: &ProfilePanel| p.initials()).unwrap_or_default();
    let name = move || read(shell, |p: &ProfilePanel| p.display_name().to_string()).unwrap_or_default();
    let email = move || read(shell, |p: &ProfilePanel| p.email().to_string()).unwrap_or_default();

    view! {
        <div class="space-y-6">
            <PanelTitle
                title=Signal::derive(move || state.t("profile.title"))
                subtitle=Signal::derive(move || state.t("profile.subtitle"))
            />

            <div class="bg-white rounded-xl p-6 border border-emerald-100 flex items-center space-x-4">
                <div class="w-16 h-16 rounded-full bg-emerald-600 text-white text-xl font-bold flex items-center justify-center">
                    {initials}
                </div>
                <div>
                    <p class="text-xl font-semibold">{name}</p>
                    <p class="text-sm text-gray-500">{email}</p>
                </div>
            </div>

            <div class="flex flex-wrap gap-2">
                {TABS
                    .into_iter()
                    .map(|(kind, key)| view! {
                        <button
                            class=move || {
                                if tab() == kind {
                                    "px-4 py-2 rounded-lg bg-emerald-600 text-white"
                                } else {
                                    "px-4 py-2 rounded-lg bg-white border border-emerald-100"
                                }
                            }
                            on:click=move |_| {
                                write(shell, |p: &mut ProfilePanel| p.set_tab(kind));
                            }
                        >
                            {move || state.t(key)}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="bg-white rounded-xl p-6 border border-emerald-100">
                {move || match tab() {
                    ProfileTab::Personal => view! {
                        <div class="grid md:grid-cols-2 gap-4">
                            <Field shell=shell state=state label_key="profile.fullName" get=|d| &d.full_name set=|d| &mut d.full_name />
                            <div class="space-y-1">
                                <label class="block text-sm font-medium">{move || state.t("profile.email")}</label>
                                <input class="w-full border border-gray-200 bg-gray-50 rounded-lg px-3 py-2" disabled prop:value=email />
                            </div>
                            <Field shell=shell state=state label_key="profile.phone" get=|d| &d.phone set=|d| &mut d.phone />
                            <Field shell=shell state=state label_key="profile.address" get=|d| &d.address set=|d| &mut d.address />
                        </div>
                    }
                        .into_view(),
                    ProfileTab::Health => view! {
                        <div class="grid md:grid-cols-2 gap-4">
                            <Field shell=shell state=state label_key="profile.age" get=|d| &d.age set=|d| &mut d.age />
                            <Field shell=shell state=state label_key="profile.gender" get=|d| &d.gender set=|d| &mut d.gender />
                            <Field shell=shell state=state label_key="profile.height" get=|d| &d.height set=|d| &mut d.height />
                            <Field shell=shell state=state label_key="profile.weight" get=|d| &d.weight set=|d| &mut d.weight />
                            <Field shell=shell state=state label_key="profile.activityLevel" get=|d| &d.activity_level set=|d| &mut d.activity_level />
                            <Field shell=shell state=state label_key="profile.healthGoals" get=|d| &d.health_goals set=|d| &mut d.health_goals />
                            <div class="md:col-span-2">
                                <Field shell=shell state=state label_key="profile.preferences" get=|d| &d.dietary_preferences set=|d| &mut d.dietary_preferences multiline=true />
                            </div>
                        </div>
                    }
                        .into_view(),
                    ProfileTab::Medical => view! { <MedicalTab shell=shell state=state /> }.into_view(),
                    ProfileTab::Settings => view! { <SettingsTab shell=shell state=state /> }.into_view(),
                    ProfileTab::Achievements => view! { <AchievementsTab shell=shell /> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn MedicalTab(shell: ShellHandle, state: AppState) -> impl IntoView {
    let blood_type = move || read(shell, |p: &ProfilePanel| p.data().blood_type.clone()).unwrap_or_default();

    view! {
        <div class="grid md:grid-cols-2 gap-4">
            <Field shell=shell state=state label_key="profile.medicalConditions" get=|d| &d.medical_conditions set=|d| &mut d.medical_conditions multiline=true />
            <Field shell=shell state=state label_key="profile.medications" get=|d| &d.medications set=|d| &mut d.medications multiline=true />
            <Field shell=shell state=state label_key="profile.allergies" get=|d| &d.allergies set=|d| &mut d.allergies />
            <div class="space-y-1">
                <label class="block text-sm font-medium">"Blood Type"</label>
                <select
                    class="w-full border border-gray-300 rounded-lg px-3 py-2"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        write(shell, |p: &mut ProfilePanel| p.data_mut().blood_type = value);
                    }
                >
                    <option value="">"Select blood type"</option>
                    {BLOOD_TYPES
                        .into_iter()
                        .map(|bt| view! { <option value=bt selected=move || blood_type() == bt>{bt}</option> })
                        .collect_view()}
                </select>
            </div>
            <PlainField shell=shell label="Emergency Contact" get=|d| &d.emergency_contact set=|d| &mut d.emergency_contact />
            <PlainField shell=shell label="Insurance" get=|d| &d.insurance_info set=|d| &mut d.insurance_info />
        </div>
    }
}

#[component]
fn SettingsTab(shell: ShellHandle, state: AppState) -> impl IntoView {
    let options = read(shell, |p: &ProfilePanel| p.language_options()).unwrap_or_default();

    let on_language = move |ev: ev::Event| {
        let Some(language) = Language::from_code(&event_target_value(&ev)) else {
            return;
        };
        write(shell, |p: &mut ProfilePanel| p.set_language(language));
        state.language.set(language);
    };

    view! {
        <div class="space-y-8">
            <section>
                <h3 class="font-semibold mb-2">{move || state.t("settings.notifications")}</h3>
                {NotificationSetting::ALL
                    .into_iter()
                    .map(|setting| view! {
                        <Toggle
                            label=setting.label()
                            checked=Signal::derive(move || read(shell, |p: &ProfilePanel| p.notification(setting)).unwrap_or(false))
                            on_toggle=Callback::new(move |on: bool| {
                                write(shell, |p: &mut ProfilePanel| p.set_notification(setting, on));
                            })
                        />
                    })
                    .collect_view()}
            </section>

            <section>
                <h3 class="font-semibold mb-2">{move || state.t("settings.privacy")}</h3>
                {[
                    (PrivacySetting::ProfileVisibility, "Public Profile"),
                    (PrivacySetting::DataAnalytics, "Share Anonymous Analytics"),
                ]
                    .into_iter()
                    .map(|(setting, label)| view! {
                        <Toggle
                            label=label
                            checked=Signal::derive(move || read(shell, |p: &ProfilePanel| p.privacy(setting)).unwrap_or(false))
                            on_toggle=Callback::new(move |on: bool| {
                                write(shell, |p: &mut ProfilePanel| p.set_privacy(setting, on));
                            })
                        />
                    })
                    .collect_view()}
            </section>

            <section class="space-y-2">
                <h3 class="font-semibold">{move || state.t("settings.language")}</h3>
                <p class="text-sm text-gray-500">{move || state.t("settings.selectLanguage")}</p>
                <select class="border border-gray-300 rounded-lg px-3 py-2" on:change=on_language>
                    {options
                        .into_iter()
                        .map(|(language, label)| view! {
                            <option value=language.code() selected=move || state.language.get() == language>
                                {label}
                            </option>
                        })
                        .collect_view()}
                </select>
            </section>
        </div>
    }
}

#[component]
fn AchievementsTab(shell: ShellHandle) -> impl IntoView {
    let achievements = read(shell, |p: &ProfilePanel| p.achievements()).unwrap_or_default();
    let earned = read(shell, |p: &ProfilePanel| p.earned_count()).unwrap_or_default();
    let stats = read(shell, |p: &ProfilePanel| p.health_stats()).unwrap_or_default();

    view! {
        <div class="space-y-6">
            <p class="text-sm text-gray-500">
                {format!("{} of {} achievements earned", earned, achievements.len())}
            </p>
            <div class="grid md:grid-cols-2 gap-3">
                {achievements
                    .iter()
                    .map(|a| view! {
                        <div class=if a.earned {
                            "p-4 rounded-lg border border-emerald-300 bg-emerald-50"
                        } else {
                            "p-4 rounded-lg border border-gray-200 opacity-60"
                        }>
                            <p class="font-medium">{format!("{} {}", if a.earned { "🏆" } else { "🔒" }, a.name)}</p>
                            <p class="text-sm text-gray-500">{a.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="space-y-3">
                {stats
                    .iter()
                    .map(|s| view! {
                        <div>
                            <div class="flex justify-between text-sm">
                                <span>{s.label}</span>
                                <span>{format!("{}/{}", s.value, s.total)}</span>
                            </div>
                            <div class="h-2 bg-emerald-100 rounded-full">
                                <div class="h-2 bg-emerald-500 rounded-full" style=format!("width: {}%", s.percent()) />
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
