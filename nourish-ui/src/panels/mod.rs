//! Dashboard Panels
//!
//! One component per dashboard view. Panel state lives in the core shell;
//! components reach it through [`read`] and [`write`], which resolve to
//! nothing once the shell has moved on to another view.

mod community;
mod disease_lookup;
mod document_scanner;
mod nutrition_tracker;
mod organ_diet;
mod overview;
mod personalized_diet;
mod profile;
mod regional_diet;

use leptos::*;
use nourish::dashboard::DashboardView;
use nourish::panels::{
    CommunityPanel, DiseaseLookupPanel, DocumentScannerPanel, NutritionTrackerPanel,
    OrganDietPanel, OverviewPanel, PanelState, PersonalizedDietPanel, ProfilePanel,
    RegionalDietPanel,
};

use crate::state::ShellHandle;
use community::Community;
use disease_lookup::DiseaseLookup;
use document_scanner::DocumentScanner;
use nutrition_tracker::NutritionTracker;
use organ_diet::OrganDiet;
use overview::Overview;
use personalized_diet::PersonalizedDiet;
use profile::Profile;
use regional_diet::RegionalDiet;

/// A panel type that can be found inside [`PanelState`]
pub trait MountedPanel: 'static {
    fn get(state: &PanelState) -> Option<&Self>;
    fn get_mut(state: &mut PanelState) -> Option<&mut Self>;
}

macro_rules! mounted_panel {
    ($($variant:ident => $panel:ty),* $(,)?) => {
        $(
            impl MountedPanel for $panel {
                fn get(state: &PanelState) -> Option<&Self> {
                    match state {
                        PanelState::$variant(panel) => Some(panel),
                        _ => None,
                    }
                }

                fn get_mut(state: &mut PanelState) -> Option<&mut Self> {
                    match state {
                        PanelState::$variant(panel) => Some(panel),
                        _ => None,
                    }
                }
            }
        )*
    };
}

mounted_panel! {
    Overview => OverviewPanel,
    PersonalizedDiet => PersonalizedDietPanel,
    RegionalDiet => RegionalDietPanel,
    OrganSpecific => OrganDietPanel,
    DocumentScanner => DocumentScannerPanel,
    DiseaseLookup => DiseaseLookupPanel,
    NutritionTracker => NutritionTrackerPanel,
    Community => CommunityPanel,
    Profile => ProfilePanel,
}

/// Read the mounted panel of type `P` (reactive)
pub fn read<P: MountedPanel, R>(shell: ShellHandle, f: impl FnOnce(&P) -> R) -> Option<R> {
    shell.with(|s| P::get(s.panel()).map(f))
}

/// Mutate the mounted panel of type `P` and re-render
pub fn write<P: MountedPanel, R>(shell: ShellHandle, f: impl FnOnce(&mut P) -> R) -> Option<R> {
    shell
        .update(|s| P::get_mut(s.panel_mut()).map(f))
        .flatten()
}

/// Section heading shared by all panels
#[component]
fn PanelTitle(#[prop(into)] title: MaybeSignal<String>, #[prop(into)] subtitle: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="mb-6">
            <h1 class="text-3xl font-bold text-gray-900">{move || title.get()}</h1>
            <p class="text-gray-500 mt-1">{move || subtitle.get()}</p>
        </div>
    }
}

/// Bulleted list of static strings
#[component]
fn BulletList(items: &'static [&'static str], #[prop(default = "•")] marker: &'static str) -> impl IntoView {
    view! {
        <ul class="space-y-1">
            {items
                .iter()
                .map(|item| view! {
                    <li class="flex items-start space-x-2 text-sm">
                        <span class="text-emerald-600">{marker}</span>
                        <span>{*item}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

/// The component for whichever view the shell has mounted
#[component]
pub fn ActivePanel(shell: ShellHandle) -> impl IntoView {
    let active = create_memo(move |_| shell.with(|s| s.active_view()));

    move || match active.get() {
        DashboardView::Overview => view! { <Overview shell=shell /> }.into_view(),
        DashboardView::PersonalizedDiet => {
            view! { <PersonalizedDiet shell=shell /> }.into_view()
        }
        DashboardView::RegionalDiet => view! { <RegionalDiet shell=shell /> }.into_view(),
        DashboardView::OrganSpecific => view! { <OrganDiet shell=shell /> }.into_view(),
        DashboardView::DocumentScanner => {
            view! { <DocumentScanner shell=shell /> }.into_view()
        }
        DashboardView::DiseaseLookup => {
            view! { <DiseaseLookup shell=shell /> }.into_view()
        }
        DashboardView::NutritionTracker => {
            view! { <NutritionTracker shell=shell /> }.into_view()
        }
        DashboardView::Community => view! { <Community shell=shell /> }.into_view(),
        DashboardView::Profile => view! { <Profile shell=shell /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nourish::i18n::LocalizationStore;
    use nourish::panels::{PanelContext, ScopeGuard};
    use nourish::storage::MemoryPreferences;
    use std::rc::Rc;

    fn mount(view: DashboardView) -> PanelState {
        let i18n = Rc::new(LocalizationStore::restore(Rc::new(MemoryPreferences::new())));
        let guard = ScopeGuard::new();
        PanelState::mount(view, &PanelContext::new(i18n), guard.scope())
    }

    #[test]
    fn test_mounted_panel_matches_its_variant_only() {
        let mut state = mount(DashboardView::DiseaseLookup);
        assert!(DiseaseLookupPanel::get(&state).is_some());
        assert!(CommunityPanel::get(&state).is_none());
        assert!(OverviewPanel::get_mut(&mut state).is_none());

        DiseaseLookupPanel::get_mut(&mut state)
            .map(|p| p.set_query("asthma"))
            .unwrap();
        assert_eq!(DiseaseLookupPanel::get(&state).unwrap().query(), "asthma");
    }

    #[test]
    fn test_every_view_has_a_mounted_panel() {
        for view in DashboardView::ALL {
            let state = mount(view);
            let found = match view {
                DashboardView::Overview => OverviewPanel::get(&state).is_some(),
                DashboardView::PersonalizedDiet => PersonalizedDietPanel::get(&state).is_some(),
                DashboardView::RegionalDiet => RegionalDietPanel::get(&state).is_some(),
                DashboardView::OrganSpecific => OrganDietPanel::get(&state).is_some(),
                DashboardView::DocumentScanner => DocumentScannerPanel::get(&state).is_some(),
                DashboardView::DiseaseLookup => DiseaseLookupPanel::get(&state).is_some(),
                DashboardView::NutritionTracker => NutritionTrackerPanel::get(&state).is_some(),
                DashboardView::Community => CommunityPanel::get(&state).is_some(),
                DashboardView::Profile => ProfilePanel::get(&state).is_some(),
            };
            assert!(found, "{} not reachable", view);
        }
    }
}
