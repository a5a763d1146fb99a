//! Feature panels
//!
//! Each dashboard view is backed by one panel type holding that view's local
//! state. Panels are self-contained: their datasets are immutable literals
//! and the few that take input get it through [`PanelContext`]. Panels with
//! simulated analysis hand back a [`PendingAnalysis`] the caller drives on a
//! [`Work`] implementation; see [`work`] for the lifetime rules.

pub mod community;
pub mod disease_lookup;
pub mod document_scanner;
pub mod nutrition_tracker;
pub mod organ_diet;
pub mod overview;
pub mod personalized_diet;
pub mod profile;
pub mod regional_diet;
pub mod work;

pub use community::CommunityPanel;
pub use disease_lookup::DiseaseLookupPanel;
pub use document_scanner::DocumentScannerPanel;
pub use nutrition_tracker::NutritionTrackerPanel;
pub use organ_diet::OrganDietPanel;
pub use overview::OverviewPanel;
pub use personalized_diet::PersonalizedDietPanel;
pub use profile::ProfilePanel;
pub use regional_diet::RegionalDietPanel;
pub use work::{Analysis, Immediate, PanelScope, PendingAnalysis, ScopeGuard, Work};

#[cfg(feature = "native")]
pub use work::TokioDelay;

use crate::auth::User;
use crate::dashboard::DashboardView;
use crate::i18n::LocalizationStore;
use crate::location::LocationData;
use std::rc::Rc;

/// Inputs shared with panels at mount time
#[derive(Clone)]
pub struct PanelContext {
    pub user: Option<User>,
    pub i18n: Rc<LocalizationStore>,
    /// Last resolved location, used to preselect a region
    pub location: Option<LocationData>,
}

impl PanelContext {
    pub fn new(i18n: Rc<LocalizationStore>) -> Self {
        Self {
            user: None,
            i18n,
            location: None,
        }
    }

    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }

    pub fn with_location(mut self, location: Option<LocationData>) -> Self {
        self.location = location;
        self
    }
}

/// State of the mounted panel
pub enum PanelState {
    Overview(OverviewPanel),
    PersonalizedDiet(PersonalizedDietPanel),
    RegionalDiet(RegionalDietPanel),
    OrganSpecific(OrganDietPanel),
    DocumentScanner(DocumentScannerPanel),
    DiseaseLookup(DiseaseLookupPanel),
    NutritionTracker(NutritionTrackerPanel),
    Community(CommunityPanel),
    Profile(ProfilePanel),
}

impl PanelState {
    /// Fresh state for `view`; deferred work it starts is tied to `scope`
    pub fn mount(view: DashboardView, ctx: &PanelContext, scope: PanelScope) -> Self {
        match view {
            DashboardView::Overview => PanelState::Overview(OverviewPanel::new(ctx.user.clone())),
            DashboardView::PersonalizedDiet => {
                PanelState::PersonalizedDiet(PersonalizedDietPanel::new(scope))
            }
            DashboardView::RegionalDiet => {
                let mut panel = RegionalDietPanel::new();
                if let Some(location) = &ctx.location {
                    panel.apply_location(location);
                }
                PanelState::RegionalDiet(panel)
            }
            DashboardView::OrganSpecific => PanelState::OrganSpecific(OrganDietPanel::new()),
            DashboardView::DocumentScanner => {
                PanelState::DocumentScanner(DocumentScannerPanel::new(scope))
            }
            DashboardView::DiseaseLookup => PanelState::DiseaseLookup(DiseaseLookupPanel::new()),
            DashboardView::NutritionTracker => {
                PanelState::NutritionTracker(NutritionTrackerPanel::new(scope))
            }
            DashboardView::Community => {
                let author = ctx
                    .user
                    .as_ref()
                    .and_then(|u| u.display_name().or_else(|| u.email_local_part()))
                    .unwrap_or("You");
                PanelState::Community(CommunityPanel::new(author))
            }
            DashboardView::Profile => {
                PanelState::Profile(ProfilePanel::new(ctx.user.clone(), Rc::clone(&ctx.i18n)))
            }
        }
    }

    pub fn view(&self) -> DashboardView {
        match self {
            PanelState::Overview(_) => DashboardView::Overview,
            PanelState::PersonalizedDiet(_) => DashboardView::PersonalizedDiet,
            PanelState::RegionalDiet(_) => DashboardView::RegionalDiet,
            PanelState::OrganSpecific(_) => DashboardView::OrganSpecific,
            PanelState::DocumentScanner(_) => DashboardView::DocumentScanner,
            PanelState::DiseaseLookup(_) => DashboardView::DiseaseLookup,
            PanelState::NutritionTracker(_) => DashboardView::NutritionTracker,
            PanelState::Community(_) => DashboardView::Community,
            PanelState::Profile(_) => DashboardView::Profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Coordinates;
    use crate::storage::MemoryPreferences;

    fn context() -> PanelContext {
        let i18n = Rc::new(LocalizationStore::restore(Rc::new(MemoryPreferences::new())));
        PanelContext::new(i18n)
    }

    #[test]
    fn test_mount_every_view() {
        let ctx = context();
        let guard = ScopeGuard::new();
        for view in DashboardView::ALL {
            let state = PanelState::mount(view, &ctx, guard.scope());
            assert_eq!(state.view(), view);
        }
    }

    #[test]
    fn test_regional_preselects_from_location() {
        let location = LocationData {
            state: Some("Kerala".into()),
            ..LocationData::bare(Coordinates::new(9.93, 76.26))
        };
        let ctx = context().with_location(Some(location));
        let guard = ScopeGuard::new();

        match PanelState::mount(DashboardView::RegionalDiet, &ctx, guard.scope()) {
            PanelState::RegionalDiet(panel) => {
                assert_eq!(panel.selected().map(|r| r.name), Some("Kerala"));
            }
            _ => panic!("expected regional panel"),
        }
    }

    #[test]
    fn test_community_author_from_identity() {
        let user = User::new("1", "asha@example.com").with_full_name("Asha Rao");
        let ctx = context().with_user(Some(user));
        let guard = ScopeGuard::new();

        match PanelState::mount(DashboardView::Community, &ctx, guard.scope()) {
            PanelState::Community(mut panel) => {
                panel.set_draft("hello");
                assert_eq!(panel.share().unwrap().author, "Asha Rao");
            }
            _ => panic!("expected community panel"),
        }
    }
}
