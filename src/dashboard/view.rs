//! Dashboard views
//!
//! The closed set of panels the dashboard can show, plus the navigation
//! metadata the sidebar renders for each.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the nine dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardView {
    #[default]
    Overview,
    PersonalizedDiet,
    RegionalDiet,
    OrganSpecific,
    DocumentScanner,
    DiseaseLookup,
    NutritionTracker,
    Community,
    Profile,
}

/// Sidebar entry for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub view: DashboardView,
    pub label: &'static str,
    pub description: &'static str,
    /// Translation key for the label
    pub label_key: &'static str,
    /// Icon name, as used by the web front end's icon set
    pub icon: &'static str,
}

impl DashboardView {
    /// Every view, in sidebar order
    pub const ALL: [DashboardView; 9] = [
        DashboardView::Overview,
        DashboardView::PersonalizedDiet,
        DashboardView::RegionalDiet,
        DashboardView::OrganSpecific,
        DashboardView::DocumentScanner,
        DashboardView::DiseaseLookup,
        DashboardView::NutritionTracker,
        DashboardView::Community,
        DashboardView::Profile,
    ];

    /// Kebab-case identifier
    pub fn slug(self) -> &'static str {
        match self {
            DashboardView::Overview => "overview",
            DashboardView::PersonalizedDiet => "personalized-diet",
            DashboardView::RegionalDiet => "regional-diet",
            DashboardView::OrganSpecific => "organ-specific",
            DashboardView::DocumentScanner => "document-scanner",
            DashboardView::DiseaseLookup => "disease-lookup",
            DashboardView::NutritionTracker => "nutrition-tracker",
            DashboardView::Community => "community",
            DashboardView::Profile => "profile",
        }
    }

    /// Sidebar metadata
    pub fn nav_item(self) -> NavItem {
        let (label, description, label_key, icon) = match self {
            DashboardView::Overview => ("Dashboard", "Overview & Stats", "nav.dashboard", "home"),
            DashboardView::PersonalizedDiet => (
                "Personalized Diet",
                "Health-based plans",
                "nav.personalizedDiet",
                "user",
            ),
            DashboardView::RegionalDiet => {
                ("Regional Diets", "Local cuisines", "nav.regionalDiet", "map-pin")
            }
            DashboardView::OrganSpecific => {
                ("Organ Health", "Targeted nutrition", "nav.organDiet", "heart")
            }
            DashboardView::DocumentScanner => {
                ("Report Scanner", "Medical analysis", "nav.scanner", "file-text")
            }
            DashboardView::DiseaseLookup => ("Health Lookup", "Disease info", "nav.lookup", "search"),
            DashboardView::NutritionTracker => {
                ("Nutrition Tracker", "Food analysis", "nav.tracker", "camera")
            }
            DashboardView::Community => ("Community", "Connect & share", "nav.community", "users"),
            DashboardView::Profile => ("Profile", "Your settings", "nav.profile", "settings"),
        };

        NavItem {
            view: self,
            label,
            description,
            label_key,
            icon,
        }
    }

    /// Whether the mounted panel receives the signed-in identity
    pub fn needs_identity(self) -> bool {
        matches!(self, DashboardView::Overview | DashboardView::Profile)
    }
}

/// Navigation entries in sidebar order
pub fn navigation_items() -> Vec<NavItem> {
    DashboardView::ALL.iter().map(|v| v.nav_item()).collect()
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error parsing a view slug
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown dashboard view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for DashboardView {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardView::ALL
            .into_iter()
            .find(|v| v.slug() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
