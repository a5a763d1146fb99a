//! Dashboard overview panel
//!
//! Greeting, today's stats, nutrition focus, community highlights and quick
//! actions. The only input is the signed-in user.

use crate::auth::User;
use crate::dashboard::header::{greeting_for_hour, greeting_name};
use crate::dashboard::DashboardView;
use chrono::Timelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
    /// Progress bar fill, percent
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub initials: &'static str,
    pub headline: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub target: DashboardView,
}

pub const QUICK_STATS: &[QuickStat] = &[
    QuickStat {
        label: "Water Intake",
        value: "6/8",
        detail: "glasses today",
        progress: Some(75),
    },
    QuickStat {
        label: "Calories",
        value: "1,847",
        detail: "of 2,000 goal",
        progress: Some(92),
    },
    QuickStat {
        label: "Streak",
        value: "12",
        detail: "days consistent",
        progress: None,
    },
    QuickStat {
        label: "Progress",
        value: "87%",
        detail: "weekly goals",
        progress: None,
    },
];

/// Days of the current week on which the streak was kept
pub const STREAK_DAYS_THIS_WEEK: usize = 5;

pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        title: "Boost Iron Intake",
        detail: "Add spinach, lentils, or lean meat to your meals",
    },
    Recommendation {
        title: "Increase Antioxidants",
        detail: "Include berries and green tea in your diet",
    },
    Recommendation {
        title: "Hydration Check",
        detail: "You're doing great! Keep up the water intake",
    },
];

pub const COMMUNITY_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        initials: "MK",
        headline: "Maya shared a recipe",
        detail: "\"Heart-healthy quinoa bowl with roasted vegetables\"",
    },
    Highlight {
        initials: "RJ",
        headline: "Raj completed 7-day streak",
        detail: "Following Rajasthani traditional diet plan",
    },
];

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Scan Food",
        target: DashboardView::NutritionTracker,
    },
    QuickAction {
        label: "Meal Plan",
        target: DashboardView::PersonalizedDiet,
    },
    QuickAction {
        label: "Track Progress",
        target: DashboardView::Profile,
    },
    QuickAction {
        label: "Community",
        target: DashboardView::Community,
    },
];

#[derive(Debug, Clone, Default)]
pub struct OverviewPanel {
    user: Option<User>,
}

impl OverviewPanel {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_name(&self) -> String {
        greeting_name(self.user.as_ref())
    }

    /// Welcome line for a given local hour
    pub fn greeting_at(&self, hour: u32) -> String {
        format!("{}, {}! 🌱", greeting_for_hour(hour), self.user_name())
    }

    /// Welcome line for the current local time
    pub fn greeting(&self) -> String {
        self.greeting_at(chrono::Local::now().hour())
    }

    pub fn stats(&self) -> &'static [QuickStat] {
        QUICK_STATS
    }

    pub fn recommendations(&self) -> &'static [Recommendation] {
        RECOMMENDATIONS
    }

    pub fn highlights(&self) -> &'static [Highlight] {
        COMMUNITY_HIGHLIGHTS
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        QUICK_ACTIONS
    }

    /// View a quick action leads to, by its label
    pub fn quick_action(&self, label: &str) -> Option<DashboardView> {
        QUICK_ACTIONS
            .iter()
            .find(|a| a.label.eq_ignore_ascii_case(label.trim()))
            .map(|a| a.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_uses_name_chain() {
        let panel = OverviewPanel::new(Some(User::new("1", "asha@example.com")));
        assert_eq!(panel.greeting_at(9), "Good Morning, asha! 🌱");

        let anonymous = OverviewPanel::new(None);
        assert_eq!(anonymous.greeting_at(20), "Good Evening, Wellness Seeker! 🌱");
    }

    #[test]
    fn test_static_content() {
        let panel = OverviewPanel::default();
        assert_eq!(panel.stats().len(), 4);
        assert_eq!(panel.stats()[0].value, "6/8");
        assert_eq!(panel.recommendations()[0].title, "Boost Iron Intake");
        assert_eq!(panel.highlights().len(), 2);
    }

    #[test]
    fn test_quick_actions_route_to_views() {
        let panel = OverviewPanel::default();
        assert_eq!(panel.quick_action("scan food"), Some(DashboardView::NutritionTracker));
        assert_eq!(panel.quick_action("Meal Plan"), Some(DashboardView::PersonalizedDiet));
        assert_eq!(panel.quick_action("Dance"), None);
    }
}
