//! User profile panel
//!
//! Editable personal, health and medical fields seeded from the signed-in
//! identity, notification and privacy toggles, achievements, and the
//! language picker backed by the shared [`LocalizationStore`].

use crate::auth::User;
use crate::i18n::{Language, LocalizationStore};
use std::rc::Rc;

pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Tabs of the profile page; settings hosts notifications, privacy and language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileTab {
    #[default]
    Personal,
    Health,
    Medical,
    Settings,
    Achievements,
}

/// Editable profile fields. Email is read-only and lives on the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileData {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub activity_level: String,
    pub health_goals: String,
    pub dietary_preferences: String,
    pub allergies: String,
    pub medical_conditions: String,
    pub medications: String,
    pub emergency_contact: String,
    pub blood_type: String,
    pub insurance_info: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationSetting {
    EmailUpdates,
    MealReminders,
    CommunityActivity,
    WeeklyReports,
}

impl NotificationSetting {
    pub const ALL: [NotificationSetting; 4] = [
        NotificationSetting::EmailUpdates,
        NotificationSetting::MealReminders,
        NotificationSetting::CommunityActivity,
        NotificationSetting::WeeklyReports,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationSetting::EmailUpdates => "Email Updates",
            NotificationSetting::MealReminders => "Meal Reminders",
            NotificationSetting::CommunityActivity => "Community Activity",
            NotificationSetting::WeeklyReports => "Weekly Reports",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrivacySetting {
    ProfileVisibility,
    DataAnalytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStat {
    pub label: &'static str,
    pub value: u32,
    pub total: u32,
}

impl HealthStat {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.value * 100 / self.total
        }
    }
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        name: "First Week Complete",
        description: "Completed your first week",
        earned: true,
    },
    Achievement {
        name: "Recipe Sharer",
        description: "Shared 5 recipes with community",
        earned: true,
    },
    Achievement {
        name: "Streak Master",
        description: "Maintained 30-day streak",
        earned: false,
    },
    Achievement {
        name: "Health Guru",
        description: "Helped 10 community members",
        earned: false,
    },
];

pub const HEALTH_STATS: &[HealthStat] = &[
    HealthStat { label: "Days Active", value: 28, total: 30 },
    HealthStat { label: "Recipes Tried", value: 15, total: 20 },
    HealthStat { label: "Community Posts", value: 8, total: 10 },
    HealthStat { label: "Health Goals", value: 7, total: 10 },
];

pub struct ProfilePanel {
    user: Option<User>,
    i18n: Rc<LocalizationStore>,
    tab: ProfileTab,
    data: ProfileData,
    notifications: [bool; 4],
    profile_visible: bool,
    data_analytics: bool,
}

impl ProfilePanel {
    pub fn new(user: Option<User>, i18n: Rc<LocalizationStore>) -> Self {
        let data = ProfileData {
            full_name: user
                .as_ref()
                .and_then(|u| u.full_name.clone())
                .unwrap_or_default(),
            ..ProfileData::default()
        };

        Self {
            user,
            i18n,
            tab: ProfileTab::default(),
            data,
            notifications: [true, true, false, true],
            profile_visible: true,
            data_analytics: true,
        }
    }

    pub fn email(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .unwrap_or_default()
    }

    /// Word initials of the full name, else the first two characters of the
    /// email, else "UN"
    pub fn initials(&self) -> String {
        let name = self.data.full_name.trim();
        if !name.is_empty() {
            return name
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .flat_map(char::to_uppercase)
                .collect();
        }
        match self.email() {
            "" => "UN".to_string(),
            email => email.chars().take(2).flat_map(char::to_uppercase).collect(),
        }
    }

    pub fn display_name(&self) -> &str {
        match self.data.full_name.trim() {
            "" => "Wellness Seeker",
            name => name,
        }
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    pub fn data(&self) -> &ProfileData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ProfileData {
        &mut self.data
    }

    pub fn notification(&self, setting: NotificationSetting) -> bool {
        self.notifications[setting.index()]
    }

    pub fn set_notification(&mut self, setting: NotificationSetting, enabled: bool) {
        self.notifications[setting.index()] = enabled;
    }

    pub fn privacy(&self, setting: PrivacySetting) -> bool {
        match setting {
            PrivacySetting::ProfileVisibility => self.profile_visible,
            PrivacySetting::DataAnalytics => self.data_analytics,
        }
    }

    pub fn set_privacy(&mut self, setting: PrivacySetting, enabled: bool) {
        match setting {
            PrivacySetting::ProfileVisibility => self.profile_visible = enabled,
            PrivacySetting::DataAnalytics => self.data_analytics = enabled,
        }
    }

    pub fn achievements(&self) -> &'static [Achievement] {
        ACHIEVEMENTS
    }

    pub fn earned_count(&self) -> usize {
        ACHIEVEMENTS.iter().filter(|a| a.earned).count()
    }

    pub fn health_stats(&self) -> &'static [HealthStat] {
        HEALTH_STATS
    }

    pub fn language(&self) -> Language {
        self.i18n.language()
    }

    /// Change the app-wide language
    pub fn set_language(&self, language: Language) {
        self.i18n.set_language(language);
    }

    /// Picker entries, e.g. "हिंदी (Hindi)"
    pub fn language_options(&self) -> Vec<(Language, String)> {
        Language::ALL
            .into_iter()
            .map(|l| (l, format!("{} ({})", l.native_name(), l.name())))
            .collect()
    }

    pub fn t(&self, key: &str) -> String {
        self.i18n.t(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferences;

    fn store() -> Rc<LocalizationStore> {
        Rc::new(LocalizationStore::restore(Rc::new(MemoryPreferences::new())))
    }

    #[test]
    fn test_seeded_from_identity() {
        let user = User::new("1", "asha@example.com").with_full_name("Asha Devi Rao");
        let panel = ProfilePanel::new(Some(user), store());
        assert_eq!(panel.data().full_name, "Asha Devi Rao");
        assert_eq!(panel.initials(), "ADR");
        assert_eq!(panel.display_name(), "Asha Devi Rao");
        assert_eq!(panel.email(), "asha@example.com");
    }

    #[test]
    fn test_initials_fallbacks() {
        let panel = ProfilePanel::new(Some(User::new("1", "maya@example.com")), store());
        assert_eq!(panel.initials(), "MA");
        assert_eq!(panel.display_name(), "Wellness Seeker");

        let anonymous = ProfilePanel::new(None, store());
        assert_eq!(anonymous.initials(), "UN");
    }

    #[test]
    fn test_toggle_defaults() {
        let mut panel = ProfilePanel::new(None, store());
        assert!(panel.notification(NotificationSetting::EmailUpdates));
        assert!(!panel.notification(NotificationSetting::CommunityActivity));
        assert!(panel.privacy(PrivacySetting::DataAnalytics));

        panel.set_notification(NotificationSetting::CommunityActivity, true);
        panel.set_privacy(PrivacySetting::ProfileVisibility, false);
        assert!(panel.notification(NotificationSetting::CommunityActivity));
        assert!(!panel.privacy(PrivacySetting::ProfileVisibility));
    }

    #[test]
    fn test_language_goes_through_shared_store() {
        let i18n = store();
        let panel = ProfilePanel::new(None, i18n.clone());

        panel.set_language(Language::Hi);
        assert_eq!(i18n.language(), Language::Hi);
        assert_eq!(panel.t("common.save"), "सहेजें");

        let options = panel.language_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].1, "English (English)");
    }

    #[test]
    fn test_achievements_and_stats() {
        let panel = ProfilePanel::new(None, store());
        assert_eq!(panel.earned_count(), 2);
        assert_eq!(HEALTH_STATS[0].percent(), 93);
        assert_eq!(panel.health_stats().len(), 4);
    }
}
