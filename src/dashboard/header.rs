//! Header and greeting helpers

use crate::auth::User;

/// Unread notifications badge
pub const NOTIFICATION_COUNT: u32 = 3;

/// Avatar text in the header: the first two characters of the email,
/// uppercased, or "NN" without an email
pub fn header_initials(user: &User) -> String {
    let source = user
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .unwrap_or("NN");
    source.chars().take(2).flat_map(char::to_uppercase).collect()
}

/// Name used in the overview greeting: full name, then the email's local
/// part, then a friendly default
pub fn greeting_name(user: Option<&User>) -> String {
    user.and_then(|u| u.display_name().or_else(|| u.email_local_part()))
        .unwrap_or("Wellness Seeker")
        .to_string()
}

/// Time-of-day salutation for a local hour (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// What the header shows for the signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub initials: String,
    pub email: String,
    pub notifications: u32,
}

impl HeaderView {
    pub fn for_user(user: &User) -> Self {
        Self {
            initials: header_initials(user),
            email: user.email.clone().unwrap_or_default(),
            notifications: NOTIFICATION_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_initials() {
        assert_eq!(header_initials(&User::new("1", "asha@example.com")), "AS");
        assert_eq!(header_initials(&User::new("1", "x@y.z")), "X@");

        let no_email = User {
            id: "1".into(),
            email: None,
            full_name: None,
        };
        assert_eq!(header_initials(&no_email), "NN");
    }

    #[test]
    fn test_greeting_name_chain() {
        let named = User::new("1", "asha@example.com").with_full_name("Asha Rao");
        assert_eq!(greeting_name(Some(&named)), "Asha Rao");

        let unnamed = User::new("1", "asha@example.com");
        assert_eq!(greeting_name(Some(&unnamed)), "asha");

        assert_eq!(greeting_name(None), "Wellness Seeker");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(16), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }

    #[test]
    fn test_header_view() {
        let view = HeaderView::for_user(&User::new("1", "maya@example.com"));
        assert_eq!(view.initials, "MA");
        assert_eq!(view.notifications, 3);
    }
}
