//! Identity types shared by the gate, the forms and the provider client

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed-in account, as far as the dashboard cares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: Some(email.into()),
            full_name: None,
        }
    }

    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    /// Non-empty full name from the account metadata
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Part of the email address before the `@`
    pub fn email_local_part(&self) -> Option<&str> {
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
    }
}

/// An authenticated session issued by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Expiry as Unix seconds, when the provider reports one
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    /// Whether the session has expired at `now` (Unix seconds)
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|expiry| expiry <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }
}

/// Session lifecycle notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    PasswordRecovery,
    TokenRefreshed,
    UserUpdated,
}

impl fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthEvent::InitialSession => "INITIAL_SESSION",
            AuthEvent::SignedIn => "SIGNED_IN",
            AuthEvent::SignedOut => "SIGNED_OUT",
            AuthEvent::PasswordRecovery => "PASSWORD_RECOVERY",
            AuthEvent::TokenRefreshed => "TOKEN_REFRESHED",
            AuthEvent::UserUpdated => "USER_UPDATED",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_helpers() {
        let user = User::new("u1", "asha.rao@example.com");
        assert_eq!(user.display_name(), None);
        assert_eq!(user.email_local_part(), Some("asha.rao"));

        let named = user.with_full_name("Asha Rao");
        assert_eq!(named.display_name(), Some("Asha Rao"));

        let blank = User::new("u2", "x@y.z").with_full_name("");
        assert_eq!(blank.display_name(), None);
    }

    #[test]
    fn test_session_expiry() {
        let session = Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: Some(1_000),
            user: User::new("u1", "a@b.c"),
        };
        assert!(!session.is_expired_at(999));
        assert!(session.is_expired_at(1_000));

        let open_ended = Session {
            expires_at: None,
            ..session
        };
        assert!(!open_ended.is_expired_at(i64::MAX));
    }

    #[test]
    fn test_event_wire_names() {
        let json = serde_json::to_string(&AuthEvent::PasswordRecovery).unwrap();
        assert_eq!(json, "\"PASSWORD_RECOVERY\"");
        assert_eq!(AuthEvent::SignedIn.to_string(), "SIGNED_IN");
    }
}
