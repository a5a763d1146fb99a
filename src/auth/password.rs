//! Password update page
//!
//! Reached from a password-reset email. The form validates locally before
//! asking the provider to change the password.

use super::listeners::Subscription;
use super::session::AuthEvent;
use super::IdentityProvider;
use crate::routes::Route;
use crate::toast::ToastQueue;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use tracing::{error, info};

/// Shortest password the form accepts, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Local validation failure
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Passwords don't match")]
    Mismatch,

    #[error("Password must be at least 6 characters long")]
    TooShort,
}

/// Check a new password and its confirmation. Mismatch is reported first.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), PasswordError> {
    if password != confirm {
        return Err(PasswordError::Mismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

/// What a submission did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordOutcome {
    /// Rejected before reaching the provider
    Invalid(PasswordError),
    /// The provider refused the change
    Failed(String),
    Updated,
}

/// State of the password update page while it is mounted
pub struct PasswordUpdatePage {
    redirect: Rc<Cell<Option<Route>>>,
    recovery: Rc<Cell<bool>>,
    loading: Cell<bool>,
    _subscription: Subscription,
}

impl PasswordUpdatePage {
    /// Mount the page. A sign-in observed while mounted requests the dashboard.
    pub fn mount(provider: &dyn IdentityProvider) -> Self {
        let redirect = Rc::new(Cell::new(None));
        let recovery = Rc::new(Cell::new(false));

        let on_redirect = Rc::clone(&redirect);
        let on_recovery = Rc::clone(&recovery);
        let subscription = provider.subscribe(Rc::new(move |event, session| match event {
            AuthEvent::PasswordRecovery => on_recovery.set(true),
            AuthEvent::SignedIn if session.is_some() => on_redirect.set(Some(Route::Dashboard)),
            _ => {}
        }));

        Self {
            redirect,
            recovery,
            loading: Cell::new(false),
            _subscription: subscription,
        }
    }

    /// Validate and submit a new password
    pub async fn submit(
        &self,
        provider: &dyn IdentityProvider,
        toasts: &ToastQueue,
        password: &str,
        confirm: &str,
    ) -> PasswordOutcome {
        if let Err(e) = validate_new_password(password, confirm) {
            toasts.error("Error", e.to_string());
            return PasswordOutcome::Invalid(e);
        }

        self.loading.set(true);
        let result = provider.update_password(password).await;
        self.loading.set(false);

        match result {
            Ok(_) => {
                info!("Password updated");
                toasts.success("Success!", "Your password has been updated successfully");
                self.redirect.set(Some(Route::Dashboard));
                PasswordOutcome::Updated
            }
            Err(e) => {
                error!("Password update failed: {}", e);
                let message = e.to_string();
                toasts.error("Update Password Error", message.clone());
                PasswordOutcome::Failed(message)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Whether the provider reported a password-recovery session
    pub fn in_recovery(&self) -> bool {
        self.recovery.get()
    }

    pub fn take_redirect(&self) -> Option<Route> {
        self.redirect.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::testing::{session, MockProvider};

    #[test]
    fn test_validation_rules() {
        assert_eq!(
            validate_new_password("abcdef", "abcdeg"),
            Err(PasswordError::Mismatch)
        );
        assert_eq!(
            validate_new_password("abc", "abc"),
            Err(PasswordError::TooShort)
        );
        // mismatch wins when both apply
        assert_eq!(validate_new_password("ab", "cd"), Err(PasswordError::Mismatch));
        assert_eq!(validate_new_password("abcdef", "abcdef"), Ok(()));
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(validate_new_password("पासवर्ड", "पासवर्ड"), Ok(()));
        assert_eq!(
            validate_new_password("ééééé", "ééééé"),
            Err(PasswordError::TooShort)
        );
    }

    #[tokio::test]
    async fn test_mismatch_never_reaches_provider() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        let toasts = ToastQueue::new();
        let page = PasswordUpdatePage::mount(&provider);

        let outcome = page.submit(&provider, &toasts, "secret1", "secret2").await;
        assert_eq!(outcome, PasswordOutcome::Invalid(PasswordError::Mismatch));
        assert!(provider.updated_passwords.borrow().is_empty());

        let toast = toasts.latest().unwrap();
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "Passwords don't match");
        assert_eq!(page.take_redirect(), None);
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        let toasts = ToastQueue::new();
        let page = PasswordUpdatePage::mount(&provider);

        page.submit(&provider, &toasts, "abc", "abc").await;
        assert_eq!(
            toasts.latest().unwrap().description,
            "Password must be at least 6 characters long"
        );
    }

    #[tokio::test]
    async fn test_success_toasts_and_redirects() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        let toasts = ToastQueue::new();
        let page = PasswordUpdatePage::mount(&provider);

        let outcome = page.submit(&provider, &toasts, "hunter22", "hunter22").await;
        assert_eq!(outcome, PasswordOutcome::Updated);
        assert_eq!(*provider.updated_passwords.borrow(), vec!["hunter22"]);
        assert!(!page.is_loading());

        let toast = toasts.latest().unwrap();
        assert_eq!(toast.title, "Success!");
        assert!(!toast.is_error());
        assert_eq!(page.take_redirect(), Some(Route::Dashboard));
    }

    #[tokio::test]
    async fn test_provider_error_toasts() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        *provider.update_error.borrow_mut() = Some("Password too weak".into());
        let toasts = ToastQueue::new();
        let page = PasswordUpdatePage::mount(&provider);

        let outcome = page.submit(&provider, &toasts, "hunter22", "hunter22").await;
        assert_eq!(outcome, PasswordOutcome::Failed("Password too weak".into()));

        let toast = toasts.latest().unwrap();
        assert_eq!(toast.title, "Update Password Error");
        assert!(toast.is_error());
        assert_eq!(page.take_redirect(), None);
    }

    #[test]
    fn test_sign_in_event_redirects() {
        let provider = MockProvider::default();
        let page = PasswordUpdatePage::mount(&provider);

        provider.emit(AuthEvent::PasswordRecovery, Some(session("a@b.c")));
        assert!(page.in_recovery());
        assert_eq!(page.take_redirect(), None);

        provider.emit(AuthEvent::SignedIn, Some(session("a@b.c")));
        assert_eq!(page.take_redirect(), Some(Route::Dashboard));
    }
}
