//! Authentication
//!
//! The dashboard never talks to the identity provider directly. It goes
//! through [`IdentityProvider`], which exposes a subscription to session
//! changes plus the handful of account operations the app needs:
//! - [`AuthGate`] keeps the dashboard behind a signed-in session
//! - [`PasswordUpdatePage`] drives the password reset form
//! - [`GoTrueClient`] is the HTTP implementation used outside tests

mod gate;
mod gotrue;
mod listeners;
mod password;
mod session;

pub use gate::{AuthGate, GateState};
pub use gotrue::{GoTrueClient, GoTrueConfig};
pub use listeners::{AuthListener, AuthListeners, Subscription};
pub use password::{
    validate_new_password, PasswordError, PasswordOutcome, PasswordUpdatePage, MIN_PASSWORD_LEN,
};
pub use session::{AuthEvent, Session, User};

use async_trait::async_trait;
use thiserror::Error;

use crate::storage::PreferenceError;

/// Source of truth for the signed-in session
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Register for session changes. The listener stays attached for as long
    /// as the returned subscription is alive.
    fn subscribe(&self, listener: AuthListener) -> Subscription;

    /// Current session, if any
    async fn get_session(&self) -> AuthResult<Option<Session>>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<Session>;

    async fn sign_out(&self) -> AuthResult<()>;

    /// Change the signed-in user's password
    async fn update_password(&self, new_password: &str) -> AuthResult<User>;
}

/// Errors reported by an identity provider
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Identity provider unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Auth session missing!")]
    NotAuthenticated,

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Session storage error: {0}")]
    Storage(#[from] PreferenceError),
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory identity provider for gate and form tests

    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    pub struct MockProvider {
        pub listeners: AuthListeners,
        pub session: RefCell<Option<Session>>,
        pub fail_get_session: Cell<bool>,
        pub sign_out_error: RefCell<Option<String>>,
        pub update_error: RefCell<Option<String>>,
        pub updated_passwords: RefCell<Vec<String>>,
        /// Order in which subscribe/get_session were called
        pub calls: RefCell<Vec<&'static str>>,
    }

    impl MockProvider {
        pub fn signed_in(session: Session) -> Self {
            let provider = Self::default();
            *provider.session.borrow_mut() = Some(session);
            provider
        }

        pub fn emit(&self, event: AuthEvent, session: Option<Session>) {
            *self.session.borrow_mut() = session.clone();
            self.listeners.emit(event, session.as_ref());
        }
    }

    pub fn session(email: &str) -> Session {
        Session {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            expires_at: None,
            user: User::new("user-1", email),
        }
    }

    #[async_trait(?Send)]
    impl IdentityProvider for MockProvider {
        fn subscribe(&self, listener: AuthListener) -> Subscription {
            self.calls.borrow_mut().push("subscribe");
            self.listeners.subscribe(listener)
        }

        async fn get_session(&self) -> AuthResult<Option<Session>> {
            self.calls.borrow_mut().push("get_session");
            if self.fail_get_session.get() {
                return Err(AuthError::Unavailable);
            }
            Ok(self.session.borrow().clone())
        }

        async fn sign_in_with_password(&self, email: &str, _password: &str) -> AuthResult<Session> {
            let session = session(email);
            self.emit(AuthEvent::SignedIn, Some(session.clone()));
            Ok(session)
        }

        async fn sign_out(&self) -> AuthResult<()> {
            if let Some(message) = self.sign_out_error.borrow().clone() {
                return Err(AuthError::Api {
                    status: 500,
                    message,
                });
            }
            self.emit(AuthEvent::SignedOut, None);
            Ok(())
        }

        async fn update_password(&self, new_password: &str) -> AuthResult<User> {
            if let Some(message) = self.update_error.borrow().clone() {
                return Err(AuthError::Api {
                    status: 422,
                    message,
                });
            }
            let user = self
                .session
                .borrow()
                .as_ref()
                .map(|s| s.user.clone())
                .ok_or(AuthError::NotAuthenticated)?;
            self.updated_passwords
                .borrow_mut()
                .push(new_password.to_string());
            Ok(user)
        }
    }
}
