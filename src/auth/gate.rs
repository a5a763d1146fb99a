//! Dashboard auth gate
//!
//! Subscribes to session changes before running the one-shot session check,
//! so a change that lands while the check is in flight is never missed.
//! Whichever of the two arrives last decides the session. An absent session
//! at any point requests a redirect to the sign-in page.

use super::listeners::Subscription;
use super::session::{Session, User};
use super::IdentityProvider;
use crate::routes::Route;
use crate::toast::ToastQueue;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info};

/// Observable state of the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateState {
    pub session: Option<Session>,
    /// True until the first session result (from either path) arrives
    pub loading: bool,
    /// Pending navigation request, consumed by the host
    pub redirect: Option<Route>,
}

impl Default for GateState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
            redirect: None,
        }
    }
}

type GateObserver = Rc<dyn Fn(&GateState)>;

#[derive(Clone)]
struct Shared {
    state: Rc<RefCell<GateState>>,
    observer: Option<GateObserver>,
}

impl Shared {
    fn apply(&self, session: Option<Session>) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            if session.is_none() {
                state.redirect = Some(Route::SignIn);
            }
            state.session = session;
            state.loading = false;
            state.clone()
        };

        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
    }

    fn redirect(&self, route: Route) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            state.redirect = Some(route);
            state.clone()
        };

        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
    }
}

/// Keeps the dashboard behind a signed-in session
pub struct AuthGate {
    shared: Shared,
    toasts: ToastQueue,
    _subscription: Subscription,
}

impl AuthGate {
    /// Subscribe to `provider` and run the initial session check
    pub async fn start(provider: &dyn IdentityProvider, toasts: ToastQueue) -> Self {
        Self::start_observed(provider, toasts, None).await
    }

    /// Like [`AuthGate::start`], calling `observer` after every state change
    pub async fn start_with_observer(
        provider: &dyn IdentityProvider,
        toasts: ToastQueue,
        observer: impl Fn(&GateState) + 'static,
    ) -> Self {
        Self::start_observed(provider, toasts, Some(Rc::new(observer))).await
    }

    async fn start_observed(
        provider: &dyn IdentityProvider,
        toasts: ToastQueue,
        observer: Option<GateObserver>,
    ) -> Self {
        let shared = Shared {
            state: Rc::new(RefCell::new(GateState::default())),
            observer,
        };

        let listener_state = shared.clone();
        let subscription = provider.subscribe(Rc::new(move |event, session| {
            debug!(%event, signed_in = session.is_some(), "Gate observed auth change");
            listener_state.apply(session.cloned());
        }));

        let session = match provider.get_session().await {
            Ok(session) => session,
            Err(e) => {
                error!("Session check failed: {}", e);
                None
            }
        };
        shared.apply(session);

        Self {
            shared,
            toasts,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> GateState {
        self.shared.state.borrow().clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.shared.state.borrow().session.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.shared
            .state
            .borrow()
            .session
            .as_ref()
            .map(|s| s.user.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    /// Pending redirect without consuming it
    pub fn redirect(&self) -> Option<Route> {
        self.shared.state.borrow().redirect
    }

    /// Consume the pending redirect
    pub fn take_redirect(&self) -> Option<Route> {
        self.shared.state.borrow_mut().redirect.take()
    }

    /// Sign out through the provider
    ///
    /// A failure leaves the session untouched and raises an error toast;
    /// success requests the sign-in page.
    pub async fn sign_out(&self, provider: &dyn IdentityProvider) -> bool {
        match provider.sign_out().await {
            Ok(()) => {
                info!("Signed out");
                self.shared.redirect(Route::SignIn);
                true
            }
            Err(e) => {
                error!("Sign out failed: {}", e);
                self.toasts.error("Error", e.to_string());
                false
            }
        }
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("state", &self.shared.state.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::testing::{session, MockProvider};
    use crate::auth::AuthEvent;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_subscribes_before_checking_session() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        let _gate = AuthGate::start(&provider, ToastQueue::new()).await;

        assert_eq!(*provider.calls.borrow(), vec!["subscribe", "get_session"]);
    }

    #[tokio::test]
    async fn test_signed_in_session_is_kept() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        let gate = AuthGate::start(&provider, ToastQueue::new()).await;

        assert!(!gate.is_loading());
        assert_eq!(gate.user().and_then(|u| u.email).as_deref(), Some("a@b.c"));
        assert_eq!(gate.redirect(), None);
    }

    #[tokio::test]
    async fn test_missing_session_redirects_to_sign_in() {
        let provider = MockProvider::default();
        let gate = AuthGate::start(&provider, ToastQueue::new()).await;

        assert!(!gate.is_loading());
        assert_eq!(gate.take_redirect(), Some(Route::SignIn));
        assert_eq!(gate.take_redirect(), None);
    }

    #[tokio::test]
    async fn test_failed_check_treated_as_signed_out() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        provider.fail_get_session.set(true);
        let gate = AuthGate::start(&provider, ToastQueue::new()).await;

        assert_eq!(gate.session(), None);
        assert_eq!(gate.redirect(), Some(Route::SignIn));
    }

    #[tokio::test]
    async fn test_later_events_win() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        let gate = AuthGate::start(&provider, ToastQueue::new()).await;

        provider.emit(AuthEvent::SignedOut, None);
        assert_eq!(gate.session(), None);
        assert_eq!(gate.take_redirect(), Some(Route::SignIn));

        provider.emit(AuthEvent::SignedIn, Some(session("new@b.c")));
        assert_eq!(
            gate.user().and_then(|u| u.email).as_deref(),
            Some("new@b.c")
        );
        assert_eq!(gate.redirect(), None);
    }

    #[tokio::test]
    async fn test_sign_out_success_redirects() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        let toasts = ToastQueue::new();
        let gate = AuthGate::start(&provider, toasts.clone()).await;

        assert!(gate.sign_out(&provider).await);
        assert_eq!(gate.redirect(), Some(Route::SignIn));
        assert!(toasts.is_empty());
    }

    #[tokio::test]
    async fn test_sign_out_failure_raises_toast() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        *provider.sign_out_error.borrow_mut() = Some("network down".into());
        let toasts = ToastQueue::new();
        let gate = AuthGate::start(&provider, toasts.clone()).await;

        assert!(!gate.sign_out(&provider).await);
        assert!(gate.session().is_some());
        assert_eq!(gate.redirect(), None);

        let toast = toasts.latest().unwrap();
        assert!(toast.is_error());
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "network down");
    }

    #[tokio::test]
    async fn test_dropping_gate_detaches_listener() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        let gate = AuthGate::start(&provider, ToastQueue::new()).await;
        assert_eq!(provider.listeners.len(), 1);

        drop(gate);
        assert!(provider.listeners.is_empty());
    }

    #[tokio::test]
    async fn test_observer_sees_changes() {
        let provider = MockProvider::signed_in(session("a@b.c"));
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let _gate = AuthGate::start_with_observer(&provider, ToastQueue::new(), move |_| {
            seen.set(seen.get() + 1)
        })
        .await;
        assert_eq!(calls.get(), 1);

        provider.emit(AuthEvent::TokenRefreshed, Some(session("a@b.c")));
        assert_eq!(calls.get(), 2);
    }
}
