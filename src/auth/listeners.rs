//! Auth state listener registry
//!
//! Providers keep one of these and call [`AuthListeners::emit`] after every
//! session change. Subscribers hold a [`Subscription`]; dropping it detaches
//! the listener.

use super::session::{AuthEvent, Session};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Callback invoked on every auth state change
pub type AuthListener = Rc<dyn Fn(AuthEvent, Option<&Session>)>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    listeners: Vec<(u64, AuthListener)>,
}

/// Registry of active listeners
#[derive(Clone, Default)]
pub struct AuthListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl AuthListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: AuthListener) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.listeners.push((id, listener));

        Subscription {
            id,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Notify every listener. Listeners may subscribe or unsubscribe while
    /// being notified; such changes apply from the next emit.
    pub fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        let snapshot: Vec<AuthListener> = self
            .table
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        tracing::debug!(%event, listeners = snapshot.len(), "Auth state change");

        for listener in snapshot {
            listener(event, session);
        }
    }

    pub fn len(&self) -> usize {
        self.table.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to a registered listener
#[must_use = "the listener is detached when the subscription is dropped"]
pub struct Subscription {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    /// A subscription that is not attached to anything
    pub fn detached() -> Self {
        Self {
            id: 0,
            table: Weak::new(),
        }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }

    fn detach(&mut self) {
        if let Some(table) = self.table.upgrade() {
            let id = self.id;
            table.borrow_mut().listeners.retain(|(entry, _)| *entry != id);
        }
        self.table = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &(self.table.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::User;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, AuthListener) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        (count, Rc::new(move |_, _| seen.set(seen.get() + 1)))
    }

    #[test]
    fn test_emit_reaches_subscribers() {
        let listeners = AuthListeners::new();
        let (count, listener) = counter();
        let _sub = listeners.subscribe(listener);

        listeners.emit(AuthEvent::SignedOut, None);
        listeners.emit(AuthEvent::SignedOut, None);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_drop_detaches() {
        let listeners = AuthListeners::new();
        let (count, listener) = counter();
        let sub = listeners.subscribe(listener);
        assert_eq!(listeners.len(), 1);

        sub.unsubscribe();
        assert!(listeners.is_empty());

        listeners.emit(AuthEvent::SignedOut, None);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_listener_receives_session() {
        let listeners = AuthListeners::new();
        let email = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&email);
        let _sub = listeners.subscribe(Rc::new(move |_, session: Option<&Session>| {
            *sink.borrow_mut() = session.and_then(|s| s.user.email.clone());
        }));

        let session = Session {
            access_token: "t".into(),
            refresh_token: String::new(),
            expires_at: None,
            user: User::new("u1", "a@b.c"),
        };
        listeners.emit(AuthEvent::SignedIn, Some(&session));
        assert_eq!(email.borrow().as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_subscription_outlives_registry() {
        let listeners = AuthListeners::new();
        let (_, listener) = counter();
        let sub = listeners.subscribe(listener);
        drop(listeners);
        drop(sub);
    }
}
