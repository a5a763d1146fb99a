//! Transient Notifications
//!
//! A shared queue of user-visible toasts. Auth failures and password
//! validation messages end up here; the front end drains and displays them
//! for a few seconds.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Visual weight of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Toasts kept for `latest`/`drain`; older ones are dropped first
pub const MAX_QUEUED_TOASTS: usize = 32;

type ToastListener = Rc<dyn Fn(&Toast)>;

#[derive(Default)]
struct QueueInner {
    toasts: VecDeque<Toast>,
    listener: Option<ToastListener>,
}

/// Shared handle to the notification queue
#[derive(Clone, Default)]
pub struct ToastQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked for every pushed toast
    pub fn set_listener(&self, listener: impl Fn(&Toast) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn push(&self, toast: Toast) {
        if toast.is_error() {
            tracing::debug!(title = %toast.title, "Error toast: {}", toast.description);
        }

        let listener = {
            let mut inner = self.inner.borrow_mut();
            if inner.toasts.len() == MAX_QUEUED_TOASTS {
                inner.toasts.pop_front();
            }
            inner.toasts.push_back(toast.clone());
            inner.listener.clone()
        };

        if let Some(listener) = listener {
            listener(&toast);
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast::success(title, description));
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast::error(title, description));
    }

    /// Most recent toast, if any
    pub fn latest(&self) -> Option<Toast> {
        self.inner.borrow().toasts.back().cloned()
    }

    /// Remove and return every queued toast, oldest first
    pub fn drain(&self) -> Vec<Toast> {
        self.inner.borrow_mut().toasts.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().toasts.is_empty()
    }
}

impl fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastQueue")
            .field("toasts", &self.inner.borrow().toasts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_push_and_drain() {
        let queue = ToastQueue::new();
        queue.error("Error", "Network down");
        queue.success("Success!", "Saved");

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.latest().unwrap().title, "Success!");

        let drained = queue.drain();
        assert!(drained[0].is_error());
        assert!(!drained[1].is_error());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_listener_sees_pushes_from_clones() {
        let queue = ToastQueue::new();
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        queue.set_listener(move |_| counter.set(counter.get() + 1));

        let other = queue.clone();
        other.error("Error", "boom");
        assert_eq!(seen.get(), 1);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_undrained_queue_is_bounded() {
        let queue = ToastQueue::new();
        queue.set_listener(|_| {});

        for i in 0..MAX_QUEUED_TOASTS + 10 {
            queue.success("Shared", i.to_string());
        }

        assert_eq!(queue.len(), MAX_QUEUED_TOASTS);
        assert_eq!(queue.latest().unwrap().description, (MAX_QUEUED_TOASTS + 9).to_string());
        assert_eq!(queue.drain()[0].description, "10");
    }
}
