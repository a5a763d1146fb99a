//! Deferred work and panel lifetimes
//!
//! Panels that "analyze" something do so with a fixed delay before showing a
//! canned result. The delay is injected through [`Work`] so tests can resolve
//! it immediately, and every deferred write is guarded by the [`PanelScope`]
//! of the panel that started it: once the panel is unmounted its scope is
//! dead and late results are dropped on the floor. Within a mounted panel,
//! a result only lands if no newer run or reset happened on the same slot.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Something that resolves after a delay
#[async_trait(?Send)]
pub trait Work {
    /// Resolve once `delay` has elapsed (or immediately, for test doubles)
    async fn wait(&self, delay: Duration);
}

/// Resolves immediately regardless of the requested delay
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

#[async_trait(?Send)]
impl Work for Immediate {
    async fn wait(&self, _delay: Duration) {}
}

/// Real timer backed by the tokio runtime
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl Work for TokioDelay {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Liveness token handed to deferred work started by a panel
#[derive(Debug, Clone)]
pub struct PanelScope {
    alive: Rc<Cell<bool>>,
}

impl PanelScope {
    /// Whether the owning panel is still mounted
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }
}

/// Owner of a panel scope; the scope ends when this is dropped
#[derive(Debug)]
pub struct ScopeGuard {
    scope: PanelScope,
}

impl ScopeGuard {
    pub fn new() -> Self {
        Self {
            scope: PanelScope {
                alive: Rc::new(Cell::new(true)),
            },
        }
    }

    /// A token observing this guard's lifetime
    pub fn scope(&self) -> PanelScope {
        self.scope.clone()
    }
}

impl Default for ScopeGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.scope.alive.set(false);
    }
}

/// State of a simulated analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis<T> {
    Idle,
    Loading,
    Ready(T),
}

impl<T> Default for Analysis<T> {
    fn default() -> Self {
        Analysis::Idle
    }
}

impl<T> Analysis<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Analysis::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Analysis::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Shared analysis state, written by the panel and by its deferred work
#[derive(Debug)]
pub struct AnalysisSlot<T> {
    state: Rc<RefCell<Analysis<T>>>,
    /// Bumped by every begin and reset; pending work from older runs is stale
    generation: Rc<Cell<u64>>,
}

impl<T> Clone for AnalysisSlot<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            generation: Rc::clone(&self.generation),
        }
    }
}

impl<T> Default for AnalysisSlot<T> {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(Analysis::Idle)),
            generation: Rc::new(Cell::new(0)),
        }
    }
}

impl<T> AnalysisSlot<T> {
    fn next_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}

impl<T: Clone> AnalysisSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state
    pub fn get(&self) -> Analysis<T> {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn result(&self) -> Option<T> {
        self.state.borrow().result().cloned()
    }

    /// Back to idle, dropping any result and any run still pending
    pub fn reset(&self) {
        self.next_generation();
        *self.state.borrow_mut() = Analysis::Idle;
    }

    /// Enter the loading state and return the work that will complete it
    pub fn begin(&self, scope: PanelScope, delay: Duration, result: T) -> PendingAnalysis<T> {
        let generation = self.next_generation();
        *self.state.borrow_mut() = Analysis::Loading;
        PendingAnalysis {
            slot: self.clone(),
            generation,
            scope,
            delay,
            result,
        }
    }
}

/// A started analysis waiting for its delay to elapse
#[must_use = "the analysis only completes when run"]
#[derive(Debug)]
pub struct PendingAnalysis<T> {
    slot: AnalysisSlot<T>,
    generation: u64,
    scope: PanelScope,
    delay: Duration,
    result: T,
}

impl<T> PendingAnalysis<T> {
    /// Delay before the result is published
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait on `work`, then publish the result if the panel is still mounted
    /// and the slot has not been restarted or reset in the meantime
    ///
    /// Returns whether the result was applied.
    pub async fn run(self, work: &dyn Work) -> bool {
        work.wait(self.delay).await;

        if !self.scope.is_alive() {
            tracing::debug!(
                delay_ms = self.delay.as_millis() as u64,
                "Panel unmounted before analysis finished, discarding result"
            );
            return false;
        }

        if self.slot.generation.get() != self.generation {
            tracing::debug!("Analysis superseded, discarding result");
            return false;
        }

        *self.slot.state.borrow_mut() = Analysis::Ready(self.result);
        true
    }
}
