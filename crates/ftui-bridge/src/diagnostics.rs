#![forbid(unsafe_code)]

//! Local diagnostics for bridging.
//!
//! Bridging absorbs every failure, which makes it hard to test that a tree
//! "degraded safely". A [`DiagnosticsScope`] collects what was absorbed while
//! it is alive: fallback substitutions and stale tokens dropped by projected
//! setters. Nothing collected here is ever sent to the host.
//!
//! # Invariants
//!
//! 1. Scopes are thread-local and nest; records go to the innermost scope.
//! 2. Dropping a scope removes it before the next record is taken.
//! 3. At most `capacity` records are kept per kind; the oldest are evicted.
//!    Counters are never evicted.
//! 4. Without an active scope, recording is a no-op.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::DiagnosticsConfig;
use crate::fallback::FallbackRecord;

thread_local! {
    static SCOPES: RefCell<Vec<Rc<ScopeState>>> = const { RefCell::new(Vec::new()) };
}

/// A token handed to a projected setter that resolved to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StaleTokenRecord {
    /// Label of the binding that dropped the token.
    pub binding: &'static str,
    /// Type name of the value inside the token.
    pub token_type: &'static str,
}

#[derive(Debug)]
struct ScopeState {
    config: DiagnosticsConfig,
    attempts: Cell<u64>,
    fallback_total: Cell<u64>,
    stale_total: Cell<u64>,
    fallbacks: RefCell<VecDeque<FallbackRecord>>,
    stale: RefCell<VecDeque<StaleTokenRecord>>,
}

fn push_bounded<T>(queue: &RefCell<VecDeque<T>>, capacity: usize, item: T) {
    if capacity == 0 {
        return;
    }
    let mut queue = queue.borrow_mut();
    if queue.len() >= capacity {
        queue.pop_front();
    }
    queue.push_back(item);
}

/// RAII guard collecting bridging diagnostics on the current thread.
#[must_use = "dropping the scope stops collecting diagnostics"]
#[derive(Debug)]
pub struct DiagnosticsScope {
    state: Rc<ScopeState>,
}

impl DiagnosticsScope {
    /// Push a new innermost scope.
    pub fn begin(config: DiagnosticsConfig) -> Self {
        let state = Rc::new(ScopeState {
            config,
            attempts: Cell::new(0),
            fallback_total: Cell::new(0),
            stale_total: Cell::new(0),
            fallbacks: RefCell::new(VecDeque::new()),
            stale: RefCell::new(VecDeque::new()),
        });
        SCOPES.with(|scopes| scopes.borrow_mut().push(Rc::clone(&state)));
        Self { state }
    }

    /// Number of bridging attempts seen, substituted or not.
    #[must_use]
    pub fn attempts(&self) -> u64 {
        self.state.attempts.get()
    }

    /// Number of fallback substitutions seen.
    #[must_use]
    pub fn fallback_count(&self) -> u64 {
        self.state.fallback_total.get()
    }

    /// Number of stale tokens dropped.
    #[must_use]
    pub fn stale_token_count(&self) -> u64 {
        self.state.stale_total.get()
    }

    /// Retained fallback records, oldest first.
    #[must_use]
    pub fn fallbacks(&self) -> Vec<FallbackRecord> {
        self.state.fallbacks.borrow().iter().copied().collect()
    }

    /// Retained stale-token records, oldest first.
    #[must_use]
    pub fn stale_tokens(&self) -> Vec<StaleTokenRecord> {
        self.state.stale.borrow().iter().copied().collect()
    }

    /// Kinds of the retained fallback records, oldest first.
    #[must_use]
    pub fn substituted_kinds(&self) -> Vec<&'static str> {
        self.state.fallbacks.borrow().iter().map(|r| r.kind).collect()
    }

    /// Forget everything collected so far.
    pub fn clear(&self) {
        self.state.attempts.set(0);
        self.state.fallback_total.set(0);
        self.state.stale_total.set(0);
        self.state.fallbacks.borrow_mut().clear();
        self.state.stale.borrow_mut().clear();
    }
}

impl Drop for DiagnosticsScope {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            if let Some(pos) = scopes.iter().rposition(|s| Rc::ptr_eq(s, &self.state)) {
                debug_assert_eq!(pos + 1, scopes.len(), "diagnostics scopes dropped out of order");
                scopes.remove(pos);
            }
        });
    }
}

/// Whether a scope is active on this thread.
#[must_use]
pub fn is_active() -> bool {
    SCOPES.with(|scopes| !scopes.borrow().is_empty())
}

fn with_innermost(f: impl FnOnce(&ScopeState)) {
    SCOPES.with(|scopes| {
        if let Some(state) = scopes.borrow().last() {
            f(state);
        }
    });
}

pub(crate) fn record_attempt(record: FallbackRecord) {
    with_innermost(|state| {
        state.attempts.set(state.attempts.get() + 1);
        if record.substituted {
            state.fallback_total.set(state.fallback_total.get() + 1);
            if state.config.record_fallbacks {
                push_bounded(&state.fallbacks, state.config.capacity, record);
            }
        }
    });
}

pub(crate) fn record_stale_token(record: StaleTokenRecord) {
    with_innermost(|state| {
        state.stale_total.set(state.stale_total.get() + 1);
        if state.config.record_stale_tokens {
            push_bounded(&state.stale, state.config.capacity, record);
        }
    });
}
