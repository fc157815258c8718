#![forbid(unsafe_code)]

//! Caller-owned, versioned state.
//!
//! [`State<T>`] is a small shared cell for application state that bindings
//! read and write. The bridge never owns it; views capture [`Binding`]s
//! created from it.
//!
//! # Invariants
//!
//! 1. `version()` increases by exactly one per effective change.
//! 2. `set` with a value equal to the current one changes nothing.
//! 3. Clones share the same value and version.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::binding::Binding;

struct Inner<T> {
    value: RefCell<T>,
    version: Cell<u64>,
}

/// Shared, single-threaded value holder.
pub struct State<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("value", &*self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .finish()
    }
}

impl<T: Default + PartialEq + Clone + 'static> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq + Clone + 'static> State<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                version: Cell::new(0),
            }),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Borrow the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replace the value. No-op when equal.
    pub fn set(&self, value: T) {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return;
            }
            *current = value;
        }
        self.bump();
    }

    /// Mutate in place; bumps the version only if the value changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let changed = {
            let mut current = self.inner.value.borrow_mut();
            let before = current.clone();
            f(&mut current);
            *current != before
        };
        if changed {
            self.bump();
        }
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Read/write binding over this state.
    #[must_use]
    pub fn binding(&self) -> Binding<T> {
        let (read, write) = (self.clone(), self.clone());
        Binding::new(move || read.get(), move |value| write.set(value))
    }

    fn bump(&self) {
        self.inner.version.set(self.inner.version.get() + 1);
    }
}
