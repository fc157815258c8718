#![forbid(unsafe_code)]

//! Typed read/write accessor pairs.
//!
//! A [`Binding<T>`] is a getter plus a setter over state the caller owns. It
//! holds no value of its own: every `get()` reads through to the source and
//! every `set()` writes through.
//!
//! # Usage
//!
//! ```
//! use ftui_bridge::{Binding, State};
//!
//! let count = State::new(1);
//! let binding = count.binding();
//! binding.set(5);
//! assert_eq!(count.get(), 5);
//!
//! let doubled = binding.map(|n| n * 2, |n| n / 2);
//! assert_eq!(doubled.get(), 10);
//! doubled.set(8);
//! assert_eq!(count.get(), 4);
//! ```
//!
//! # Invariants
//!
//! 1. `get()` always returns the current value; nothing is cached.
//! 2. `set(get())` leaves the source unchanged when the source is.
//! 3. Clones share the same accessors.
//!
//! # Failure Modes
//!
//! - Accessor panic: propagates to the caller of `get()`/`set()`.

use std::rc::Rc;

/// A read/write pair over caller-owned state.
pub struct Binding<T> {
    get: Rc<dyn Fn() -> T>,
    set: Rc<dyn Fn(T)>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .finish()
    }
}

impl<T: 'static> Binding<T> {
    /// Create a binding from a getter and a setter.
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// A binding that always reads `value` and ignores writes.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone(), |_| {})
    }

    /// Read the current value.
    #[must_use]
    pub fn get(&self) -> T {
        (self.get)()
    }

    /// Write a new value.
    pub fn set(&self, value: T) {
        (self.set)(value);
    }

    /// Derive a binding of another type through a pair of conversions.
    pub fn map<U: 'static>(
        self,
        forward: impl Fn(T) -> U + 'static,
        backward: impl Fn(U) -> T + 'static,
    ) -> Binding<U> {
        let get = Rc::clone(&self.get);
        let set = self.set;
        Binding {
            get: Rc::new(move || forward(get())),
            set: Rc::new(move |value| set(backward(value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn get_reads_through() {
        let cell = Rc::new(Cell::new(3));
        let c = Rc::clone(&cell);
        let binding = Binding::new(move || c.get(), |_| {});
        assert_eq!(binding.get(), 3);
        cell.set(9);
        assert_eq!(binding.get(), 9);
    }

    #[test]
    fn set_writes_through() {
        let cell = Rc::new(RefCell::new(String::new()));
        let (r, w) = (Rc::clone(&cell), Rc::clone(&cell));
        let binding = Binding::new(move || r.borrow().clone(), move |v| *w.borrow_mut() = v);
        binding.set("hello".into());
        assert_eq!(*cell.borrow(), "hello");
        assert_eq!(binding.get(), "hello");
    }

    #[test]
    fn constant_ignores_writes() {
        let binding = Binding::constant(7);
        binding.set(1);
        assert_eq!(binding.get(), 7);
    }

    #[test]
    fn clones_share_accessors() {
        let cell = Rc::new(Cell::new(0));
        let (r, w) = (Rc::clone(&cell), Rc::clone(&cell));
        let a = Binding::new(move || r.get(), move |v| w.set(v));
        let b = a.clone();
        b.set(4);
        assert_eq!(a.get(), 4);
    }

    #[test]
    fn map_converts_both_ways() {
        let cell = Rc::new(Cell::new(10_i32));
        let (r, w) = (Rc::clone(&cell), Rc::clone(&cell));
        let text = Binding::new(move || r.get(), move |v| w.set(v))
            .map(|n| n.to_string(), |s: String| s.parse().unwrap_or_default());
        assert_eq!(text.get(), "10");
        text.set("42".into());
        assert_eq!(cell.get(), 42);
    }

    #[test]
    fn debug_shows_value() {
        let binding = Binding::constant(5u8);
        assert_eq!(format!("{binding:?}"), "Binding { value: 5 }");
    }
}
