#![forbid(unsafe_code)]

//! Binding projection.
//!
//! A [`Binding<T>`] cannot cross the bridge: its type parameter would leak.
//! Projection re-exposes it as a getter/setter pair over [`IdentityToken`]s,
//! which is what the host receives and invokes on user interaction.
//!
//! The host hands back tokens it was given earlier. By the time it does, the
//! data may have changed, so every setter resolves the token through a
//! caller-supplied lookup. A token that resolves to nothing is *stale*: it is
//! dropped, never reported as an error.
//!
//! # Invariants
//!
//! 1. `set(get())` writes back the value it read (a no-op for the source).
//! 2. `set(Some(wrap(v)))` with a resolvable token makes `get()` return
//!    `wrap(v)`.
//! 3. Projections own no state; the typed value is only touched inside a
//!    `get()` or `set()` call.
//!
//! # Failure Modes
//!
//! - Stale token on an optional binding: the value is cleared.
//! - Stale token on a non-optional binding ([`project_value`]): the value is
//!   left untouched.
//! - Stale tokens in a set: dropped individually; the rest is written.
//!
//! Every dropped token is reported to the active
//! [`DiagnosticsScope`](crate::diagnostics::DiagnosticsScope) and as a
//! `trace` event on the `ftui_bridge::projection` target.

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::binding::Binding;
use crate::diagnostics::{self, StaleTokenRecord};
use crate::token::{IdentityToken, TokenSet};

/// Label given to projections that were not labelled explicitly.
pub const DEFAULT_LABEL: &str = "binding";

fn report_stale(label: &'static str, token: &IdentityToken) {
    tracing::trace!(
        target: "ftui_bridge::projection",
        binding = label,
        token = ?token,
        "dropping unresolved token"
    );
    diagnostics::record_stale_token(StaleTokenRecord {
        binding: label,
        token_type: token.type_name(),
    });
}

/// Token-level view of an optional value, handed to the host.
#[derive(Clone)]
pub struct BoundaryBinding {
    label: &'static str,
    get: Rc<dyn Fn() -> Option<IdentityToken>>,
    /// Returns `false` when the token did not resolve.
    set: Rc<dyn Fn(Option<IdentityToken>) -> bool>,
}

impl BoundaryBinding {
    pub(crate) fn from_parts(
        get: impl Fn() -> Option<IdentityToken> + 'static,
        set: impl Fn(Option<IdentityToken>) -> bool + 'static,
    ) -> Self {
        Self {
            label: DEFAULT_LABEL,
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Rename the projection. The host finds labelled bindings by name.
    #[must_use]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Token for the current value, or `None` when absent.
    #[must_use]
    pub fn get(&self) -> Option<IdentityToken> {
        (self.get)()
    }

    /// Write the value the token resolves to. `None` clears.
    pub fn set(&self, token: Option<IdentityToken>) {
        let stale = token.clone();
        if !(self.set)(token)
            && let Some(token) = stale
        {
            report_stale(self.label, &token);
        }
    }
}

impl fmt::Debug for BoundaryBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryBinding")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Token-level view of a set of values, handed to the host.
#[derive(Clone)]
pub struct BoundarySetBinding {
    label: &'static str,
    get: Rc<dyn Fn() -> TokenSet>,
    /// Returns the tokens that did not resolve.
    set: Rc<dyn Fn(TokenSet) -> Vec<IdentityToken>>,
}

impl BoundarySetBinding {
    pub(crate) fn from_parts(
        get: impl Fn() -> TokenSet + 'static,
        set: impl Fn(TokenSet) -> Vec<IdentityToken> + 'static,
    ) -> Self {
        Self {
            label: DEFAULT_LABEL,
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Tokens for the current values.
    #[must_use]
    pub fn get(&self) -> TokenSet {
        (self.get)()
    }

    /// Write the values the tokens resolve to, dropping misses.
    pub fn set(&self, tokens: TokenSet) {
        for token in (self.set)(tokens) {
            report_stale(self.label, &token);
        }
    }
}

impl fmt::Debug for BoundarySetBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundarySetBinding")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Project an optional binding whose values are their own identity.
pub fn project<T, R>(binding: Binding<Option<T>>, resolve: R) -> BoundaryBinding
where
    T: Eq + Hash + Clone + 'static,
    R: Fn(&IdentityToken) -> Option<T> + 'static,
{
    project_with(binding, |value: &T| IdentityToken::wrap(value.clone()), resolve)
}

/// Project an optional binding with an explicit value-to-token function.
pub fn project_with<T, F, R>(binding: Binding<Option<T>>, to_token: F, resolve: R) -> BoundaryBinding
where
    T: 'static,
    F: Fn(&T) -> IdentityToken + 'static,
    R: Fn(&IdentityToken) -> Option<T> + 'static,
{
    let read = binding.clone();
    BoundaryBinding::from_parts(
        move || read.get().as_ref().map(&to_token),
        move |token| match token {
            None => {
                binding.set(None);
                true
            }
            Some(token) => {
                let resolved = resolve(&token);
                let hit = resolved.is_some();
                binding.set(resolved);
                hit
            }
        },
    )
}

/// Project a binding that always holds a value.
///
/// There is no absent state to write, so `set(None)` and stale tokens leave
/// the value untouched.
pub fn project_value<T, F, R>(binding: Binding<T>, to_token: F, resolve: R) -> BoundaryBinding
where
    T: 'static,
    F: Fn(&T) -> IdentityToken + 'static,
    R: Fn(&IdentityToken) -> Option<T> + 'static,
{
    let read = binding.clone();
    BoundaryBinding::from_parts(
        move || Some(to_token(&read.get())),
        move |token| match token.map(|token| resolve(&token)) {
            None => true,
            Some(Some(value)) => {
                binding.set(value);
                true
            }
            Some(None) => false,
        },
    )
}
