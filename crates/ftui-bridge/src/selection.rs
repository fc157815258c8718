#![forbid(unsafe_code)]

//! Selection mapping for collections.
//!
//! A list selects elements of an arbitrary type `E`. The host only sees
//! tokens, so a [`SelectionMapping`] materializes the data once, computes a
//! token per element, and resolves tokens coming back from the host against
//! that snapshot.
//!
//! # Invariants
//!
//! 1. For every `e` in the snapshot, `from_token(&to_token(e))` is the first
//!    snapshot element with the same identity as `e`.
//! 2. The snapshot never changes after construction; new data means a new
//!    mapping (and a re-bridge).
//! 3. Colliding identities resolve to the first element in snapshot order,
//!    on every call.
//!
//! # Failure Modes
//!
//! - Token not in the snapshot: single selection clears; multi-selection
//!   drops that token and writes the rest.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::binding::Binding;
use crate::projection::{BoundaryBinding, BoundarySetBinding, project_with};
use crate::token::{IdentityToken, TokenSet};

/// Label of projections produced by [`SelectionMapping`].
pub const SELECTION_LABEL: &str = "selection";

/// Types that carry their own stable identity.
pub trait Identifiable {
    type Id: Hash + Eq + 'static;

    fn id(&self) -> Self::Id;
}

/// Token lookup over a materialized snapshot of elements.
pub struct SelectionMapping<E> {
    snapshot: Rc<[E]>,
    tokens: Rc<[IdentityToken]>,
    identify: Rc<dyn Fn(&E) -> IdentityToken>,
}

impl<E> Clone for SelectionMapping<E> {
    fn clone(&self) -> Self {
        Self {
            snapshot: Rc::clone(&self.snapshot),
            tokens: Rc::clone(&self.tokens),
            identify: Rc::clone(&self.identify),
        }
    }
}

impl<E> fmt::Debug for SelectionMapping<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionMapping")
            .field("len", &self.snapshot.len())
            .finish_non_exhaustive()
    }
}

impl<E: 'static> SelectionMapping<E> {
    /// Materialize `data`, identifying each element by `identify`.
    pub fn new<K, I>(data: impl IntoIterator<Item = E>, identify: I) -> Self
    where
        K: Hash + Eq + 'static,
        I: Fn(&E) -> K + 'static,
    {
        let identify: Rc<dyn Fn(&E) -> IdentityToken> =
            Rc::new(move |element: &E| IdentityToken::wrap(identify(element)));
        let snapshot: Rc<[E]> = data.into_iter().collect();
        let tokens = snapshot.iter().map(|element| identify(element)).collect();
        Self {
            snapshot,
            tokens,
            identify,
        }
    }

    /// Materialize `data` of a type that knows its own identity.
    pub fn identifiable(data: impl IntoIterator<Item = E>) -> Self
    where
        E: Identifiable,
    {
        Self::new(data, E::id)
    }

    #[must_use]
    pub fn snapshot(&self) -> &[E] {
        &self.snapshot
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Token for an element. The element need not be in the snapshot.
    #[must_use]
    pub fn to_token(&self, element: &E) -> IdentityToken {
        (self.identify)(element)
    }

    /// Tokens of the snapshot, in snapshot order.
    #[must_use]
    pub fn tokens(&self) -> &[IdentityToken] {
        &self.tokens
    }

    /// First snapshot element whose token equals `token`.
    #[must_use]
    pub fn from_token(&self, token: &IdentityToken) -> Option<&E> {
        self.tokens
            .iter()
            .position(|candidate| candidate == token)
            .map(|index| &self.snapshot[index])
    }

    /// Project a single selection.
    pub fn single(&self, binding: Binding<Option<E>>) -> BoundaryBinding
    where
        E: Clone,
    {
        let (forward, backward) = (self.clone(), self.clone());
        project_with(
            binding,
            move |element| forward.to_token(element),
            move |token| backward.from_token(token).cloned(),
        )
        .with_label(SELECTION_LABEL)
    }

    /// Project a multi-selection.
    pub fn multi(&self, binding: Binding<HashSet<E>>) -> BoundarySetBinding
    where
        E: Eq + Hash + Clone,
    {
        let (forward, backward) = (self.clone(), self.clone());
        let read = binding.clone();
        BoundarySetBinding::from_parts(
            move || {
                read.get()
                    .iter()
                    .map(|element| forward.to_token(element))
                    .collect::<TokenSet>()
            },
            move |tokens| {
                let mut resolved = HashSet::with_capacity(tokens.len());
                let mut stale = Vec::new();
                for token in tokens {
                    match backward.from_token(&token) {
                        Some(element) => {
                            resolved.insert(element.clone());
                        }
                        None => stale.push(token),
                    }
                }
                binding.set(resolved);
                stale
            },
        )
        .with_label(SELECTION_LABEL)
    }
}
