#![forbid(unsafe_code)]

//! Data-driven rows.

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::bridge::{AnyView, Bridge};
use crate::fallback::bridge_or_fallback;
use crate::node::OpaqueNode;
use crate::selection::{Identifiable, SelectionMapping};

/// One row per element of a data snapshot.
///
/// Each row node carries the identity token of its element, which is the
/// same token selection projections hand to the host.
pub struct ForEach<E> {
    mapping: SelectionMapping<E>,
    row: Rc<dyn Fn(&E) -> AnyView>,
}

impl<E> Clone for ForEach<E> {
    fn clone(&self) -> Self {
        Self {
            mapping: self.mapping.clone(),
            row: Rc::clone(&self.row),
        }
    }
}

impl<E> fmt::Debug for ForEach<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEach")
            .field("mapping", &self.mapping)
            .finish_non_exhaustive()
    }
}

impl<E: 'static> ForEach<E> {
    /// Rows for `data`, identified by `identify`.
    pub fn new<K, I, V, R>(data: impl IntoIterator<Item = E>, identify: I, row: R) -> Self
    where
        K: Hash + Eq + 'static,
        I: Fn(&E) -> K + 'static,
        V: Bridge + 'static,
        R: Fn(&E) -> V + 'static,
    {
        Self {
            mapping: SelectionMapping::new(data, identify),
            row: Rc::new(move |element: &E| AnyView::new(row(element))),
        }
    }

    /// Rows for elements that know their own identity.
    pub fn identifiable<V, R>(data: impl IntoIterator<Item = E>, row: R) -> Self
    where
        E: Identifiable,
        V: Bridge + 'static,
        R: Fn(&E) -> V + 'static,
    {
        Self::new(data, E::id, row)
    }

    /// The snapshot and tokens the rows were built from.
    #[must_use]
    pub fn mapping(&self) -> &SelectionMapping<E> {
        &self.mapping
    }
}

impl<E: 'static> Bridge for ForEach<E> {
    const KIND: &'static str = "for-each";

    fn bridge(&self) -> OpaqueNode {
        let rows = self
            .mapping
            .snapshot()
            .iter()
            .zip(self.mapping.tokens())
            .map(|(element, token)| bridge_or_fallback(&(self.row)(element)).with_id(token.clone()));
        OpaqueNode::new(Self::KIND).with_children(rows)
    }
}
