#![forbid(unsafe_code)]

//! The bridging protocol.
//!
//! Every view that can cross to the host implements [`Bridge`]. A composite
//! view bridges its children first (through
//! [`bridge_or_fallback`](crate::fallback::bridge_or_fallback), in
//! declaration order) and only then builds its own node, so the host always
//! receives a fully realized tree.
//!
//! # Invariants
//!
//! 1. `bridge()` has no side effects beyond reading caller state.
//! 2. Two calls on an unchanged view return equal nodes.
//! 3. Children are bridged before their parent, siblings in order.
//! 4. `CAPABILITY` is fixed per view type; it is never probed at runtime.

use crate::fallback::bridge_or_fallback;
use crate::node::OpaqueNode;

/// Whether the host can represent a view kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Supported,
    /// The host has no counterpart yet; bridging substitutes the empty node.
    Unsupported,
}

impl Capability {
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Supported)
    }
}

/// A view that can be projected into an [`OpaqueNode`].
pub trait Bridge {
    /// Kind tag used in diagnostics and fallback records.
    const KIND: &'static str;

    /// Static capability flag for this view type.
    const CAPABILITY: Capability = Capability::Supported;

    /// Build the boundary representation of this view.
    ///
    /// Callers outside this crate's view implementations should go through
    /// [`bridge_or_fallback`], which honors [`Bridge::CAPABILITY`].
    fn bridge(&self) -> OpaqueNode;

    /// Kind of this value. Type-erased wrappers report their inner kind.
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// Capability of this value. Type-erased wrappers report their inner flag.
    fn capability(&self) -> Capability {
        Self::CAPABILITY
    }
}

trait ErasedView {
    fn erased_kind(&self) -> &'static str;
    fn erased_capability(&self) -> Capability;
    fn erased_bridge(&self) -> OpaqueNode;
}

impl<V: Bridge> ErasedView for V {
    fn erased_kind(&self) -> &'static str {
        self.kind()
    }

    fn erased_capability(&self) -> Capability {
        self.capability()
    }

    fn erased_bridge(&self) -> OpaqueNode {
        self.bridge()
    }
}

/// Type-erased view for heterogeneous children.
pub struct AnyView {
    inner: Box<dyn ErasedView>,
}

impl AnyView {
    pub fn new<V: Bridge + 'static>(view: V) -> Self {
        Self {
            inner: Box::new(view),
        }
    }
}

impl std::fmt::Debug for AnyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyView")
            .field("kind", &self.inner.erased_kind())
            .finish()
    }
}

impl Bridge for AnyView {
    const KIND: &'static str = "any";

    fn bridge(&self) -> OpaqueNode {
        self.inner.erased_bridge()
    }

    fn kind(&self) -> &'static str {
        self.inner.erased_kind()
    }

    fn capability(&self) -> Capability {
        self.inner.erased_capability()
    }
}

/// An already bridged node bridges to itself.
impl Bridge for OpaqueNode {
    const KIND: &'static str = "opaque";

    fn bridge(&self) -> OpaqueNode {
        self.clone()
    }

    fn kind(&self) -> &'static str {
        OpaqueNode::kind(self)
    }
}

/// `None` bridges to the empty node.
impl<V: Bridge> Bridge for Option<V> {
    const KIND: &'static str = "optional";

    fn bridge(&self) -> OpaqueNode {
        match self {
            Some(view) => bridge_or_fallback(view),
            None => OpaqueNode::empty(),
        }
    }
}

/// Bridge children in declaration order.
pub fn bridge_children<'a, V, I>(children: I) -> Vec<OpaqueNode>
where
    V: Bridge + 'a,
    I: IntoIterator<Item = &'a V>,
{
    children.into_iter().map(bridge_or_fallback).collect()
}
