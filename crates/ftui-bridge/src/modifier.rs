#![forbid(unsafe_code)]

//! Deferred modifiers.
//!
//! A modifier does not touch its target when it is attached. [`Modified`]
//! keeps the target and a transform `OpaqueNode -> OpaqueNode`; the transform
//! runs once, on the bridged target, when the modified view is bridged.
//!
//! ```
//! use ftui_bridge::{BridgeExt, OpaqueNode, bridge_or_fallback};
//! use ftui_bridge::views::Text;
//!
//! let view = Text::new("hi")
//!     .modifier(|node| OpaqueNode::wrapping("padding", node))
//!     .modifier(|node| OpaqueNode::wrapping("border", node));
//! let node = bridge_or_fallback(&view);
//! assert_eq!(node.kind(), "border");
//! assert_eq!(node.children()[0].kind(), "padding");
//! ```
//!
//! # Invariants
//!
//! 1. `target.modifier(f).modifier(g)` bridges to `g(f(bridge(target)))`.
//! 2. Each link bridges its target exactly once, so a chain of `n` modifiers
//!    costs `n` transforms and one bridge of the innermost view.
//! 3. An unsupported target is substituted before the transform runs.

use std::fmt;

use crate::bridge::{AnyView, Bridge};
use crate::fallback::bridge_or_fallback;
use crate::node::OpaqueNode;

/// A view plus a transform applied to its bridged form.
#[derive(Clone)]
pub struct Modified<V, F> {
    target: V,
    transform: F,
}

impl<V, F> Modified<V, F>
where
    V: Bridge,
    F: Fn(OpaqueNode) -> OpaqueNode,
{
    pub fn new(target: V, transform: F) -> Self {
        Self { target, transform }
    }

    #[must_use]
    pub fn target(&self) -> &V {
        &self.target
    }
}

impl<V: Bridge, F> fmt::Debug for Modified<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modified")
            .field("target", &self.target.kind())
            .finish_non_exhaustive()
    }
}

impl<V, F> Bridge for Modified<V, F>
where
    V: Bridge,
    F: Fn(OpaqueNode) -> OpaqueNode,
{
    const KIND: &'static str = "modified";

    fn bridge(&self) -> OpaqueNode {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("modifier", target = self.target.kind()).entered();

        (self.transform)(bridge_or_fallback(&self.target))
    }
}

/// Chaining helpers available on every bridgeable view.
pub trait BridgeExt: Bridge + Sized {
    /// Defer `transform` until this view is bridged.
    fn modifier<F>(self, transform: F) -> Modified<Self, F>
    where
        F: Fn(OpaqueNode) -> OpaqueNode,
    {
        Modified::new(self, transform)
    }

    /// Erase the view type, for heterogeneous children.
    fn erase(self) -> AnyView
    where
        Self: 'static,
    {
        AnyView::new(self)
    }
}

impl<V: Bridge> BridgeExt for V {}
