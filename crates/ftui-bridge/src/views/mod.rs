#![forbid(unsafe_code)]

//! A small catalog of bridgeable views.
//!
//! Enough structure to drive the bridging core end to end: leaves, stacks,
//! data-driven rows, lists with selection, scroll containers, and the
//! modifiers that go with them. Raw values attached as node properties are
//! the ones the host expects for each enum.

pub mod animation;
pub mod edit_mode;
pub mod for_each;
pub mod layout;
pub mod list;
pub mod scroll;

pub use animation::{
    Canvas, GraphicsContext, KeyframeAnimator, PhaseAnimator, SymbolEffect, SymbolEffectModifiers,
};
pub use edit_mode::{EditMode, EditModeModifiers};
pub use for_each::ForEach;
pub use layout::{
    Edges, HorizontalAlignment, HorizontalEdge, LayoutModifiers, SafeAreaRegions,
    VerticalAlignment, VerticalEdge,
};
pub use list::{List, ListModifiers, ListStyle, VerticalEdges};
pub use scroll::{
    Axes, LimitBehavior, ScrollDismissesKeyboardMode, ScrollIndicatorVisibility, ScrollModifiers,
    ScrollTargetBehavior, ScrollView, ScrollViewReader,
};

use crate::bridge::{AnyView, Bridge, bridge_children};
use crate::node::OpaqueNode;

/// Tri-state visibility shared by several modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Automatic,
    Visible,
    Hidden,
}

impl Visibility {
    /// Value the host expects.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Automatic => 0,
            Self::Visible => 1,
            Self::Hidden => 2,
        }
    }
}

/// A run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Bridge for Text {
    const KIND: &'static str = "text";

    fn bridge(&self) -> OpaqueNode {
        OpaqueNode::new(Self::KIND).with_prop("text", self.content.as_str())
    }
}

/// Nothing. Bridges to the canonical empty node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyView;

impl Bridge for EmptyView {
    const KIND: &'static str = crate::node::EMPTY_KIND;

    fn bridge(&self) -> OpaqueNode {
        OpaqueNode::empty()
    }
}

/// Direction a [`Stack`] lays out its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StackAxis {
    #[default]
    Vertical,
    Horizontal,
    /// Children drawn on top of each other.
    Layered,
}

impl StackAxis {
    const fn node_kind(self) -> &'static str {
        match self {
            Self::Vertical => "v-stack",
            Self::Horizontal => "h-stack",
            Self::Layered => "z-stack",
        }
    }
}

/// Ordered, heterogeneous children.
#[derive(Debug, Default)]
pub struct Stack {
    axis: StackAxis,
    spacing: Option<f64>,
    children: Vec<AnyView>,
}

impl Stack {
    #[must_use]
    pub fn new(axis: StackAxis) -> Self {
        Self {
            axis,
            spacing: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn vertical() -> Self {
        Self::new(StackAxis::Vertical)
    }

    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(StackAxis::Horizontal)
    }

    #[must_use]
    pub fn layered() -> Self {
        Self::new(StackAxis::Layered)
    }

    #[must_use]
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    #[must_use]
    pub fn child(mut self, view: impl Bridge + 'static) -> Self {
        self.children.push(AnyView::new(view));
        self
    }

    #[must_use]
    pub fn axis(&self) -> StackAxis {
        self.axis
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Bridge for Stack {
    const KIND: &'static str = "stack";

    fn bridge(&self) -> OpaqueNode {
        let children = bridge_children(&self.children);
        let mut node = OpaqueNode::new(self.axis.node_kind());
        if let Some(spacing) = self.spacing {
            node = node.with_prop("spacing", spacing);
        }
        node.with_children(children)
    }
}
