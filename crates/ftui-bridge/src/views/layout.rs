#![forbid(unsafe_code)]

//! Safe-area modifiers.

use bitflags::bitflags;

use crate::bridge::Bridge;
use crate::fallback::bridge_or_fallback;
use crate::modifier::{BridgeExt, Modified};
use crate::node::OpaqueNode;

bitflags! {
    /// Parts of the safe area a view may extend into.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SafeAreaRegions: u8 {
        const CONTAINER = 0b01;
        const KEYBOARD  = 0b10;
    }
}

bitflags! {
    /// Edges of a rectangle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP      = 0b0001;
        const LEADING  = 0b0010;
        const BOTTOM   = 0b0100;
        const TRAILING = 0b1000;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

impl VerticalEdge {
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    Leading,
    Trailing,
}

impl HorizontalEdge {
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Leading => 0,
            Self::Trailing => 1,
        }
    }
}

/// Horizontal placement of inset content along a top or bottom edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

impl HorizontalAlignment {
    /// Key the host resolves the alignment by.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Leading => "leading",
            Self::Center => "center",
            Self::Trailing => "trailing",
        }
    }
}

/// Vertical placement of inset content along a leading or trailing edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlignment {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

fn inset(
    kind: &'static str,
    node: OpaqueNode,
    edge: i32,
    alignment: &'static str,
    spacing: Option<f64>,
    content: OpaqueNode,
) -> OpaqueNode {
    let mut wrapper = OpaqueNode::wrapping(kind, node)
        .with_prop("edge", edge)
        .with_prop("alignment", alignment);
    if let Some(spacing) = spacing {
        wrapper = wrapper.with_prop("spacing", spacing);
    }
    wrapper.with_prop("content", content)
}

/// Layout modifiers, available on every view.
pub trait LayoutModifiers: BridgeExt {
    /// Place `content` along a top or bottom edge, shrinking the safe area.
    fn safe_area_inset<C: Bridge>(
        self,
        edge: VerticalEdge,
        alignment: HorizontalAlignment,
        spacing: Option<f64>,
        content: C,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            inset(
                "safe-area-inset",
                node,
                edge.raw(),
                alignment.key(),
                spacing,
                bridge_or_fallback(&content),
            )
        })
    }

    /// Place `content` along a leading or trailing edge.
    fn safe_area_inset_horizontal<C: Bridge>(
        self,
        edge: HorizontalEdge,
        alignment: VerticalAlignment,
        spacing: Option<f64>,
        content: C,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            inset(
                "safe-area-inset-horizontal",
                node,
                edge.raw(),
                alignment.key(),
                spacing,
                bridge_or_fallback(&content),
            )
        })
    }

    fn ignores_safe_area(
        self,
        regions: SafeAreaRegions,
        edges: Edges,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            OpaqueNode::wrapping("ignores-safe-area", node)
                .with_prop("regions", i64::from(regions.bits()))
                .with_prop("edges", i64::from(edges.bits()))
        })
    }
}

impl<V: Bridge> LayoutModifiers for V {}
