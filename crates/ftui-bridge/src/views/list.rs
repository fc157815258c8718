#![forbid(unsafe_code)]

//! Lists and list modifiers.
//!
//! A [`List`] over arbitrary content bridges as a plain list. A list over a
//! [`ForEach`] can also carry a single or multi-selection: the selection is
//! projected through the rows' own [`SelectionMapping`], so the tokens the
//! host reads from the selection are exactly the tokens on the row nodes.
//!
//! [`SelectionMapping`]: crate::selection::SelectionMapping

use std::collections::HashSet;
use std::hash::Hash;

use bitflags::bitflags;

use crate::binding::Binding;
use crate::bridge::Bridge;
use crate::fallback::bridge_or_fallback;
use crate::modifier::{BridgeExt, Modified};
use crate::node::{Attachment, OpaqueNode};
use crate::views::Visibility;
use crate::views::for_each::ForEach;

/// A scrolling column of rows.
#[derive(Debug)]
pub struct List<C> {
    content: C,
    selection: Option<Attachment>,
}

impl<C: Bridge> List<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            selection: None,
        }
    }
}

impl<E: Clone + 'static> List<ForEach<E>> {
    /// Let the host select at most one row.
    #[must_use]
    pub fn selecting(mut self, selection: Binding<Option<E>>) -> Self {
        let projected = self.content.mapping().single(selection);
        self.selection = Some(Attachment::SingleSelection(projected));
        self
    }

    /// Let the host select any number of rows.
    #[must_use]
    pub fn selecting_many(mut self, selection: Binding<HashSet<E>>) -> Self
    where
        E: Eq + Hash,
    {
        let projected = self.content.mapping().multi(selection);
        self.selection = Some(Attachment::MultiSelection(projected));
        self
    }
}

impl<C: Bridge> Bridge for List<C> {
    const KIND: &'static str = "list";

    fn bridge(&self) -> OpaqueNode {
        let node = OpaqueNode::new(Self::KIND).with_child(bridge_or_fallback(&self.content));
        match &self.selection {
            Some(selection) => node.with_attachment(selection.clone()),
            None => node,
        }
    }
}

/// Presentation style of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListStyle {
    #[default]
    Automatic,
    Plain,
}

impl ListStyle {
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Automatic => 0,
            Self::Plain => 5,
        }
    }
}

bitflags! {
    /// Top and bottom edges of a row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VerticalEdges: u8 {
        const TOP    = 0b01;
        const BOTTOM = 0b10;
    }
}

/// List modifiers, available on every view.
pub trait ListModifiers: BridgeExt {
    fn list_style(self, style: ListStyle) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            OpaqueNode::wrapping("list-style", node).with_prop("style", style.raw())
        })
    }

    fn list_row_separator(
        self,
        visibility: Visibility,
        edges: VerticalEdges,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            OpaqueNode::wrapping("list-row-separator", node)
                .with_prop("visibility", visibility.raw())
                .with_prop("edges", i64::from(edges.bits()))
        })
    }

    /// Draw `background` behind each row. `None` restores the default.
    fn list_row_background<B: Bridge>(
        self,
        background: Option<B>,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            let wrapper = OpaqueNode::wrapping("list-row-background", node);
            match &background {
                Some(view) => wrapper.with_prop("background", bridge_or_fallback(view)),
                None => wrapper,
            }
        })
    }
}

impl<V: Bridge> ListModifiers for V {}
