#![forbid(unsafe_code)]

//! Scroll containers, scroll readers, and scroll modifiers.

use std::hash::Hash;

use bitflags::bitflags;

use crate::binding::Binding;
use crate::bridge::Bridge;
use crate::fallback::bridge_or_fallback;
use crate::modifier::{BridgeExt, Modified};
use crate::node::{Attachment, OpaqueNode};
use crate::proxy::{ScrollReader, ScrollViewProxy, UnitPoint};
use crate::selection::SelectionMapping;
use crate::views::Visibility;

/// Label of the binding attached by [`ScrollModifiers::scroll_position`].
pub const SCROLL_POSITION_LABEL: &str = "scroll-position";

bitflags! {
    /// Scrollable axes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL   = 0b10;
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::VERTICAL
    }
}

/// A scrollable region around one piece of content.
#[derive(Debug)]
pub struct ScrollView<C> {
    axes: Axes,
    shows_indicators: bool,
    content: C,
}

impl<C: Bridge> ScrollView<C> {
    /// Vertical scrolling with indicators.
    pub fn new(content: C) -> Self {
        Self {
            axes: Axes::default(),
            shows_indicators: true,
            content,
        }
    }

    #[must_use]
    pub fn axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }

    #[must_use]
    pub fn shows_indicators(mut self, shows: bool) -> Self {
        self.shows_indicators = shows;
        self
    }
}

impl<C: Bridge> Bridge for ScrollView<C> {
    const KIND: &'static str = "scroll-view";

    fn bridge(&self) -> OpaqueNode {
        let content = bridge_or_fallback(&self.content);
        OpaqueNode::new(Self::KIND)
            .with_prop("axes", i64::from(self.axes.bits()))
            .with_prop("shows-indicators", self.shows_indicators)
            .with_child(content)
    }
}

/// Content built by the host once it can supply a [`ScrollViewProxy`].
///
/// The bridged node carries a reader attachment and no children; the host
/// calls [`OpaqueNode::read_scroll`] to obtain the content.
#[derive(Clone, Debug)]
pub struct ScrollViewReader {
    reader: ScrollReader,
}

impl ScrollViewReader {
    pub fn new<V, F>(content: F) -> Self
    where
        V: Bridge,
        F: Fn(ScrollViewProxy) -> V + 'static,
    {
        Self {
            reader: ScrollReader::new(move |proxy| bridge_or_fallback(&content(proxy))),
        }
    }
}

impl Bridge for ScrollViewReader {
    const KIND: &'static str = "scroll-reader";

    fn bridge(&self) -> OpaqueNode {
        OpaqueNode::new(Self::KIND).with_attachment(Attachment::ScrollReader(self.reader.clone()))
    }
}

/// When scroll indicators are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollIndicatorVisibility {
    #[default]
    Automatic,
    Visible,
    Hidden,
    Never,
}

impl ScrollIndicatorVisibility {
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Automatic => 0,
            Self::Visible => 1,
            Self::Hidden => 2,
            Self::Never => 3,
        }
    }
}

/// How scrolling interacts with the software keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDismissesKeyboardMode {
    #[default]
    Automatic,
    Immediately,
    Interactively,
    Never,
}

impl ScrollDismissesKeyboardMode {
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Automatic => 1,
            Self::Immediately => 2,
            Self::Interactively => 3,
            Self::Never => 4,
        }
    }
}

/// How far a view-aligned scroll may travel per gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LimitBehavior {
    #[default]
    Automatic,
    Always,
    AlwaysByFew,
    AlwaysByOne,
    Never,
}

impl LimitBehavior {
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Automatic => 1,
            Self::Always => 2,
            Self::AlwaysByFew => 3,
            Self::AlwaysByOne => 4,
            Self::Never => 5,
        }
    }
}

/// Where a scroll gesture comes to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollTargetBehavior {
    Paging,
    ViewAligned(LimitBehavior),
}

impl ScrollTargetBehavior {
    fn apply(self, node: OpaqueNode) -> OpaqueNode {
        match self {
            Self::Paging => node.with_prop("behavior", "paging"),
            Self::ViewAligned(limit) => node
                .with_prop("behavior", "view-aligned")
                .with_prop("limit", limit.raw()),
        }
    }
}

/// Scroll modifiers, available on every view.
pub trait ScrollModifiers: BridgeExt {
    fn scroll_disabled(self, disabled: bool) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            OpaqueNode::wrapping("scroll-disabled", node).with_prop("disabled", disabled)
        })
    }

    fn scroll_indicators(
        self,
        visibility: ScrollIndicatorVisibility,
        axes: Axes,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            OpaqueNode::wrapping("scroll-indicators", node)
                .with_prop("visibility", visibility.raw())
                .with_prop("axes", i64::from(axes.bits()))
        })
    }

    fn scroll_content_background(
        self,
        visibility: Visibility,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            OpaqueNode::wrapping("scroll-content-background", node)
                .with_prop("visibility", visibility.raw())
        })
    }

    fn scroll_dismisses_keyboard(
        self,
        mode: ScrollDismissesKeyboardMode,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            OpaqueNode::wrapping("scroll-dismisses-keyboard", node).with_prop("mode", mode.raw())
        })
    }

    /// Mark this view as a scroll target.
    fn scroll_target(self, enabled: bool) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            OpaqueNode::wrapping("scroll-target", node).with_prop("enabled", enabled)
        })
    }

    /// Mark the rows inside this view as scroll targets.
    fn scroll_target_layout(
        self,
        enabled: bool,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| {
            OpaqueNode::wrapping("scroll-target-layout", node).with_prop("enabled", enabled)
        })
    }

    fn scroll_target_behavior(
        self,
        behavior: ScrollTargetBehavior,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        self.modifier(move |node| behavior.apply(OpaqueNode::wrapping("scroll-target-behavior", node)))
    }

    /// Two-way scroll position by row identity.
    ///
    /// The host reads the id of the row to keep in view and writes back the
    /// id of the row that scrolled into place. Ids outside `candidates` are
    /// stale and clear the position.
    fn scroll_position<H>(
        self,
        position: Binding<Option<H>>,
        candidates: impl IntoIterator<Item = H>,
        anchor: Option<UnitPoint>,
    ) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode>
    where
        H: Eq + Hash + Clone + 'static,
    {
        let projected = SelectionMapping::new(candidates, H::clone)
            .single(position)
            .with_label(SCROLL_POSITION_LABEL);
        self.modifier(move |node| {
            let mut wrapper = OpaqueNode::wrapping(SCROLL_POSITION_LABEL, node);
            if let Some(anchor) = anchor {
                wrapper = wrapper
                    .with_prop("anchor-x", anchor.x)
                    .with_prop("anchor-y", anchor.y);
            }
            wrapper.with_attachment(Attachment::Binding(projected.clone()))
        })
    }
}

impl<V: Bridge> ScrollModifiers for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Prop;
    use crate::state::State;
    use crate::token::IdentityToken;
    use crate::views::{ForEach, Text};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn scroll_view_props() {
        let node = ScrollView::new(Text::new("body"))
            .axes(Axes::HORIZONTAL | Axes::VERTICAL)
            .shows_indicators(false)
            .bridge();
        assert_eq!(
            node.outline(),
            "scroll-view axes=3 shows-indicators=false\n  text text=\"body\"\n"
        );
    }

    #[test]
    fn default_axes_are_vertical() {
        let node = ScrollView::new(Text::new("x")).bridge();
        assert_eq!(node.prop("axes"), Some(&Prop::Int(2)));
        assert_eq!(node.prop("shows-indicators"), Some(&Prop::Bool(true)));
    }

    #[test]
    fn reader_defers_content_to_host() {
        let reader = ScrollViewReader::new(|proxy: ScrollViewProxy| {
            let rows = ForEach::new(0..3u8, |n| *n, |n| Text::new(n.to_string()));
            proxy.scroll_to(2u8, Some(UnitPoint::BOTTOM));
            rows
        });
        let node = reader.bridge();
        assert!(node.children().is_empty());

        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&requests);
        let content = node
            .read_scroll(ScrollViewProxy::new(move |id, anchor| {
                sink.borrow_mut().push((id, anchor));
            }))
            .expect("reader attached");
        assert_eq!(content.kind(), "for-each");
        assert_eq!(
            *requests.borrow(),
            [(IdentityToken::wrap(2u8), Some(UnitPoint::new(0.5, 1.0)))]
        );
    }

    #[test]
    fn indicator_and_keyboard_raw_values() {
        let node = Text::new("x")
            .scroll_indicators(ScrollIndicatorVisibility::Never, Axes::VERTICAL)
            .scroll_dismisses_keyboard(ScrollDismissesKeyboardMode::Interactively)
            .bridge();
        assert_eq!(node.prop("mode"), Some(&Prop::Int(3)));
        let indicators = &node.children()[0];
        assert_eq!(indicators.prop("visibility"), Some(&Prop::Int(3)));
        assert_eq!(indicators.prop("axes"), Some(&Prop::Int(2)));
    }

    #[test]
    fn target_behavior_props() {
        let node = Text::new("x")
            .scroll_target_behavior(ScrollTargetBehavior::ViewAligned(LimitBehavior::AlwaysByOne))
            .bridge();
        assert_eq!(
            node.outline(),
            "scroll-target-behavior behavior=\"view-aligned\" limit=4\n  text text=\"x\"\n"
        );
        let paging = Text::new("x")
            .scroll_target_behavior(ScrollTargetBehavior::Paging)
            .bridge();
        assert!(paging.prop("limit").is_none());
    }

    #[test]
    fn scroll_position_round_trip() {
        let position = State::new(Some(1u32));
        let node = ScrollView::new(Text::new("rows"))
            .scroll_target_layout(true)
            .scroll_position(position.binding(), [1u32, 2, 3], Some(UnitPoint::TOP))
            .bridge();
        let binding = node.binding(SCROLL_POSITION_LABEL).expect("position attached");
        assert_eq!(binding.get(), Some(IdentityToken::wrap(1u32)));
        assert_eq!(node.prop("anchor-y"), Some(&Prop::Float(0.0)));

        binding.set(Some(IdentityToken::wrap(3u32)));
        assert_eq!(position.get(), Some(3));
        binding.set(Some(IdentityToken::wrap(9u32)));
        assert_eq!(position.get(), None);
    }

    #[test]
    fn disabled_and_background() {
        let node = Text::new("x")
            .scroll_disabled(true)
            .scroll_content_background(Visibility::Hidden)
            .scroll_target(false)
            .bridge();
        assert_eq!(node.kind(), "scroll-target");
        assert_eq!(node.children()[0].prop("visibility"), Some(&Prop::Int(2)));
        assert_eq!(
            node.children()[0].children()[0].prop("disabled"),
            Some(&Prop::Bool(true))
        );
    }
}
