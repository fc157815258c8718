//! Deferred modifier composition over real catalog views.

use std::cell::Cell;
use std::rc::Rc;

use ftui_bridge::views::{ListModifiers, ListStyle, ScrollModifiers, Text, VerticalEdges, Visibility};
use ftui_bridge::{AnyView, Bridge, BridgeExt, OpaqueNode, bridge_or_fallback};

struct Counted {
    bridges: Rc<Cell<u32>>,
}

impl Bridge for Counted {
    const KIND: &'static str = "counted";

    fn bridge(&self) -> OpaqueNode {
        self.bridges.set(self.bridges.get() + 1);
        OpaqueNode::new("counted")
    }
}

fn wrap(kind: &'static str) -> impl Fn(OpaqueNode) -> OpaqueNode + Clone {
    move |node| OpaqueNode::wrapping(kind, node)
}

#[test]
fn three_links_compose_innermost_first() {
    let (f, g, h) = (wrap("f"), wrap("g"), wrap("h"));
    let view = Text::new("n")
        .modifier(f.clone())
        .modifier(g.clone())
        .modifier(h.clone());
    let expected = h(g(f(Text::new("n").bridge())));
    assert_eq!(bridge_or_fallback(&view), expected);
}

#[test]
fn each_link_bridges_target_once() {
    let bridges = Rc::new(Cell::new(0));
    let calls = Rc::new(Cell::new(0));
    let mut view = Counted {
        bridges: Rc::clone(&bridges),
    }
    .erase();
    for _ in 0..16 {
        let calls = Rc::clone(&calls);
        view = view
            .modifier(move |node| {
                calls.set(calls.get() + 1);
                OpaqueNode::wrapping("link", node)
            })
            .erase();
    }

    let node = bridge_or_fallback(&view);
    assert_eq!(bridges.get(), 1);
    assert_eq!(calls.get(), 16);
    assert_eq!(node.node_count(), 17);
}

#[test]
fn catalog_modifiers_mix_with_custom_ones() {
    let node = Text::new("row")
        .list_style(ListStyle::Plain)
        .modifier(|node| node.with_prop("custom", true))
        .scroll_disabled(true)
        .list_row_separator(Visibility::Visible, VerticalEdges::all())
        .bridge();
    let kinds: Vec<&str> = std::iter::successors(Some(&node), |&n| n.children().first())
        .map(OpaqueNode::kind)
        .collect();
    assert_eq!(
        kinds,
        ["list-row-separator", "scroll-disabled", "list-style", "text"]
    );
    assert!(node.find("list-style").and_then(|n| n.prop("custom")).is_some());
}

#[test]
fn erased_chain_is_rebridged_equal() {
    let view: AnyView = Text::new("x")
        .modifier(wrap("a"))
        .modifier(wrap("b"))
        .modifier(wrap("c"))
        .erase();
    assert_eq!(view.bridge(), view.bridge());
    assert_eq!(view.kind(), "modified");
}
