#![forbid(unsafe_code)]

//! The boundary-safe node type.
//!
//! An [`OpaqueNode`] is the only representation of UI structure the host
//! runtime ever receives. It carries no generic parameters: a kind tag,
//! ordered properties, ordered children, an optional row identity, and the
//! token-level callbacks ([`Attachment`]s) the host invokes on interaction.
//!
//! # Equivalence
//!
//! Bridging the same state twice produces two nodes that compare equal with
//! `==`. Closures have no identity, so attachments compare by shape only
//! (variant and label); everything else compares structurally.

use std::fmt;

use crate::projection::{BoundaryBinding, BoundarySetBinding};
use crate::proxy::{ScrollReader, ScrollViewProxy};
use crate::token::IdentityToken;

/// Kind tag of the canonical empty node.
pub const EMPTY_KIND: &str = "empty";

/// A property value attached to a node.
#[derive(Clone, Debug, PartialEq)]
pub enum Prop {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A separately bridged subtree (backgrounds, insets).
    Node(Box<OpaqueNode>),
}

impl From<bool> for Prop {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Prop {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Prop {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Prop {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Prop {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Prop {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Prop {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<OpaqueNode> for Prop {
    fn from(value: OpaqueNode) -> Self {
        Self::Node(Box::new(value))
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Node(node) => write!(f, "<{}>", node.kind),
        }
    }
}

/// Token-level callbacks the host invokes on user interaction.
#[derive(Clone)]
pub enum Attachment {
    SingleSelection(BoundaryBinding),
    MultiSelection(BoundarySetBinding),
    /// Any other projected binding, identified by its label.
    Binding(BoundaryBinding),
    ScrollReader(ScrollReader),
}

impl Attachment {
    fn describe(&self) -> String {
        match self {
            Self::SingleSelection(_) => "single-selection".to_owned(),
            Self::MultiSelection(_) => "multi-selection".to_owned(),
            Self::Binding(binding) => format!("binding({})", binding.label()),
            Self::ScrollReader(_) => "scroll-reader".to_owned(),
        }
    }
}

impl PartialEq for Attachment {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SingleSelection(_), Self::SingleSelection(_))
            | (Self::MultiSelection(_), Self::MultiSelection(_))
            | (Self::ScrollReader(_), Self::ScrollReader(_)) => true,
            (Self::Binding(a), Self::Binding(b)) => a.label() == b.label(),
            _ => false,
        }
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Boundary-safe unit of UI structure.
#[derive(Clone, Debug, PartialEq)]
pub struct OpaqueNode {
    kind: &'static str,
    id: Option<IdentityToken>,
    props: Vec<(&'static str, Prop)>,
    children: Vec<OpaqueNode>,
    attachments: Vec<Attachment>,
}

impl OpaqueNode {
    /// Create a node of the given kind with no content.
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            id: None,
            props: Vec::new(),
            children: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// The canonical empty node used for capability fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(EMPTY_KIND)
    }

    /// Wrap an already bridged node, as modifiers do.
    #[must_use]
    pub fn wrapping(kind: &'static str, inner: OpaqueNode) -> Self {
        Self::new(kind).with_child(inner)
    }

    /// Set a property, replacing any earlier value under the same key.
    #[must_use]
    pub fn with_prop(mut self, key: &'static str, value: impl Into<Prop>) -> Self {
        let value = value.into();
        match self.props.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.props.push((key, value)),
        }
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: OpaqueNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append children, keeping their order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = OpaqueNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Tag the node with the identity the host uses to re-associate it across
    /// re-bridges (rows of a collection).
    #[must_use]
    pub fn with_id(mut self, id: IdentityToken) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Whether this is the canonical empty node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind == EMPTY_KIND
            && self.id.is_none()
            && self.props.is_empty()
            && self.children.is_empty()
            && self.attachments.is_empty()
    }

    #[must_use]
    pub fn id(&self) -> Option<&IdentityToken> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn props(&self) -> &[(&'static str, Prop)] {
        &self.props
    }

    #[must_use]
    pub fn prop(&self, key: &str) -> Option<&Prop> {
        self.props.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn children(&self) -> &[OpaqueNode] {
        &self.children
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Single-selection callbacks, if this node carries them.
    #[must_use]
    pub fn single_selection(&self) -> Option<&BoundaryBinding> {
        self.attachments.iter().find_map(|a| match a {
            Attachment::SingleSelection(binding) => Some(binding),
            _ => None,
        })
    }

    /// Multi-selection callbacks, if this node carries them.
    #[must_use]
    pub fn multi_selection(&self) -> Option<&BoundarySetBinding> {
        self.attachments.iter().find_map(|a| match a {
            Attachment::MultiSelection(binding) => Some(binding),
            _ => None,
        })
    }

    /// A labelled binding attached to this node.
    #[must_use]
    pub fn binding(&self, label: &str) -> Option<&BoundaryBinding> {
        self.attachments.iter().find_map(|a| match a {
            Attachment::Binding(binding) if binding.label() == label => Some(binding),
            _ => None,
        })
    }

    /// Run the scroll-reader content with a host-provided proxy.
    ///
    /// Returns `None` when the node carries no reader.
    pub fn read_scroll(&self, proxy: ScrollViewProxy) -> Option<OpaqueNode> {
        self.attachments.iter().find_map(|a| match a {
            Attachment::ScrollReader(reader) => Some(reader.read(proxy.clone())),
            _ => None,
        })
    }

    /// First node of the given kind in pre-order, including `self`.
    #[must_use]
    pub fn find(&self, kind: &str) -> Option<&OpaqueNode> {
        if self.kind == kind {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(kind))
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OpaqueNode::node_count).sum::<usize>()
    }

    /// Indented text rendering of the subtree.
    ///
    /// One line per node: kind, properties in insertion order, `@Type` when
    /// the node has a row identity, and `+attachment` markers.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        use std::fmt::Write as _;

        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(self.kind);
        for (key, value) in &self.props {
            let _ = write!(out, " {key}={value}");
        }
        if let Some(id) = &self.id {
            let name = id.type_name();
            let short = name.rsplit("::").next().unwrap_or(name);
            let _ = write!(out, " @{short}");
        }
        for attachment in &self.attachments {
            let _ = write!(out, " +{}", attachment.describe());
        }
        out.push('\n');
        for child in &self.children {
            child.write_outline(out, depth + 1);
        }
    }
}

impl fmt::Display for OpaqueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outline())
    }
}
