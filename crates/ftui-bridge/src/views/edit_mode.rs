#![forbid(unsafe_code)]

//! Edit mode.

use crate::binding::Binding;
use crate::bridge::Bridge;
use crate::modifier::{BridgeExt, Modified};
use crate::node::{Attachment, OpaqueNode};
use crate::projection::project_value;
use crate::token::IdentityToken;

/// Label of the binding attached by [`EditModeModifiers::edit_mode`].
pub const EDIT_MODE_LABEL: &str = "edit-mode";

/// Whether the user may edit the content of a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    #[default]
    Inactive,
    Transient,
    Active,
}

impl EditMode {
    pub const ALL: [Self; 3] = [Self::Inactive, Self::Transient, Self::Active];

    #[must_use]
    pub const fn is_editing(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Edit-mode modifiers, available on every view.
pub trait EditModeModifiers: BridgeExt {
    /// Share `mode` with the host, which may toggle it.
    ///
    /// The mode always has a value: tokens the host cannot resolve leave it
    /// unchanged.
    fn edit_mode(self, mode: Binding<EditMode>) -> Modified<Self, impl Fn(OpaqueNode) -> OpaqueNode> {
        let projected = project_value(mode, |m: &EditMode| IdentityToken::wrap(*m), |token| {
            EditMode::ALL
                .into_iter()
                .find(|m| IdentityToken::wrap(*m) == *token)
        })
        .with_label(EDIT_MODE_LABEL);
        self.modifier(move |node| {
            OpaqueNode::wrapping(EDIT_MODE_LABEL, node)
                .with_attachment(Attachment::Binding(projected.clone()))
        })
    }
}

impl<V: Bridge> EditModeModifiers for V {}
