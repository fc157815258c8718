#![forbid(unsafe_code)]

//! The far side of the bridge.
//!
//! A [`Host`] is whatever runtime consumes the bridged tree. It receives one
//! root [`OpaqueNode`] per presentation and interacts with the source side
//! only through the attachments on that tree.

use crate::bridge::Bridge;
use crate::fallback::{FallbackRecord, bridge_with_record};
use crate::node::OpaqueNode;

/// A runtime that accepts bridged trees.
pub trait Host {
    /// Take ownership of a freshly bridged root.
    fn present(&mut self, root: OpaqueNode);
}

impl<F: FnMut(OpaqueNode)> Host for F {
    fn present(&mut self, root: OpaqueNode) {
        self(root);
    }
}

/// Bridge `view` and hand the result to `host`.
///
/// Returns the fallback record of the root view.
pub fn present<V: Bridge, H: Host + ?Sized>(view: &V, host: &mut H) -> FallbackRecord {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("present", kind = view.kind()).entered();

    let (root, record) = bridge_with_record(view);
    host.present(root);
    record
}
