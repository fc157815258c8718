#![forbid(unsafe_code)]

//! Capability fallback.
//!
//! [`bridge_or_fallback`] is the entry point for bridging any view. A view
//! whose type is flagged [`Capability::Unsupported`] is never asked to bridge
//! itself; the canonical empty node takes its place, whole. There is no
//! partial bridging, so the host never sees a half-built subtree.
//!
//! Substitutions are reported to the active
//! [`DiagnosticsScope`](crate::diagnostics::DiagnosticsScope), if any, and as
//! a `debug` event on the `ftui_bridge::fallback` target. Neither is visible
//! to the host.

use crate::bridge::Bridge;
use crate::diagnostics;
use crate::node::OpaqueNode;

/// Outcome of one bridging attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FallbackRecord {
    /// Kind tag of the view that was bridged.
    pub kind: &'static str,
    /// Whether the empty node was substituted.
    pub substituted: bool,
}

/// Bridge `view`, substituting the empty node for unsupported kinds.
pub fn bridge_or_fallback<V: Bridge>(view: &V) -> OpaqueNode {
    bridge_with_record(view).0
}

/// Like [`bridge_or_fallback`], also returning the record for this attempt.
pub fn bridge_with_record<V: Bridge>(view: &V) -> (OpaqueNode, FallbackRecord) {
    let kind = view.kind();

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("bridge", kind).entered();

    let record = FallbackRecord {
        kind,
        substituted: !view.capability().is_supported(),
    };
    diagnostics::record_attempt(record);

    if record.substituted {
        tracing::debug!(target: "ftui_bridge::fallback", kind, "substituting empty node");
        (OpaqueNode::empty(), record)
    } else {
        (view.bridge(), record)
    }
}
