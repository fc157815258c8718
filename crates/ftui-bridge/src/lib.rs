#![forbid(unsafe_code)]

//! Bridging FrankenTUI view trees to an opaque host runtime.
//!
//! A view tree on the source side is built from strongly-typed, generic
//! values. The host runtime on the far side of the bridge knows none of those
//! types: it accepts [`OpaqueNode`]s and nothing else. This crate moves
//! structure and *mutable* state across that divide:
//!
//! - [`IdentityToken`]: type-erased, hashable identity for any `Eq + Hash`
//!   value.
//! - [`Bridge`]: the one operation every bridgeable view exposes,
//!   `bridge() -> OpaqueNode`, evaluated bottom-up.
//! - [`Binding`] and the [`projection`] functions: a typed read/write pair
//!   re-exposed as a read/write pair over tokens.
//! - [`SelectionMapping`]: single and multi-selection over an arbitrary
//!   element type, resolved against a snapshot taken at projection time.
//! - [`Modified`]: deferred modifiers, applied once to the bridged target.
//! - [`bridge_or_fallback`]: capability fallback that substitutes the empty
//!   node for view kinds the host cannot represent yet.
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous. Bridging is re-run whenever
//! the host needs a fresh tree; nothing is cached between runs. Application
//! state stays with the caller (see [`State`]); the bridge only reads and
//! writes it through accessor closures while a host callback is running.
//!
//! # Failure Modes
//!
//! Bridging has no error path. Stale tokens resolve to "nothing selected",
//! unsupported kinds become empty nodes, and colliding identities resolve to
//! the first element in snapshot order. [`DiagnosticsScope`] makes the first
//! two observable to tests and tooling.

pub mod binding;
pub mod bridge;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fallback;
pub mod host;
pub mod modifier;
pub mod node;
pub mod projection;
pub mod proxy;
pub mod selection;
pub mod state;
pub mod token;
pub mod views;

pub use binding::Binding;
pub use bridge::{AnyView, Bridge, Capability, bridge_children};
pub use config::{BridgeConfig, DiagnosticsConfig};
pub use diagnostics::{DiagnosticsScope, StaleTokenRecord};
pub use error::ConfigError;
pub use fallback::{FallbackRecord, bridge_or_fallback, bridge_with_record};
pub use host::{Host, present};
pub use modifier::{BridgeExt, Modified};
pub use node::{Attachment, EMPTY_KIND, OpaqueNode, Prop};
pub use projection::{
    BoundaryBinding, BoundarySetBinding, project, project_value, project_with,
};
pub use proxy::{ScrollReader, ScrollViewProxy, UnitPoint};
pub use selection::{Identifiable, SelectionMapping};
pub use state::State;
pub use token::{IdentityToken, TokenSet};
