#![forbid(unsafe_code)]

//! Scroll proxies.
//!
//! The host owns scrolling. Content that wants to scroll to a row receives a
//! [`ScrollViewProxy`] wrapping a host-provided request function and calls
//! [`ScrollViewProxy::scroll_to`]. The request is fire-and-forget: the proxy
//! never learns whether the row exists.

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::node::OpaqueNode;
use crate::token::IdentityToken;

/// A point in unit coordinates of a view's bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const CENTER: Self = Self::new(0.5, 0.5);
    pub const LEADING: Self = Self::new(0.0, 0.5);
    pub const TRAILING: Self = Self::new(1.0, 0.5);
    pub const TOP: Self = Self::new(0.5, 0.0);
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    pub const TOP_LEADING: Self = Self::new(0.0, 0.0);
    pub const TOP_TRAILING: Self = Self::new(1.0, 0.0);
    pub const BOTTOM_LEADING: Self = Self::new(0.0, 1.0);
    pub const BOTTOM_TRAILING: Self = Self::new(1.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

type ScrollRequest = dyn Fn(IdentityToken, Option<UnitPoint>);

/// Handle for asking the host to scroll.
#[derive(Clone)]
pub struct ScrollViewProxy {
    request: Rc<ScrollRequest>,
}

impl ScrollViewProxy {
    /// Wrap the host's scroll request function.
    pub fn new(request: impl Fn(IdentityToken, Option<UnitPoint>) + 'static) -> Self {
        Self {
            request: Rc::new(request),
        }
    }

    /// Ask the host to bring the row identified by `id` into view.
    pub fn scroll_to<H: Eq + Hash + 'static>(&self, id: H, anchor: Option<UnitPoint>) {
        (self.request)(IdentityToken::wrap(id), anchor);
    }
}

impl fmt::Debug for ScrollViewProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollViewProxy").finish_non_exhaustive()
    }
}

/// Content that is built once the host supplies a proxy.
#[derive(Clone)]
pub struct ScrollReader {
    content: Rc<dyn Fn(ScrollViewProxy) -> OpaqueNode>,
}

impl ScrollReader {
    pub fn new(content: impl Fn(ScrollViewProxy) -> OpaqueNode + 'static) -> Self {
        Self {
            content: Rc::new(content),
        }
    }

    /// Build the content with the given proxy.
    #[must_use]
    pub fn read(&self, proxy: ScrollViewProxy) -> OpaqueNode {
        (self.content)(proxy)
    }
}

impl fmt::Debug for ScrollReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollReader").finish_non_exhaustive()
    }
}
