#![forbid(unsafe_code)]

//! Type-erased identity tokens.
//!
//! An [`IdentityToken`] wraps any `Eq + Hash` value and exposes equality and
//! hashing without the static type. Tokens are the only form of identity that
//! crosses the bridge: the host runtime receives them from getters and hands
//! them back to setters, but it can neither construct nor open them.
//!
//! # Invariants
//!
//! 1. `wrap(a) == wrap(b)` iff `a == b` for values of the same type.
//! 2. Tokens wrapping values of different types never compare equal, even
//!    when the values "look" the same (`1u32` vs `1u64`).
//! 3. Equal tokens hash equally.
//! 4. Wrapping a token yields that token (no nesting).
//!
//! There is deliberately no way to get the wrapped value back out of a token.
//! Recovery goes through a caller-owned lookup such as
//! [`SelectionMapping`](crate::selection::SelectionMapping).

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Set of tokens as exchanged with the host for multi-selection.
pub type TokenSet = ahash::AHashSet<IdentityToken>;

/// Fixed seeds so `IdentityToken::hash_value` is stable within a process run.
const HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

trait ErasedKey {
    fn eq_key(&self, other: &dyn ErasedKey) -> bool;
    fn hash_key(&self, state: &mut dyn Hasher);
    fn key_type(&self) -> TypeId;
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

impl<H: Eq + Hash + 'static> ErasedKey for H {
    fn eq_key(&self, other: &dyn ErasedKey) -> bool {
        other
            .as_any()
            .downcast_ref::<H>()
            .is_some_and(|other| self == other)
    }

    fn hash_key(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }

    fn key_type(&self) -> TypeId {
        TypeId::of::<H>()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<H>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Boundary-safe identity for any hashable value.
///
/// Cloning is a reference-count bump; the wrapped value lives as long as any
/// clone of the token.
#[derive(Clone)]
pub struct IdentityToken {
    key: Rc<dyn ErasedKey>,
}

impl IdentityToken {
    /// Wrap a value. Total: every `Eq + Hash` value can be wrapped.
    ///
    /// Wrapping an `IdentityToken` returns it unchanged, so a value that has
    /// already been erased keeps comparing equal to its first wrapping.
    #[must_use]
    pub fn wrap<H: Eq + Hash + 'static>(value: H) -> Self {
        if let Some(token) = (&value as &dyn Any).downcast_ref::<IdentityToken>() {
            return token.clone();
        }
        Self {
            key: Rc::new(value),
        }
    }

    /// Name of the wrapped value's type, for diagnostics only.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.key.type_name()
    }

    /// Whether the wrapped value has static type `H`.
    #[must_use]
    pub fn wraps<H: 'static>(&self) -> bool {
        self.key.key_type() == TypeId::of::<H>()
    }

    /// Hash of the token as a plain integer.
    ///
    /// Consistent with `Eq`: equal tokens produce equal values. The seed is
    /// fixed, so the value is stable for the lifetime of the process.
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        let [k0, k1, k2, k3] = HASH_SEEDS;
        ahash::RandomState::with_seeds(k0, k1, k2, k3).hash_one(self)
    }
}

impl PartialEq for IdentityToken {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.key, &other.key) || self.key.eq_key(&*other.key)
    }
}

impl Eq for IdentityToken {}

impl Hash for IdentityToken {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.key.key_type().hash(state);
        self.key.hash_key(state);
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityToken({}#{:016x})", self.type_name(), self.hash_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, PartialEq, Eq, Hash)]
    struct RowId(u32);

    #[test]
    fn equal_values_give_equal_tokens() {
        assert_eq!(IdentityToken::wrap(7u32), IdentityToken::wrap(7u32));
        assert_eq!(
            IdentityToken::wrap(String::from("row")),
            IdentityToken::wrap(String::from("row"))
        );
    }

    #[test]
    fn different_values_give_different_tokens() {
        assert_ne!(IdentityToken::wrap(7u32), IdentityToken::wrap(8u32));
        assert_ne!(IdentityToken::wrap("a"), IdentityToken::wrap("b"));
    }

    #[test]
    fn no_coercion_across_types() {
        assert_ne!(IdentityToken::wrap(1u32), IdentityToken::wrap(1u64));
        assert_ne!(IdentityToken::wrap(1u32), IdentityToken::wrap(RowId(1)));
        assert_ne!(IdentityToken::wrap("x"), IdentityToken::wrap(String::from("x")));
    }

    #[test]
    fn equal_tokens_hash_equally() {
        let a = IdentityToken::wrap(RowId(42));
        let b = IdentityToken::wrap(RowId(42));
        assert_eq!(a.hash_value(), b.hash_value());

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn hash_value_is_repeatable() {
        let token = IdentityToken::wrap((3u8, "three"));
        assert_eq!(token.hash_value(), token.hash_value());
        assert_eq!(token.hash_value(), token.clone().hash_value());
    }

    #[test]
    fn wrapping_a_token_does_not_nest() {
        let inner = IdentityToken::wrap(5i32);
        let outer = IdentityToken::wrap(inner.clone());
        assert_eq!(inner, outer);
        assert!(outer.wraps::<i32>());
    }

    #[test]
    fn wraps_reports_static_type() {
        let token = IdentityToken::wrap(RowId(1));
        assert!(token.wraps::<RowId>());
        assert!(!token.wraps::<u32>());
        assert!(token.type_name().ends_with("RowId"));
    }

    #[test]
    fn token_set_dedupes() {
        let set: TokenSet = [1u8, 2, 2, 3]
            .into_iter()
            .map(IdentityToken::wrap)
            .collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&IdentityToken::wrap(2u8)));
    }

    #[test]
    fn debug_names_type() {
        let debug = format!("{:?}", IdentityToken::wrap(9u16));
        assert!(debug.starts_with("IdentityToken(u16#"));
    }
}
