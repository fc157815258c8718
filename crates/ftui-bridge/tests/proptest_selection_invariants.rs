//! Property-based invariant tests for selection mapping and projection.
//!
//! 1. Every snapshot token resolves to the first element with that identity.
//! 2. Tokens outside the snapshot never resolve.
//! 3. Writing back what was read leaves single selection unchanged.
//! 4. Multi-selection keeps exactly the resolvable subset.
//! 5. Bridging a list twice yields equal nodes.

use std::collections::HashSet;

use ftui_bridge::views::{ForEach, List, Text};
use ftui_bridge::{Bridge, IdentityToken, SelectionMapping, State, TokenSet};
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Row {
    id: u8,
    slot: usize,
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    proptest::collection::vec(0u8..24, 0..24).prop_map(|ids| {
        ids.into_iter()
            .enumerate()
            .map(|(slot, id)| Row { id, slot })
            .collect()
    })
}

fn mapping(rows: Vec<Row>) -> SelectionMapping<Row> {
    SelectionMapping::new(rows, |row| row.id)
}

proptest! {
    #[test]
    fn snapshot_tokens_resolve_to_first_match(rows in rows_strategy()) {
        let map = mapping(rows.clone());
        for (row, token) in rows.iter().zip(map.tokens()) {
            let resolved = map.from_token(token).expect("snapshot token resolves");
            let first = rows.iter().find(|r| r.id == row.id).expect("present");
            prop_assert_eq!(resolved, first);
        }
    }

    #[test]
    fn foreign_tokens_never_resolve(rows in rows_strategy(), id in 24u8..=255) {
        let map = mapping(rows);
        prop_assert!(map.from_token(&IdentityToken::wrap(id)).is_none());
        prop_assert!(map.from_token(&IdentityToken::wrap(u16::from(id))).is_none());
    }

    #[test]
    fn single_write_of_read_is_noop(rows in rows_strategy(), pick in any::<prop::sample::Index>()) {
        let map = mapping(rows.clone());
        let selected = (!rows.is_empty())
            .then(|| {
                let chosen = &rows[pick.index(rows.len())];
                rows.iter().find(|r| r.id == chosen.id).cloned()
            })
            .flatten();
        let state = State::new(selected.clone());
        let projected = map.single(state.binding());
        projected.set(projected.get());
        prop_assert_eq!(state.get(), selected);
    }

    #[test]
    fn multi_keeps_resolvable_subset(
        rows in rows_strategy(),
        requested in proptest::collection::vec(0u8..48, 0..16),
    ) {
        let map = mapping(rows.clone());
        let state = State::new(HashSet::new());
        let projected = map.multi(state.binding());
        let tokens: TokenSet = requested.iter().copied().map(IdentityToken::wrap).collect();
        projected.set(tokens);

        let expected: HashSet<Row> = requested
            .iter()
            .filter_map(|id| rows.iter().find(|r| r.id == *id).cloned())
            .collect();
        prop_assert_eq!(state.get(), expected);
    }

    #[test]
    fn list_bridging_is_deterministic(rows in rows_strategy()) {
        let selection = State::new(rows.first().cloned());
        let list = List::new(ForEach::new(rows, |row| row.id, |row: &Row| {
            Text::new(format!("{}:{}", row.id, row.slot))
        }))
        .selecting(selection.binding());
        prop_assert_eq!(list.bridge(), list.bridge());
    }
}
