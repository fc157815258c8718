//! End-to-end selection through a presented list.
//!
//! The host only ever touches tokens it finds on the presented tree: row ids
//! and the selection attachment.

mod common;

use std::collections::HashSet;

use common::{Contact, RecordingHost, contact_rows, contacts, set_of};
use ftui_bridge::views::List;
use ftui_bridge::{
    DiagnosticsConfig, DiagnosticsScope, IdentityToken, SelectionMapping, State, TokenSet, present,
};

fn row_tokens(list: &ftui_bridge::OpaqueNode) -> Vec<IdentityToken> {
    list.find("for-each")
        .expect("rows")
        .children()
        .iter()
        .filter_map(|row| row.id().cloned())
        .collect()
}

#[test]
fn host_selects_second_row() {
    let selected = State::new(None);
    let mut host = RecordingHost::default();
    present(
        &List::new(contact_rows(contacts())).selecting(selected.binding()),
        &mut host,
    );

    let root = host.last();
    let tokens = row_tokens(root);
    let selection = root.single_selection().expect("selection");
    assert_eq!(selection.get(), None);

    selection.set(Some(tokens[1].clone()));
    assert_eq!(selected.get(), Some(contacts()[1].clone()));
    assert_eq!(selection.get(), Some(tokens[1].clone()));
}

#[test]
fn write_of_read_is_noop() {
    let selected = State::new(Some(contacts()[2].clone()));
    let mut host = RecordingHost::default();
    present(
        &List::new(contact_rows(contacts())).selecting(selected.binding()),
        &mut host,
    );
    let selection = host.last().single_selection().expect("selection");
    selection.set(selection.get());
    assert_eq!(selected.version(), 0);
}

#[test]
fn token_from_removed_row_clears_selection() {
    let selected = State::new(None);
    let mut host = RecordingHost::default();

    present(
        &List::new(contact_rows(contacts())).selecting(selected.binding()),
        &mut host,
    );
    let stale = row_tokens(host.last())[0].clone();

    // Ada is deleted; the host re-presents and then replays an old tap.
    let remaining: Vec<Contact> = contacts().into_iter().skip(1).collect();
    present(
        &List::new(contact_rows(remaining)).selecting(selected.binding()),
        &mut host,
    );
    let scope = DiagnosticsScope::begin(DiagnosticsConfig::default());
    host.last()
        .single_selection()
        .expect("selection")
        .set(Some(stale));

    assert_eq!(selected.get(), None);
    assert_eq!(scope.stale_token_count(), 1);
    assert!(scope.stale_tokens()[0].token_type.ends_with("u64"));
}

#[test]
fn multi_selection_keeps_resolved_subset() {
    let selected = State::new(HashSet::new());
    let mut host = RecordingHost::default();
    present(
        &List::new(contact_rows(contacts())).selecting_many(selected.binding()),
        &mut host,
    );
    let root = host.last();
    let tokens = row_tokens(root);
    let selection = root.multi_selection().expect("selection");

    let request: TokenSet = [tokens[0].clone(), IdentityToken::wrap(999u64)]
        .into_iter()
        .collect();
    selection.set(request);
    assert_eq!(selected.get(), set_of([contacts()[0].clone()]));

    let all: TokenSet = tokens.iter().cloned().collect();
    selection.set(all.clone());
    assert_eq!(selected.get(), set_of(contacts()));
    assert_eq!(selection.get(), all);
}

#[test]
fn colliding_ids_resolve_to_first_row_every_time() {
    let data = vec![
        Contact { id: 1, name: "first" },
        Contact { id: 1, name: "second" },
        Contact { id: 2, name: "third" },
    ];
    let mapping = SelectionMapping::identifiable(data);
    let token = IdentityToken::wrap(1u64);
    let picks: Vec<_> = (0..5)
        .map(|_| mapping.from_token(&token).map(|c| c.name))
        .collect();
    assert!(picks.iter().all(|p| *p == Some("first")));
}

#[test]
fn rows_and_selection_share_tokens() {
    let selected = State::new(Some(contacts()[0].clone()));
    let mut host = RecordingHost::default();
    present(
        &List::new(contact_rows(contacts())).selecting(selected.binding()),
        &mut host,
    );
    let root = host.last();
    let selection = root.single_selection().expect("selection");
    assert_eq!(selection.get().as_ref(), row_tokens(root).first());
}
