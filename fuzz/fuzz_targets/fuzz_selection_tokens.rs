#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use ftui_bridge::{IdentityToken, SelectionMapping, State, TokenSet};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Select(u8),
    SelectForeign(u16),
    Clear,
    RoundTrip,
    SelectMany(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    ids: Vec<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mapping = SelectionMapping::new(input.ids.iter().copied().take(256), |id| *id);
    let single = State::new(None::<u8>);
    let many = State::new(HashSet::<u8>::new());
    let projected = mapping.single(single.binding());
    let projected_many = mapping.multi(many.binding());

    for op in input.ops.into_iter().take(64) {
        match op {
            Op::Select(id) => {
                projected.set(Some(IdentityToken::wrap(id)));
                let expected = mapping.snapshot().contains(&id).then_some(id);
                assert_eq!(single.get(), expected);
            }
            Op::SelectForeign(id) => {
                projected.set(Some(IdentityToken::wrap(id)));
                assert_eq!(single.get(), None);
            }
            Op::Clear => {
                projected.set(None);
                assert_eq!(single.get(), None);
            }
            Op::RoundTrip => {
                let before = single.get();
                projected.set(projected.get());
                assert_eq!(single.get(), before);
            }
            Op::SelectMany(ids) => {
                let tokens: TokenSet = ids.iter().copied().map(IdentityToken::wrap).collect();
                projected_many.set(tokens);
                let selected = many.get();
                assert!(selected.iter().all(|id| mapping.snapshot().contains(id)));
                assert!(selected.len() <= ids.len());
            }
        }
    }
});
