#![allow(dead_code)]

use std::collections::HashSet;

use ftui_bridge::selection::Identifiable;
use ftui_bridge::views::{ForEach, Text};
use ftui_bridge::{Host, OpaqueNode};

/// Host that keeps every presented root.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub roots: Vec<OpaqueNode>,
}

impl RecordingHost {
    pub fn last(&self) -> &OpaqueNode {
        self.roots.last().expect("nothing presented")
    }
}

impl Host for RecordingHost {
    fn present(&mut self, root: OpaqueNode) {
        self.roots.push(root);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Contact {
    pub id: u64,
    pub name: &'static str,
}

impl Identifiable for Contact {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

pub fn contacts() -> Vec<Contact> {
    vec![
        Contact { id: 10, name: "Ada" },
        Contact { id: 20, name: "Grace" },
        Contact { id: 30, name: "Linus" },
    ]
}

pub fn contact_rows(data: Vec<Contact>) -> ForEach<Contact> {
    ForEach::identifiable(data, |c: &Contact| Text::new(c.name))
}

pub fn set_of(items: impl IntoIterator<Item = Contact>) -> HashSet<Contact> {
    items.into_iter().collect()
}
