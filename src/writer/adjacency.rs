// src/writer/adjacency.rs
use hashbrown::HashMap;

use crate::nfa::{StateId, Transition};

/// Outgoing edges per source state, projected from a flat transition list.
#[derive(Debug, Default)]
pub struct Adjacency<'a> {
    out: HashMap<StateId, Vec<&'a Transition>>,
}

impl<'a> Adjacency<'a> {
    /// Every state in `states` gets an entry, empty if it has no outgoing
    /// edges. Edge order within a source follows `transitions`.
    pub fn build(states: &[StateId], transitions: &'a [Transition]) -> Self {
        let mut out: HashMap<StateId, Vec<&'a Transition>> =
            states.iter().map(|s| (*s, Vec::new())).collect();
        for t in transitions {
            out.entry(t.from).or_default().push(t);
        }
        Self { out }
    }

    pub fn outgoing(&self, state: StateId) -> &[&'a Transition] {
        self.out.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }
}
