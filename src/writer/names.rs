// src/writer/names.rs
use std::fmt;

use hashbrown::{HashMap, HashSet};

use crate::nfa::StateId;

/// Human-readable stand-in for a state in a dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayName {
    Start,
    Accept(usize),
    State(usize),
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayName::Start => f.write_str("START"),
            DisplayName::Accept(k) => write!(f, "ACCEPT{k}"),
            DisplayName::State(k) => write!(f, "STATE{k}"),
        }
    }
}

/// Display names for one dump. Built fresh per call, never cached.
#[derive(Debug, Default)]
pub struct NameTable {
    names: HashMap<StateId, DisplayName>,
}

impl NameTable {
    /// Names `states` in the order given. The start state is always `START`
    /// and does not take a slot from either counter.
    pub fn assign(states: &[StateId], start: StateId, accepting: &HashSet<StateId>) -> Self {
        let mut names = HashMap::with_capacity(states.len());
        let mut accept_counter = 0usize;
        let mut state_counter = 0usize;

        for &s in states {
            let name = if s == start {
                DisplayName::Start
            } else if accepting.contains(&s) {
                accept_counter += 1;
                DisplayName::Accept(accept_counter - 1)
            } else {
                state_counter += 1;
                DisplayName::State(state_counter - 1)
            };
            names.insert(s, name);
        }

        log::debug!(
            "[names] {} states: {accept_counter} ACCEPT, {state_counter} STATE",
            names.len()
        );
        Self { names }
    }

    pub fn get(&self, state: StateId) -> Option<DisplayName> {
        self.names.get(&state).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u32) -> Vec<StateId> {
        (0..n).map(StateId::new).collect()
    }

    #[test]
    fn accepting_start_is_still_start() {
        let states = ids(3);
        let accepting: HashSet<_> = states.iter().copied().collect();
        let table = NameTable::assign(&states, states[1], &accepting);
        assert_eq!(table.get(states[1]), Some(DisplayName::Start));
        assert_eq!(table.get(states[0]), Some(DisplayName::Accept(0)));
        assert_eq!(table.get(states[2]), Some(DisplayName::Accept(1)));
    }

    #[test]
    fn counters_are_independent() {
        // start S, accepting {A, B}, plain {C}, interleaved in iteration order
        let states = ids(4);
        let (s, a, c, b) = (states[0], states[1], states[2], states[3]);
        let accepting = HashSet::from([a, b]);
        let table = NameTable::assign(&states, s, &accepting);
        assert_eq!(table.get(a), Some(DisplayName::Accept(0)));
        assert_eq!(table.get(c), Some(DisplayName::State(0)));
        assert_eq!(table.get(b), Some(DisplayName::Accept(1)));
    }

    #[test]
    fn rendered_names() {
        assert_eq!(DisplayName::Start.to_string(), "START");
        assert_eq!(DisplayName::Accept(10).to_string(), "ACCEPT10");
        assert_eq!(DisplayName::State(3).to_string(), "STATE3");
    }

    #[test]
    fn unknown_states_have_no_name() {
        let states = ids(2);
        let table = NameTable::assign(&states, states[0], &HashSet::new());
        assert_eq!(table.get(states[1]), Some(DisplayName::State(0)));
        assert_eq!(table.get(StateId::new(9)), None);
    }
}
