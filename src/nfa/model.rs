// src/nfa/model.rs
use std::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashSet;

use super::access::NfaAccess;
use crate::error::{NfaTextError, Result};

static NEXT_NFA_ID: AtomicU64 = AtomicU64::new(1);

fn fresh_nfa_id() -> u64 {
    NEXT_NFA_ID.fetch_add(1, Ordering::Relaxed)
}

/// Id for the state allocated after `allocated` existing ones.
fn next_state_id(allocated: usize) -> Result<StateId> {
    u32::try_from(allocated)
        .map(StateId)
        .map_err(|_| NfaTextError::TooManyStates)
}

/// Opaque identity of a state: an index into the automaton that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// A labeled edge `from --label--> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: StateId,
    pub label: char,
    pub to: StateId,
}

impl Transition {
    pub fn new(from: StateId, label: char, to: StateId) -> Self {
        Self { from, label, to }
    }
}

/// Arena-backed NFA. States are allocated in order and never removed, so a
/// `StateId` handed out by one automaton stays valid for its lifetime.
#[derive(Debug)]
pub struct Nfa {
    id: u64,
    states: Vec<StateId>,
    start: StateId,
    accepting: Vec<StateId>,
    accepting_set: HashSet<StateId>,
    transitions: Vec<Transition>,
    edge_set: HashSet<Transition>,
}

impl Default for Nfa {
    fn default() -> Self {
        Nfa::new(false)
    }
}

impl Clone for Nfa {
    /// A clone is a distinct automaton and gets its own id.
    fn clone(&self) -> Self {
        Self {
            id: fresh_nfa_id(),
            states: self.states.clone(),
            start: self.start,
            accepting: self.accepting.clone(),
            accepting_set: self.accepting_set.clone(),
            transitions: self.transitions.clone(),
            edge_set: self.edge_set.clone(),
        }
    }
}

impl Nfa {
    /// Creates an automaton holding only its start state.
    pub fn new(start_accepting: bool) -> Self {
        let start = StateId(0);
        let mut nfa = Self {
            id: fresh_nfa_id(),
            states: vec![start],
            start,
            accepting: Vec::new(),
            accepting_set: HashSet::new(),
            transitions: Vec::new(),
            edge_set: HashSet::new(),
        };
        if start_accepting {
            nfa.mark_accepting(start);
        }
        nfa
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn contains(&self, state: StateId) -> bool {
        (state.0 as usize) < self.states.len()
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting_set.contains(&state)
    }

    pub fn get_final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accepting.iter().copied()
    }

    /// All transitions in insertion order.
    pub fn edges(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transitions_from(&self, state: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    /// Allocates a new state. Ids are `u32`, so an automaton holds at most
    /// `u32::MAX + 1` states; past that this returns `TooManyStates`.
    pub fn add_state(&mut self, accepting: bool) -> Result<StateId> {
        let id = next_state_id(self.states.len())?;
        self.states.push(id);
        if accepting {
            self.mark_accepting(id);
        }
        Ok(id)
    }

    /// Adds `from --label--> to`. Adding an edge that already exists is a no-op,
    /// the transition relation is a set.
    pub fn add_transition(&mut self, from: StateId, label: char, to: StateId) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        let edge = Transition::new(from, label, to);
        if self.edge_set.insert(edge) {
            self.transitions.push(edge);
        }
        Ok(())
    }

    pub fn set_start(&mut self, state: StateId) -> Result<()> {
        self.check(state)?;
        self.start = state;
        Ok(())
    }

    pub fn set_accepting(&mut self, state: StateId, accepting: bool) -> Result<()> {
        self.check(state)?;
        if accepting {
            self.mark_accepting(state);
        } else if self.accepting_set.remove(&state) {
            self.accepting.retain(|s| *s != state);
        }
        Ok(())
    }

    fn mark_accepting(&mut self, state: StateId) {
        if self.accepting_set.insert(state) {
            self.accepting.push(state);
        }
    }

    fn check(&self, state: StateId) -> Result<()> {
        if self.contains(state) {
            Ok(())
        } else {
            Err(NfaTextError::UnknownState(state.0))
        }
    }
}

impl NfaAccess for Nfa {
    fn nfa_id(&self) -> u64 {
        self.id
    }

    fn states(&self) -> Option<&[StateId]> {
        Some(&self.states)
    }

    fn start_state(&self) -> Option<StateId> {
        Some(self.start)
    }

    fn accept_states(&self) -> Option<&[StateId]> {
        Some(&self.accepting)
    }

    fn transitions(&self) -> Option<&[Transition]> {
        Some(&self.transitions)
    }
}
