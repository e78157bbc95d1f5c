// src/nfa/access.rs
use hashbrown::HashSet;

use super::model::{StateId, Transition};
use crate::error::{NfaTextError, Result, SnapshotPart};

/// Read-only view of an automaton: everything the text writer needs and
/// nothing more. Each part is optional so an automaton that is only partly
/// built, or that wraps foreign data, can report what it lacks instead of
/// inventing it.
pub trait NfaAccess {
    /// Identifier of this automaton object, used to tell dumps apart.
    fn nfa_id(&self) -> u64;
    fn states(&self) -> Option<&[StateId]>;
    fn start_state(&self) -> Option<StateId>;
    fn accept_states(&self) -> Option<&[StateId]>;
    fn transitions(&self) -> Option<&[Transition]>;
}

/// Consistent, validated copy of the four parts of an automaton.
#[derive(Debug)]
pub struct Snapshot {
    pub id: u64,
    /// States in accessor order with repeats removed.
    pub states: Vec<StateId>,
    pub start: StateId,
    pub accepting: HashSet<StateId>,
    /// Transitions in accessor order with repeats removed.
    pub transitions: Vec<Transition>,
}

impl Snapshot {
    pub fn capture<N: NfaAccess + ?Sized>(nfa: &N) -> Result<Self> {
        let raw_states = nfa
            .states()
            .ok_or_else(|| NfaTextError::missing(SnapshotPart::States, "accessor returned nothing"))?;
        let start = nfa.start_state().ok_or_else(|| {
            NfaTextError::missing(SnapshotPart::StartState, "accessor returned nothing")
        })?;
        let raw_accepting = nfa.accept_states().ok_or_else(|| {
            NfaTextError::missing(SnapshotPart::AcceptStates, "accessor returned nothing")
        })?;
        let transitions = nfa.transitions().ok_or_else(|| {
            NfaTextError::missing(SnapshotPart::Transitions, "accessor returned nothing")
        })?;

        let mut known = HashSet::with_capacity(raw_states.len());
        let states: Vec<StateId> = raw_states
            .iter()
            .copied()
            .filter(|s| known.insert(*s))
            .collect();

        let unknown = |part: SnapshotPart, s: StateId| {
            NfaTextError::missing(
                part,
                format!("state {} is not in the state set", s.index()),
            )
        };

        if !known.contains(&start) {
            return Err(unknown(SnapshotPart::StartState, start));
        }

        let mut accepting = HashSet::with_capacity(raw_accepting.len());
        for &s in raw_accepting {
            if !known.contains(&s) {
                return Err(unknown(SnapshotPart::AcceptStates, s));
            }
            accepting.insert(s);
        }

        let mut seen_edges = HashSet::with_capacity(transitions.len());
        let mut edges = Vec::with_capacity(transitions.len());
        for t in transitions {
            for s in [t.from, t.to] {
                if !known.contains(&s) {
                    return Err(unknown(SnapshotPart::Transitions, s));
                }
            }
            if seen_edges.insert(*t) {
                edges.push(*t);
            }
        }

        Ok(Self {
            id: nfa.nfa_id(),
            states,
            start,
            accepting,
            transitions: edges,
        })
    }
}
