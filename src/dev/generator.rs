// src/dev/generator.rs
// Seeded random automata for property sweeps.

use rand::Rng;

use crate::nfa::{Nfa, StateId};

/// Labels that tend to break naive formats: delimiters of the dump itself,
/// whitespace, quotes, the sentinel byte and a non-ASCII letter.
pub const NASTY_LABELS: &[char] = &[
    'a', 'b', 'z', '0', ' ', '\t', '\n', '\r', '"', '\'', '-', '>', ':', ',', '[', ']', '(', ')',
    '\u{1}', '\\', 'é', '🔥',
];

#[derive(Debug, Clone)]
pub struct NfaShape {
    pub states: usize,
    /// Probability that a state is accepting.
    pub accept_ratio: f64,
    /// Upper bound on outgoing edges per state.
    pub max_out_degree: usize,
    pub alphabet: Vec<char>,
}

impl Default for NfaShape {
    fn default() -> Self {
        Self {
            states: 16,
            accept_ratio: 0.3,
            max_out_degree: 3,
            alphabet: NASTY_LABELS.to_vec(),
        }
    }
}

/// Builds a random automaton. The start state is a random state (not always
/// index 0) so the START-precedence rules get exercised.
pub fn gen_random_nfa<R: Rng + ?Sized>(rng: &mut R, shape: &NfaShape) -> Nfa {
    let n = shape.states.max(1);
    let mut nfa = Nfa::new(rng.random_bool(shape.accept_ratio));
    for _ in 1..n {
        if nfa.add_state(rng.random_bool(shape.accept_ratio)).is_err() {
            break;
        }
    }
    let n = nfa.state_count();

    let start = StateId::new(rng.random_range(0..n as u32));
    // `start` was drawn from the allocated range.
    let _ = nfa.set_start(start);

    if shape.alphabet.is_empty() {
        return nfa;
    }
    for from in 0..n as u32 {
        let degree = rng.random_range(0..=shape.max_out_degree);
        for _ in 0..degree {
            let label = shape.alphabet[rng.random_range(0..shape.alphabet.len())];
            let to = rng.random_range(0..n as u32);
            let _ = nfa.add_transition(StateId::new(from), label, StateId::new(to));
        }
    }
    nfa
}
