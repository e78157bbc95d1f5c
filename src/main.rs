// src/main.rs
use nfa_text::{Nfa, write_nfa};

fn main() -> nfa_text::Result<()> {
    // A tiny automaton for (ab)*"|a: a loop, a quote label and a sink.
    let mut nfa = Nfa::new(false);
    let s = nfa.start();
    let after_a = nfa.add_state(false)?;
    let looped = nfa.add_state(true)?;
    let quoted = nfa.add_state(true)?;
    let lone_a = nfa.add_state(true)?;

    nfa.add_transition(s, 'a', after_a)?;
    nfa.add_transition(after_a, 'b', looped)?;
    nfa.add_transition(looped, 'a', after_a)?;
    nfa.add_transition(looped, '"', quoted)?;
    nfa.add_transition(s, '"', quoted)?;
    nfa.add_transition(s, 'a', lone_a)?;

    // Show the sentinel bytes so the output stays readable in a terminal.
    print!("{}", write_nfa(&nfa)?.replace('\u{1}', "\u{2401}"));
    Ok(())
}
