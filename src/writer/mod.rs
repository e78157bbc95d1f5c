// src/writer/mod.rs
//
// Text dump of an NFA:
//
//   Nfa (id:<nfa id>)
//       All States (with hashcodes): 
//           <NAME> (obj id: <state index>)      sorted by the whole line
//       Start State:   START
//       Accept States: [ACCEPT0, ACCEPT1]       sorted by name
//       Transitions:
//           <NAME>:                             only states with outgoing edges
//               \x01<label>\x01 -> <NAME>
//
// Names are START, ACCEPT<k> or STATE<k>. Sorting is lexicographic on the
// rendered text, so ACCEPT10 comes before ACCEPT2; existing readers expect it.

pub mod adjacency;
pub mod names;
pub mod persist;

use std::fmt::Write as _;

pub use adjacency::Adjacency;
pub use names::{DisplayName, NameTable};
pub use persist::{DUMP_EXTENSION, default_dump_path, try_write_nfa_file, write_nfa_file};

use crate::{
    error::{NfaTextError, Result, SnapshotPart},
    nfa::{Nfa, NfaAccess, Snapshot, StateId},
};

/// Brackets every transition label so that any character, delimiters
/// included, can be read back.
pub const SENTINEL: char = '\u{1}';
pub const ARROW: &str = " -> ";

const INDENT_SECTION: &str = "    ";
const INDENT_ENTRY: &str = "        ";
const INDENT_EDGE: &str = "            ";

/// Renders `nfa` in the text dump format.
pub fn write_nfa<N: NfaAccess + ?Sized>(nfa: &N) -> Result<String> {
    let snap = Snapshot::capture(nfa)?;
    log::debug!(
        "[writer] nfa {}: {} states, {} accepting, {} transitions",
        snap.id,
        snap.states.len(),
        snap.accepting.len(),
        snap.transitions.len()
    );

    let names = NameTable::assign(&snap.states, snap.start, &snap.accepting);
    let graph = Adjacency::build(&snap.states, &snap.transitions);
    render(&snap, &names, &graph)
}

fn name_of(names: &NameTable, state: StateId, part: SnapshotPart) -> Result<DisplayName> {
    names.get(state).ok_or_else(|| {
        NfaTextError::missing(part, format!("state {} has no display name", state.index()))
    })
}

fn render(snap: &Snapshot, names: &NameTable, graph: &Adjacency<'_>) -> Result<String> {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Nfa (id:{})", snap.id);

    let mut state_lines: Vec<String> = snap
        .states
        .iter()
        .map(|&s| {
            name_of(names, s, SnapshotPart::States)
                .map(|name| format!("{INDENT_ENTRY}{name} (obj id: {})\n", s.index()))
        })
        .collect::<Result<_>>()?;
    state_lines.sort();
    let _ = writeln!(out, "{INDENT_SECTION}All States (with hashcodes): ");
    out.extend(state_lines);

    let start = name_of(names, snap.start, SnapshotPart::StartState)?;
    let _ = writeln!(out, "{INDENT_SECTION}Start State:   {start}");

    let mut accept_names: Vec<String> = snap
        .states
        .iter()
        .filter(|s| snap.accepting.contains(*s))
        .map(|&s| name_of(names, s, SnapshotPart::AcceptStates).map(|n| n.to_string()))
        .collect::<Result<_>>()?;
    accept_names.sort();
    let _ = writeln!(
        out,
        "{INDENT_SECTION}Accept States: [{}]",
        accept_names.join(", ")
    );

    let _ = writeln!(out, "{INDENT_SECTION}Transitions:");
    for &s in &snap.states {
        let edges = graph.outgoing(s);
        if edges.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "{INDENT_ENTRY}{}:",
            name_of(names, s, SnapshotPart::Transitions)?
        );
        for edge in edges {
            let dest = name_of(names, edge.to, SnapshotPart::Transitions)?;
            let _ = writeln!(
                out,
                "{INDENT_EDGE}{SENTINEL}{}{SENTINEL}{ARROW}{dest}",
                edge.label
            );
        }
    }

    Ok(out)
}

impl std::fmt::Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = write_nfa(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}
