// src/nfa/disk.rs
use std::io::{BufWriter, Write};

use serde::{Deserialize, Serialize};

use super::model::{Nfa, StateId};
use crate::error::{NfaTextError, Result};

// -------------------- JSON description of an automaton --------------------
//
// {
//   "states":      [{ "accepting": false }, { "accepting": true }, ...],
//   "start":       0,
//   "transitions": [{ "from": 0, "label": "a", "to": 1 }, ...]
// }
//
// State ids are positions in `states`.

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
struct StateDisk {
    #[serde(default)]
    accepting: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
struct TransitionDisk {
    from: u32,
    label: char,
    to: u32,
}

#[derive(Serialize, Deserialize, Debug)]
struct NfaDisk {
    states: Vec<StateDisk>,
    start: u32,
    #[serde(default)]
    transitions: Vec<TransitionDisk>,
}

impl From<&Nfa> for NfaDisk {
    fn from(n: &Nfa) -> Self {
        let states = (0..n.state_count() as u32)
            .map(|i| StateDisk {
                accepting: n.is_accepting(StateId::new(i)),
            })
            .collect();
        let transitions = n
            .edges()
            .iter()
            .map(|t| TransitionDisk {
                from: t.from.index(),
                label: t.label,
                to: t.to.index(),
            })
            .collect();
        Self {
            states,
            start: n.start().index(),
            transitions,
        }
    }
}

impl NfaDisk {
    fn into_nfa(self) -> Result<Nfa> {
        let Some((first, rest)) = self.states.split_first() else {
            return Err(NfaTextError::InvalidJson(
                "an automaton needs at least one state".into(),
            ));
        };

        let invalid = |e: NfaTextError| NfaTextError::InvalidJson(e.to_string());
        let mut nfa = Nfa::new(first.accepting);
        for s in rest {
            nfa.add_state(s.accepting).map_err(invalid)?;
        }

        nfa.set_start(StateId::new(self.start)).map_err(invalid)?;
        for t in &self.transitions {
            nfa.add_transition(StateId::new(t.from), t.label, StateId::new(t.to))
                .map_err(invalid)?;
        }
        Ok(nfa)
    }
}

pub fn save_nfa_json(path: &std::path::Path, n: &Nfa) -> Result<()> {
    let write_failure = |source: std::io::Error| NfaTextError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };
    let f = std::fs::File::create(path).map_err(write_failure)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &NfaDisk::from(n))
        .map_err(|e| write_failure(e.into()))?;
    w.flush().map_err(write_failure)
}

pub fn load_nfa_json_bytes(data: &[u8]) -> Result<Nfa> {
    serde_json::from_slice::<NfaDisk>(data)
        .map_err(|e| NfaTextError::InvalidJson(format!("failed to parse NFA JSON: {e}")))?
        .into_nfa()
}
