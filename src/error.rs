// src/error.rs
use std::{fmt, path::PathBuf};

/// The four parts of an automaton a dump is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotPart {
    States,
    StartState,
    AcceptStates,
    Transitions,
}

impl fmt::Display for SnapshotPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SnapshotPart::States => "state set",
            SnapshotPart::StartState => "start state",
            SnapshotPart::AcceptStates => "accepting-state set",
            SnapshotPart::Transitions => "transition set",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NfaTextError {
    /// The automaton could not supply a part of its snapshot, or a part
    /// points at a state the state set does not contain.
    #[error("automaton snapshot is missing data in its {part}: {detail}")]
    MissingData { part: SnapshotPart, detail: String },

    /// The dump destination could not be created or written.
    #[error("failed to write NFA dump to {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every `u32` state id is already in use.
    #[error("automaton already holds the maximum of 4294967296 states")]
    TooManyStates,

    /// A builder call referenced a state id that was never allocated.
    #[error("state {0} does not exist in this automaton")]
    UnknownState(u32),

    /// The JSON description of an automaton did not parse or was inconsistent.
    #[error("invalid NFA JSON: {0}")]
    InvalidJson(String),
}

impl NfaTextError {
    pub(crate) fn missing(part: SnapshotPart, detail: impl Into<String>) -> Self {
        NfaTextError::MissingData {
            part,
            detail: detail.into(),
        }
    }
}

pub type Result<T, E = NfaTextError> = std::result::Result<T, E>;
