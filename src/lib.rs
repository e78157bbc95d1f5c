// src/lib.rs
pub mod dev;
pub mod error;
pub mod nfa;
pub mod writer;

pub use error::{NfaTextError, Result, SnapshotPart};
pub use nfa::{Nfa, NfaAccess, StateId, Transition};
pub use writer::{try_write_nfa_file, write_nfa, write_nfa_file};
