// src/nfa/mod.rs
pub mod access;
pub mod disk;
pub mod model;

pub use access::{NfaAccess, Snapshot};
pub use disk::{load_nfa_json_bytes, save_nfa_json};
pub use model::{Nfa, StateId, Transition};
