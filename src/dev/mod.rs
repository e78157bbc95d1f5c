// src/dev/mod.rs
// Helpers shared by tests and the demo binaries.
pub mod generator;
