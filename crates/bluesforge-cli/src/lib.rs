//! Bluesforge CLI library.
//!
//! Command implementations live here so tests can exercise them directly; the
//! binary in `main.rs` only parses arguments and dispatches.

pub mod commands;
pub mod manifest;
