//! Command implementations for the Bluesforge CLI.

pub mod batch;
pub mod generate;
pub mod validate;
