//! Subcommand modules for the `blsm` binary.

pub mod check;
pub mod table;
