//! Subcommand implementations.

pub mod generate;
pub mod history;
pub mod preview;
