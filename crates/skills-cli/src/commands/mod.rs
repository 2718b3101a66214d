//! Command implementations for the skills CLI.
//!
//! Each command module executes one subcommand and formats its output
//! according to the requested format.

pub mod common;
pub mod completions;
pub mod generate;
pub mod list;
