//! Skills generator CLI library.
//!
//! Exposes argument definitions, commands and formatters so they can be
//! tested without spawning the binary.

#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;

pub use cli::{Cli, Commands, GenerateArgs};
