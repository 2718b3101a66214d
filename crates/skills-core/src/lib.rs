//! Core types, color math and field derivation for the skills generator.
//!
//! The generator turns a static catalog of `(name, category, slug, color)`
//! rows into the skill cards shown by the portfolio front end.
//!
//! # Architecture
//!
//! - [`RawSkillRecord`] / [`DerivedSkillEntry`]: input row and computed card
//! - [`color`]: hex parsing, the pure black remap and background darkening
//! - [`skill`]: level, years and text fields derived from a record
//! - [`catalog`]: the built-in skill table
//! - [`GeneratorConfig`]: optional TOML configuration
//! - [`Error`]: error hierarchy shared by the workspace

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod catalog;
pub mod cli;
pub mod color;
pub mod skill;

pub use config::{DEFAULT_OUTPUT, DocumentOptions, GeneratorConfig};
pub use error::{ColorParseError, Error, Result};
pub use types::{DerivedSkillEntry, RawSkillRecord};
