//! TypeScript generation of the portfolio `SKILLS` array.
//!
//! Turns catalog records into the array literal consumed by the front end,
//! using Handlebars templates, and writes it to disk.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod template_engine;
pub mod typescript;
pub mod writer;

pub use generator::{GeneratedDocument, SkillsGenerator};
pub use writer::write_output;
