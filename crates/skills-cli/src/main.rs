//! Portfolio skills generator.
//!
//! Renders the skill catalog into the `SKILLS` TypeScript array consumed by
//! the portfolio front end.
//!
//! # Examples
//!
//! ```bash
//! # One-shot run: write ./tmp_skills.ts from the built-in catalog
//! skills-gen
//!
//! # Inspect the derived cards of one shelf
//! skills-gen list --category Frontend --format json
//! ```
//!
//! Exit status is 0 on success and 1 on any failure.

use anyhow::{Context, Result};
use clap::Parser;
use skills_cli::cli::Cli;
use skills_cli::runner::{execute, init_logging};
use skills_core::cli::ExitCode;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let working_dir = std::env::current_dir().context("failed to read working directory")?;
    let exit_code = match execute(cli, &working_dir) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::ERROR
        }
    };

    std::process::exit(exit_code.as_i32());
}
