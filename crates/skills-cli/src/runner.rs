//! Command execution and runtime logic.
//!
//! Contains command dispatch and logging initialization.

use anyhow::{Result, anyhow};
use clap::CommandFactory;
use skills_core::cli::{ExitCode, OutputFormat};
use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, GenerateArgs};
use crate::commands;

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, falling
/// back to info. Logs go to stderr so `--stdout` output stays clean.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

/// Executes the parsed command line.
///
/// Config discovery starts in `working_dir`. No subcommand means a plain
/// `generate`.
///
/// # Errors
///
/// Returns an error if the format is unknown, the config cannot be loaded,
/// or the command fails.
pub fn execute(cli: Cli, working_dir: &Path) -> Result<ExitCode> {
    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow!("{e}"))?;

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()));

    let load_config = || commands::common::load_config(cli.config.as_deref(), working_dir);

    match command {
        Commands::Generate(args) => commands::generate::run(load_config()?, &args, output_format),
        Commands::List { category } => {
            commands::list::run(&load_config()?, category.as_deref(), output_format)
        }
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
