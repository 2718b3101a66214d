//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Portfolio skills generator.
///
/// Renders the skill catalog into the `SKILLS` TypeScript array used by the
/// portfolio front end. Without a subcommand it behaves like `generate`.
#[derive(Parser, Debug)]
#[command(name = "skills-gen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (default: generate)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,

    /// Path to a TOML config file (default: ./skills.toml if present)
    #[arg(short, long, global = true, env = "SKILLS_GEN_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the TypeScript skills array.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Write ./tmp_skills.ts from the built-in catalog
    /// skills-gen generate
    ///
    /// # Write an exported declaration with its interface
    /// skills-gen generate --output src/data/skills.ts --export --emit-interface
    ///
    /// # Print instead of writing
    /// skills-gen generate --stdout
    /// ```
    Generate(GenerateArgs),

    /// List derived skill cards without writing anything.
    List {
        /// Only show skills with this exact category label
        #[arg(long)]
        category: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options of the `generate` command.
///
/// Flags override the config file; they can only switch options on.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Destination file (overrides the config's `output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Prefix declarations with `export`
    #[arg(long)]
    pub export: bool,

    /// Emit the element interface before the array
    #[arg(long)]
    pub emit_interface: bool,
}
