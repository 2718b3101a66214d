//! List command implementation.
//!
//! Shows the derived skill cards, field names as the front end sees them,
//! without touching the output file.

use anyhow::Result;
use skills_core::cli::{ExitCode, OutputFormat};
use skills_core::skill::render_all;
use skills_core::{DerivedSkillEntry, GeneratorConfig, RawSkillRecord};
use tracing::info;

/// Renders `records` and keeps those in `category`, if one is given.
///
/// Category matching is exact and case-sensitive, like the front end's
/// shelf filter.
#[must_use]
pub fn select_entries(
    records: &[RawSkillRecord],
    category: Option<&str>,
) -> Vec<DerivedSkillEntry> {
    let mut entries = render_all(records);
    if let Some(category) = category {
        entries.retain(|entry| entry.category == category);
    }
    entries
}

/// Runs the list command.
///
/// # Errors
///
/// Returns an error if the entries cannot be formatted.
pub fn run(
    config: &GeneratorConfig,
    category: Option<&str>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let entries = select_entries(&config.records(), category);
    info!("Listing {} skills", entries.len());

    let formatted = crate::formatters::format_output(&entries, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}
