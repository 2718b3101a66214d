//! Helpers shared by commands.

use anyhow::{Context, Result};
use skills_core::GeneratorConfig;
use std::path::Path;
use tracing::{debug, info};

/// Config file picked up from the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "skills.toml";

/// Resolves the configuration for a run.
///
/// Order: the explicit path (which must exist), then [`DEFAULT_CONFIG_FILE`]
/// inside `search_dir`, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read, parsed or
/// validated.
pub fn load_config(explicit: Option<&Path>, search_dir: &Path) -> Result<GeneratorConfig> {
    if let Some(path) = explicit {
        info!("Using config file: {}", path.display());
        return GeneratorConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()));
    }

    let candidate = search_dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        info!("Using config file: {}", candidate.display());
        return GeneratorConfig::load(&candidate)
            .with_context(|| format!("failed to load config '{}'", candidate.display()));
    }

    debug!("No config file found, using defaults");
    Ok(GeneratorConfig::default())
}
