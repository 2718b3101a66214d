//! Generator configuration.
//!
//! Every field is optional; an empty file is the same as no file. Stored as
//! TOML:
//!
//! ```toml
//! output = "tmp_skills.ts"
//!
//! [document]
//! const_name = "SKILLS"
//! type_name = "Skill"
//! export = false
//! emit_interface = false
//!
//! [[skills]]
//! name = "C"
//! category = "Coding Languages"
//! slug = "c"
//! color = "#A8B9CC"
//! ```
//!
//! Leaving out `skills` selects the built-in catalog. An explicit empty list
//! (`skills = []`) generates an empty array.

use crate::catalog;
use crate::error::{Error, Result};
use crate::types::RawSkillRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Destination used when neither the config nor the command line names one.
pub const DEFAULT_OUTPUT: &str = "tmp_skills.ts";

/// Top-level configuration.
///
/// # Examples
///
/// ```
/// use skills_core::GeneratorConfig;
///
/// let config = GeneratorConfig::from_toml_str("output = \"src/skills.ts\"").unwrap();
/// assert_eq!(config.output.to_str(), Some("src/skills.ts"));
/// assert_eq!(config.document.const_name, "SKILLS");
/// assert_eq!(config.records().len(), 66);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Where the generated document is written
    pub output: PathBuf,

    /// Shape of the generated declaration
    pub document: DocumentOptions,

    /// Replacement for the built-in catalog
    pub skills: Option<Vec<RawSkillRecord>>,
}

/// Naming and framing of the generated TypeScript declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentOptions {
    /// Name of the declared array
    pub const_name: String,

    /// Element type of the array
    pub type_name: String,

    /// Prefix declarations with `export `
    pub export: bool,

    /// Emit the element interface before the array
    pub emit_interface: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            document: DocumentOptions::default(),
            skills: None,
        }
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            const_name: "SKILLS".to_string(),
            type_name: "Skill".to_string(),
            export: false,
            emit_interface: false,
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the TOML is malformed, contains
    /// unknown keys, or fails [`validate`](Self::validate).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::ConfigError {
            message: format!("failed to parse config: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.display());

        let source = std::fs::read_to_string(path).map_err(|e| Error::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&source)
    }

    /// Checks values that cannot be expressed in the type.
    ///
    /// Skill records are deliberately not checked: any category, slug or
    /// color is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the output path or a declaration
    /// name is empty.
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(Error::ConfigError {
                message: "output path cannot be empty".to_string(),
            });
        }
        if self.document.const_name.is_empty() {
            return Err(Error::ConfigError {
                message: "document.const_name cannot be empty".to_string(),
            });
        }
        if self.document.type_name.is_empty() {
            return Err(Error::ConfigError {
                message: "document.type_name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Input records for a run: the configured list or the built-in catalog.
    #[must_use]
    pub fn records(&self) -> Vec<RawSkillRecord> {
        self.skills.clone().unwrap_or_else(catalog::builtin)
    }
}
