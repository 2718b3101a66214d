//! Generate command implementation.
//!
//! This command:
//! 1. Applies command-line overrides to the loaded config
//! 2. Renders every skill record into the TypeScript array
//! 3. Writes the document (or prints it with `--stdout`)
//! 4. Reports a summary in the requested format

use crate::cli::GenerateArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use skills_codegen::{GeneratedDocument, SkillsGenerator};
use skills_core::GeneratorConfig;
use skills_core::cli::{ExitCode, OutputFormat};
use std::path::Path;
use tracing::info;

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// Path the document was written to
    pub output_path: String,
    /// Number of skills in the array
    pub entry_count: usize,
    /// Size of the written document
    pub bytes_written: usize,
}

/// Folds command-line flags into the config.
pub fn apply_overrides(config: &mut GeneratorConfig, args: &GenerateArgs) {
    if let Some(output) = &args.output {
        config.output.clone_from(output);
    }
    if args.export {
        config.document.export = true;
    }
    if args.emit_interface {
        config.document.emit_interface = true;
    }
}

/// Renders the document described by `config`.
///
/// # Errors
///
/// Returns an error if the declaration names are invalid or rendering
/// fails.
pub fn render_document(config: &GeneratorConfig) -> Result<GeneratedDocument> {
    let generator =
        SkillsGenerator::new(config.document.clone()).context("invalid document options")?;

    generator
        .generate(&config.records())
        .context("failed to render skills document")
}

/// Writes `document` to `path` and describes what was written.
///
/// # Errors
///
/// Returns an error if the destination cannot be written.
pub fn write_document(document: &GeneratedDocument, path: &Path) -> Result<GenerationResult> {
    document
        .write_to(path)
        .with_context(|| format!("failed to write skills document to '{}'", path.display()))?;

    Ok(GenerationResult {
        output_path: path.display().to_string(),
        entry_count: document.entry_count,
        bytes_written: document.content.len(),
    })
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if rendering or writing fails. Any error ends the run
/// with exit code 1.
pub fn run(
    mut config: GeneratorConfig,
    args: &GenerateArgs,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    apply_overrides(&mut config, args);

    let document = render_document(&config)?;

    if args.stdout {
        print!("{}", document.content);
        return Ok(ExitCode::SUCCESS);
    }

    let result = write_document(&document, &config.output)?;

    info!(
        "Generated {} skills into {}",
        result.entry_count, result.output_path
    );

    let formatted = crate::formatters::format_output(&result, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skills_core::RawSkillRecord;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_only_switch_on() {
        let mut config = GeneratorConfig::default();
        config.document.export = true;

        apply_overrides(&mut config, &GenerateArgs::default());
        assert!(config.document.export);
        assert_eq!(config.output, PathBuf::from(skills_core::DEFAULT_OUTPUT));

        apply_overrides(
            &mut config,
            &GenerateArgs {
                output: Some(PathBuf::from("out.ts")),
                emit_interface: true,
                ..GenerateArgs::default()
            },
        );
        assert_eq!(config.output, PathBuf::from("out.ts"));
        assert!(config.document.emit_interface);
    }

    #[test]
    fn test_render_document_uses_configured_records() {
        let config = GeneratorConfig {
            skills: Some(vec![RawSkillRecord::new("C", "Coding Languages", "c", "#A8B9CC")]),
            ..GeneratorConfig::default()
        };

        let document = render_document(&config).unwrap();
        assert_eq!(document.entry_count, 1);
    }

    #[test]
    fn test_render_document_rejects_bad_names() {
        let mut config = GeneratorConfig::default();
        config.document.type_name = "not valid".to_string();

        let err = render_document(&config).unwrap_err();
        assert!(err.to_string().contains("invalid document options"));
    }

    #[test]
    fn test_write_document_summary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("skills.ts");
        let document = render_document(&GeneratorConfig::default()).unwrap();

        let result = write_document(&document, &path).unwrap();
        assert_eq!(result.entry_count, 66);
        let on_disk = std::fs::metadata(&path).unwrap().len();
        assert_eq!(u64::try_from(result.bytes_written).unwrap(), on_disk);
    }

    #[test]
    fn test_run_writes_to_override_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tmp_skills.ts");
        let args = GenerateArgs {
            output: Some(path.clone()),
            ..GenerateArgs::default()
        };

        let code = run(GeneratorConfig::default(), &args, OutputFormat::Json).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(
            std::fs::read_to_string(&path)
                .unwrap()
                .starts_with("const SKILLS: Skill[] = [\n")
        );
    }

    #[test]
    fn test_run_fails_on_unwritable_destination() {
        let dir = TempDir::new().unwrap();
        let args = GenerateArgs {
            output: Some(dir.path().join("missing/tmp_skills.ts")),
            ..GenerateArgs::default()
        };

        let err = run(GeneratorConfig::default(), &args, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("failed to write skills document"));
    }
}
