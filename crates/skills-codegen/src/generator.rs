//! Skills document generator.
//!
//! Renders every catalog record into a skill card and serializes the cards
//! as one TypeScript array declaration:
//!
//! ```text
//! const SKILLS: Skill[] = [
//!     { name: 'C', category: 'Coding Languages', level: 82, ... },
//!     ...
//! ]
//! ```
//!
//! Field names and single-quoted literals are a contract with the front
//! end's `Skill` interface.
//!
//! # Examples
//!
//! ```
//! use skills_codegen::SkillsGenerator;
//! use skills_core::{DocumentOptions, RawSkillRecord};
//!
//! let generator = SkillsGenerator::new(DocumentOptions::default()).unwrap();
//! let doc = generator
//!     .generate(&[RawSkillRecord::new("C", "Coding Languages", "c", "#A8B9CC")])
//!     .unwrap();
//!
//! assert_eq!(doc.entry_count, 1);
//! assert!(doc.content.starts_with("const SKILLS: Skill[] = [\n"));
//! assert!(doc.content.contains("level: 82, years: '4 yrs'"));
//! ```

use crate::template_engine::{SKILLS_DOCUMENT, TemplateEngine};
use crate::typescript::is_valid_identifier;
use crate::writer;
use serde::Serialize;
use skills_core::skill::render_all;
use skills_core::{DerivedSkillEntry, DocumentOptions, Error, RawSkillRecord, Result};
use std::path::Path;

/// A rendered skills document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Full TypeScript text
    pub content: String,
    /// Number of entries in the array
    pub entry_count: usize,
}

impl GeneratedDocument {
    /// Writes the document to `destination`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the destination cannot be opened or
    /// written.
    pub fn write_to(&self, destination: &Path) -> Result<()> {
        writer::write_output(&self.content, destination)
    }
}

#[derive(Debug, Serialize)]
struct DocumentContext<'a> {
    export_prefix: &'static str,
    const_name: &'a str,
    type_name: &'a str,
    emit_interface: bool,
    entries: &'a [DerivedSkillEntry],
}

/// Generator for the TypeScript skills array.
#[derive(Debug)]
pub struct SkillsGenerator<'a> {
    engine: TemplateEngine<'a>,
    options: DocumentOptions,
}

impl SkillsGenerator<'_> {
    /// Creates a generator for the given declaration shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if `const_name` or `type_name` is
    /// not a usable TypeScript identifier, or a template error if the
    /// built-in template fails to register.
    pub fn new(options: DocumentOptions) -> Result<Self> {
        for (field, value) in [
            ("const_name", &options.const_name),
            ("type_name", &options.type_name),
        ] {
            if !is_valid_identifier(value) {
                return Err(Error::ValidationError {
                    field: field.to_string(),
                    reason: format!("'{value}' is not a valid TypeScript identifier"),
                });
            }
        }

        let engine = TemplateEngine::new()?;
        Ok(Self { engine, options })
    }

    /// Renders `records` in order into one document.
    ///
    /// Duplicates are kept, nothing is sorted, and a malformed color only
    /// affects that record's background.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails.
    pub fn generate(&self, records: &[RawSkillRecord]) -> Result<GeneratedDocument> {
        tracing::info!("Generating skills document for {} records", records.len());

        let entries = render_all(records);
        self.generate_entries(&entries)
    }

    /// Serializes already derived entries into one document.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails.
    pub fn generate_entries(&self, entries: &[DerivedSkillEntry]) -> Result<GeneratedDocument> {
        let context = DocumentContext {
            export_prefix: if self.options.export { "export " } else { "" },
            const_name: &self.options.const_name,
            type_name: &self.options.type_name,
            emit_interface: self.options.emit_interface,
            entries,
        };

        let rendered = self.engine.render(SKILLS_DOCUMENT, &context)?;

        tracing::debug!(
            "Rendered {} entries into {} bytes",
            entries.len(),
            rendered.len()
        );

        Ok(GeneratedDocument {
            content: rendered,
            entry_count: entries.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> SkillsGenerator<'static> {
        SkillsGenerator::new(DocumentOptions::default()).unwrap()
    }

    fn entry_lines(content: &str) -> Vec<&str> {
        content
            .lines()
            .filter(|line| line.starts_with("    { name: "))
            .collect()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    #[test]
    fn test_new_rejects_bad_identifiers() {
        let options = DocumentOptions {
            const_name: "my-skills".to_string(),
            ..DocumentOptions::default()
        };
        let err = SkillsGenerator::new(options).unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("const_name"));

        let options = DocumentOptions {
            type_name: "interface".to_string(),
            ..DocumentOptions::default()
        };
        assert!(SkillsGenerator::new(options).is_err());
    }

    // ========================================================================
    // Document shape
    // ========================================================================

    #[test]
    fn test_two_record_scenario() {
        let records = [
            RawSkillRecord::new("C", "Coding Languages", "c", "#A8B9CC"),
            RawSkillRecord::new("Unity", "Other Skills", "unity", "#000000"),
        ];
        let doc = generator().generate(&records).unwrap();

        assert_eq!(doc.entry_count, 2);
        let lines = entry_lines(&doc.content);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("    { name: 'C', "));
        assert!(lines[1].starts_with("    { name: 'Unity', "));
        assert!(lines[1].contains("color: '#ffffff', bgColor: '#262626'"));
    }

    #[test]
    fn test_exact_document() {
        let records = [RawSkillRecord::new("C", "Coding Languages", "c", "#A8B9CC")];
        let doc = generator().generate(&records).unwrap();

        let expected = concat!(
            "const SKILLS: Skill[] = [\n",
            "    { name: 'C', category: 'Coding Languages', level: 82, years: '4 yrs', ",
            "description: 'Deep proficiency and experience in building ",
            "robust solutions using C.', color: '#A8B9CC', bgColor: '#191b1e', ",
            "imageFile: 'https://cdn.simpleicons.org/c/ffffff', fallbackIcon: 'C' },\n",
            "]\n",
        );
        assert_eq!(doc.content, expected);
    }

    #[test]
    fn test_every_entry_has_trailing_comma() {
        let records = [
            RawSkillRecord::new("Git", "Other Skills", "git", "#F05032"),
            RawSkillRecord::new("Jira", "Other Skills", "jira", "#0052CC"),
        ];
        let doc = generator().generate(&records).unwrap();

        for line in entry_lines(&doc.content) {
            assert!(line.ends_with(" },"), "{line}");
        }
        assert!(doc.content.ends_with("},\n]\n"));
    }

    #[test]
    fn test_empty_input() {
        let doc = generator().generate(&[]).unwrap();
        assert_eq!(doc.entry_count, 0);
        assert_eq!(doc.content, "const SKILLS: Skill[] = [\n]\n");
    }

    #[test]
    fn test_export_and_interface() {
        let generator = SkillsGenerator::new(DocumentOptions {
            const_name: "ALL_SKILLS".to_string(),
            type_name: "SkillCard".to_string(),
            export: true,
            emit_interface: true,
        })
        .unwrap();
        let doc = generator.generate(&[]).unwrap();

        let (interface, array) = doc.content.split_once("\n\n").unwrap();
        assert!(interface.starts_with("export interface SkillCard {\n    name: string\n"));
        assert!(interface.ends_with("    fallbackIcon: string\n}"));
        assert_eq!(array, "export const ALL_SKILLS: SkillCard[] = [\n]\n");
    }

    #[test]
    fn test_interface_without_export() {
        let generator = SkillsGenerator::new(DocumentOptions {
            emit_interface: true,
            ..DocumentOptions::default()
        })
        .unwrap();
        let doc = generator.generate(&[]).unwrap();

        assert!(doc.content.starts_with("interface Skill {\n"));
        assert!(doc.content.contains("\n\nconst SKILLS: Skill[] = [\n"));
        assert!(!doc.content.contains("export"));
    }

    // ========================================================================
    // Escaping and degrade paths
    // ========================================================================

    #[test]
    fn test_quote_in_name_is_escaped() {
        let records = [RawSkillRecord::new("Rock'n'Roll", "Other Skills", "rock", "#123456")];
        let doc = generator().generate(&records).unwrap();

        assert!(doc.content.contains(r"name: 'Rock\'n\'Roll'"));
        assert!(doc.content.contains(r"using Rock\'n\'Roll.'"));
        assert!(doc.content.contains(r"fallbackIcon: 'Ro'"));
    }

    #[test]
    fn test_quote_split_by_fallback_icon() {
        let records = [RawSkillRecord::new("O'Neil", "Other Skills", "x", "#123456")];
        let doc = generator().generate(&records).unwrap();
        assert!(doc.content.contains(r"fallbackIcon: 'O\''"));
    }

    #[test]
    fn test_malformed_color_does_not_abort() {
        let records = [
            RawSkillRecord::new("Broken", "Other Skills", "broken", "oops"),
            RawSkillRecord::new("Fine", "Other Skills", "fine", "#ffffff"),
        ];
        let doc = generator().generate(&records).unwrap();

        assert_eq!(doc.entry_count, 2);
        assert!(doc.content.contains("color: 'oops', bgColor: '#111111'"));
        assert!(doc.content.contains("color: '#ffffff', bgColor: '#262626'"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let records = skills_core::catalog::builtin();
        let generator = generator();
        assert_eq!(
            generator.generate(&records).unwrap(),
            generator.generate(&records).unwrap()
        );
    }
}
