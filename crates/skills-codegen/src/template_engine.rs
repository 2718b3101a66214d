//! Template engine for code generation using Handlebars.
//!
//! Values are escaped for single-quoted TypeScript strings rather than for
//! HTML, so `{{name}}` inside `'...'` is always a valid literal.
//!
//! # Examples
//!
//! ```
//! use skills_codegen::template_engine::TemplateEngine;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Context {
//!     name: &'static str,
//! }
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "const s = '{{name}}';").unwrap();
//!
//! let out = engine.render("greeting", &Context { name: "it's" }).unwrap();
//! assert_eq!(out, r"const s = 'it\'s';");
//! ```

use crate::typescript::escape_single_quoted;
use handlebars::Handlebars;
use serde::Serialize;
use skills_core::{Error, Result};

/// Name of the built-in skills document template.
pub const SKILLS_DOCUMENT: &str = "skills/document";

/// Template engine for code generation.
///
/// Wraps Handlebars in strict mode with the built-in templates registered.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(escape_single_quoted);

        Self::register_skills_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_skills_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(SKILLS_DOCUMENT, include_str!("../templates/skills.ts.hbs"))
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register skills document template: {e}"),
            })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable referenced by the template is missing
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a custom template.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
