//! Output formatters for CLI commands.
//!
//! Every command result is `Serialize`; the user picks JSON, compact text or
//! colorized pretty output with `--format`.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use skills_core::cli::OutputFormat;

/// Formats `data` according to `format`.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use skills_cli::formatters::format_output;
/// use skills_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     entry_count: usize,
/// }
///
/// let output = format_output(&Summary { entry_count: 66 }, OutputFormat::Text)?;
/// assert_eq!(output, r#"{"entry_count":66}"#);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as indented JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Formats data as single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Formats data as one line of JSON, suitable for piping.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Formats data as colorized, indented output.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&mut out, &value, 0);
        Ok(out)
    }

    fn write_value(out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => out.push_str(&"null".dimmed().to_string()),
            Value::Bool(b) => out.push_str(&b.to_string().yellow().to_string()),
            Value::Number(n) => out.push_str(&n.to_string().cyan().to_string()),
            Value::String(s) => {
                out.push('"');
                out.push_str(&s.green().to_string());
                out.push('"');
            }
            Value::Array(items) if items.is_empty() => out.push_str("[]"),
            Value::Object(map) if map.is_empty() => out.push_str("{}"),
            Value::Array(items) => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    indent(out, depth + 1);
                    write_value(out, item, depth + 1);
                    close_item(out, i + 1 < items.len());
                }
                indent(out, depth);
                out.push(']');
            }
            Value::Object(map) => {
                out.push_str("{\n");
                for (i, (key, item)) in map.iter().enumerate() {
                    indent(out, depth + 1);
                    out.push('"');
                    out.push_str(&key.blue().bold().to_string());
                    out.push_str("\": ");
                    write_value(out, item, depth + 1);
                    close_item(out, i + 1 < map.len());
                }
                indent(out, depth);
                out.push('}');
            }
        }
    }

    fn indent(out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
    }

    fn close_item(out: &mut String, more: bool) {
        if more {
            out.push(',');
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Card {
        name: String,
        level: u8,
        featured: bool,
        tags: Vec<String>,
    }

    fn card() -> Card {
        Card {
            name: "Chart.js".to_string(),
            level: 80,
            featured: true,
            tags: vec!["Frontend".to_string()],
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&card()).unwrap();
        assert!(output.contains("\"name\": \"Chart.js\""));
        assert!(output.contains("\"level\": 80"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = text::format(&card()).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"name\":\"Chart.js\""));
    }

    #[test]
    fn test_pretty_format() {
        colored::control::set_override(false);
        let output = pretty::format(&card()).unwrap();

        assert!(output.starts_with("{\n"));
        assert!(output.contains("  \"name\": \"Chart.js\",\n"));
        assert!(output.contains("  \"level\": 80,\n"));
        assert!(output.contains("  \"tags\": [\n    \"Frontend\"\n  ]\n"));
        assert!(output.ends_with('}'));
    }

    #[test]
    fn test_pretty_empty_collections() {
        colored::control::set_override(false);
        let empty: Vec<u8> = Vec::new();
        assert_eq!(pretty::format(&empty).unwrap(), "[]");
        assert_eq!(pretty::format(&serde_json::json!({})).unwrap(), "{}");
    }

    #[test]
    fn test_format_output_dispatch() {
        let data = card();
        let json = format_output(&data, OutputFormat::Json).unwrap();
        let text = format_output(&data, OutputFormat::Text).unwrap();
        let pretty = format_output(&data, OutputFormat::Pretty).unwrap();

        assert!(json.contains('\n'));
        assert!(!text.contains('\n'));
        assert!(pretty.contains("Chart.js"));
    }
}
