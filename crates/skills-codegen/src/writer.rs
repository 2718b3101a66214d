//! Output destination handling.

use skills_core::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `text` as UTF-8 to `destination`, truncating any existing file.
///
/// The file handle lives only inside this call and is closed on every exit
/// path. Parent directories are not created; a missing directory is an
/// error like any other.
///
/// # Errors
///
/// Returns [`Error::IoError`] if the destination cannot be created or the
/// write does not complete.
///
/// # Examples
///
/// ```
/// use skills_codegen::writer::write_output;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("tmp_skills.ts");
///
/// write_output("const SKILLS: Skill[] = [\n]\n", &path).unwrap();
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "const SKILLS: Skill[] = [\n]\n");
/// ```
pub fn write_output(text: &str, destination: &Path) -> Result<()> {
    let io_error = |source| Error::IoError {
        path: destination.to_path_buf(),
        source,
    };

    tracing::debug!("Writing {} bytes to {}", text.len(), destination.display());

    let file = File::create(destination).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    tracing::info!("Wrote {}", destination.display());
    Ok(())
}
