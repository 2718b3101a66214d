//! Error types for the skills generator.
//!
//! One error hierarchy is shared by every library crate in the workspace.
//! Color parsing has its own [`ColorParseError`] because it never escapes
//! the derivation step: callers substitute a sentinel color instead.
//!
//! # Examples
//!
//! ```
//! use skills_core::{Error, Result};
//!
//! fn check_const_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "const_name cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_const_name("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the skills generator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when a configuration file cannot be parsed or contains
    /// values the generator cannot use.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Validation error for domain values.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
    },

    /// Filesystem operation failed.
    ///
    /// Writing the generated document is the only filesystem side effect,
    /// so this variant is fatal for a run.
    #[error("I/O error at {}: {source}", path.display())]
    IoError {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use skills_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "bad output path".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Recoverable failure to read a `#rrggbb` color string.
///
/// Produced by [`hex_to_channels`](crate::color::hex_to_channels). It is
/// never surfaced to the user; the caller picks a sentinel color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex part is not exactly six bytes long.
    #[error("color '{value}' must have 6 hex digits, found {len} bytes")]
    InvalidLength {
        /// Offending input
        value: String,
        /// Length in bytes after the optional `#`
        len: usize,
    },

    /// Hex part contains a non-hexadecimal character.
    #[error("color '{value}' contains non-hex characters")]
    InvalidDigit {
        /// Offending input
        value: String,
    },
}

/// Type alias for `Result` with the generator's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
