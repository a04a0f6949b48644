//! Error types for the style build.

use std::path::PathBuf;

/// Result type alias for style build operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the stylesheet.
///
/// Every variant is fatal: the pipeline never produces partial output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured icon directory does not exist.
    #[error("Icon directory '{path}' not found")]
    NotFound { path: PathBuf },

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two icon files derived the same canonical name.
    #[error("Duplicate icon name '{name}' derived from '{first}' and '{second}'")]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A composed theme lacks one or more required roles.
    #[error("Theme '{theme}' is missing required roles: {}", .missing.join(", "))]
    IncompleteTheme { theme: String, missing: Vec<String> },

    /// A palette set or theme name was declared twice.
    #[error("Theme name '{name}' is declared more than once")]
    DuplicateTheme { name: String },

    /// Invalid configuration value.
    #[error("Invalid value for '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// Icon content would break out of its quoted data URI.
    #[error("Icon '{name}' at '{path}' contains a single quote and cannot be embedded")]
    UnsafeContent { name: String, path: PathBuf },

    /// Configuration file could not be parsed.
    #[error("Invalid configuration '{path}': {message}")]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Create a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an I/O error for a directory, mapping a missing directory to
    /// [`Error::NotFound`].
    pub fn from_dir_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(path)
        } else {
            Self::io(path, source)
        }
    }

    /// Create a duplicate name error.
    pub fn duplicate_name(
        name: impl Into<String>,
        first: impl Into<PathBuf>,
        second: impl Into<PathBuf>,
    ) -> Self {
        Self::DuplicateName {
            name: name.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create an incomplete theme error.
    pub fn incomplete_theme(theme: impl Into<String>, missing: Vec<String>) -> Self {
        Self::IncompleteTheme {
            theme: theme.into(),
            missing,
        }
    }

    /// Create a duplicate theme error.
    pub fn duplicate_theme(name: impl Into<String>) -> Self {
        Self::DuplicateTheme { name: name.into() }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create an unsafe content error.
    pub fn unsafe_content(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::UnsafeContent {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a configuration parse error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
