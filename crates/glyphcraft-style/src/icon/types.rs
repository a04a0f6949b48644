//! Core types for the icon pipeline.
//!
//! - [`IconName`]: the canonical name markup authors use to reference an icon
//! - [`IconStyle`]: one (suffix, directory) pair scanned by the catalog
//! - [`IconSource`]: a discovered icon file
//! - [`IconAsset`]: an icon whose content has been inlined

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Canonical icon name: the file stem followed by the style suffix.
///
/// Generated class names are derived from this value, so it is the public
/// contract between the stylesheet and markup authors.
///
/// # Examples
///
/// ```
/// use glyphcraft_style::icon::IconName;
///
/// let name = IconName::derive("check", "-solid");
/// assert_eq!(name.as_str(), "check-solid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconName(String);

impl IconName {
    /// Create an icon name from an already canonical string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derive the canonical name from a file stem and a style suffix.
    pub fn derive(stem: &str, suffix: &str) -> Self {
        let mut name = String::with_capacity(stem.len() + suffix.len());
        name.push_str(stem);
        name.push_str(suffix);
        Self(name)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One style variant of the icon set.
///
/// The `dir` is relative to the catalog root and usually encodes both the
/// pixel size and the style, e.g. `24/outline` or `20/solid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconStyle {
    /// Suffix appended to every file stem in `dir`. May be empty.
    #[serde(default)]
    pub suffix: String,
    /// Directory scanned for icon files, relative to the catalog root.
    pub dir: PathBuf,
}

impl IconStyle {
    /// Create a style variant.
    pub fn new(suffix: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            suffix: suffix.into(),
            dir: dir.into(),
        }
    }

    /// The default hero icon layout: outline, solid and mini.
    pub fn hero_defaults() -> Vec<Self> {
        vec![
            Self::new("", "24/outline"),
            Self::new("-solid", "24/solid"),
            Self::new("-mini", "20/solid"),
        ]
    }
}

/// An icon file discovered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    /// Canonical name.
    pub name: IconName,
    /// Style suffix the name was derived with.
    pub suffix: String,
    /// Style directory, relative to the catalog root.
    pub dir: PathBuf,
    /// Full path to the file.
    pub path: PathBuf,
}

impl IconSource {
    /// The file stem the name was derived from.
    pub fn stem(&self) -> &str {
        let name = self.name.as_str();
        name.strip_suffix(self.suffix.as_str()).unwrap_or(name)
    }
}

/// An icon with its content collapsed to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    /// Canonical name.
    pub name: IconName,
    /// Newline-free content, otherwise verbatim.
    pub content: String,
    /// Source file, for diagnostics.
    pub path: PathBuf,
}

impl IconAsset {
    /// Create an asset.
    pub fn new(name: IconName, content: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            content: content.into(),
            path: path.into(),
        }
    }

    /// Get the source path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
