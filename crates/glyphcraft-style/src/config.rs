//! Build configuration.
//!
//! Everything the pipeline needs is carried by one [`BuildConfig`] value. It
//! can be built in code or loaded from a TOML file:
//!
//! ```toml
//! default_theme = "defdo_dark"
//!
//! [icons]
//! root = "../priv/hero_icons/optimized"
//! prefix = "hero"
//! size = "1.25rem"
//!
//! [[icons.styles]]
//! suffix = ""
//! dir = "24/outline"
//!
//! [[icons.styles]]
//! suffix = "-solid"
//! dir = "24/solid"
//!
//! [[palettes]]
//! name = "defdo"
//! base = { primary = "#F9BC02", neutral = "#f4efea", "base-100" = "#140021" }
//!
//! [[palettes.themes]]
//! name = "defdo_dark"
//!
//! [[palettes.themes]]
//! name = "defdo_light"
//! overrides = { neutral = "#140021", "base-100" = "#f4efea" }
//!
//! [tokens.fonts]
//! code = ["JetBrains Mono"]
//!
//! [tokens.screens]
//! xs = "340px"
//! ```
//!
//! Omitted sections fall back to [`BuildConfig::default`]. A relative
//! `icons.root` is resolved against the directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::icon::{DEFAULT_EXTENSION, DEFAULT_PREFIX, DEFAULT_SIZE, EmbedPolicy, IconStyle};
use crate::theme::{DesignTokens, PaletteSet, Role, validate_name};
use crate::{Error, Result};

/// Default catalog root, relative to the config file.
pub const DEFAULT_ICON_ROOT: &str = "../priv/hero_icons/optimized";

/// Icon pipeline settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Catalog root directory.
    pub root: PathBuf,
    /// Style variants, scanned in order. Empty disables icon generation.
    pub styles: Vec<IconStyle>,
    /// Class and custom-property prefix.
    pub prefix: String,
    /// Shared icon width and height.
    pub size: String,
    /// File extension to catalog; empty accepts every file.
    pub extension: String,
    /// Fail instead of warn on content that cannot be embedded safely.
    pub strict_embedding: bool,
}

impl IconConfig {
    /// Extension filter for the catalog loader.
    pub fn extension_filter(&self) -> Option<&str> {
        let ext = self.extension.trim_start_matches('.');
        (!ext.is_empty()).then_some(ext)
    }

    /// Embed policy derived from `strict_embedding`.
    pub fn embed_policy(&self) -> EmbedPolicy {
        if self.strict_embedding {
            EmbedPolicy::Strict
        } else {
            EmbedPolicy::Warn
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ICON_ROOT),
            styles: IconStyle::hero_defaults(),
            prefix: DEFAULT_PREFIX.to_string(),
            size: DEFAULT_SIZE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            strict_embedding: false,
        }
    }
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Icon pipeline settings.
    pub icons: IconConfig,
    /// Palette sets, composed independently.
    pub palettes: Vec<PaletteSet>,
    /// Roles every composed palette must define.
    pub required_roles: Vec<String>,
    /// Theme also exposed under `:root`. Defaults to the first theme.
    pub default_theme: Option<String>,
    /// Font and breakpoint tokens.
    pub tokens: DesignTokens,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            icons: IconConfig::default(),
            palettes: vec![PaletteSet::defdo()],
            required_roles: Role::REQUIRED.iter().map(|r| r.to_string()).collect(),
            default_theme: None,
            tokens: DesignTokens::defdo(),
        }
    }
}

impl BuildConfig {
    /// Load a configuration file.
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let mut config = Self::from_toml(&content).map_err(|e| match e {
            Error::Config { message, .. } => Error::config(path, message),
            other => other,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.resolve_paths(base);
        Ok(config)
    }

    /// Parse configuration from TOML text. Paths are left as written.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config("<inline>", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config("<inline>", e.to_string()))
    }

    /// Resolve a relative icon root against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.icons.root.is_relative() {
            self.icons.root = base.join(&self.icons.root);
        }
    }

    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<()> {
        validate_name("icons.prefix", &self.icons.prefix)?;
        if self.icons.size.trim().is_empty() {
            return Err(Error::invalid_value("icons.size", "size is empty"));
        }
        if self.icons.size.contains([';', '{', '}']) {
            return Err(Error::invalid_value(
                "icons.size",
                format!("'{}' is not a length", self.icons.size),
            ));
        }
        for role in &self.required_roles {
            validate_name("required_roles", role)?;
        }
        self.tokens.validate()
    }
}
