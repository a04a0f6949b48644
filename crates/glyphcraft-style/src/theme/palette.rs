//! Semantic roles and composed palettes.

use std::collections::BTreeMap;

use crate::{Error, Result};

/// Mapping of semantic role to color value.
///
/// Ordered so every serialization of a palette is stable.
pub type RoleMap = BTreeMap<String, String>;

/// Standard semantic role names.
///
/// A role names the meaning of a color slot (`primary`, `error`) rather than
/// its value; every theme fills the same roles with its own colors.
pub struct Role;

impl Role {
    /// Main brand color.
    pub const PRIMARY: &'static str = "primary";
    /// Secondary brand color.
    pub const SECONDARY: &'static str = "secondary";
    /// Accent color.
    pub const ACCENT: &'static str = "accent";
    /// Neutral surface color.
    pub const NEUTRAL: &'static str = "neutral";
    /// Base page background.
    pub const BASE_100: &'static str = "base-100";
    /// Informational color.
    pub const INFO: &'static str = "info";
    /// Success color.
    pub const SUCCESS: &'static str = "success";
    /// Warning color.
    pub const WARNING: &'static str = "warning";
    /// Error/danger color.
    pub const ERROR: &'static str = "error";

    /// Roles every composed palette must define.
    pub const REQUIRED: [&'static str; 9] = [
        Self::PRIMARY,
        Self::SECONDARY,
        Self::ACCENT,
        Self::NEUTRAL,
        Self::BASE_100,
        Self::INFO,
        Self::SUCCESS,
        Self::WARNING,
        Self::ERROR,
    ];
}

/// A complete, named theme token set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePalette {
    name: String,
    roles: RoleMap,
}

impl ThemePalette {
    /// Create a palette. Completeness is checked by the composer.
    pub(crate) fn new(name: impl Into<String>, roles: RoleMap) -> Self {
        Self {
            name: name.into(),
            roles,
        }
    }

    /// Theme name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the color for a role.
    pub fn get(&self, role: &str) -> Option<&str> {
        self.roles.get(role).map(|s| s.as_str())
    }

    /// Check if a role is defined.
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Iterate over (role, color) in role order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the underlying role map.
    pub fn roles(&self) -> &RoleMap {
        &self.roles
    }

    /// Number of roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check if the palette has no roles.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Validate a name spliced into a custom property such as `--color-<role>`.
///
/// Only ASCII letters, digits, `-` and `_` are accepted.
pub fn validate_name(property: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_value(property, "name is empty"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(Error::invalid_value(
            property,
            format!("'{name}' may only contain ASCII letters, digits, '-' and '_'"),
        ));
    }
    Ok(())
}

/// Validate a color value.
///
/// Hex values must be `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. Anything not
/// starting with `#` (named colors, `rgb(...)`, `oklch(...)`) is accepted as
/// long as it is non-empty and cannot close a declaration. Surrounding
/// whitespace is rejected.
pub fn validate_color(role: &str, value: &str) -> Result<()> {
    if value.trim().len() != value.len() {
        return Err(Error::invalid_value(role, format!("'{value}' has surrounding whitespace")));
    }
    if value.is_empty() {
        return Err(Error::invalid_value(role, "color is empty"));
    }
    if value.contains([';', '{', '}']) {
        return Err(Error::invalid_value(role, format!("'{value}' is not a color")));
    }

    if let Some(hex) = value.strip_prefix('#') {
        if !matches!(hex.len(), 3 | 4 | 6 | 8) {
            return Err(Error::invalid_value(
                role,
                format!("'{value}' must have 3, 4, 6 or 8 hex digits"),
            ));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_value(
                role,
                format!("'{value}' contains non-hex digits"),
            ));
        }
    }

    Ok(())
}
