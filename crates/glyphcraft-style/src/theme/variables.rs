//! CSS variables (custom properties) support.

use std::collections::BTreeMap;

use super::ThemePalette;

/// Prefix for palette role variables.
pub const COLOR_PREFIX: &str = "color-";

/// CSS custom properties (variables).
///
/// Names are stored without the leading `--`. Iteration is sorted by name so
/// serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeVariables {
    variables: BTreeMap<String, String>,
}

impl ThemeVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `--color-<role>` variables from a palette.
    pub fn from_palette(palette: &ThemePalette) -> Self {
        let mut vars = Self::new();
        for (role, color) in palette.iter() {
            vars.set(format!("{COLOR_PREFIX}{role}"), color);
        }
        vars
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        // Remove leading "--" if present
        let name = name.strip_prefix("--").unwrap_or(&name).to_string();
        self.variables.insert(name, value.into());
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.get(name).map(|s| s.as_str())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.contains_key(name)
    }

    /// Iterate over all variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if there are no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
