//! Theme composition: base palette plus per-theme overrides.
//!
//! Each theme starts from a full copy of its set's base mapping and applies
//! its own overrides key by key. Themes never see each other's overrides.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::palette::{Role, RoleMap, ThemePalette, validate_color, validate_name};
use crate::{Error, Result};

const LOG_TARGET: &str = "glyphcraft_style::theme";

/// A named theme expressed as overrides of its set's base palette.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeOverride {
    /// Theme name, used as the `data-theme` value.
    pub name: String,
    /// Roles replaced or added by this theme.
    #[serde(default)]
    pub overrides: RoleMap,
}

impl ThemeOverride {
    /// Create a theme with no overrides.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: RoleMap::new(),
        }
    }

    /// Override one role.
    pub fn set(mut self, role: impl Into<String>, color: impl Into<String>) -> Self {
        self.overrides.insert(role.into(), color.into());
        self
    }
}

/// One brand's base palette and its themes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaletteSet {
    /// Set name.
    pub name: String,
    /// Base role mapping shared by every theme in the set.
    pub base: RoleMap,
    /// Themes, in declaration order.
    #[serde(default)]
    pub themes: Vec<ThemeOverride>,
}

impl PaletteSet {
    /// Create a set with no themes.
    pub fn new(name: impl Into<String>, base: RoleMap) -> Self {
        Self {
            name: name.into(),
            base,
            themes: Vec::new(),
        }
    }

    /// Add a theme.
    pub fn with_theme(mut self, theme: ThemeOverride) -> Self {
        self.themes.push(theme);
        self
    }
}

/// The composed palettes of one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedSet {
    /// Set name.
    pub name: String,
    /// Palettes in theme declaration order.
    pub palettes: Vec<ThemePalette>,
}

impl ComposedSet {
    /// Look up a palette by theme name.
    pub fn get(&self, theme: &str) -> Option<&ThemePalette> {
        self.palettes.iter().find(|p| p.name() == theme)
    }
}

/// All composed sets of a build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeRegistry {
    sets: Vec<ComposedSet>,
}

impl ThemeRegistry {
    /// Get a composed set by name.
    pub fn set(&self, name: &str) -> Option<&ComposedSet> {
        self.sets.iter().find(|s| s.name == name)
    }

    /// Iterate over sets in configuration order.
    pub fn sets(&self) -> impl Iterator<Item = &ComposedSet> {
        self.sets.iter()
    }

    /// Look up a palette by theme name across all sets.
    pub fn palette(&self, theme: &str) -> Option<&ThemePalette> {
        self.palettes().find(|p| p.name() == theme)
    }

    /// Iterate over every palette, set by set.
    pub fn palettes(&self) -> impl Iterator<Item = &ThemePalette> {
        self.sets.iter().flat_map(|s| s.palettes.iter())
    }

    /// The first palette of the first set.
    pub fn first(&self) -> Option<&ThemePalette> {
        self.palettes().next()
    }

    /// Total number of palettes.
    pub fn len(&self) -> usize {
        self.sets.iter().map(|s| s.palettes.len()).sum()
    }

    /// Check if there are no palettes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Composes palette sets into complete theme palettes.
#[derive(Debug, Clone)]
pub struct ThemeComposer {
    required: Vec<String>,
}

impl ThemeComposer {
    /// Create a composer requiring [`Role::REQUIRED`].
    pub fn new() -> Self {
        Self {
            required: Role::REQUIRED.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Create a composer with a custom required role set.
    pub fn with_required_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Roles every palette must define.
    pub fn required_roles(&self) -> &[String] {
        &self.required
    }

    /// Compose one theme from a base mapping.
    pub fn compose_theme(&self, base: &RoleMap, theme: &ThemeOverride) -> Result<ThemePalette> {
        let mut roles = base.clone();
        for (role, color) in &theme.overrides {
            roles.insert(role.clone(), color.clone());
        }

        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|role| !roles.contains_key(role.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(Error::incomplete_theme(&theme.name, missing));
        }

        for (role, color) in &roles {
            let property = format!("{}.{}", theme.name, role);
            validate_name(&property, role)?;
            validate_color(&property, color)?;
        }

        Ok(ThemePalette::new(&theme.name, roles))
    }

    /// Compose every theme of a set.
    ///
    /// A set without themes would never be emitted, so it is rejected rather
    /// than left unchecked.
    pub fn compose_set(&self, set: &PaletteSet) -> Result<ComposedSet> {
        if set.themes.is_empty() {
            return Err(Error::invalid_value(
                format!("palettes.{}", set.name),
                "palette set has no themes",
            ));
        }

        let palettes = set
            .themes
            .iter()
            .map(|theme| self.compose_theme(&set.base, theme))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            target: LOG_TARGET,
            "Composed palette set '{}' ({} themes)",
            set.name,
            palettes.len()
        );

        Ok(ComposedSet {
            name: set.name.clone(),
            palettes,
        })
    }

    /// Compose all sets, rejecting duplicate set or theme names.
    pub fn compose_all(&self, sets: &[PaletteSet]) -> Result<ThemeRegistry> {
        let mut set_names = HashSet::new();
        let mut theme_names = HashSet::new();

        for set in sets {
            if !set_names.insert(set.name.as_str()) {
                return Err(Error::duplicate_theme(&set.name));
            }
            for theme in &set.themes {
                if theme.name.trim().is_empty() {
                    return Err(Error::invalid_value(
                        format!("{}.themes", set.name),
                        "theme name is empty",
                    ));
                }
                if !theme_names.insert(theme.name.as_str()) {
                    return Err(Error::duplicate_theme(&theme.name));
                }
            }
        }

        let sets = sets
            .iter()
            .map(|set| self.compose_set(set))
            .collect::<Result<Vec<_>>>()?;
        Ok(ThemeRegistry { sets })
    }
}

impl Default for ThemeComposer {
    fn default() -> Self {
        Self::new()
    }
}
