//! Font and breakpoint tokens.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ThemeVariables;
use super::palette::validate_name;
use crate::{Error, Result};

/// Non-color design tokens exposed as `:root` variables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignTokens {
    /// Font stacks: `code = ["JetBrains Mono", "monospace"]` becomes `--font-code`.
    pub fonts: BTreeMap<String, Vec<String>>,
    /// Breakpoints: `xs = "340px"` becomes `--screen-xs`.
    pub screens: BTreeMap<String, String>,
}

impl DesignTokens {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font stack.
    pub fn font<I, S>(mut self, name: impl Into<String>, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fonts
            .insert(name.into(), families.into_iter().map(Into::into).collect());
        self
    }

    /// Add a breakpoint.
    pub fn screen(mut self, name: impl Into<String>, min_width: impl Into<String>) -> Self {
        self.screens.insert(name.into(), min_width.into());
        self
    }

    /// Check if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty() && self.screens.is_empty()
    }

    /// Reject malformed names, empty stacks and unusable breakpoints.
    pub fn validate(&self) -> Result<()> {
        for (name, families) in &self.fonts {
            validate_name(&format!("fonts.{name}"), name)?;
            if families.is_empty() || families.iter().any(|f| f.trim().is_empty()) {
                return Err(Error::invalid_value(
                    format!("fonts.{name}"),
                    "font stack needs at least one non-empty family",
                ));
            }
        }
        for (name, width) in &self.screens {
            let property = format!("screens.{name}");
            validate_name(&property, name)?;
            if width.trim().is_empty() {
                return Err(Error::invalid_value(property, "breakpoint is empty"));
            }
            if width.contains([';', '{', '}']) {
                return Err(Error::invalid_value(property, format!("'{width}' is not a length")));
            }
        }
        Ok(())
    }

    /// Convert to `--font-*` and `--screen-*` variables.
    pub fn to_variables(&self) -> ThemeVariables {
        let mut vars = ThemeVariables::new();
        for (name, families) in &self.fonts {
            let stack: Vec<String> = families.iter().map(|f| font_family(f)).collect();
            vars.set(format!("font-{name}"), stack.join(", "));
        }
        for (name, width) in &self.screens {
            vars.set(format!("screen-{name}"), width);
        }
        vars
    }
}

/// Serialize a family name, quoting it unless it is a plain identifier such
/// as `monospace`.
fn font_family(family: &str) -> String {
    let plain = family
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && family
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if plain {
        return family.to_string();
    }

    let mut quoted = String::with_capacity(family.len() + 2);
    // Writing to a String cannot fail.
    let _ = cssparser::serialize_string(family, &mut quoted);
    quoted
}
