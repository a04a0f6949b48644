//! Stylesheet assembly and serialization.
//!
//! The stylesheet is an ordered list of blocks. Theme blocks come first, then
//! the design token block, then one block per icon utility. Serialization is
//! deterministic: the same inputs always produce the same bytes.

use std::fmt::{self, Write};

use crate::icon::{Declaration, UtilitySet};
use crate::theme::{DesignTokens, ThemeRegistry, ThemeVariables};
use crate::{Error, Result};

/// First line of every generated stylesheet.
pub const HEADER: &str = "/* Generated by glyphcraft. Do not edit. */";

/// A selector list with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssBlock {
    /// Selectors, already serialized.
    pub selectors: Vec<String>,
    /// Declarations, in output order.
    pub declarations: Vec<Declaration>,
}

impl CssBlock {
    /// Create a block.
    pub fn new(selectors: Vec<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }

    /// Create a block from custom properties.
    pub fn from_variables(selectors: Vec<String>, vars: &ThemeVariables) -> Self {
        let declarations = vars
            .iter()
            .map(|(name, value)| Declaration::new(format!("--{name}"), value))
            .collect();
        Self::new(selectors, declarations)
    }

    fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "{} {{", self.selectors.join(",\n"))?;
        for decl in &self.declarations {
            writeln!(out, "  {}: {};", decl.property, decl.value)?;
        }
        writeln!(out, "}}")
    }
}

/// A generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheet {
    blocks: Vec<CssBlock>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the stylesheet from composed themes, tokens and utilities.
    ///
    /// `default_theme` names the palette also exposed under `:root`; when it
    /// is `None` the first composed palette is used.
    pub fn assemble(
        themes: &ThemeRegistry,
        default_theme: Option<&str>,
        tokens: &DesignTokens,
        utilities: &UtilitySet,
    ) -> Result<Self> {
        let default_name = match default_theme {
            Some(name) => {
                if themes.palette(name).is_none() {
                    return Err(Error::invalid_value(
                        "default_theme",
                        format!("no theme named '{name}'"),
                    ));
                }
                Some(name)
            }
            None => themes.first().map(|p| p.name()),
        };

        let mut sheet = Self::new();

        for palette in themes.palettes() {
            let mut selectors = Vec::with_capacity(2);
            if Some(palette.name()) == default_name {
                selectors.push(":root".to_string());
            }
            selectors.push(theme_selector(palette.name()));
            sheet.add_block(CssBlock::from_variables(
                selectors,
                &ThemeVariables::from_palette(palette),
            ));
        }

        if !tokens.is_empty() {
            sheet.add_block(CssBlock::from_variables(
                vec![":root".to_string()],
                &tokens.to_variables(),
            ));
        }

        for rule in &utilities.rules {
            sheet.add_block(CssBlock::new(
                vec![class_selector(&rule.class_name)],
                rule.declarations(&utilities.shared),
            ));
        }

        Ok(sheet)
    }

    /// Append a block.
    pub fn add_block(&mut self, block: CssBlock) {
        self.blocks.push(block);
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over blocks.
    pub fn iter(&self) -> impl Iterator<Item = &CssBlock> {
        self.blocks.iter()
    }

    /// Serialize to CSS text.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for block in &self.blocks {
            writeln!(f)?;
            block.write_to(f)?;
        }
        Ok(())
    }
}

/// Serialize an identifier, escaping whatever CSS would otherwise end it
/// early. A leading `--` is kept, so custom property names work too.
pub fn css_identifier(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());
    // Writing to a String cannot fail.
    let _ = cssparser::serialize_identifier(name, &mut ident);
    ident
}

/// `.name`, with the identifier escaped as needed.
pub fn class_selector(class_name: &str) -> String {
    format!(".{}", css_identifier(class_name))
}

/// `[data-theme="name"]`.
pub fn theme_selector(theme: &str) -> String {
    let mut selector = String::from("[data-theme=");
    let _ = cssparser::serialize_string(theme, &mut selector);
    selector.push(']');
    selector
}
