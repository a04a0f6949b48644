//! Utility rule generation.
//!
//! Each icon becomes one utility class. The class binds a custom property to
//! the icon's data URI and uses it as a mask over `currentColor`, so the icon
//! takes the surrounding text color. Everything except the binding is shared
//! by all rules.

use super::types::{IconAsset, IconName};
use crate::stylesheet::css_identifier;

/// Default class and custom-property prefix.
pub const DEFAULT_PREFIX: &str = "hero";

/// Default icon width and height.
pub const DEFAULT_SIZE: &str = "1.25rem";

/// Media type used for inlined icon markup.
pub const DATA_URI_MEDIA_TYPE: &str = "image/svg+xml;utf8";

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, including any vendor prefix or leading `--`.
    pub property: String,
    /// Property value.
    pub value: String,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Declarations identical for every icon rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedDeclarations {
    declarations: Vec<Declaration>,
}

impl SharedDeclarations {
    /// Create the shared block for a given icon size.
    pub fn new(size: &str) -> Self {
        Self {
            declarations: vec![
                Declaration::new("background-color", "currentColor"),
                Declaration::new("vertical-align", "middle"),
                Declaration::new("display", "inline-block"),
                Declaration::new("width", size),
                Declaration::new("height", size),
            ],
        }
    }

    /// Iterate over the shared declarations.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Get a shared value by property name.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

impl Default for SharedDeclarations {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

/// The generated rule for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityRule {
    /// Canonical icon name; the match key.
    pub name: IconName,
    /// Custom property holding the data URI, e.g. `--hero-check`. Escaped
    /// so the property and its `var()` references always parse.
    pub custom_property: String,
    /// Class name without the leading dot, e.g. `hero-check`.
    pub class_name: String,
    /// `url('data:...')` value bound to the custom property.
    pub data_uri: String,
}

impl UtilityRule {
    /// Build the rule for an asset.
    pub fn new(prefix: &str, asset: &IconAsset) -> Self {
        Self {
            name: asset.name.clone(),
            custom_property: css_identifier(&format!("--{prefix}-{}", asset.name)),
            class_name: format!("{prefix}-{}", asset.name),
            data_uri: format!("url('data:{DATA_URI_MEDIA_TYPE},{}')", asset.content),
        }
    }

    /// The declarations that vary per icon: the binding and the masks.
    pub fn bound_declarations(&self) -> [Declaration; 3] {
        let var = format!("var({})", self.custom_property);
        [
            Declaration::new(&self.custom_property, &self.data_uri),
            Declaration::new("-webkit-mask", &var),
            Declaration::new("mask", var),
        ]
    }

    /// All declarations for this rule, bound first and shared after.
    pub fn declarations(&self, shared: &SharedDeclarations) -> Vec<Declaration> {
        let mut all: Vec<Declaration> = self.bound_declarations().into();
        all.extend(shared.iter().cloned());
        all
    }
}

/// The full set of icon rules with their shared block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UtilitySet {
    /// Declarations common to every rule.
    pub shared: SharedDeclarations,
    /// Rules sorted by canonical name.
    pub rules: Vec<UtilityRule>,
}

impl UtilitySet {
    /// Look up a rule by canonical name.
    pub fn get(&self, name: &str) -> Option<&UtilityRule> {
        self.rules
            .binary_search_by(|r| r.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.rules[i])
    }

    /// Iterate over the match keys.
    pub fn keys(&self) -> impl Iterator<Item = &IconName> {
        self.rules.iter().map(|r| &r.name)
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Turns inlined icons into utility rules.
#[derive(Debug, Clone)]
pub struct UtilityRuleEmitter {
    prefix: String,
    size: String,
}

impl UtilityRuleEmitter {
    /// Create an emitter with the default prefix and size.
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            size: DEFAULT_SIZE.to_string(),
        }
    }

    /// Set the class and custom-property prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the shared width and height.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Emit one rule per asset, sorted by canonical name.
    pub fn emit(&self, assets: &[IconAsset]) -> UtilitySet {
        let mut rules: Vec<UtilityRule> = assets
            .iter()
            .map(|asset| UtilityRule::new(&self.prefix, asset))
            .collect();
        rules.sort_by(|a, b| a.name.cmp(&b.name));

        UtilitySet {
            shared: SharedDeclarations::new(&self.size),
            rules,
        }
    }
}

impl Default for UtilityRuleEmitter {
    fn default() -> Self {
        Self::new()
    }
}
