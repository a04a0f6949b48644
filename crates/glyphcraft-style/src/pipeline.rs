//! The build pipeline.
//!
//! Runs theme composition and the icon pipeline from one [`BuildConfig`] and
//! assembles the result into a [`StyleSheet`]. Every step must succeed before
//! anything is returned.

use crate::Result;
use crate::config::BuildConfig;
use crate::icon::{IconCatalog, IconCatalogLoader, IconInliner, UtilityRuleEmitter, UtilitySet};
use crate::stylesheet::StyleSheet;
use crate::theme::{ThemeComposer, ThemeRegistry};

const LOG_TARGET: &str = "glyphcraft_style::pipeline";

/// Everything produced by one build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// Composed palettes.
    pub themes: ThemeRegistry,
    /// Discovered icons.
    pub catalog: IconCatalog,
    /// Generated icon rules.
    pub utilities: UtilitySet,
    /// The assembled stylesheet.
    pub stylesheet: StyleSheet,
}

impl BuildOutput {
    /// Serialize the stylesheet.
    pub fn css(&self) -> String {
        self.stylesheet.to_css()
    }
}

/// Runs a build from a configuration value.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: BuildConfig,
}

impl Pipeline {
    /// Create a pipeline.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Compose every configured palette set.
    pub fn compose_themes(&self) -> Result<ThemeRegistry> {
        ThemeComposer::with_required_roles(self.config.required_roles.iter().cloned())
            .compose_all(&self.config.palettes)
    }

    /// Scan the icon directories.
    pub fn load_catalog(&self) -> Result<IconCatalog> {
        let icons = &self.config.icons;
        IconCatalogLoader::with_styles(&icons.root, icons.styles.clone())
            .with_extension(icons.extension_filter())
            .load()
    }

    /// Inline and emit rules for a catalog.
    pub fn emit_utilities(&self, catalog: &IconCatalog) -> Result<UtilitySet> {
        let icons = &self.config.icons;
        let assets = IconInliner::with_policy(icons.embed_policy()).inline_all(catalog)?;
        Ok(UtilityRuleEmitter::new()
            .prefix(&icons.prefix)
            .size(&icons.size)
            .emit(&assets))
    }

    /// Run the full build.
    pub fn run(&self) -> Result<BuildOutput> {
        self.config.validate()?;

        let themes = self.compose_themes()?;
        let catalog = self.load_catalog()?;
        let utilities = self.emit_utilities(&catalog)?;
        let stylesheet = StyleSheet::assemble(
            &themes,
            self.config.default_theme.as_deref(),
            &self.config.tokens,
            &utilities,
        )?;

        tracing::info!(
            target: LOG_TARGET,
            "Built stylesheet: {} themes, {} icons, {} blocks",
            themes.len(),
            utilities.len(),
            stylesheet.len()
        );

        Ok(BuildOutput {
            themes,
            catalog,
            utilities,
            stylesheet,
        })
    }
}
