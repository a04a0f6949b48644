//! Build-time style generation for Glyphcraft.
//!
//! This crate turns static configuration and a directory of vector icons into
//! one generated stylesheet:
//!
//! - **Icons**: icon files become mask-based utility classes (`.hero-check-solid`)
//! - **Themes**: a base palette plus per-theme overrides becomes complete
//!   `[data-theme]` color token sets
//! - **Tokens**: font stacks and breakpoints become `:root` custom properties
//!
//! The output is deterministic: unchanged inputs produce byte-identical CSS.
//!
//! # Example
//!
//! ```no_run
//! use glyphcraft_style::prelude::*;
//!
//! let config = BuildConfig::from_file("assets/glyphcraft.toml")?;
//! let output = Pipeline::new(config).run()?;
//! std::fs::write("app.css", output.css()).unwrap();
//! # Ok::<(), glyphcraft_style::Error>(())
//! ```

pub mod config;
pub mod icon;
pub mod pipeline;
pub mod stylesheet;
pub mod theme;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{BuildConfig, IconConfig};
    pub use crate::icon::{
        EmbedPolicy, IconCatalog, IconCatalogLoader, IconInliner, IconName, IconStyle,
        UtilityRule, UtilityRuleEmitter, UtilitySet,
    };
    pub use crate::pipeline::{BuildOutput, Pipeline};
    pub use crate::stylesheet::StyleSheet;
    pub use crate::theme::{
        DesignTokens, PaletteSet, Role, ThemeComposer, ThemeOverride, ThemePalette, ThemeRegistry,
    };
}
