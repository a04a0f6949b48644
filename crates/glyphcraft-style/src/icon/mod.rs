//! Icon-to-utility pipeline.
//!
//! Turns a directory of vector icons into mask-based CSS utility classes:
//!
//! - **Catalog**: scans one directory per style and derives canonical names
//! - **Inline**: reads each icon and collapses it to a single line
//! - **Emit**: builds one utility rule per icon with shared presentational defaults
//!
//! # Example
//!
//! ```no_run
//! use glyphcraft_style::icon::{IconCatalogLoader, IconInliner, IconStyle, UtilityRuleEmitter};
//!
//! let loader = IconCatalogLoader::with_styles("priv/hero_icons/optimized", IconStyle::hero_defaults());
//! let catalog = loader.load()?;
//! let assets = IconInliner::new().inline_all(&catalog)?;
//! let utilities = UtilityRuleEmitter::new().emit(&assets);
//!
//! assert_eq!(utilities.len(), catalog.len());
//! # Ok::<(), glyphcraft_style::Error>(())
//! ```

mod catalog;
mod emit;
mod inline;
mod types;

pub use catalog::{DEFAULT_EXTENSION, IconCatalog, IconCatalogLoader};
pub use emit::{
    DATA_URI_MEDIA_TYPE, DEFAULT_PREFIX, DEFAULT_SIZE, Declaration, SharedDeclarations,
    UtilityRule, UtilityRuleEmitter, UtilitySet,
};
pub use inline::{EmbedPolicy, IconInliner, collapse_lines};
pub use types::{IconAsset, IconName, IconSource, IconStyle};
