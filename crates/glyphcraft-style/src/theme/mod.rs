//! Theme token model: palettes composed from a base plus overrides.

mod builtin;
mod compose;
mod palette;
mod tokens;
mod variables;

pub use compose::{ComposedSet, PaletteSet, ThemeComposer, ThemeOverride, ThemeRegistry};
pub use palette::{Role, RoleMap, ThemePalette, validate_color, validate_name};
pub use tokens::DesignTokens;
pub use variables::{COLOR_PREFIX, ThemeVariables};
