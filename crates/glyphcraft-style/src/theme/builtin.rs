//! Built-in palettes and tokens.

use super::{DesignTokens, PaletteSet, Role, RoleMap, ThemeOverride};

impl PaletteSet {
    /// The `defdo` brand: a dark base with a light theme that swaps the
    /// neutral and base background roles.
    pub fn defdo() -> Self {
        let base: RoleMap = [
            (Role::PRIMARY, "#F9BC02"),
            (Role::SECONDARY, "#330054"),
            (Role::ACCENT, "#ff91af"),
            (Role::NEUTRAL, "#f4efea"),
            (Role::BASE_100, "#140021"),
            (Role::INFO, "#9ad4f4"),
            (Role::SUCCESS, "#a3e635"),
            (Role::WARNING, "#fde047"),
            (Role::ERROR, "#f32c3f"),
        ]
        .into_iter()
        .map(|(role, color)| (role.to_string(), color.to_string()))
        .collect();

        Self::new("defdo", base)
            .with_theme(ThemeOverride::new("defdo_dark"))
            .with_theme(
                ThemeOverride::new("defdo_light")
                    .set(Role::NEUTRAL, "#140021")
                    .set(Role::BASE_100, "#f4efea"),
            )
    }
}

impl DesignTokens {
    /// The default code font and extra-small breakpoint.
    pub fn defdo() -> Self {
        Self::new()
            .font("code", ["JetBrains Mono"])
            .screen("xs", "340px")
    }
}
