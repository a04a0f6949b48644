//! End-to-end pipeline tests against real directory trees.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use glyphcraft_style::Error;
use glyphcraft_style::prelude::*;
use tempfile::TempDir;

const CHECK_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">\n  <path d=\"M4.5 12.75l6 6 9-13.5\"/>\n</svg>\n";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn write_icon(root: &Path, dir: &str, file: &str, content: &str) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

/// A catalog root with outline and solid styles, each holding `check`.
fn hero_tree() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_icon(dir.path(), "24/outline", "check.svg", CHECK_SVG);
    write_icon(dir.path(), "24/solid", "check.svg", CHECK_SVG);
    dir
}

fn config_for(root: &Path) -> BuildConfig {
    let mut config = BuildConfig::default();
    config.icons.root = root.to_path_buf();
    config.icons.styles = vec![
        IconStyle::new("", "24/outline"),
        IconStyle::new("-solid", "24/solid"),
    ];
    config
}

#[test]
fn test_outline_and_solid_check() {
    init_tracing();
    let tree = hero_tree();
    let output = Pipeline::new(config_for(tree.path())).run().unwrap();

    let keys: Vec<_> = output.utilities.keys().map(IconName::as_str).collect();
    assert_eq!(keys, ["check", "check-solid"]);

    let outline = output.utilities.get("check").unwrap();
    let solid = output.utilities.get("check-solid").unwrap();
    assert_ne!(outline.custom_property, solid.custom_property);
    assert_eq!(outline.custom_property, "--hero-check");
    assert_eq!(solid.custom_property, "--hero-check-solid");

    let shared = &output.utilities.shared;
    assert_eq!(shared.get("display"), Some("inline-block"));
    assert_eq!(shared.get("vertical-align"), Some("middle"));
    assert_eq!(shared.get("background-color"), Some("currentColor"));
    assert_eq!(shared.get("width"), Some("1.25rem"));
    assert_eq!(shared.get("height"), Some("1.25rem"));

    // Only the binding differs between the two rules.
    let outline_decls = outline.declarations(shared);
    let solid_decls = solid.declarations(shared);
    assert_eq!(outline_decls[3..], solid_decls[3..]);

    let css = output.css();
    assert!(css.contains(".hero-check {\n"));
    assert!(css.contains(".hero-check-solid {\n"));
    assert!(css.contains(
        "--hero-check: url('data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">  <path d=\"M4.5 12.75l6 6 9-13.5\"/></svg>');"
    ));
}

#[test]
fn test_every_source_yields_one_rule() {
    let dir = TempDir::new().unwrap();
    for name in ["x-mark", "arrow-path", "bell", "check"] {
        write_icon(dir.path(), "24/outline", &format!("{name}.svg"), "<svg/>");
        write_icon(dir.path(), "24/solid", &format!("{name}.svg"), "<svg/>");
    }
    write_icon(dir.path(), "24/solid", "bolt.svg", "<svg/>");

    let output = Pipeline::new(config_for(dir.path())).run().unwrap();

    let names: BTreeSet<_> = output.catalog.names().map(|n| n.as_str().to_string()).collect();
    let keys: BTreeSet<_> = output.utilities.keys().map(|n| n.as_str().to_string()).collect();
    assert_eq!(output.catalog.len(), 9);
    assert_eq!(output.utilities.len(), 9);
    assert_eq!(names, keys);
}

#[test]
fn test_rebuild_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    // Created out of order so listing order cannot line up by accident.
    for name in ["zoom", "alpha", "mid", "beta"] {
        write_icon(dir.path(), "24/outline", &format!("{name}.svg"), "<svg>\r\n</svg>");
    }
    write_icon(dir.path(), "24/solid", "alpha.svg", "<svg/>");

    let config = config_for(dir.path());
    let first = Pipeline::new(config.clone()).run().unwrap().css();
    let second = Pipeline::new(config).run().unwrap().css();
    assert_eq!(first, second);

    let alpha = first.find(".hero-alpha {").unwrap();
    let zoom = first.find(".hero-zoom {").unwrap();
    assert!(alpha < zoom);
}

#[test]
fn test_duplicate_derived_names_fail() {
    let dir = TempDir::new().unwrap();
    write_icon(dir.path(), "24/solid", "check.svg", "<svg/>");
    write_icon(dir.path(), "20/solid", "check.svg", "<svg/>");

    let mut config = config_for(dir.path());
    config.icons.styles = vec![
        IconStyle::new("-solid", "24/solid"),
        IconStyle::new("-solid", "20/solid"),
    ];

    let err = Pipeline::new(config).run().unwrap_err();
    match err {
        Error::DuplicateName { name, .. } => assert_eq!(name, "check-solid"),
        other => panic!("expected duplicate name, got {other:?}"),
    }
}

#[test]
fn test_missing_style_directory() {
    let tree = hero_tree();
    let mut config = config_for(tree.path());
    config.icons.styles.push(IconStyle::new("-mini", "20/solid"));

    let err = Pipeline::new(config).run().unwrap_err();
    assert!(matches!(err, Error::NotFound { ref path } if path.ends_with("20/solid")));
}

#[test]
fn test_single_quote_content() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    write_icon(dir.path(), "24/outline", "quote.svg", "<svg class='q'/>");
    write_icon(dir.path(), "24/solid", "ok.svg", "<svg/>");

    // Default: passes through unescaped and corrupts the quoted URL.
    let css = Pipeline::new(config_for(dir.path())).run().unwrap().css();
    assert!(css.contains("url('data:image/svg+xml;utf8,<svg class='q'/>')"));

    let mut strict = config_for(dir.path());
    strict.icons.strict_embedding = true;
    let err = Pipeline::new(strict).run().unwrap_err();
    assert!(matches!(err, Error::UnsafeContent { ref name, .. } if name == "quote"));
}

#[test]
fn test_defdo_theme_blocks() {
    let tree = hero_tree();
    let output = Pipeline::new(config_for(tree.path())).run().unwrap();
    let css = output.css();

    assert!(css.contains(":root,\n[data-theme=\"defdo_dark\"] {\n  --color-accent: #ff91af;\n"));
    assert!(css.contains("[data-theme=\"defdo_light\"] {\n"));
    assert!(css.contains("  --font-code: \"JetBrains Mono\";\n"));

    let light = output.themes.palette("defdo_light").unwrap();
    assert_eq!(light.get("neutral"), Some("#140021"));
    assert_eq!(light.get("base-100"), Some("#f4efea"));
    assert_eq!(light.get("primary"), Some("#F9BC02"));

    // Themes precede tokens, which precede icons.
    let theme = css.find("[data-theme=").unwrap();
    let tokens = css.find("--font-code").unwrap();
    let icons = css.find(".hero-check").unwrap();
    assert!(theme < tokens && tokens < icons);
}

#[test]
fn test_override_adds_role() {
    let tree = hero_tree();
    let mut config = config_for(tree.path());
    config.required_roles = vec!["primary".into()];
    config.palettes = vec![
        PaletteSet::new(
            "brand",
            [("primary".to_string(), "#000000".to_string())].into(),
        )
        .with_theme(ThemeOverride::new("brand_info").set("info", "#9ad4f4")),
    ];

    let output = Pipeline::new(config).run().unwrap();
    let palette = output.themes.palette("brand_info").unwrap();
    assert_eq!(palette.get("info"), Some("#9ad4f4"));
    assert_eq!(palette.get("primary"), Some("#000000"));
}

#[test]
fn test_config_file_build() {
    let tree = hero_tree();
    let config_path = tree.path().join("glyphcraft.toml");
    fs::write(
        &config_path,
        r#"
[icons]
root = "."
prefix = "icon"
size = "1.5rem"
styles = [{ dir = "24/outline" }, { suffix = "-solid", dir = "24/solid" }]

[tokens]
screens = { xs = "340px", sm = "640px" }
"#,
    )
    .unwrap();

    let config = BuildConfig::from_file(&config_path).unwrap();
    let css = Pipeline::new(config).run().unwrap().css();

    assert!(css.contains(".icon-check-solid {\n"));
    assert!(css.contains("  width: 1.5rem;\n"));
    assert!(css.contains("  --screen-sm: 640px;\n  --screen-xs: 340px;\n"));
    assert!(!css.contains("--font-code"));
}

#[test]
fn test_dotted_icon_name_is_escaped() {
    let dir = TempDir::new().unwrap();
    write_icon(dir.path(), "24/outline", "arrow.5x.svg", "<svg/>");
    write_icon(dir.path(), "24/solid", "check.svg", "<svg/>");

    let css = Pipeline::new(config_for(dir.path())).run().unwrap().css();
    assert!(css.contains(".hero-arrow\\.5x {\n"));
    assert!(css.contains("  --hero-arrow\\.5x: url('data:image/svg+xml;utf8,<svg/>');\n"));
    assert!(css.contains("  mask: var(--hero-arrow\\.5x);\n"));

    // The binding tokenizes as one property name followed by its colon.
    let line = css
        .lines()
        .find(|l| l.trim_start().starts_with("--hero-arrow"))
        .unwrap();
    let mut input = cssparser::ParserInput::new(line);
    let mut parser = cssparser::Parser::new(&mut input);
    assert!(matches!(
        parser.next(),
        Ok(cssparser::Token::Ident(name)) if &**name == "--hero-arrow.5x"
    ));
    assert!(matches!(parser.next(), Ok(cssparser::Token::Colon)));
}

#[test]
fn test_role_key_cannot_escape_block() {
    let tree = hero_tree();
    let config_path = tree.path().join("glyphcraft.toml");
    fs::write(
        &config_path,
        r##"
required_roles = ["primary"]

[icons]
root = "."
styles = [{ dir = "24/outline" }]

[[palettes]]
name = "brand"
base = { primary = "#000000", "x: red; } body { color" = "#fff" }
themes = [{ name = "brand_dark" }]
"##,
    )
    .unwrap();

    let config = BuildConfig::from_file(&config_path).unwrap();
    let err = Pipeline::new(config).run().unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }), "got {err:?}");
}

#[test]
fn test_palette_set_without_themes_fails() {
    let tree = hero_tree();
    let mut config = config_for(tree.path());
    config.palettes.push(PaletteSet::new(
        "b",
        [("primary".to_string(), "#12".to_string())].into(),
    ));

    let err = Pipeline::new(config).run().unwrap_err();
    assert!(
        matches!(err, Error::InvalidValue { ref property, .. } if property == "palettes.b"),
        "got {err:?}"
    );
}

#[test]
fn test_padded_color_is_rejected() {
    let tree = hero_tree();
    let mut config = config_for(tree.path());
    config.required_roles = vec!["primary".into()];
    config.palettes = vec![
        PaletteSet::new(
            "brand",
            [("primary".to_string(), " #000000 ".to_string())].into(),
        )
        .with_theme(ThemeOverride::new("brand_dark")),
    ];

    let err = Pipeline::new(config).run().unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }), "got {err:?}");
}
