//! Command implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glyphcraft_style::prelude::*;
use tempfile::NamedTempFile;

use crate::args::{Command, DEFAULT_CONFIG};

/// Load the configuration named on the command line.
///
/// An explicit path must exist. Without one, `glyphcraft.toml` in the working
/// directory is used if present, and the built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<BuildConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG);
            if !path.exists() {
                tracing::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG);
                return Ok(BuildConfig::default());
            }
            path
        }
    };

    BuildConfig::from_file(&path)
        .with_context(|| format!("failed to load configuration '{}'", path.display()))
}

/// Run a command, writing any report to `out`.
pub fn run(command: &Command, config: BuildConfig, out: &mut impl Write) -> Result<()> {
    let pipeline = Pipeline::new(config);

    match command {
        Command::Build { output } => {
            let built = pipeline.run().context("build failed")?;
            let css = built.css();
            match output {
                Some(path) => write_atomic(path, &css)?,
                None => out.write_all(css.as_bytes())?,
            }
        }
        Command::Icons => {
            let catalog = pipeline.load_catalog().context("failed to load icon catalog")?;
            let prefix = &pipeline.config().icons.prefix;
            for source in catalog.iter() {
                writeln!(
                    out,
                    "{}\t{}-{}\t{}",
                    source.name,
                    prefix,
                    source.name,
                    source.path.display()
                )?;
            }
        }
        Command::Themes => {
            let themes = pipeline.compose_themes().context("failed to compose themes")?;
            for set in themes.sets() {
                for palette in &set.palettes {
                    for (role, color) in palette.iter() {
                        writeln!(out, "{}\t{}\t{}\t{}", set.name, palette.name(), role, color)?;
                    }
                }
            }
        }
        Command::Check => {
            let built = pipeline.run().context("check failed")?;
            writeln!(
                out,
                "ok: {} themes, {} icons, {} bytes",
                built.themes.len(),
                built.utilities.len(),
                built.css().len()
            )?;
        }
    }

    Ok(())
}

/// Write `contents` to `path` through a temporary file in the same directory,
/// so readers never observe a partial stylesheet.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in '{}'", dir.display()))?;
    temp.write_all(contents.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    temp.persist(path)
        .with_context(|| format!("failed to replace '{}'", path.display()))?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
