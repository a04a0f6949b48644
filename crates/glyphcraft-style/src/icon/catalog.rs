//! Icon catalog discovery.
//!
//! The catalog scans one directory per configured [`IconStyle`] and derives a
//! canonical [`IconName`] for every icon file it finds. Entries are sorted by
//! file name before derivation so the result never depends on the order the
//! operating system lists a directory in.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{IconName, IconSource, IconStyle};
use crate::{Error, Result};

const LOG_TARGET: &str = "glyphcraft_style::icon::catalog";

/// Default file extension for icon sources.
pub const DEFAULT_EXTENSION: &str = "svg";

/// Discovers icon sources below a catalog root.
#[derive(Debug, Clone)]
pub struct IconCatalogLoader {
    /// Catalog root directory
    root: PathBuf,
    /// Style variants, scanned in order
    styles: Vec<IconStyle>,
    /// Only files with this extension are cataloged, if set
    extension: Option<String>,
}

impl IconCatalogLoader {
    /// Create a loader for `root` with no styles.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            styles: Vec::new(),
            extension: Some(DEFAULT_EXTENSION.to_string()),
        }
    }

    /// Create a loader with the given styles.
    pub fn with_styles(root: impl Into<PathBuf>, styles: Vec<IconStyle>) -> Self {
        Self {
            styles,
            ..Self::new(root)
        }
    }

    /// Restrict cataloged files to an extension, or accept every file with `None`.
    pub fn with_extension(mut self, extension: Option<impl Into<String>>) -> Self {
        self.extension = extension.map(Into::into);
        self
    }

    /// Add a style variant. Styles are scanned in insertion order.
    pub fn add_style(&mut self, style: IconStyle) {
        self.styles.push(style);
    }

    /// Get the catalog root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the configured styles.
    pub fn styles(&self) -> &[IconStyle] {
        &self.styles
    }

    /// Scan every style directory and build the catalog.
    ///
    /// Fails with [`Error::NotFound`] if a style directory is missing and with
    /// [`Error::DuplicateName`] if two files derive the same canonical name.
    pub fn load(&self) -> Result<IconCatalog> {
        let mut sources = Vec::new();

        for style in &self.styles {
            let dir = self.root.join(&style.dir);
            let files = self.list_files(&dir)?;
            tracing::debug!(
                target: LOG_TARGET,
                "Scanned {} ({} icons, suffix {:?})",
                dir.display(),
                files.len(),
                style.suffix
            );

            sources.extend(files.into_iter().map(|(stem, path)| IconSource {
                name: IconName::derive(&stem, &style.suffix),
                suffix: style.suffix.clone(),
                dir: style.dir.clone(),
                path,
            }));
        }

        IconCatalog::from_sources(sources)
    }

    /// List matching files in `dir` as (stem, path), sorted by file name.
    fn list_files(&self, dir: &Path) -> Result<Vec<(String, PathBuf)>> {
        let entries = fs::read_dir(dir).map_err(|e| Error::from_dir_io(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();

            if !path.is_file() {
                tracing::debug!(target: LOG_TARGET, "Skipping non-file {}", path.display());
                continue;
            }
            if !self.matches_extension(&path) {
                tracing::debug!(target: LOG_TARGET, "Skipping {}", path.display());
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| {
                    Error::invalid_value(
                        path.display().to_string(),
                        "icon file name is not valid UTF-8",
                    )
                })?
                .to_string();
            files.push((stem, path));
        }

        files.sort_by(|(_, a), (_, b)| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        match &self.extension {
            None => true,
            Some(wanted) => path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(wanted)),
        }
    }
}

/// The set of discovered icon sources.
///
/// Sources keep discovery order: styles in configuration order, files sorted
/// within each style.
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    sources: Vec<IconSource>,
    /// Canonical name -> index into `sources`
    index: HashMap<IconName, usize>,
}

impl IconCatalog {
    /// Build a catalog from sources, rejecting duplicate names.
    pub fn from_sources(sources: impl IntoIterator<Item = IconSource>) -> Result<Self> {
        let mut catalog = Self::default();
        for source in sources {
            catalog.insert(source)?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, source: IconSource) -> Result<()> {
        if let Some(&existing) = self.index.get(&source.name) {
            return Err(Error::duplicate_name(
                source.name.as_str(),
                &self.sources[existing].path,
                &source.path,
            ));
        }
        self.index.insert(source.name.clone(), self.sources.len());
        self.sources.push(source);
        Ok(())
    }

    /// Look up a source by canonical name.
    pub fn get(&self, name: &str) -> Option<&IconSource> {
        self.index
            .get(&IconName::new(name))
            .map(|&i| &self.sources[i])
    }

    /// Check if an icon exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over sources in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &IconSource> {
        self.sources.iter()
    }

    /// Get all sources.
    pub fn sources(&self) -> &[IconSource] {
        &self.sources
    }

    /// Iterate over canonical names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &IconName> {
        self.sources.iter().map(|s| &s.name)
    }

    /// Get the number of icons.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<svg/>").unwrap();
    }

    #[test]
    fn test_load_derives_names_in_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("24/outline/check.svg"));
        touch(&dir.path().join("24/outline/arrow.svg"));
        touch(&dir.path().join("24/solid/check.svg"));

        let loader = IconCatalogLoader::with_styles(
            dir.path(),
            vec![IconStyle::new("", "24/outline"), IconStyle::new("-solid", "24/solid")],
        );
        let catalog = loader.load().unwrap();

        let names: Vec<_> = catalog.names().map(IconName::as_str).collect();
        assert_eq!(names, ["arrow", "check", "check-solid"]);
        assert_eq!(catalog.get("check-solid").unwrap().stem(), "check");
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader =
            IconCatalogLoader::with_styles(dir.path(), vec![IconStyle::new("", "24/outline")]);

        let err = loader.load().unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
    }

    #[test]
    fn test_duplicate_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a/check.svg"));
        touch(&dir.path().join("b/check.svg"));

        let loader = IconCatalogLoader::with_styles(
            dir.path(),
            vec![IconStyle::new("-solid", "a"), IconStyle::new("-solid", "b")],
        );

        match loader.load() {
            Err(Error::DuplicateName { name, first, second }) => {
                assert_eq!(name, "check-solid");
                assert!(first.ends_with("a/check.svg"));
                assert!(second.ends_with("b/check.svg"));
            }
            other => panic!("expected duplicate name error, got {other:?}"),
        }
    }

    #[test]
    fn test_extension_filter() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("icons/check.svg"));
        touch(&dir.path().join("icons/README.md"));
        fs::create_dir_all(dir.path().join("icons/nested")).unwrap();

        let styles = vec![IconStyle::new("", "icons")];
        let filtered = IconCatalogLoader::with_styles(dir.path(), styles.clone())
            .load()
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains("check"));

        let all = IconCatalogLoader::with_styles(dir.path(), styles)
            .with_extension(None::<String>)
            .load()
            .unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains("README"));
    }

    #[test]
    fn test_from_sources() {
        let source = |name: &str, dir: &str| IconSource {
            name: IconName::new(name),
            suffix: String::new(),
            dir: PathBuf::from(dir),
            path: PathBuf::from(format!("{dir}/{name}.svg")),
        };

        let sources = [source("bell", "outline"), source("bolt", "solid")];
        let catalog = IconCatalog::from_sources(sources).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("bolt").unwrap().dir, PathBuf::from("solid"));
        assert!(!catalog.contains("check"));

        let sources = [source("bell", "a"), source("bell", "b")];
        let err = IconCatalog::from_sources(sources).unwrap_err();
        assert!(
            matches!(err, Error::DuplicateName { ref first, .. } if first.ends_with("a/bell.svg"))
        );
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let catalog = IconCatalogLoader::with_styles(dir.path(), vec![IconStyle::new("", "empty")])
            .load()
            .unwrap();
        assert!(catalog.is_empty());
    }
}
