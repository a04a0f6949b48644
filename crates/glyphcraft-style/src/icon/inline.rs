//! Icon content inlining.
//!
//! Icon markup is embedded in a quoted `url('data:...')` value. The inliner
//! only collapses the markup to one line; it never escapes. Content holding a
//! single quote would terminate the quoted URL early, so it is reported
//! according to the configured [`EmbedPolicy`].

use std::fs;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::catalog::IconCatalog;
use super::types::{IconAsset, IconSource};
use crate::{Error, Result};

const LOG_TARGET: &str = "glyphcraft_style::icon::inline";

/// How content that cannot be embedded safely is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedPolicy {
    /// Log a warning and embed the content unchanged.
    #[default]
    Warn,
    /// Fail the build with [`Error::UnsafeContent`].
    Strict,
}

/// Reads icon sources and collapses them to a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconInliner {
    policy: EmbedPolicy,
}

impl IconInliner {
    /// Create an inliner with the default [`EmbedPolicy::Warn`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inliner with an explicit policy.
    pub fn with_policy(policy: EmbedPolicy) -> Self {
        Self { policy }
    }

    /// Get the embed policy.
    pub fn policy(&self) -> EmbedPolicy {
        self.policy
    }

    /// Read and inline one icon.
    pub fn inline(&self, source: &IconSource) -> Result<IconAsset> {
        let raw = fs::read_to_string(&source.path).map_err(|e| Error::io(&source.path, e))?;
        let content = collapse_lines(&raw);

        if content.contains('\'') {
            match self.policy {
                EmbedPolicy::Warn => tracing::warn!(
                    target: LOG_TARGET,
                    "Icon '{}' ({}) contains a single quote; the generated rule may be corrupt",
                    source.name,
                    source.path.display()
                ),
                EmbedPolicy::Strict => {
                    return Err(Error::unsafe_content(source.name.as_str(), &source.path));
                }
            }
        }

        Ok(IconAsset::new(source.name.clone(), content, &source.path))
    }

    /// Inline every icon in the catalog, preserving catalog order.
    #[cfg(not(feature = "parallel"))]
    pub fn inline_all(&self, catalog: &IconCatalog) -> Result<Vec<IconAsset>> {
        catalog.iter().map(|source| self.inline(source)).collect()
    }

    /// Inline every icon in the catalog, preserving catalog order.
    ///
    /// Reads run on the rayon pool. Results are gathered in catalog order
    /// before errors are checked, so the reported error is the same one the
    /// serial version returns.
    #[cfg(feature = "parallel")]
    pub fn inline_all(&self, catalog: &IconCatalog) -> Result<Vec<IconAsset>> {
        let results: Vec<Result<IconAsset>> = catalog
            .sources()
            .par_iter()
            .map(|source| self.inline(source))
            .collect();
        results.into_iter().collect()
    }
}

/// Remove every `\r\n`, `\n` and `\r` from `content`.
pub fn collapse_lines(content: &str) -> String {
    content.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}
