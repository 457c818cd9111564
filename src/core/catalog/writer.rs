use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{Catalog, parse_catalog, read_catalog_text};
use crate::core::KeySet;

/// How a regenerated catalog compares to the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    /// No catalog file existed.
    Created,
    /// The file exists and its content changes.
    Updated,
    /// The file already holds exactly the regenerated content.
    Unchanged,
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogStatus::Created => write!(f, "created"),
            CatalogStatus::Updated => write!(f, "updated"),
            CatalogStatus::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// The regenerated content of one catalog file, not yet written.
#[derive(Debug, Clone)]
pub struct CatalogPlan {
    pub path: PathBuf,
    pub catalog: Catalog,
    pub content: String,
    pub status: CatalogStatus,
}

/// Merges `keys` with the catalog at `path` (if any) without writing.
pub fn plan_catalog(path: &Path, keys: &KeySet) -> Result<CatalogPlan> {
    let previous = read_catalog_text(path)?;
    let existing = previous
        .as_deref()
        .map(parse_catalog)
        .unwrap_or_default();

    let catalog = Catalog::merge(keys, &existing);
    let content = catalog.render();
    let status = match previous {
        None => CatalogStatus::Created,
        Some(previous) if previous == content => CatalogStatus::Unchanged,
        Some(_) => CatalogStatus::Updated,
    };

    Ok(CatalogPlan {
        path: path.to_path_buf(),
        catalog,
        content,
        status,
    })
}

impl CatalogPlan {
    /// Replaces the whole file with the regenerated content.
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.content)
            .with_context(|| format!("Failed to write catalog file: {}", self.path.display()))
    }

    pub fn is_stale(&self) -> bool {
        self.status != CatalogStatus::Unchanged
    }
}
