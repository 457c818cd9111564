//! Discovery of the `.proto` files to scan.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;
use walkdir::WalkDir;

use crate::config::PROTO_EXTENSION;
use crate::utils::is_glob_pattern;

/// Returns the `.proto` files selected by `pattern`, in a stable order.
///
/// - Glob patterns are expanded; matching `.proto` files are taken as-is and
///   matching directories are walked.
/// - A literal path to a directory is walked.
/// - Any other literal path selects its parent directory, which is walked
///   (a file name without a directory means the current directory).
///
/// Walks are recursive and sorted by file name. Access errors abort
/// discovery.
pub fn discover_proto_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let roots = if is_glob_pattern(pattern) {
        glob(pattern)
            .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to expand glob pattern: \"{}\"", pattern))?
    } else {
        vec![search_root(pattern)]
    };

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            if is_proto_file(&root) && seen.insert(root.clone()) {
                files.push(root);
            }
            continue;
        }

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to find proto files in: {}", root.display()))?;
            let path = entry.path();
            if entry.file_type().is_file() && is_proto_file(path) && seen.insert(path.to_path_buf())
            {
                files.push(path.to_path_buf());
            }
        }
    }

    Ok(files)
}

/// Directory walked for a literal (non-glob) pattern.
pub fn search_root(pattern: &str) -> PathBuf {
    let path = Path::new(pattern);
    if path.is_dir() {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_proto_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PROTO_EXTENSION)
}
