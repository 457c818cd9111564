use std::{collections::HashMap, fs, io::ErrorKind, path::Path};

use anyhow::{Context, Result};

use super::VALUE_PREFIX;

/// Reads the translations of an existing catalog file.
///
/// A missing file yields an empty map.
pub fn read_catalog(path: &Path) -> Result<HashMap<String, String>> {
    Ok(read_catalog_text(path)?
        .map(|content| parse_catalog(&content))
        .unwrap_or_default())
}

/// Reads the raw text of a catalog file, `None` if it does not exist.
pub fn read_catalog_text(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read catalog file: {}", path.display()))
        }
    }
}

/// Parses catalog text line by line.
///
/// `[Key]` sets the current key and `other = "..."` records its value with
/// one surrounding pair of quotes stripped. Anything else, or a value before any key,
/// is ignored.
pub fn parse_catalog(content: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    let mut current_key: Option<&str> = None;

    for line in content.lines() {
        let line = line.trim();
        if let Some(key) = line
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            current_key = Some(key).filter(|key| !key.is_empty());
        } else if let Some(value) = line.strip_prefix(VALUE_PREFIX)
            && let Some(key) = current_key
        {
            entries.insert(key.to_string(), unquote(value).to_string());
        }
    }

    entries
}

/// Strips at most one leading and one trailing `"`.
fn unquote(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
