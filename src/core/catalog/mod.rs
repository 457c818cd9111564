//! Per-language translation catalogs.
//!
//! A catalog is a sequence of blocks, one per key:
//!
//! ```text
//! [USER_NOT_FOUND]
//! other = "User not found"
//!
//! ```
//!
//! The layout is read and written with literal line matching rather than a
//! TOML parser so that files written by earlier runs round-trip byte for byte.

pub mod reader;
pub mod writer;

use std::{collections::HashMap, fmt::Write};

pub use reader::{parse_catalog, read_catalog, read_catalog_text};
pub use writer::{CatalogPlan, CatalogStatus, plan_catalog};

use super::KeySet;

/// Prefix of the line holding a key's translated text.
pub const VALUE_PREFIX: &str = "other = ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub text: String,
}

/// Catalog content in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds the catalog for `keys`, reusing `existing` translations.
    ///
    /// A key takes its existing text when that text is non-empty, otherwise
    /// its default message, otherwise an empty string. Existing entries for
    /// keys not in `keys` are dropped.
    pub fn merge(keys: &KeySet, existing: &HashMap<String, String>) -> Self {
        let entries = keys
            .iter()
            .map(|(key, default_message)| {
                let text = existing
                    .get(key)
                    .map(String::as_str)
                    .filter(|text| !text.is_empty())
                    .or(default_message)
                    .unwrap_or_default();
                CatalogEntry {
                    key: key.to_string(),
                    text: text.to_string(),
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.text.as_str())
    }

    /// Serializes the catalog. Text is written as-is, without escaping.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = write!(out, "[{}]\n{}\"{}\"\n\n", entry.key, VALUE_PREFIX, entry.text);
        }
        out
    }
}
