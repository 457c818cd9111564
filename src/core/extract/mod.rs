//! Key extraction from a single protobuf definition file.
//!
//! Two passes feed one ordered key list:
//! - Enum pass: field names of every enum accepted by the [`EnumFilter`],
//!   walked on the parsed descriptor.
//! - Validation pass: rule ids (and their messages) from CEL rule blocks,
//!   scanned on the raw text.

pub mod enums;
pub mod validation;

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

pub use enums::{EnumFilter, enum_field_keys};
pub use validation::{ValidationRule, scan_validation_rules};

/// Options controlling what is extracted from each file.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub filter: EnumFilter,
    pub validation_marker: String,
}

/// Keys found in one file.
///
/// `keys` is in discovery order and may contain duplicates; de-duplication
/// happens when files are merged into a [`crate::core::KeySet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileKeys {
    pub keys: Vec<String>,
    /// Default message per rule id. The last closed block for an id wins.
    pub messages: HashMap<String, String>,
}

impl FileKeys {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Extracts keys from the content of one definition file.
///
/// `file_name` is only used in parser diagnostics.
pub fn extract_keys(file_name: &str, content: &str, options: &ExtractOptions) -> Result<FileKeys> {
    let descriptor = protox_parse::parse(file_name, content)
        .with_context(|| format!("Failed to parse proto file: {}", file_name))?;

    let mut file_keys = FileKeys {
        keys: enum_field_keys(&descriptor, &options.filter),
        messages: HashMap::new(),
    };

    for rule in scan_validation_rules(content, &options.validation_marker) {
        if let Some(message) = rule.message {
            file_keys.messages.insert(rule.id.clone(), message);
        }
        file_keys.keys.push(rule.id);
    }

    Ok(file_keys)
}

/// Reads `path` and extracts its keys.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<FileKeys> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read proto file: {}", path.display()))?;
    extract_keys(&path.to_string_lossy(), &content, options)
}
