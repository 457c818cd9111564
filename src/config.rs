use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::utils::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".protoglotrc.json";

/// Extension of the definition files that are scanned for keys.
pub const PROTO_EXTENSION: &str = "proto";

/// Extension of the generated catalog files.
pub const CATALOG_EXTENSION: &str = "toml";

/// Substring that opens a protovalidate CEL rule block.
pub const DEFAULT_VALIDATION_MARKER: &str = "(buf.validate.field).cel";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_proto_pattern")]
    pub proto_pattern: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub enum_prefix: String,
    #[serde(default)]
    pub enum_suffix: String,
    #[serde(default = "default_validation_marker")]
    pub validation_marker: String,
}

fn default_proto_pattern() -> String {
    "internal/common/xerr/errors.proto".to_string()
}

fn default_output_dir() -> String {
    "./i18n/".to_string()
}

fn default_languages() -> Vec<String> {
    ["en", "zh"].map(String::from).to_vec()
}

fn default_validation_marker() -> String {
    DEFAULT_VALIDATION_MARKER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proto_pattern: default_proto_pattern(),
            output_dir: default_output_dir(),
            languages: default_languages(),
            enum_prefix: String::new(),
            enum_suffix: String::new(),
            validation_marker: default_validation_marker(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `protoPattern` is an invalid glob, if no usable
    /// language code is left, or if the validation marker is empty.
    pub fn validate(&self) -> Result<()> {
        if is_glob_pattern(&self.proto_pattern) {
            Pattern::new(&self.proto_pattern).with_context(|| {
                format!(
                    "Invalid glob pattern in 'protoPattern': \"{}\"",
                    self.proto_pattern
                )
            })?;
        }

        let languages = self.target_languages();
        if languages.is_empty() {
            bail!("'languages' must contain at least one language code");
        }
        for lang in languages {
            if lang.contains('/') || lang.contains('\\') {
                bail!("Invalid language code in 'languages': \"{}\"", lang);
            }
        }

        if self.validation_marker.trim().is_empty() {
            bail!("'validationMarker' must not be empty");
        }

        Ok(())
    }

    /// Language codes with surrounding whitespace removed and empty entries
    /// dropped, in configured order.
    pub fn target_languages(&self) -> Vec<&str> {
        self.languages
            .iter()
            .map(|lang| lang.trim())
            .filter(|lang| !lang.is_empty())
            .collect()
    }

    /// Path of the catalog file for `lang` inside the output directory.
    pub fn catalog_path(&self, lang: &str) -> PathBuf {
        Path::new(&self.output_dir).join(format!("{}.{}", lang, CATALOG_EXTENSION))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
