//! Shared state for one generation run.
//!
//! Resolves the effective configuration, discovers the proto files and
//! extracts the aggregated key set. Commands build a [`GenerateContext`] once
//! and then only deal with catalogs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::{
    KeySet,
    discovery::{discover_proto_files, search_root},
    extract::{EnumFilter, ExtractOptions, extract_file},
};
use crate::cli::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::issues::ParseErrorIssue;
use crate::utils::is_glob_pattern;

pub struct GenerateContext {
    pub config: Config,
    /// Scanned proto files, in processing order.
    pub files: Vec<PathBuf>,
    pub keys: KeySet,
    /// Files that were skipped because they could not be read or parsed.
    pub parse_errors: Vec<ParseErrorIssue>,
    pub verbose: bool,
}

impl GenerateContext {
    /// Loads the config from the current directory, applies CLI overrides
    /// and extracts all keys.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let config = resolve_config(args, Path::new("."))?;
        Self::from_config(config, args.verbose)
    }

    pub fn from_config(config: Config, verbose: bool) -> Result<Self> {
        let files = discover_proto_files(&config.proto_pattern)?;
        if files.is_empty() {
            let location = if is_glob_pattern(&config.proto_pattern) {
                config.proto_pattern.clone()
            } else {
                search_root(&config.proto_pattern).display().to_string()
            };
            bail!("No proto files found in directory: {}", location);
        }

        if verbose {
            eprintln!("Found {} proto file(s):", files.len());
            for file in &files {
                eprintln!("  - {}", file.display());
            }
        }

        let options = ExtractOptions {
            filter: EnumFilter::new(&config.enum_prefix, &config.enum_suffix),
            validation_marker: config.validation_marker.clone(),
        };

        let mut keys = KeySet::new();
        let mut parse_errors = Vec::new();
        for file in &files {
            match extract_file(file, &options) {
                Ok(file_keys) => {
                    if verbose && file_keys.is_empty() {
                        eprintln!("Note: no keys in {}", file.display());
                    }
                    keys.absorb(file_keys);
                }
                Err(e) => {
                    if verbose {
                        eprintln!("{} {:#}", "warning:".bold().yellow(), e);
                    }
                    parse_errors.push(ParseErrorIssue {
                        file_path: file.display().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        if keys.is_empty() {
            bail!("No keys found in any proto files");
        }

        Ok(Self {
            config,
            files,
            keys,
            parse_errors,
            verbose,
        })
    }

    /// Target languages with their catalog paths.
    pub fn catalogs(&self) -> Vec<(&str, PathBuf)> {
        self.config
            .target_languages()
            .into_iter()
            .map(|lang| (lang, self.config.catalog_path(lang)))
            .collect()
    }
}

/// Builds the effective configuration: CLI > config file > defaults.
pub fn resolve_config(args: &CommonArgs, start_dir: &Path) -> Result<Config> {
    let config_result = load_config(start_dir)?;

    if args.verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let mut config = config_result.config;

    if let Some(ref proto_pattern) = args.proto_pattern {
        config.proto_pattern = proto_pattern.clone();
    }
    if let Some(ref output_dir) = args.output_dir {
        config.output_dir = output_dir.to_string_lossy().to_string();
    }
    if let Some(ref languages) = args.languages {
        config.languages = languages.clone();
    }
    if let Some(ref prefix) = args.prefix {
        config.enum_prefix = prefix.clone();
    }
    if let Some(ref suffix) = args.suffix {
        config.enum_suffix = suffix.clone();
    }

    config
        .validate()
        .with_context(|| format!("Invalid configuration (see {})", CONFIG_FILE_NAME))?;
    Ok(config)
}
