//! Protoglot - i18n catalogs from protobuf definitions
//!
//! Protoglot is a CLI tool and library that extracts translation keys from
//! protobuf files (enum value names and protovalidate CEL rule ids) and keeps
//! one TOML catalog per language in sync with them, preserving every
//! translation already entered by hand.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Discovery, key extraction and catalog merging
//! - `issues`: Per-file and per-language issue types
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
