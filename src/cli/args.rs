//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Extract keys from proto files and write the catalogs
//! - `check`: Report catalogs that `generate` would change, without writing
//! - `init`: Initialize a protoglot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.verbose,
            Some(Command::Check(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by `generate` and `check`. Each overrides the config file.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path pattern of the .proto files: a file (its directory is scanned),
    /// a directory, or a glob pattern
    #[arg(short = 'P', long, env = "PROTOGLOT_PROTO_PATTERN")]
    pub proto_pattern: Option<String>,

    /// Output directory for the catalog files
    #[arg(short = 'O', long, env = "PROTOGLOT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Comma-separated list of languages
    #[arg(short = 'L', long, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Only process enums with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Only process enums with this suffix
    #[arg(long)]
    pub suffix: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate or update the catalog of every language
    Generate(GenerateCommand),
    /// Check that every catalog is up to date (writes nothing)
    Check(CheckCommand),
    /// Initialize a new .protoglotrc.json configuration file
    Init,
}
