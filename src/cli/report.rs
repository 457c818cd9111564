//! Report formatting and printing utilities.
//!
//! Issues are printed in cargo style, followed by one line per catalog and a
//! final summary. Kept separate from the core so protoglot can be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CatalogSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::CatalogStatus;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print the full command output to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    for issue in &result.issues {
        print_issue(issue, writer);
    }

    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose, writer),
        CommandSummary::Check(summary) => print_check(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }

    print_problem_summary(result, writer);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }
    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_generate<W: Write>(summary: &CatalogSummary, verbose: bool, writer: &mut W) {
    for catalog in &summary.catalogs {
        if !verbose && catalog.status == CatalogStatus::Unchanged {
            continue;
        }
        let _ = writeln!(
            writer,
            "{} {} {} ({} {})",
            SUCCESS_MARK.green(),
            catalog.file_path,
            catalog.status.to_string().green(),
            catalog.entry_count,
            plural(catalog.entry_count, "key", "keys")
        );
    }

    let unchanged = summary
        .catalogs
        .iter()
        .filter(|c| c.status == CatalogStatus::Unchanged)
        .count();

    let _ = writeln!(
        writer,
        "Scanned {} proto {}, {} {}; wrote {} {} to {}{}",
        summary.files_scanned,
        plural(summary.files_scanned, "file", "files"),
        summary.key_count,
        plural(summary.key_count, "key", "keys"),
        summary.catalogs.len(),
        plural(summary.catalogs.len(), "catalog", "catalogs"),
        summary.output_dir,
        if unchanged > 0 {
            format!(" ({} unchanged)", unchanged)
        } else {
            String::new()
        }
    );
}

fn print_check<W: Write>(summary: &CatalogSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for catalog in &summary.catalogs {
            if catalog.status == CatalogStatus::Unchanged {
                let _ = writeln!(
                    writer,
                    "{} {} is up to date",
                    SUCCESS_MARK.green(),
                    catalog.file_path
                );
            }
        }
    }

    let stale = summary
        .catalogs
        .iter()
        .filter(|c| c.status != CatalogStatus::Unchanged)
        .count();

    if stale == 0 && !summary.catalogs.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} against {} proto {} - all up to date",
                summary.catalogs.len(),
                plural(summary.catalogs.len(), "catalog", "catalogs"),
                summary.files_scanned,
                plural(summary.files_scanned, "file", "files")
            )
            .green()
        );
    } else if stale > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} out of date. Run {} to update.",
            stale,
            plural(stale, "catalog", "catalogs"),
            if stale == 1 { "is" } else { "are" },
            "protoglot generate".cyan()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if let Some(error) = &summary.error {
        let _ = writeln!(writer, "{} {}", "error:".bold().red(), error);
    } else if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn print_problem_summary<W: Write>(result: &CommandResult, writer: &mut W) {
    let total_problems = result.error_count + result.warning_count;
    if result.issues.is_empty() || total_problems == 0 {
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        total_problems,
        plural(total_problems, "problem", "problems"),
        result.error_count,
        plural(result.error_count, "error", "errors").red(),
        result.warning_count,
        plural(result.warning_count, "warning", "warnings").yellow()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
