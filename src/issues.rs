//! Issue types for catalog generation results.
//!
//! Fatal failures (no proto files, no keys, unusable output directory) abort
//! the command with an error. Everything that only affects one file or one
//! language is recorded as an [`Issue`] instead, so the run can continue and
//! report all of them at the end.

use enum_dispatch::enum_dispatch;

use crate::core::CatalogStatus;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ParseError,
    CatalogWrite,
    StaleCatalog,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::CatalogWrite => write!(f, "catalog-write"),
            Rule::StaleCatalog => write!(f, "stale-catalog"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A proto file that could not be read or parsed. Its keys are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// A catalog that could not be read or written. That language is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWriteIssue {
    pub lang: String,
    pub file_path: String,
    pub error: String,
}

impl CatalogWriteIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::CatalogWrite
    }
}

/// A catalog whose content differs from what `generate` would write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleCatalogIssue {
    pub lang: String,
    pub file_path: String,
    pub status: CatalogStatus,
}

impl StaleCatalogIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::StaleCatalog
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ParseError(ParseErrorIssue),
    CatalogWrite(CatalogWriteIssue),
    StaleCatalog(StaleCatalogIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::severity(),
            Issue::CatalogWrite(_) => CatalogWriteIssue::severity(),
            Issue::StaleCatalog(_) => StaleCatalogIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::rule(),
            Issue::CatalogWrite(_) => CatalogWriteIssue::rule(),
            Issue::StaleCatalog(_) => StaleCatalogIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for static dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// File the issue is about.
    fn file_path(&self) -> &str;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for ParseErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("keys from this file were skipped".to_string())
    }
}

impl Report for CatalogWriteIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("catalog for '{}' was not generated", self.lang))
    }
}

impl Report for StaleCatalogIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        match self.status {
            CatalogStatus::Created => format!("catalog for '{}' is missing", self.lang),
            _ => format!("catalog for '{}' is out of date", self.lang),
        }
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("run `protoglot generate` to update it")
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
