use crate::core::{CatalogPlan, CatalogStatus};
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(CatalogSummary),
    Check(CatalogSummary),
    Init(InitSummary),
}

/// Outcome of one language catalog that was merged successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOutcome {
    pub file_path: String,
    pub status: CatalogStatus,
    pub entry_count: usize,
}

impl CatalogOutcome {
    pub fn new(plan: &CatalogPlan) -> Self {
        Self {
            file_path: plan.path.display().to_string(),
            status: plan.status,
            entry_count: plan.catalog.len(),
        }
    }
}

#[derive(Debug)]
pub struct CatalogSummary {
    pub files_scanned: usize,
    pub key_count: usize,
    pub output_dir: String,
    /// Languages whose catalog was merged, in configured order.
    /// Languages that failed are reported as issues instead.
    pub catalogs: Vec<CatalogOutcome>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running protoglot commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found while running the command, sorted.
    pub issues: Vec<Issue>,
}
