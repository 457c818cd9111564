use anyhow::Result;

use super::super::args::CheckCommand;
use super::helper::finish;
use super::{CatalogOutcome, CatalogSummary, CommandResult, CommandSummary};
use crate::{
    core::{GenerateContext, plan_catalog},
    issues::{CatalogWriteIssue, Issue, StaleCatalogIssue},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = GenerateContext::new(&cmd.args)?;
    check_with(&ctx)
}

/// Compares every catalog with what `generate` would write. Nothing is
/// written; missing or outdated catalogs are reported as errors.
pub fn check_with(ctx: &GenerateContext) -> Result<CommandResult> {
    let mut issues: Vec<Issue> = ctx
        .parse_errors
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();
    let mut catalogs = Vec::new();

    for (lang, path) in ctx.catalogs() {
        let file_path = path.display().to_string();
        match plan_catalog(&path, &ctx.keys) {
            Ok(plan) => {
                if plan.is_stale() {
                    issues.push(Issue::StaleCatalog(StaleCatalogIssue {
                        lang: lang.to_string(),
                        file_path,
                        status: plan.status,
                    }));
                }
                catalogs.push(CatalogOutcome::new(&plan));
            }
            Err(e) => issues.push(Issue::CatalogWrite(CatalogWriteIssue {
                lang: lang.to_string(),
                file_path,
                error: format!("{:#}", e),
            })),
        }
    }

    Ok(finish(
        CommandSummary::Check(CatalogSummary {
            files_scanned: ctx.files.len(),
            key_count: ctx.keys.len(),
            output_dir: ctx.config.output_dir.clone(),
            catalogs,
        }),
        issues,
    ))
}
