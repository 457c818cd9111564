use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::args::GenerateCommand;
use super::helper::finish;
use super::{CatalogOutcome, CatalogSummary, CommandResult, CommandSummary};
use crate::{
    core::{GenerateContext, plan_catalog},
    issues::{CatalogWriteIssue, Issue},
};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let ctx = GenerateContext::new(&cmd.args)?;
    generate_with(&ctx)
}

/// Writes every language catalog of an already extracted context.
///
/// A catalog that cannot be read or written becomes a `catalog-write` issue
/// and the remaining languages still run.
pub fn generate_with(ctx: &GenerateContext) -> Result<CommandResult> {
    let output_dir = Path::new(&ctx.config.output_dir);
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let mut issues: Vec<Issue> = ctx
        .parse_errors
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();
    let mut catalogs = Vec::new();

    for (lang, path) in ctx.catalogs() {
        let written = plan_catalog(&path, &ctx.keys).and_then(|plan| {
            plan.write()?;
            Ok(plan)
        });

        match written {
            Ok(plan) => catalogs.push(CatalogOutcome::new(&plan)),
            Err(e) => issues.push(Issue::CatalogWrite(CatalogWriteIssue {
                lang: lang.to_string(),
                file_path: path.display().to_string(),
                error: format!("{:#}", e),
            })),
        }
    }

    Ok(finish(
        CommandSummary::Generate(CatalogSummary {
            files_scanned: ctx.files.len(),
            key_count: ctx.keys.len(),
            output_dir: ctx.config.output_dir.clone(),
            catalogs,
        }),
        issues,
    ))
}
