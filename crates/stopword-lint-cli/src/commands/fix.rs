//! Fix command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stopword_lint_core::{apply_fixes, Fix, FixOutcome};

use super::RuleArgs;
use crate::lint::{discover_files, FileReport, Linter};

/// Runs the fix command.
///
/// Files are rewritten in place unless `dry_run` is set, in which case the
/// fixed contents of every changed file are printed instead.
pub fn run(
    paths: &[PathBuf],
    dry_run: bool,
    rules: &RuleArgs,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = super::load_config(paths, config_path, rules)?;
    let linter = Linter::from_config(&config)?;

    let files = discover_files(paths)?;
    let reports = linter.lint_files(&files)?;

    let mut applied = 0;
    let mut skipped = 0;
    let mut unfixable = 0;
    let mut changed_files = 0;

    for report in &reports {
        let outcome = fix_report(report);
        unfixable += report.violations.iter().filter(|v| v.fix.is_none()).count();
        if !outcome.changed() {
            continue;
        }

        applied += outcome.applied;
        skipped += outcome.skipped;
        changed_files += 1;

        if dry_run {
            println!("==> {} <==", report.path.display());
            print!("{}", outcome.output);
        } else {
            std::fs::write(&report.path, &outcome.output)
                .with_context(|| format!("Failed to write {}", report.path.display()))?;
            tracing::debug!("Fixed {} issue(s) in {}", outcome.applied, report.path.display());
        }
    }

    let verb = if dry_run { "Would fix" } else { "Fixed" };
    eprintln!("{verb} {applied} issue(s) in {changed_files} file(s)");
    if skipped > 0 {
        eprintln!("{skipped} overlapping fix(es) skipped, run again to apply them");
    }
    if unfixable > 0 {
        eprintln!("{unfixable} issue(s) have no automatic fix");
    }

    Ok(())
}

/// Applies every fix found in one file.
#[must_use]
pub fn fix_report(report: &FileReport) -> FixOutcome {
    let fixes: Vec<Fix> = report
        .violations
        .iter()
        .filter_map(|v| v.fix.clone())
        .collect();
    apply_fixes(&report.source, &fixes)
}
