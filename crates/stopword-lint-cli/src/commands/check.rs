//! Check command implementation.

use anyhow::Result;
use std::path::{Path, PathBuf};
use stopword_lint_core::Severity;

use super::RuleArgs;
use crate::lint::{collect_result, discover_files, Linter};
use crate::OutputFormat;

/// Runs the check command.
///
/// Returns `true` when a violation at or above the failure threshold was
/// found.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    fail_on: Option<Severity>,
    rules: &RuleArgs,
    config_path: Option<&Path>,
) -> Result<bool> {
    let config = super::load_config(paths, config_path, rules)?;
    let threshold = fail_on.or(config.fail_on).unwrap_or(Severity::Error);
    let linter = Linter::from_config(&config)?;

    let files = discover_files(paths)?;
    let reports = linter.lint_files(&files)?;
    let result = collect_result(&reports);

    super::output::print(&result, &reports, format)?;

    Ok(result.has_violations_at(threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(config: &str) -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("stopword-lint.toml"), config).unwrap();
        let doc = tmp.path().join("a.md");
        std::fs::write(&doc, "You should utilize Elm\n").unwrap();
        (tmp, doc)
    }

    const WARNING_RULES: &str =
        "default_words = false\nwords = [\"utilize > use\"]\nseverity = \"warning\"\n";

    #[test]
    fn warnings_pass_with_default_threshold() {
        let (_tmp, doc) = project(WARNING_RULES);
        let failed = run(&[doc], OutputFormat::Compact, None, &RuleArgs::default(), None).unwrap();
        assert!(!failed);
    }

    #[test]
    fn config_fail_on_lowers_threshold() {
        let (_tmp, doc) = project(&format!("{WARNING_RULES}fail_on = \"warning\"\n"));
        let failed = run(&[doc], OutputFormat::Compact, None, &RuleArgs::default(), None).unwrap();
        assert!(failed);
    }

    #[test]
    fn flag_overrides_config_fail_on() {
        let (_tmp, doc) = project(&format!("{WARNING_RULES}fail_on = \"warning\"\n"));
        let failed = run(
            &[doc],
            OutputFormat::Compact,
            Some(Severity::Error),
            &RuleArgs::default(),
            None,
        )
        .unwrap();
        assert!(!failed);
    }

    #[test]
    fn errors_fail_by_default() {
        let (_tmp, doc) = project("default_words = false\nwords = [\"utilize > use\"]\n");
        let failed = run(&[doc], OutputFormat::Compact, None, &RuleArgs::default(), None).unwrap();
        assert!(failed);
    }
}
