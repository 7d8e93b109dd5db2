//! Linting files on disk.

use crate::document::{DocumentFormat, NodeKind};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use stopword_lint_core::{
    Config, LineIndex, LintResult, RuleSet, ScanOptions, Severity, Violation,
};

/// Findings for one file, along with the contents they refer to.
#[derive(Debug)]
pub struct FileReport {
    /// The file, as discovered.
    pub path: PathBuf,
    /// Contents at the time of linting.
    pub source: String,
    /// Violations ordered by position.
    pub violations: Vec<Violation>,
}

/// Scans documents with a fully built rule set.
#[derive(Debug, Clone)]
pub struct Linter {
    options: ScanOptions<NodeKind>,
    severity: Severity,
}

impl Linter {
    /// Builds the rule set and skip list described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary cannot be loaded or a skip entry
    /// names an unknown node kind.
    pub fn from_config(config: &Config) -> Result<Self> {
        let rule_set = config.rule_set().context("Failed to build rule set")?;
        let skip = config
            .skip_list(NodeKind::from_name)
            .context("Invalid `skip` option")?;
        Ok(Self {
            options: ScanOptions::new(rule_set, skip),
            severity: config.severity,
        })
    }

    /// Returns the effective rules.
    #[must_use]
    pub fn rule_set(&self) -> &RuleSet {
        &self.options.rule_set
    }

    /// Lints `source` as a document of the given format.
    #[must_use]
    pub fn lint_source(&self, path: &Path, source: &str, format: DocumentFormat) -> Vec<Violation> {
        let index = LineIndex::new(source);
        let lines = &index;
        let mut violations: Vec<Violation> = format
            .text_nodes(source)
            .into_iter()
            .flat_map(|node| {
                self.options
                    .scan_node(node.text, &node.ancestors)
                    .into_iter()
                    .map(move |record| {
                        Violation::from_record(
                            &record,
                            path.to_path_buf(),
                            lines,
                            node.offset,
                            self.severity,
                        )
                    })
            })
            .collect();
        violations.sort_by_key(|v| v.location.offset);
        violations
    }

    /// Reads and lints one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn lint_file(&self, path: &Path) -> Result<FileReport> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let format = DocumentFormat::from_path(path).unwrap_or(DocumentFormat::PlainText);
        let violations = self.lint_source(path, &source, format);
        tracing::debug!("{}: {} violation(s)", path.display(), violations.len());
        Ok(FileReport {
            path: path.to_path_buf(),
            source,
            violations,
        })
    }

    /// Lints every file in parallel. Reports keep the order of `files`.
    ///
    /// # Errors
    ///
    /// Returns the first read error encountered.
    pub fn lint_files(&self, files: &[PathBuf]) -> Result<Vec<FileReport>> {
        tracing::info!(
            "Linting {} file(s) with {} rule(s)",
            files.len(),
            self.rule_set().len()
        );
        files.par_iter().map(|path| self.lint_file(path)).collect()
    }
}

/// Collects the violations of every report into one result.
#[must_use]
pub fn collect_result(reports: &[FileReport]) -> LintResult {
    let mut result = LintResult::new();
    for report in reports {
        result.violations.extend(report.violations.iter().cloned());
    }
    result.files_checked = reports.len();
    result.sort();
    result
}

/// Expands `paths` into the documents to lint.
///
/// Directories are walked respecting `.gitignore`; only files with a known
/// document extension are kept. Files named explicitly are always kept.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be walked.
pub fn discover_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in paths {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        if !root.exists() {
            anyhow::bail!("Path not found: {}", root.display());
        }

        let mut builder = ignore::WalkBuilder::new(root);
        builder.hidden(true).git_ignore(true);

        for entry in builder.build() {
            let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
            let path = entry.path();
            if path.is_file() && DocumentFormat::from_path(path).is_some() {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
