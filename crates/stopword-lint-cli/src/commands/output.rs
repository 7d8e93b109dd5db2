//! Shared output formatting for lint results.

use anyhow::Result;
use miette::GraphicalReportHandler;
use std::fmt::Write as _;
use stopword_lint_core::{LintResult, Severity, ViolationDiagnostic};

use crate::lint::FileReport;
use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `reports` supply file contents for the `pretty` format.
pub fn print(result: &LintResult, reports: &[FileReport], format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)? + "\n",
        OutputFormat::Compact => render_compact(result),
        OutputFormat::Pretty => render_pretty(result, reports)?,
    };
    print!("{rendered}");
    Ok(())
}

fn render_text(result: &LintResult) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        let _ = writeln!(
            out,
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        let _ = writeln!(out, "  {}: {}", severity_indicator, violation.message);
        if let Some(fix) = &violation.fix {
            let _ = writeln!(out, "  = fix: replace with {:?}", fix.text.trim_start());
        }
        out.push('\n');
    }

    let (errors, _, _) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if result.violations.is_empty() {
        "\x1b[32m"
    } else {
        "\x1b[33m"
    };
    let _ = writeln!(out, "{summary_color}{}\x1b[0m", summary(result));
    out
}

fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|violation| format!("{violation}\n"))
        .collect()
}

fn render_pretty(result: &LintResult, reports: &[FileReport]) -> Result<String> {
    let handler = GraphicalReportHandler::new();
    let mut out = String::new();
    for violation in &result.violations {
        let mut diagnostic = ViolationDiagnostic::from(violation);
        if let Some(report) = reports.iter().find(|r| r.path == violation.location.file) {
            diagnostic =
                diagnostic.with_source(report.path.display().to_string(), report.source.clone());
        }
        handler.render_report(&mut out, &diagnostic)?;
        out.push('\n');
    }
    let _ = writeln!(out, "{}", summary(result));
    Ok(out)
}

/// One-line totals for a run.
#[must_use]
pub fn summary(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    format!(
        "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s), {} fixable",
        result.files_checked,
        result.fixable()
    )
}
