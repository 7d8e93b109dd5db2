//! Core types for scan results and lint violations.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::PathBuf;

/// Code reported for every stop-word violation.
pub const CODE: &str = "SW001";

/// Name reported for every stop-word violation.
pub const NAME: &str = "stop-words";

/// Severity level for lint violations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(format!(
                "unknown severity `{other}`, expected: error, warning, info"
            )),
        }
    }
}

/// A text replacement over a byte range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    /// `[start, end)` byte range to replace.
    pub range: [usize; 2],
    /// Text to put in place of the range.
    pub text: String,
}

impl Fix {
    /// Creates a new fix.
    #[must_use]
    pub fn new(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range: [range.start, range.end],
            text: text.into(),
        }
    }

    /// Returns the replaced range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range[0]..self.range[1]
    }

    /// Returns a copy moved forward by `delta` bytes.
    #[must_use]
    pub fn shifted(&self, delta: usize) -> Self {
        Self {
            range: [self.range[0] + delta, self.range[1] + delta],
            text: self.text.clone(),
        }
    }
}

/// One finding within a single text node, handed back to the host.
///
/// Offsets are byte offsets relative to the start of the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Start of the matched span, including a leading boundary character.
    pub offset: usize,
    /// Start of the discouraged term itself.
    pub term_offset: usize,
    /// Byte length of the term as found in the text.
    pub term_length: usize,
    /// Human-readable message.
    pub message: String,
    /// Automatic fix, present when the rule has a replacement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

/// Source location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to the working directory.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Computes line and column for a byte offset into `content`.
    ///
    /// Use a [`LineIndex`] when locating many offsets in the same file.
    #[must_use]
    pub fn from_offset(file: PathBuf, content: &str, offset: usize) -> Self {
        LineIndex::new(content).location(file, offset)
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// Line starts of a file, computed once and shared by every violation in it.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    content: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Indexes the line starts of `content`.
    #[must_use]
    pub fn new(content: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            content,
            line_starts,
        }
    }

    /// Returns the location of a byte offset.
    ///
    /// The column counts characters from the start of the line.
    #[must_use]
    pub fn location(&self, file: PathBuf, offset: usize) -> Location {
        let offset_in_bounds = offset.min(self.content.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset_in_bounds);
        let line_start = self.line_starts[line - 1];
        let column = self
            .content
            .get(line_start..offset_in_bounds)
            .map_or(0, |prefix| prefix.chars().count())
            + 1;
        Location {
            file,
            line,
            column,
            offset,
            length: 0,
        }
    }
}

/// A lint violation found in a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "SW001").
    pub code: String,
    /// Rule name (e.g., "stop-words").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Location of the discouraged term.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Automatic fix with file-absolute offsets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(severity: Severity, location: Location, message: impl Into<String>) -> Self {
        Self {
            code: CODE.to_string(),
            rule: NAME.to_string(),
            severity,
            location,
            message: message.into(),
            fix: None,
        }
    }

    /// Converts a node-relative record into a file violation.
    ///
    /// `node_offset` is the byte offset of the scanned text within the file
    /// that `lines` indexes.
    #[must_use]
    pub fn from_record(
        record: &ResultRecord,
        file: PathBuf,
        lines: &LineIndex<'_>,
        node_offset: usize,
        severity: Severity,
    ) -> Self {
        let offset = node_offset + record.term_offset;
        let location = lines
            .location(file, offset)
            .with_span(offset, record.term_length);
        Self {
            fix: record.fix.as_ref().map(|fix| fix.shifted(node_offset)),
            ..Self::new(severity, location, &record.message)
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// A violation as a miette diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
    #[source_code]
    source_code: Option<NamedSource<String>>,
}

impl ViolationDiagnostic {
    /// Attaches the file contents so the span can be rendered in context.
    #[must_use]
    pub fn with_source(mut self, name: impl AsRef<str>, source: String) -> Self {
        self.source_code = Some(NamedSource::new(name, source));
        self
    }
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v
                .fix
                .as_ref()
                .map(|fix| format!("replace with {:?}", fix.text.trim_start())),
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message: v.rule.clone(),
            source_code: None,
        }
    }
}

/// Result of linting one or more files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Returns the number of violations carrying a fix.
    #[must_use]
    pub fn fixable(&self) -> usize {
        self.violations.iter().filter(|v| v.fix.is_some()).count()
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
    }

    /// Sorts violations by file, then position.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.offset.cmp(&b.location.offset))
        });
    }
}
