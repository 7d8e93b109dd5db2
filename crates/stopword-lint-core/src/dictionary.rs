//! Dictionary text format.
//!
//! One rule per line, either `term` or `term > replacement`:
//!
//! ```text
//! utilize > use
//! hyperlocal
//! in order to > to
//! ```
//!
//! Whitespace around `>` is ignored and blank lines are skipped. Only the
//! first `>` separates the fields, so a replacement may not contain `>`
//! itself without ending up verbatim in the replacement text.

use crate::rule::Rule;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Raw text of the built-in dictionary.
const BUILTIN_DICTIONARY: &str = include_str!("../dict/default.txt");

/// Errors raised while loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Parses dictionary text into rules, preserving line order.
#[must_use]
pub fn parse(contents: &str) -> Vec<Rule> {
    contents
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Rule> {
    let (term, replacement) = match line.split_once('>') {
        Some((term, replacement)) => (term.trim_end(), Some(replacement.trim_start())),
        None => (line, None),
    };

    if term.is_empty() {
        warn!("Ignoring dictionary line without a term: {line:?}");
        return None;
    }

    Some(match replacement {
        Some(replacement) if !replacement.is_empty() => Rule::with_replacement(term, replacement),
        _ => Rule::new(term),
    })
}

/// Reads and parses a dictionary file.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read.
pub fn load(path: &Path) -> Result<Vec<Rule>, DictionaryError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DictionaryError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rules = parse(&contents);
    debug!("Loaded {} rules from {}", rules.len(), path.display());
    Ok(rules)
}

/// Returns the built-in rules, parsed once on first use.
#[must_use]
pub fn builtin_rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| parse(BUILTIN_DICTIONARY))
}
