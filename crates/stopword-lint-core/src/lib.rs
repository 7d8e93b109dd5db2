//! # stopword-lint-core
//!
//! Core engine for finding discouraged words and phrases in prose.
//!
//! This crate provides:
//!
//! - [`dictionary`] parsing of `term > replacement` dictionaries
//! - [`RuleSet`] merging built-in and user rules, minus exclusions
//! - [`WordMatcher`] whole-word, case-insensitive term matching
//! - [`scan`] turning matches into messages and fixes
//! - [`apply_fixes`] writing fixes back into the source
//!
//! It knows nothing about document formats: the host walks its own nodes,
//! decides which ones to skip, and hands plain text to [`scan`].
//!
//! ## Example
//!
//! ```
//! use stopword_lint_core::{apply_fixes, scan, Rule, RuleSet};
//!
//! let rules = RuleSet::builder()
//!     .default_words(false)
//!     .rule(Rule::with_replacement("utilize", "use"))
//!     .build()?;
//!
//! let records = scan(&rules, "Utilize Elm", false);
//! assert_eq!(records[0].message, "Avoid using \"utilize\", use \"use\" instead");
//!
//! let fixes: Vec<_> = records.into_iter().filter_map(|r| r.fix).collect();
//! assert_eq!(apply_fixes("Utilize Elm", &fixes).output, "Use Elm");
//! # Ok::<(), stopword_lint_core::BuildError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod case;
mod config;
pub mod dictionary;
mod fixer;
mod matcher;
mod rule;
mod ruleset;
mod scanner;
mod skip;
mod types;

pub use config::{Config, ConfigError, WordEntry, WordsConfig};
pub use dictionary::DictionaryError;
pub use fixer::{apply_fixes, FixOutcome};
pub use matcher::{find_all, Match, WordMatcher};
pub use rule::{Rule, RuleShapeError};
pub use ruleset::{BuildError, Exclusion, RuleSet, RuleSetBuilder, Words};
pub use scanner::{scan, ScanOptions};
pub use skip::{SkipError, SkipList, DEFAULT_SKIP};
pub use types::{
    Fix, LineIndex, LintResult, Location, ResultRecord, Severity, Violation, ViolationDiagnostic,
    CODE, NAME,
};
