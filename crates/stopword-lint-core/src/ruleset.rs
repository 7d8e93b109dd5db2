//! Building the rule set used for a scan.
//!
//! Built-in rules come first, then caller rules, in insertion order. The
//! combined list is then filtered against the exclusions.

use crate::dictionary::{self, DictionaryError};
use crate::matcher::WordMatcher;
use crate::rule::{Rule, RuleShapeError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building a [`RuleSet`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// A dictionary could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// A term could not be compiled into a matcher.
    #[error("Cannot compile term {term:?}: {source}")]
    Pattern {
        /// The offending term.
        term: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}

/// Where extra rules come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Words {
    /// A dictionary file to load.
    Path(PathBuf),
    /// Raw dictionary text to parse.
    Text(String),
    /// Rules that are already structured.
    Rules(Vec<Rule>),
}

impl Words {
    fn into_rules(self) -> Result<Vec<Rule>, DictionaryError> {
        match self {
            Self::Path(path) => dictionary::load(&path),
            Self::Text(text) => Ok(dictionary::parse(&text)),
            Self::Rules(rules) => Ok(rules),
        }
    }
}

impl From<Vec<Rule>> for Words {
    fn from(rules: Vec<Rule>) -> Self {
        Self::Rules(rules)
    }
}

/// An entry removing rules from the final set.
///
/// A bare term (`["foo"]`) only removes rules with that term and no
/// replacement. To remove a rule with a replacement, the exclusion has to
/// carry the same replacement (`["foo", "bar"]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ExclusionRepr", into = "Vec<String>")]
pub struct Exclusion(Vec<String>);

impl Exclusion {
    /// Creates an exclusion for a term without a replacement.
    #[must_use]
    pub fn term(term: impl Into<String>) -> Self {
        Self(vec![term.into()])
    }

    /// Creates an exclusion for an exact `(term, replacement)` pair.
    #[must_use]
    pub fn pair(term: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self(vec![term.into(), replacement.into()])
    }

    /// Returns true if `rule` is structurally equal to this exclusion.
    #[must_use]
    pub fn excludes(&self, rule: &Rule) -> bool {
        self.0.iter().map(String::as_str).eq(rule.as_tuple())
    }

    /// Returns the normalized elements.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Exclusion {
    fn from(term: &str) -> Self {
        Self::term(term)
    }
}

impl From<String> for Exclusion {
    fn from(term: String) -> Self {
        Self::term(term)
    }
}

impl<T: Into<String>, R: Into<String>> From<(T, R)> for Exclusion {
    fn from((term, replacement): (T, R)) -> Self {
        Self::pair(term, replacement)
    }
}

impl From<Rule> for Exclusion {
    fn from(rule: Rule) -> Self {
        Self(rule.into())
    }
}

impl From<Exclusion> for Vec<String> {
    fn from(exclusion: Exclusion) -> Self {
        exclusion.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExclusionRepr {
    Term(String),
    Tuple(Vec<String>),
}

impl TryFrom<ExclusionRepr> for Exclusion {
    type Error = RuleShapeError;

    fn try_from(repr: ExclusionRepr) -> Result<Self, Self::Error> {
        match repr {
            ExclusionRepr::Term(term) => Ok(Self::term(term)),
            ExclusionRepr::Tuple(parts) => Rule::try_from(parts).map(Self::from),
        }
    }
}

/// Builder for a [`RuleSet`].
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    default_words: bool,
    words: Vec<Words>,
    exclusions: Vec<Exclusion>,
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSetBuilder {
    /// Creates a builder that includes the built-in dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_words: true,
            words: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    /// Sets whether the built-in dictionary is included (default: true).
    #[must_use]
    pub fn default_words(mut self, enabled: bool) -> Self {
        self.default_words = enabled;
        self
    }

    /// Adds extra rules, appended after anything added before.
    #[must_use]
    pub fn words(mut self, words: impl Into<Words>) -> Self {
        self.words.push(words.into());
        self
    }

    /// Adds a single extra rule.
    #[must_use]
    pub fn rule(self, rule: Rule) -> Self {
        self.words(vec![rule])
    }

    /// Adds an exclusion.
    #[must_use]
    pub fn exclude(mut self, exclusion: impl Into<Exclusion>) -> Self {
        self.exclusions.push(exclusion.into());
        self
    }

    /// Adds multiple exclusions.
    #[must_use]
    pub fn excludes<I, E>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Exclusion>,
    {
        self.exclusions
            .extend(exclusions.into_iter().map(Into::into));
        self
    }

    /// Loads every source, filters and compiles the rules.
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary file cannot be read or a term cannot
    /// be compiled.
    pub fn build(self) -> Result<RuleSet, BuildError> {
        let mut rules: Vec<Rule> = if self.default_words {
            dictionary::builtin_rules().to_vec()
        } else {
            Vec::new()
        };

        for words in self.words {
            rules.extend(words.into_rules()?);
        }

        let total = rules.len();
        let mut seen = HashSet::new();
        let rules: Vec<Rule> = rules
            .into_iter()
            .filter(|rule| !self.exclusions.iter().any(|e| e.excludes(rule)))
            .filter(|rule| seen.insert(rule.clone()))
            .collect();

        debug!(
            "Rule set: {} rules kept of {} ({} exclusions)",
            rules.len(),
            total,
            self.exclusions.len()
        );

        let matchers = rules
            .into_iter()
            .map(|rule| {
                let term = rule.term().to_string();
                WordMatcher::new(rule).map_err(|source| BuildError::Pattern { term, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RuleSet { matchers })
    }
}

/// The ordered, filtered and compiled rules used for scanning.
///
/// Immutable once built and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    matchers: Vec<WordMatcher>,
}

impl RuleSet {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Builds a rule set from the given options.
    ///
    /// # Errors
    ///
    /// See [`RuleSetBuilder::build`].
    pub fn build<I, E>(
        default_words: bool,
        words: impl Into<Words>,
        exclusions: I,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Exclusion>,
    {
        RuleSetBuilder::new()
            .default_words(default_words)
            .words(words)
            .excludes(exclusions)
            .build()
    }

    /// Returns the rules in scan order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.matchers.iter().map(WordMatcher::rule)
    }

    /// Returns the compiled matchers in scan order.
    #[must_use]
    pub fn matchers(&self) -> &[WordMatcher] {
        &self.matchers
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
