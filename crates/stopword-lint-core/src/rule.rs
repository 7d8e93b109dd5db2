//! Dictionary rules: a discouraged term and an optional replacement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dictionary entry.
///
/// `term` is the discouraged literal. It is matched case-insensitively and
/// any `'` in it also matches typographic apostrophes. When `replacement` is
/// present, matches carry an automatic fix.
///
/// Rules serialize as one- or two-element arrays (`["term"]` or
/// `["term", "replacement"]`), which is also the shape of exclusion entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Rule {
    term: String,
    replacement: Option<String>,
}

impl Rule {
    /// Creates a rule without a replacement.
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            replacement: None,
        }
    }

    /// Creates a rule with a suggested replacement.
    #[must_use]
    pub fn with_replacement(term: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            replacement: Some(replacement.into()),
        }
    }

    /// Returns the discouraged term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns the suggested replacement, if any.
    #[must_use]
    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }

    /// Returns the rule as a `[term]` or `[term, replacement]` tuple.
    #[must_use]
    pub fn as_tuple(&self) -> Vec<&str> {
        let mut tuple = vec![self.term.as_str()];
        if let Some(replacement) = &self.replacement {
            tuple.push(replacement);
        }
        tuple
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.replacement {
            Some(replacement) => write!(f, "{} > {replacement}", self.term),
            None => write!(f, "{}", self.term),
        }
    }
}

/// Error for arrays that cannot be read as a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a rule must have one or two elements, got {0}")]
pub struct RuleShapeError(usize);

impl TryFrom<Vec<String>> for Rule {
    type Error = RuleShapeError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        let len = value.len();
        let mut parts = value.into_iter();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(term), None, None) => Ok(Self::new(term)),
            (Some(term), Some(replacement), None) => Ok(Self::with_replacement(term, replacement)),
            _ => Err(RuleShapeError(len)),
        }
    }
}

impl From<Rule> for Vec<String> {
    fn from(rule: Rule) -> Self {
        let mut tuple = vec![rule.term];
        tuple.extend(rule.replacement);
        tuple
    }
}
