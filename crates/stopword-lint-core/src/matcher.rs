//! Whole-word matching of dictionary terms.
//!
//! A term matches when it stands on its own:
//!
//! - it starts the text, or follows a character that is neither `-` nor a
//!   word character (letter, digit, underscore);
//! - it ends the text, or is followed by a space, by `. `, or by a `.` that
//!   ends the text.
//!
//! This rejects `superjava`, `uber-java`, `java-ish` and `java.md` for the
//! term `java`, while accepting `My java.` and `java is good`.
//!
//! The term itself is matched literally and case-insensitively. A straight
//! apostrophe in the term also matches `’` and `‘`.

use crate::case;
use crate::rule::Rule;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Characters accepted wherever a term contains `'`.
const APOSTROPHE_CLASS: &str = "['’‘]";

/// One located occurrence of a rule's term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// The rule's term as written in the dictionary.
    pub term: String,
    /// The rule's replacement, if any.
    pub replacement: Option<String>,
    /// Start of the matched span, including a leading boundary character.
    pub start: usize,
    /// End of the matched span (exclusive).
    pub end: usize,
    /// Start of the term within the text.
    pub term_start: usize,
    /// Exact text of the span `start..end`.
    pub matched_text: String,
}

impl Match {
    /// Returns the term as it appears in the text, without the boundary character.
    #[must_use]
    pub fn matched_term(&self) -> &str {
        &self.matched_text[self.term_start - self.start..]
    }

    /// Returns the leading boundary character, if one was consumed.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.matched_text[..self.term_start - self.start]
    }

    /// Returns the span text with the term replaced, keeping the boundary
    /// character and the source's leading capital.
    ///
    /// Returns `None` when the rule has no replacement.
    #[must_use]
    pub fn replaced_text(&self) -> Option<String> {
        let replacement = self.replacement.as_deref()?;
        Some(case::apply(
            &self.matched_text,
            self.matched_term(),
            replacement,
        ))
    }
}

/// A compiled matcher for a single rule.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    rule: Rule,
    pattern: Regex,
}

impl WordMatcher {
    /// Compiles the matcher for `rule`.
    ///
    /// # Errors
    ///
    /// Returns an error if the escaped term exceeds the regex size limits.
    pub fn new(rule: Rule) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&term_pattern(rule.term()))
            .case_insensitive(true)
            .build()?;
        Ok(Self { rule, pattern })
    }

    /// Returns the rule this matcher was built from.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Finds every standalone occurrence of the term, left to right,
    /// without overlaps.
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        if self.rule.term().is_empty() {
            return matches;
        }

        // End of the previous accepted match; a boundary character before
        // this offset has already been consumed.
        let mut last_end = 0;
        let mut search_from = 0;

        while let Some(found) = self.pattern.find_at(text, search_from) {
            let (term_start, term_end) = (found.start(), found.end());

            let start = match leading_boundary(text, term_start, last_end) {
                Some(start) if is_terminated(&text[term_end..]) => start,
                _ => {
                    search_from = next_char_boundary(text, term_start);
                    continue;
                }
            };

            matches.push(Match {
                term: self.rule.term().to_string(),
                replacement: self.rule.replacement().map(String::from),
                start,
                end: term_end,
                term_start,
                matched_text: text[start..term_end].to_string(),
            });
            last_end = term_end;
            search_from = term_end;
        }

        matches
    }
}

/// Finds every standalone occurrence of `rule`'s term in `text`.
///
/// Compiles the matcher on each call; hold a [`WordMatcher`] when scanning
/// many texts.
///
/// # Errors
///
/// Returns an error if the term cannot be compiled.
pub fn find_all(rule: &Rule, text: &str) -> Result<Vec<Match>, regex::Error> {
    Ok(WordMatcher::new(rule.clone())?.find_all(text))
}

/// Builds the regex source for a term: literal except for apostrophes.
fn term_pattern(term: &str) -> String {
    term.split('\'')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(APOSTROPHE_CLASS)
}

/// Word characters are Unicode alphanumerics and `_`, so `éjava` is one word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns the span start for a term found at `term_start`, or `None` if the
/// preceding character rules the term out.
fn leading_boundary(text: &str, term_start: usize, last_end: usize) -> Option<usize> {
    let Some(prev) = text[..term_start].chars().next_back() else {
        return Some(0);
    };
    if prev == '-' || is_word_char(prev) {
        return None;
    }
    let start = term_start - prev.len_utf8();
    (start >= last_end).then_some(start)
}

/// Checks what follows a term: a space, `. `, a final `.`, or nothing.
fn is_terminated(rest: &str) -> bool {
    rest.is_empty() || rest.starts_with(' ') || rest == "." || rest.starts_with(". ")
}

fn next_char_boundary(text: &str, offset: usize) -> usize {
    text[offset..]
        .chars()
        .next()
        .map_or(text.len(), |c| offset + c.len_utf8())
}
