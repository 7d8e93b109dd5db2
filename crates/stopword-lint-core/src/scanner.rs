//! Scanning text nodes against a rule set.

use crate::matcher::Match;
use crate::ruleset::RuleSet;
use crate::skip::SkipList;
use crate::types::{Fix, ResultRecord};
use tracing::debug;

/// Scans one text node.
///
/// `skip` is the host's decision for this node; a skipped node is not
/// scanned at all. Records come out in rule order, then left to right
/// within each rule.
#[must_use]
pub fn scan(rule_set: &RuleSet, text: &str, skip: bool) -> Vec<ResultRecord> {
    if skip {
        return Vec::new();
    }

    let mut records = Vec::new();
    for matcher in rule_set.matchers() {
        let matches = matcher.find_all(text);
        if !matches.is_empty() {
            debug!("{} match(es) for {:?}", matches.len(), matcher.rule().term());
        }
        records.extend(matches.iter().map(to_record));
    }
    records
}

fn to_record(m: &Match) -> ResultRecord {
    let (message, fix) = match (&m.replacement, m.replaced_text()) {
        (Some(replacement), Some(text)) => (
            format!("Avoid using \"{}\", use \"{replacement}\" instead", m.term),
            Some(Fix::new(m.start..m.end, text)),
        ),
        _ => (format!("Avoid using \"{}\"", m.matched_term().trim()), None),
    };

    ResultRecord {
        offset: m.start,
        term_offset: m.term_start,
        term_length: m.end - m.term_start,
        message,
        fix,
    }
}

/// Everything needed to scan a document: the rules and the resolved skip list.
#[derive(Debug, Clone)]
pub struct ScanOptions<K> {
    /// Rules to apply.
    pub rule_set: RuleSet,
    /// Node kinds whose descendants are left alone.
    pub skip: SkipList<K>,
}

impl<K: PartialEq> ScanOptions<K> {
    /// Creates scan options.
    #[must_use]
    pub fn new(rule_set: RuleSet, skip: SkipList<K>) -> Self {
        Self { rule_set, skip }
    }

    /// Scans a text node given the kinds of its ancestors.
    pub fn scan_node<'a, I>(&self, text: &str, ancestors: I) -> Vec<ResultRecord>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        scan(&self.rule_set, text, self.skip.is_skipped(ancestors))
    }
}
