//! Node kinds whose descendants are not scanned.
//!
//! Configuration names node kinds as strings (`"BlockQuote"`). The host
//! document layer owns the actual kind type and supplies the mapping from
//! name to kind when the list is resolved.

use thiserror::Error;

/// Node kinds skipped when no configuration is given.
pub const DEFAULT_SKIP: &[&str] = &["BlockQuote"];

/// Errors resolving a skip list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipError {
    /// A configured name has no matching host node kind.
    #[error("unknown node kind `{name}` in skip list")]
    UnknownNodeKind {
        /// The configured name.
        name: String,
    },
}

/// A resolved list of host node kinds to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipList<K> {
    kinds: Vec<K>,
}

impl<K> Default for SkipList<K> {
    fn default() -> Self {
        Self { kinds: Vec::new() }
    }
}

impl<K: PartialEq> SkipList<K> {
    /// Resolves configured names through the host's `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`SkipError::UnknownNodeKind`] for the first name `lookup`
    /// does not know.
    pub fn resolve<I, S, F>(names: I, lookup: F) -> Result<Self, SkipError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<K>,
    {
        let kinds = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                lookup(name).ok_or_else(|| SkipError::UnknownNodeKind {
                    name: name.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { kinds })
    }

    /// Creates a skip list from already resolved kinds.
    #[must_use]
    pub fn from_kinds(kinds: Vec<K>) -> Self {
        Self { kinds }
    }

    /// Returns true if any of `ancestors` is a skipped kind.
    pub fn is_skipped<'a, I>(&self, ancestors: I) -> bool
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        ancestors.into_iter().any(|kind| self.kinds.contains(kind))
    }

    /// Returns the resolved kinds.
    #[must_use]
    pub fn kinds(&self) -> &[K] {
        &self.kinds
    }
}
