//! Write-once identity indexes.
//!
//! Both duplicate checks share one primitive: a map from an identity key to
//! the first path observed with that key. A key is inserted exactly once and
//! never overwritten, so the representative of every identity is stable for
//! the lifetime of a session.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::scanner::ContentToken;

/// Outcome of a lookup-or-insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The key was unseen; the path is now its representative.
    Inserted,
    /// The key was already present; holds the first-seen path.
    Existing(&'a str),
}

/// Map from identity key to first-seen path.
#[derive(Debug, Clone)]
pub struct FirstSeenIndex<K> {
    entries: HashMap<K, String>,
}

impl<K> Default for FirstSeenIndex<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> FirstSeenIndex<K> {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key → path` if `key` is unseen, otherwise report the existing path.
    ///
    /// An existing entry is left untouched.
    pub fn resolve(&mut self, key: K, path: &str) -> Resolution<'_> {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Resolution::Existing(entry.into_mut().as_str()),
            Entry::Vacant(entry) => {
                entry.insert(path.to_owned());
                Resolution::Inserted
            }
        }
    }

    /// First path recorded for `key`, if any.
    #[must_use]
    pub fn first_seen<Q>(&self, key: &Q) -> Option<&str>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The name and content indexes of one scan session.
#[derive(Debug, Clone, Default)]
pub struct IdentityIndex {
    by_name: FirstSeenIndex<String>,
    by_content: FirstSeenIndex<ContentToken>,
}

impl IdentityIndex {
    /// Create empty indexes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup-or-insert by file name.
    pub fn resolve_by_name(&mut self, name: &str, path: &str) -> Resolution<'_> {
        self.by_name.resolve(name.to_owned(), path)
    }

    /// Lookup-or-insert by content token.
    pub fn resolve_by_content(&mut self, token: ContentToken, path: &str) -> Resolution<'_> {
        self.by_content.resolve(token, path)
    }
}
