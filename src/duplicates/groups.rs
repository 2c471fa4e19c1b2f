//! Duplicate records grouped by representative path.
//!
//! # Overview
//!
//! Every identity (a file name or a content token) has a representative: the
//! first path observed with it. When a later file repeats that identity, the
//! [`DuplicateAggregator`] appends the later path to the representative's
//! [`DuplicateRecord`], either as a name duplicate or as a content duplicate.
//!
//! Records are created lazily on first discovery and kept in creation order,
//! which makes both the structured and the flat report reproducible.
//!
//! # Example
//!
//! ```
//! use doppler::duplicates::DuplicateAggregator;
//!
//! let mut dupes = DuplicateAggregator::new();
//! dupes.record_content_duplicate("a/one.txt", "b/two.txt");
//! dupes.record_name_duplicate("a/one.txt", "c/one.txt");
//!
//! let record = dupes.get("a/one.txt").unwrap();
//! assert_eq!(record.name_duplicates, vec!["c/one.txt"]);
//! assert_eq!(record.content_duplicates, vec!["b/two.txt"]);
//! assert_eq!(dupes.all_duplicate_paths(), vec!["c/one.txt", "b/two.txt"]);
//! ```

use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Duplicates attached to one representative path.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateRecord {
    /// Later paths with the same file name, in discovery order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name_duplicates: Vec<String>,
    /// Later paths with the same content, in discovery order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_duplicates: Vec<String>,
}

impl DuplicateRecord {
    /// Whether neither sequence has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_duplicates.is_empty() && self.content_duplicates.is_empty()
    }

    /// Total attached duplicates across both checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.name_duplicates.len() + self.content_duplicates.len()
    }
}

/// Representative path → [`DuplicateRecord`], in creation order.
///
/// Serializes as a JSON object whose keys follow creation order.
#[derive(Debug, Clone, Default)]
pub struct DuplicateAggregator {
    records: Vec<(String, DuplicateRecord)>,
    positions: HashMap<String, usize>,
}

impl DuplicateAggregator {
    /// Create an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `duplicate` to `representative` as a same-name file.
    pub fn record_name_duplicate(&mut self, representative: &str, duplicate: &str) {
        log::debug!("Name duplicate: {} -> {}", duplicate, representative);
        self.record_mut(representative)
            .name_duplicates
            .push(duplicate.to_owned());
    }

    /// Attach `duplicate` to `representative` as a same-content file.
    pub fn record_content_duplicate(&mut self, representative: &str, duplicate: &str) {
        log::debug!("Content duplicate: {} -> {}", duplicate, representative);
        self.record_mut(representative)
            .content_duplicates
            .push(duplicate.to_owned());
    }

    fn record_mut(&mut self, representative: &str) -> &mut DuplicateRecord {
        let idx = match self.positions.get(representative) {
            Some(&idx) => idx,
            None => {
                let idx = self.records.len();
                self.records
                    .push((representative.to_owned(), DuplicateRecord::default()));
                self.positions.insert(representative.to_owned(), idx);
                idx
            }
        };
        &mut self.records[idx].1
    }

    /// Record for `representative`, if it has any duplicate.
    #[must_use]
    pub fn get(&self, representative: &str) -> Option<&DuplicateRecord> {
        self.positions
            .get(representative)
            .map(|&idx| &self.records[idx].1)
    }

    /// Iterate `(representative, record)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DuplicateRecord)> {
        self.records.iter().map(|(p, r)| (p.as_str(), r))
    }

    /// Number of representatives with duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no duplicate has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every path recorded as a duplicate of some representative.
    ///
    /// For each record in creation order: its name duplicates, then its
    /// content duplicates. A path appears once, at its first position.
    /// Representatives are listed only if they were themselves recorded as
    /// a duplicate under the other check.
    #[must_use]
    pub fn all_duplicate_paths(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut paths = Vec::new();
        for (_, record) in self.iter() {
            let members = record
                .name_duplicates
                .iter()
                .chain(&record.content_duplicates)
                .map(String::as_str);
            for path in members {
                if seen.insert(path) {
                    paths.push(path.to_owned());
                }
            }
        }
        paths
    }
}

impl Serialize for DuplicateAggregator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (representative, record) in &self.records {
            map.serialize_entry(representative, record)?;
        }
        map.end()
    }
}
