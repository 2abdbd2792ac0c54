use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Matched words grouped by length. Only lengths with at least one word are kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    groups: BTreeMap<usize, BTreeSet<String>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a result set from existing groups, dropping empty ones
    pub fn from_groups(groups: BTreeMap<usize, BTreeSet<String>>) -> Self {
        Self {
            groups: groups.into_iter().filter(|(_, w)| !w.is_empty()).collect(),
        }
    }

    pub fn insert(&mut self, word: String) {
        self.groups.entry(word.len()).or_default().insert(word);
    }

    /// Combines two partial results, used to reduce per-thread results
    pub fn merge(mut self, other: ResultSet) -> Self {
        for (len, words) in other.groups {
            self.groups.entry(len).or_default().extend(words);
        }
        self
    }

    pub fn get(&self, len: usize) -> Option<&BTreeSet<String>> {
        self.groups.get(&len)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word.len()).map(|w| w.contains(word)).unwrap_or(false)
    }

    pub fn groups(&self) -> &BTreeMap<usize, BTreeSet<String>> {
        &self.groups
    }

    /// Total number of matched words
    pub fn len(&self) -> usize {
        self.groups.values().map(|w| w.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl std::iter::FromIterator<String> for ResultSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut results = Self::new();
        iter.into_iter().for_each(|w| results.insert(w));
        results
    }
}
