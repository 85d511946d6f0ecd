use serde::Serialize;
use std::collections::BTreeMap;

/// One n-gram and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NGramCount {
    /// The n-gram's tokens joined by single spaces
    pub ngram: String,

    /// Number of occurrences in the token stream
    pub count: u64,
}

/// Most frequent n-grams, keyed by n-gram length
///
/// Each entry is ordered by descending count, ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: BTreeMap<usize, Vec<NGramCount>>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, length: usize, counts: Vec<NGramCount>) {
        self.entries.insert(length, counts);
    }

    /// The ranked n-grams of the given length, if that length was requested
    pub fn get(&self, length: usize) -> Option<&[NGramCount]> {
        self.entries.get(&length).map(Vec::as_slice)
    }

    /// Number of n-gram lengths in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(length, ranked n-grams)` in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[NGramCount])> {
        self.entries
            .iter()
            .map(|(length, counts)| (*length, counts.as_slice()))
    }
}
