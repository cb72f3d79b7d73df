//! Stopword set.

use ahash::AHashSet;

/// A presence-only set of stopwords.
#[derive(Clone, Debug, Default)]
pub struct StopwordTable {
    words: AHashSet<String>,
}

impl StopwordTable {
    /// Create a new empty stopword table.
    pub fn new() -> Self {
        StopwordTable::default()
    }

    /// Add a stopword.
    pub fn insert(&mut self, word: String) {
        self.words.insert(word);
    }

    /// Check whether a word is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
