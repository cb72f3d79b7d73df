//! Synonym table mapping terms to their canonical form.

use ahash::AHashMap;

/// A term → canonical-term mapping.
///
/// Inserting a pair breaks immediate 2-cycles: when `A → B` is inserted and
/// the table already holds `B → A`, the prior entry is deleted. Cycles of
/// length three or more are not detected at load time; the conversion pass
/// cap in [`SegmentOptions`](crate::segment::SegmentOptions) is the guard
/// against those.
#[derive(Clone, Debug, Default)]
pub struct SynonymTable {
    map: AHashMap<String, String>,
}

impl SynonymTable {
    /// Create a new empty synonym table.
    pub fn new() -> Self {
        SynonymTable::default()
    }

    /// Insert a term → canonical pair, deleting a pre-existing reverse pair.
    pub fn insert(&mut self, term: String, canonical: String) {
        self.map.insert(term.clone(), canonical.clone());
        // The reverse check runs after the insert, so a degenerate A → A
        // pair cancels itself out as well.
        if self.map.get(&canonical).is_some_and(|back| *back == term) {
            self.map.remove(&canonical);
        }
    }

    /// Get the canonical form for a term, if one is mapped.
    pub fn canonical(&self, term: &str) -> Option<&str> {
        self.map.get(term).map(|s| s.as_str())
    }

    /// Check whether a term has a canonical mapping.
    pub fn contains(&self, term: &str) -> bool {
        self.map.contains_key(term)
    }

    /// Get the number of mappings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over all mappings.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.map.iter()
    }
}
