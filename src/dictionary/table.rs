//! Word tables with a length-bucketed secondary index.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Frequency and part-of-speech data for one dictionary word.
///
/// Immutable once loaded; reloading the same word replaces the whole entry
/// (last write wins), frequencies are never merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Word frequency.
    pub freq: i32,
    /// Part-of-speech code.
    pub pos: u32,
}

impl DictEntry {
    /// Create a new dictionary entry.
    pub fn new(freq: i32, pos: u32) -> Self {
        DictEntry { freq, pos }
    }
}

/// A word table: word → [`DictEntry`], mirrored by a length-bucketed index.
///
/// The length index maps word length in characters to the words of that
/// length, so that maximum-match tokenizers can enumerate only same-length
/// candidates instead of scanning the whole table. Every entry in the table
/// has exactly one mirrored entry in the bucket for its character length;
/// the index is maintained incrementally on insert.
#[derive(Clone, Debug, Default)]
pub struct WordTable {
    entries: AHashMap<String, DictEntry>,
    by_len: AHashMap<usize, AHashMap<String, DictEntry>>,
}

impl WordTable {
    /// Create a new empty word table.
    pub fn new() -> Self {
        WordTable::default()
    }

    /// Insert or overwrite an entry.
    pub fn insert(&mut self, word: String, entry: DictEntry) {
        let len = word.chars().count();
        self.by_len
            .entry(len)
            .or_default()
            .insert(word.clone(), entry);
        self.entries.insert(word, entry);
    }

    /// Look up a word.
    pub fn get(&self, word: &str) -> Option<&DictEntry> {
        self.entries.get(word)
    }

    /// Check whether a word is present.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Get the bucket of all words with the given character length.
    ///
    /// Returns `None` when no word of that length has been loaded.
    pub fn with_len(&self, len: usize) -> Option<&AHashMap<String, DictEntry>> {
        self.by_len.get(&len)
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DictEntry)> {
        self.entries.iter()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = WordTable::new();
        table.insert("测试".to_string(), DictEntry::new(10, 1));

        assert_eq!(table.get("测试"), Some(&DictEntry::new(10, 1)));
        assert_eq!(table.get("其他"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_overwrite_is_last_write_wins() {
        let mut table = WordTable::new();
        table.insert("词".to_string(), DictEntry::new(10, 1));
        table.insert("词".to_string(), DictEntry::new(99, 2));

        assert_eq!(table.get("词"), Some(&DictEntry::new(99, 2)));
        assert_eq!(table.len(), 1);
        // The length bucket mirrors the overwrite, no stale entry remains.
        let bucket = table.with_len(1).unwrap();
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket.get("词"), Some(&DictEntry::new(99, 2)));
    }

    #[test]
    fn test_length_index_uses_char_count() {
        let mut table = WordTable::new();
        table.insert("测试".to_string(), DictEntry::new(5, 1));
        table.insert("ab".to_string(), DictEntry::new(3, 2));
        table.insert("三个字".to_string(), DictEntry::new(7, 1));

        // "测试" is 6 bytes but 2 characters; it shares the bucket with "ab".
        let bucket = table.with_len(2).unwrap();
        assert_eq!(bucket.len(), 2);
        assert!(bucket.contains_key("测试"));
        assert!(bucket.contains_key("ab"));
        assert!(table.with_len(3).unwrap().contains_key("三个字"));
        assert!(table.with_len(6).is_none());
    }

    #[test]
    fn test_length_index_mirrors_every_entry() {
        let mut table = WordTable::new();
        for (word, freq) in [("一", 1), ("一二", 2), ("一二三", 3), ("四五", 4)] {
            table.insert(word.to_string(), DictEntry::new(freq, 0));
        }

        for (word, entry) in table.iter() {
            let bucket = table.with_len(word.chars().count()).unwrap();
            assert_eq!(bucket.get(word), Some(entry));
        }
    }
}
