//! Dictionary store: word tables, synonyms, and stopwords loaded from flat
//! text files.
//!
//! The store is populated once during setup and is read-only afterwards,
//! which makes it safe to share across concurrent segmentation calls. Every
//! tokenizer and optimizer module receives the same shared handle at
//! registration and may only read through it.
//!
//! # File formats
//!
//! - Word table: newline-delimited `word|pos|freq` records. Lines with
//!   fewer than three pipe-separated fields are ignored; the word is
//!   trimmed, empty words are skipped.
//! - Synonym table: newline-delimited `term,canonical` records.
//! - Stopword table: one word per line, blank lines ignored.
//!
//! A dictionary name resolves first as a filesystem path, then under the
//! store's base directory; failing both is
//! [`DictNotFound`](crate::error::FenciError::DictNotFound).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, warn};
use parking_lot::RwLock;

use crate::error::{FenciError, Result};

pub mod stopword;
pub mod synonym;
pub mod table;

pub use stopword::StopwordTable;
pub use synonym::SynonymTable;
pub use table::{DictEntry, WordTable};

/// Kind tag of the default word table.
pub const TABLE_DEFAULT: &str = "TABLE";

/// Kind tag of the lowercased wildcard table.
pub const TABLE_WILDCARD: &str = "WILDCARD";

/// Default base directory searched for dictionary files.
pub const DEFAULT_DICT_DIR: &str = "dicts";

/// The shared dictionary store.
///
/// Word tables are keyed by a kind tag (for example [`TABLE_DEFAULT`] or
/// [`TABLE_WILDCARD`]); multiple loads into the same kind accumulate, with
/// later loads overwriting same-key entries. There is no removal operation.
///
/// Lookups return cheap `Arc` snapshots, so modules can hold onto a table
/// for the duration of a pass without locking.
#[derive(Debug)]
pub struct Dictionary {
    dict_dir: PathBuf,
    tables: RwLock<AHashMap<String, Arc<WordTable>>>,
    synonyms: RwLock<Arc<SynonymTable>>,
    stopwords: RwLock<Arc<StopwordTable>>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(DEFAULT_DICT_DIR)
    }
}

impl Dictionary {
    /// Create a new empty store with the given base directory for named
    /// dictionary files.
    pub fn new<P: Into<PathBuf>>(dict_dir: P) -> Self {
        Dictionary {
            dict_dir: dict_dir.into(),
            tables: RwLock::new(AHashMap::new()),
            synonyms: RwLock::new(Arc::new(SynonymTable::new())),
            stopwords: RwLock::new(Arc::new(StopwordTable::new())),
        }
    }

    /// Get the base directory searched for named dictionary files.
    pub fn dict_dir(&self) -> &Path {
        &self.dict_dir
    }

    /// Resolve a dictionary name to a file: first as a path as given, then
    /// under the base directory.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let direct = PathBuf::from(name);
        if direct.is_file() {
            return Ok(direct);
        }
        let nested = self.dict_dir.join(name);
        if nested.is_file() {
            return Ok(nested);
        }
        Err(FenciError::dict_not_found(name))
    }

    /// Load a word table file into the table of the given kind.
    ///
    /// When `lowercase` is set the whole file content is lowercased before
    /// parsing, for case-insensitive tables such as wildcard matches.
    pub fn load_table(&self, name: &str, kind: &str, lowercase: bool) -> Result<()> {
        let path = self.resolve(name)?;
        let mut data = fs::read_to_string(&path)?;
        if lowercase {
            data = data.to_lowercase();
        }

        let mut tables = self.tables.write();
        let table = Arc::make_mut(tables.entry(kind.to_string()).or_default());

        let mut loaded = 0usize;
        for line in data.lines() {
            let fields: Vec<&str> = line.split('|').collect();
            if fields.len() < 3 {
                continue;
            }
            let word = fields[0].trim();
            if word.is_empty() {
                continue;
            }
            let pos = match fields[1].trim().parse::<u32>() {
                Ok(pos) => pos,
                Err(_) => {
                    warn!("skipping dict line with bad pos code: {line:?}");
                    continue;
                }
            };
            let freq = match fields[2].trim().parse::<i32>() {
                Ok(freq) => freq,
                Err(_) => {
                    warn!("skipping dict line with bad frequency: {line:?}");
                    continue;
                }
            };
            table.insert(word.to_string(), DictEntry::new(freq, pos));
            loaded += 1;
        }

        debug!(
            "loaded {loaded} entries into table {kind:?} from {}",
            path.display()
        );
        Ok(())
    }

    /// Load a synonym file.
    ///
    /// Applies the 2-cycle breaking rule of [`SynonymTable::insert`] per
    /// pair, in file order.
    pub fn load_synonyms(&self, name: &str) -> Result<()> {
        let path = self.resolve(name)?;
        let data = fs::read_to_string(&path)?;

        let mut guard = self.synonyms.write();
        let table = Arc::make_mut(&mut *guard);
        for line in data.lines() {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < 2 {
                continue;
            }
            let term = fields[0].trim();
            let canonical = fields[1].trim();
            if term.is_empty() || canonical.is_empty() {
                continue;
            }
            table.insert(term.to_string(), canonical.to_string());
        }

        debug!(
            "synonym table holds {} mappings after loading {}",
            table.len(),
            path.display()
        );
        Ok(())
    }

    /// Load a stopword file.
    pub fn load_stopwords(&self, name: &str) -> Result<()> {
        let path = self.resolve(name)?;
        let data = fs::read_to_string(&path)?;

        let mut guard = self.stopwords.write();
        let table = Arc::make_mut(&mut *guard);
        for line in data.lines() {
            let word = line.trim();
            if !word.is_empty() {
                table.insert(word.to_string());
            }
        }

        debug!(
            "stopword table holds {} words after loading {}",
            table.len(),
            path.display()
        );
        Ok(())
    }

    /// Get a snapshot of the word table of the given kind.
    ///
    /// Returns `None` when no file was ever loaded into that kind; callers
    /// must handle the never-loaded case.
    pub fn table(&self, kind: &str) -> Option<Arc<WordTable>> {
        self.tables.read().get(kind).cloned()
    }

    /// Get a snapshot of the synonym table.
    pub fn synonyms(&self) -> Arc<SynonymTable> {
        self.synonyms.read().clone()
    }

    /// Get a snapshot of the stopword table.
    pub fn stopwords(&self) -> Arc<StopwordTable> {
        self.stopwords.read().clone()
    }
}
