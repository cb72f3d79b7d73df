//! Top-level segmentation engine.
//!
//! [`Segment`] ties the pieces together: it owns the shared dictionary
//! store and the module registry, splits input text into
//! whitespace-delimited sections, runs each section through the tokenizer
//! and optimizer chains, and applies the post-processing options in their
//! fixed order.
//!
//! # Examples
//!
//! ```no_run
//! use fenci::segment::{Segment, SegmentOptions};
//!
//! let mut segment = Segment::new();
//! segment
//!     .use_by_name("DictTokenizer")?
//!     .load_dict("dict.txt")?
//!     .load_synonym_dict("synonym.txt")?
//!     .load_stopword_dict("stopword.txt")?;
//!
//! let options = SegmentOptions {
//!     convert_synonym: true,
//!     strip_stopword: true,
//!     ..SegmentOptions::default()
//! };
//! let words = segment.segment_simple("这是一个基于词典的分词器", &options)?;
//! # Ok::<(), fenci::error::FenciError>(())
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, TABLE_DEFAULT};
use crate::error::{FenciError, Result};
use crate::module::factory::PluginModule;
use crate::module::registry::ModuleRegistry;
use crate::module::{OptimizerModule, TokenizerModule};
use crate::pipeline::{OptimizerChain, TokenizerChain};
use crate::token::{Token, join_words, pos};

/// Default cap on synonym conversion passes.
pub const DEFAULT_SYNONYM_PASS_CAP: usize = 64;

/// Post-processing options for [`Segment::segment`].
///
/// The enabled steps always run in this order, regardless of field order at
/// the call site: punctuation strip, synonym conversion, stopword strip,
/// plain-word projection. The order is semantically significant: a word may
/// become a stopword only after synonym conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentOptions {
    /// Drop tokens tagged with the punctuation code.
    pub strip_punctuation: bool,

    /// Replace every token's word with its synonym-table canonical form,
    /// repeating whole-list passes until one makes no replacement.
    pub convert_synonym: bool,

    /// Drop tokens whose word is in the stopword set.
    pub strip_stopword: bool,

    /// Project tokens to bare words. Only consulted by
    /// [`Segment::segment_output`]; [`Segment::segment_simple`] always
    /// projects.
    pub simple: bool,

    /// Cap on synonym conversion passes. Exceeding the cap fails with
    /// [`FenciError::SynonymCycle`] instead of looping forever on a cyclic
    /// synonym table. `0` removes the cap, restoring the unguarded fixpoint
    /// loop for callers that want it.
    pub max_synonym_passes: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            strip_punctuation: false,
            convert_synonym: false,
            strip_stopword: false,
            simple: false,
            max_synonym_passes: DEFAULT_SYNONYM_PASS_CAP,
        }
    }
}

/// Segmentation output: tagged tokens, or bare words when the `simple`
/// option is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentOutput {
    /// Tagged tokens.
    Tokens(Vec<Token>),
    /// Bare words, part-of-speech discarded.
    Words(Vec<String>),
}

/// The segmentation engine.
///
/// Dictionaries must be loaded and modules registered before segmentation
/// begins; afterwards the engine is read-only and [`Segment::segment`]
/// takes `&self`, so one engine can serve concurrent calls on different
/// inputs.
pub struct Segment {
    dict: Arc<Dictionary>,
    registry: ModuleRegistry,
    tokenizer: TokenizerChain,
    optimizer: OptimizerChain,
}

impl Default for Segment {
    fn default() -> Self {
        Self::new()
    }
}

impl Segment {
    /// Create a new engine with the default dictionary directory.
    pub fn new() -> Self {
        Segment::with_dict(Arc::new(Dictionary::default()))
    }

    /// Create a new engine whose named dictionaries resolve under
    /// `dict_dir`.
    pub fn with_dict_dir<P: Into<PathBuf>>(dict_dir: P) -> Self {
        Segment::with_dict(Arc::new(Dictionary::new(dict_dir)))
    }

    /// Create a new engine around an existing dictionary store.
    pub fn with_dict(dict: Arc<Dictionary>) -> Self {
        Segment {
            dict,
            registry: ModuleRegistry::new(),
            tokenizer: TokenizerChain::new(),
            optimizer: OptimizerChain::new(),
        }
    }

    /// The shared dictionary store.
    pub fn dict(&self) -> &Arc<Dictionary> {
        &self.dict
    }

    /// Register a tokenizer module instance.
    pub fn use_tokenizer(&mut self, module: Box<dyn TokenizerModule>) -> &mut Self {
        self.registry
            .register(PluginModule::Tokenizer(module), self.dict.clone());
        self
    }

    /// Register an optimizer module instance.
    pub fn use_optimizer(&mut self, module: Box<dyn OptimizerModule>) -> &mut Self {
        self.registry
            .register(PluginModule::Optimizer(module), self.dict.clone());
        self
    }

    /// Register a module instance of either kind.
    pub fn use_module(&mut self, module: PluginModule) -> &mut Self {
        self.registry.register(module, self.dict.clone());
        self
    }

    /// Register a module by its factory name.
    pub fn use_by_name(&mut self, name: &str) -> Result<&mut Self> {
        self.registry.register_by_name(name, self.dict.clone())?;
        Ok(self)
    }

    /// Load a word table file into the default table.
    pub fn load_dict(&mut self, name: &str) -> Result<&mut Self> {
        self.load_dict_as(name, TABLE_DEFAULT, false)
    }

    /// Load a word table file into the table of the given kind, optionally
    /// lowercasing the file first.
    pub fn load_dict_as(&mut self, name: &str, kind: &str, lowercase: bool) -> Result<&mut Self> {
        self.dict.load_table(name, kind, lowercase)?;
        Ok(self)
    }

    /// Load a synonym file.
    pub fn load_synonym_dict(&mut self, name: &str) -> Result<&mut Self> {
        self.dict.load_synonyms(name)?;
        Ok(self)
    }

    /// Load a stopword file.
    pub fn load_stopword_dict(&mut self, name: &str) -> Result<&mut Self> {
        self.dict.load_stopwords(name)?;
        Ok(self)
    }

    /// Segment text into tagged tokens.
    ///
    /// Carriage returns are normalized to newlines, the text is split on
    /// whitespace runs (whitespace is never itself a token), each section
    /// runs through the tokenizer and optimizer chains, and the enabled
    /// post-processing steps are applied across the concatenated result in
    /// their fixed order.
    pub fn segment(&self, text: &str, options: &SegmentOptions) -> Result<Vec<Token>> {
        let text = text.replace('\r', "\n");
        let mut tokens = Vec::new();

        for section in text.split_whitespace() {
            let section_tokens = self
                .tokenizer
                .run(section, self.registry.tokenizers())?;
            let section_tokens = self
                .optimizer
                .run(section_tokens, self.registry.optimizers())?;
            tokens.extend(section_tokens);
        }

        if options.strip_punctuation {
            tokens.retain(|token| token.pos != Some(pos::PUNCTUATION));
        }

        if options.convert_synonym {
            tokens = self.convert_synonym(tokens, options.max_synonym_passes)?;
        }

        if options.strip_stopword {
            let stopwords = self.dict.stopwords();
            tokens.retain(|token| !stopwords.contains(&token.word));
        }

        Ok(tokens)
    }

    /// Segment text into bare words (the `simple` projection).
    pub fn segment_simple(&self, text: &str, options: &SegmentOptions) -> Result<Vec<String>> {
        let tokens = self.segment(text, options)?;
        Ok(tokens.into_iter().map(|token| token.word).collect())
    }

    /// Segment text, honoring `options.simple` for the output shape.
    pub fn segment_output(&self, text: &str, options: &SegmentOptions) -> Result<SegmentOutput> {
        if options.simple {
            Ok(SegmentOutput::Words(self.segment_simple(text, options)?))
        } else {
            Ok(SegmentOutput::Tokens(self.segment(text, options)?))
        }
    }

    /// Concatenate token words with no separator.
    ///
    /// For unfiltered output this reproduces the input sections back to
    /// back; original whitespace is not reconstructed.
    pub fn to_text(tokens: &[Token]) -> String {
        join_words(tokens)
    }

    /// Replace words with their canonical synonyms until a whole-list pass
    /// makes no replacement.
    ///
    /// A pass counts every replacement across the list, so transitive
    /// chains (A → B, B → C) resolve within finitely many passes. An
    /// undetected cycle of length three or more would loop forever; the
    /// pass cap turns that into [`FenciError::SynonymCycle`].
    fn convert_synonym(&self, mut tokens: Vec<Token>, cap: usize) -> Result<Vec<Token>> {
        let synonyms = self.dict.synonyms();
        if synonyms.is_empty() {
            return Ok(tokens);
        }

        let mut passes = 0usize;
        loop {
            let mut replaced = 0usize;
            for token in &mut tokens {
                if let Some(canonical) = synonyms.canonical(&token.word) {
                    token.word = canonical.to_string();
                    replaced += 1;
                }
            }
            passes += 1;
            if replaced == 0 {
                break;
            }
            if cap != 0 && passes >= cap {
                return Err(FenciError::SynonymCycle { passes });
            }
        }

        debug!("synonym conversion converged after {passes} passes");
        Ok(tokens)
    }
}
