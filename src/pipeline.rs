//! Tokenizer and optimizer chain execution.
//!
//! Both chains are plain folds over the registered module lists: each
//! module replaces the whole token list, and any module error aborts the
//! run unmodified. The chains perform no validation of the reconstruction
//! invariant; that contract is assumed and pinned by the test suite.

use crate::error::{FenciError, Result};
use crate::module::{OptimizerModule, TokenizerModule};
use crate::token::Token;

/// Runs a section through every tokenizer module in registration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenizerChain;

impl TokenizerChain {
    /// Create a new tokenizer chain.
    pub fn new() -> Self {
        TokenizerChain
    }

    /// Tokenize one section.
    ///
    /// Seeds the list with a single token spanning the whole section, then
    /// folds every module's `split` over it. Fails with
    /// [`FenciError::NoTokenizer`] when no tokenizer module is registered.
    pub fn run(&self, section: &str, modules: &[Box<dyn TokenizerModule>]) -> Result<Vec<Token>> {
        if modules.is_empty() {
            return Err(FenciError::NoTokenizer);
        }

        let mut tokens = vec![Token::new(section)];
        for module in modules {
            tokens = module.split(tokens)?;
        }
        Ok(tokens)
    }
}

/// Runs a token list through every optimizer module in registration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimizerChain;

impl OptimizerChain {
    /// Create a new optimizer chain.
    pub fn new() -> Self {
        OptimizerChain
    }

    /// Refine a token list.
    ///
    /// Zero registered optimizers is a no-op; no module is skipped or
    /// retried.
    pub fn run(
        &self,
        mut tokens: Vec<Token>,
        modules: &[Box<dyn OptimizerModule>],
    ) -> Result<Vec<Token>> {
        for module in modules {
            tokens = module.optimize(tokens)?;
        }
        Ok(tokens)
    }
}
