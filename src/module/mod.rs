//! Pluggable tokenizer and optimizer modules.
//!
//! The engine itself implements no linguistic knowledge. Everything that
//! recognizes words, punctuation, names, or dates is a module implementing
//! one of the two traits here, executed by the pipeline chains in
//! registration order.
//!
//! A module's `init` hook runs exactly once, at registration, and receives
//! the shared [`Dictionary`] handle. Modules may read tables there at any
//! point but must never depend on loads happening after segmentation
//! begins.
//!
//! Both kinds of module must preserve the reconstruction invariant:
//! concatenating the words of the returned list must reproduce the
//! concatenation of the input list exactly.

use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::token::Token;

pub mod factory;
pub mod registry;

pub use factory::{PluginModule, register_factory};
pub use registry::ModuleRegistry;

/// A pipeline stage that subdivides and classifies tokens.
pub trait TokenizerModule: Send + Sync {
    /// Get the name of this module (for debugging and named registration).
    fn name(&self) -> &'static str;

    /// Called once at registration with the shared dictionary handle.
    fn init(&mut self, dict: Arc<Dictionary>) {
        let _ = dict;
    }

    /// Replace the token list with a refined one. May subdivide any token
    /// and assign part-of-speech codes.
    fn split(&self, tokens: Vec<Token>) -> Result<Vec<Token>>;
}

/// A pipeline stage that merges and reclassifies tokens after tokenization.
pub trait OptimizerModule: Send + Sync {
    /// Get the name of this module (for debugging and named registration).
    fn name(&self) -> &'static str;

    /// Called once at registration with the shared dictionary handle.
    fn init(&mut self, dict: Arc<Dictionary>) {
        let _ = dict;
    }

    /// Replace the token list with a refined one. May merge adjacent tokens
    /// and reassign part-of-speech codes.
    fn optimize(&self, tokens: Vec<Token>) -> Result<Vec<Token>>;
}
