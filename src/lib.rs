//! # Fenci
//!
//! A pluggable, dictionary-based word segmentation engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Chainable tokenizer and optimizer modules, run in registration order
//! - Length-bucketed dictionary tables for maximum-match lookup
//! - Synonym canonicalization and stopword filtering
//! - Flat-file dictionary loading

pub mod dictionary;
pub mod error;
pub mod module;
pub mod pipeline;
pub mod segment;
pub mod token;

pub mod prelude {
    //! Convenient re-exports of the commonly used types.

    pub use crate::dictionary::{DictEntry, Dictionary, WordTable};
    pub use crate::error::{FenciError, Result};
    pub use crate::module::{OptimizerModule, PluginModule, TokenizerModule, register_factory};
    pub use crate::segment::{Segment, SegmentOptions, SegmentOutput};
    pub use crate::token::{Token, pos};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
