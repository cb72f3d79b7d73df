//! Error types for the Fenci library.
//!
//! All failures surface through the [`FenciError`] enum. Dictionary loading
//! and module registration are additive, so a failed operation never leaves
//! partially rolled-back state behind: previously loaded tables and
//! previously registered modules stay intact.
//!
//! # Examples
//!
//! ```
//! use fenci::error::{FenciError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FenciError::module("something went wrong"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Fenci operations.
#[derive(Error, Debug)]
pub enum FenciError {
    /// A named dictionary file could not be resolved, neither as a path nor
    /// under the configured dictionary directory.
    #[error("Cannot find dict file \"{name}\"")]
    DictNotFound {
        /// The name the caller asked for.
        name: String,
    },

    /// A named module is not present in the factory registry.
    #[error("Cannot find module \"{name}\"")]
    ModuleNotFound {
        /// The name the caller asked for.
        name: String,
    },

    /// Segmentation was invoked with zero registered tokenizer modules.
    #[error("No tokenizer module registered")]
    NoTokenizer,

    /// Synonym conversion did not reach a fixpoint within the configured
    /// pass cap, which indicates a cycle in the synonym table.
    #[error("Synonym conversion did not converge after {passes} passes")]
    SynonymCycle {
        /// The number of passes that were run before giving up.
        passes: usize,
    },

    /// An error raised by a tokenizer or optimizer module. Propagated to the
    /// caller unmodified; no retry, no partial output.
    #[error("Module error: {0}")]
    Module(String),

    /// I/O errors while reading dictionary files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`FenciError`].
pub type Result<T> = std::result::Result<T, FenciError>;

impl FenciError {
    /// Create a new dictionary-not-found error.
    pub fn dict_not_found<S: Into<String>>(name: S) -> Self {
        FenciError::DictNotFound { name: name.into() }
    }

    /// Create a new module-not-found error.
    pub fn module_not_found<S: Into<String>>(name: S) -> Self {
        FenciError::ModuleNotFound { name: name.into() }
    }

    /// Create a new module error.
    pub fn module<S: Into<String>>(msg: S) -> Self {
        FenciError::Module(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FenciError::dict_not_found("dict.txt");
        assert_eq!(err.to_string(), "Cannot find dict file \"dict.txt\"");

        let err = FenciError::module_not_found("UnknownTokenizer");
        assert_eq!(err.to_string(), "Cannot find module \"UnknownTokenizer\"");

        let err = FenciError::NoTokenizer;
        assert_eq!(err.to_string(), "No tokenizer module registered");

        let err = FenciError::SynonymCycle { passes: 64 };
        assert_eq!(
            err.to_string(),
            "Synonym conversion did not converge after 64 passes"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: FenciError = io_err.into();
        assert!(matches!(err, FenciError::Io(_)));
    }
}
