//! Named module factories.
//!
//! Modules can be registered with the engine either as instances or by
//! name. Name resolution goes through a process-wide factory table that
//! host code populates during setup, which preserves the load-by-name
//! ergonomics of a plugin directory without any runtime path lookup.
//!
//! # Examples
//!
//! ```
//! use fenci::module::{PluginModule, TokenizerModule, register_factory};
//! use fenci::token::Token;
//! use fenci::error::Result;
//!
//! struct IdentityTokenizer;
//!
//! impl TokenizerModule for IdentityTokenizer {
//!     fn name(&self) -> &'static str {
//!         "IdentityTokenizer"
//!     }
//!
//!     fn split(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
//!         Ok(tokens)
//!     }
//! }
//!
//! register_factory("IdentityTokenizer", || {
//!     PluginModule::Tokenizer(Box::new(IdentityTokenizer))
//! });
//! ```

use std::sync::LazyLock;

use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;

use crate::error::{FenciError, Result};
use crate::module::{OptimizerModule, TokenizerModule};

/// A module instance ready for registration: either variant of the plugin
/// capability contract.
pub enum PluginModule {
    /// A tokenizer-stage module.
    Tokenizer(Box<dyn TokenizerModule>),
    /// An optimizer-stage module.
    Optimizer(Box<dyn OptimizerModule>),
}

impl PluginModule {
    /// Get the wrapped module's name.
    pub fn name(&self) -> &'static str {
        match self {
            PluginModule::Tokenizer(module) => module.name(),
            PluginModule::Optimizer(module) => module.name(),
        }
    }
}

type Factory = Box<dyn Fn() -> PluginModule + Send + Sync>;

static FACTORIES: LazyLock<RwLock<AHashMap<String, Factory>>> =
    LazyLock::new(|| RwLock::new(AHashMap::new()));

/// Register a module factory under a name.
///
/// Registering the same name again replaces the previous factory. Intended
/// to run during application setup, before any engine is built.
pub fn register_factory<S, F>(name: S, factory: F)
where
    S: Into<String>,
    F: Fn() -> PluginModule + Send + Sync + 'static,
{
    let name = name.into();
    debug!("registering module factory {name:?}");
    FACTORIES.write().insert(name, Box::new(factory));
}

/// Instantiate the module registered under `name`.
///
/// Fails with [`FenciError::ModuleNotFound`] when no factory is registered
/// under that name.
pub fn create(name: &str) -> Result<PluginModule> {
    let factories = FACTORIES.read();
    match factories.get(name) {
        Some(factory) => Ok(factory()),
        None => Err(FenciError::module_not_found(name)),
    }
}
