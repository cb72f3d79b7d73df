//! Ordered registry of tokenizer and optimizer modules.

use std::sync::Arc;

use log::debug;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::module::factory::{self, PluginModule};
use crate::module::{OptimizerModule, TokenizerModule};

/// Holds the ordered module lists for one engine.
///
/// Registration order is execution order and is semantically significant:
/// later modules may rely on earlier modules having already classified
/// certain token spans. There is no de-duplication, no reordering, and no
/// unregistration.
#[derive(Default)]
pub struct ModuleRegistry {
    tokenizers: Vec<Box<dyn TokenizerModule>>,
    optimizers: Vec<Box<dyn OptimizerModule>>,
}

impl ModuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        ModuleRegistry::default()
    }

    /// Register a module instance.
    ///
    /// Calls the module's `init` hook with the shared dictionary handle,
    /// then appends it to the list matching its declared kind.
    pub fn register(&mut self, module: PluginModule, dict: Arc<Dictionary>) {
        debug!("registering module {:?}", module.name());
        match module {
            PluginModule::Tokenizer(mut tokenizer) => {
                tokenizer.init(dict);
                self.tokenizers.push(tokenizer);
            }
            PluginModule::Optimizer(mut optimizer) => {
                optimizer.init(dict);
                self.optimizers.push(optimizer);
            }
        }
    }

    /// Resolve a module by name through the factory table and register it.
    pub fn register_by_name(&mut self, name: &str, dict: Arc<Dictionary>) -> Result<()> {
        let module = factory::create(name)?;
        self.register(module, dict);
        Ok(())
    }

    /// The registered tokenizer modules, in execution order.
    pub fn tokenizers(&self) -> &[Box<dyn TokenizerModule>] {
        &self.tokenizers
    }

    /// The registered optimizer modules, in execution order.
    pub fn optimizers(&self) -> &[Box<dyn OptimizerModule>] {
        &self.optimizers
    }
}
