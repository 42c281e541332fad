//! # Environment
//!
//! The [`Environment`] represents a sitegen project at runtime: the plugin
//! registries everything else resolves against. Setup code populates the
//! registries, the environment is then wrapped in an `Arc` and handed to
//! pipeline stages through their call-time context.

use std::sync::Arc;

use crate::plugin::template_engine::TemplateEngine;
use crate::plugin::transformer::Transformer;
use crate::registry::PluginRegistry;

/// Plugin registries for a sitegen project.
pub struct Environment {
    /// Template engines, registered by name.
    pub template_engines: PluginRegistry<Arc<dyn TemplateEngine>>,
    /// Pipeline transformers, registered by name.
    pub transformers: PluginRegistry<Arc<dyn Transformer>>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            template_engines: PluginRegistry::new("template engine"),
            transformers: PluginRegistry::new("transformer"),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
