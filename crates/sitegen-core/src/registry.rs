//! # Plugin Registry
//!
//! A named store for plugin instances. The environment keeps one registry per
//! plugin kind (template engines, transformers); projects register plugins
//! under a name during setup and pipeline stages resolve them by that name at
//! transform time.

use std::collections::HashMap;

use crate::error::CoreError;

/// Named plugin store for a single plugin kind.
///
/// Registered values are typically `Arc<dyn Trait>` handles, so
/// [`PluginRegistry::lookup`] hands out clones rather than borrows; callers
/// keep their handle alive independently of the registry.
#[derive(Debug)]
pub struct PluginRegistry<P> {
    kind: &'static str,
    plugins: HashMap<String, P>,
}

impl<P> PluginRegistry<P> {
    /// Creates an empty registry. `kind` names the plugin kind in lookup
    /// errors (e.g. `"template engine"`).
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            plugins: HashMap::new(),
        }
    }

    /// Registers a plugin under `name`, replacing any previous registration.
    pub fn set(&mut self, name: impl Into<String>, plugin: P) {
        let name = name.into();
        tracing::debug!(kind = self.kind, name = %name, "plugin registered");
        self.plugins.insert(name, plugin);
    }

    /// Whether a plugin is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Names of all registered plugins, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }
}

impl<P: Clone> PluginRegistry<P> {
    /// Resolves the plugin registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<P, CoreError> {
        self.plugins
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::PluginNotFound {
                kind: self.kind,
                name: name.to_string(),
            })
    }
}
