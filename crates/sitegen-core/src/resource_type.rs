//! # Resource Types
//!
//! A [`ResourceType`] groups the per-type configuration a project declares
//! for its content, most importantly which template engine renders resources
//! of that type. Plugins are referenced by [`PluginContext`] descriptors: the
//! registered plugin name plus the options the project configured it with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor referencing a named plugin together with its configured
/// options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    /// Name the plugin is registered under in the environment.
    pub name: String,
    /// Options the project configured the plugin with. `Null` when the
    /// project supplied none.
    #[serde(default)]
    pub options: Value,
}

impl PluginContext {
    /// Creates a descriptor with no options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
        }
    }

    /// Creates a descriptor carrying configured options.
    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// Configuration for one type of resource in the project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceType {
    /// The template engine that renders resources of this type, if any.
    #[serde(default)]
    pub template_engine: Option<PluginContext>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_defaults_to_null_options() {
        let descriptor = PluginContext::new("nunjucks");
        assert_eq!(descriptor.name, "nunjucks");
        assert_eq!(descriptor.options, Value::Null);
    }

    #[test]
    fn resource_type_deserializes_engine_descriptor() {
        let resource_type: ResourceType = serde_json::from_value(json!({
            "template_engine": { "name": "nunjucks", "options": { "trim": true } }
        }))
        .unwrap();

        let descriptor = resource_type.template_engine.unwrap();
        assert_eq!(descriptor.name, "nunjucks");
        assert_eq!(descriptor.options, json!({ "trim": true }));
    }

    #[test]
    fn resource_type_without_engine_deserializes_to_none() {
        let resource_type: ResourceType = serde_json::from_value(json!({})).unwrap();
        assert!(resource_type.template_engine.is_none());
    }
}
