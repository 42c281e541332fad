//! # Core Errors
//!
//! This module defines the common error type used across the plugin surface.
//! Centralizing the definitions keeps error handling consistent between the
//! registries, the engine contract, and the transformers built on top of them.

/// Errors produced by the core plugin contracts.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A registry lookup found no plugin under the requested name.
    #[error("no {kind} plugin registered under the name {name:?}")]
    PluginNotFound { kind: &'static str, name: String },

    /// A resource type was asked to render but carries no template-engine
    /// descriptor.
    #[error("resource type does not specify a template engine")]
    NoTemplateEngine,

    /// A template engine failed while rendering.
    ///
    /// The wrapped error's message is surfaced verbatim: callers of a
    /// transformer see exactly what the engine reported, with no translation
    /// layered on top.
    #[error("{0}")]
    TemplateEngine(Box<dyn std::error::Error + Send + Sync>),
}

impl CoreError {
    /// Wraps an arbitrary engine failure.
    pub fn engine<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        CoreError::TemplateEngine(err.into())
    }
}
