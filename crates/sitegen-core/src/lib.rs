//! # Sitegen Core
//!
//! Host-framework contracts for the sitegen content pipeline. This crate owns
//! the seams that plugins compile against; it contains no pipeline logic of
//! its own.
//!
//! ## Core Abstractions
//!
//! - [`Resource`] - a content unit flowing through the pipeline. Resources are
//!   immutable; producing a changed resource means cloning with overrides via
//!   [`ResourceBuilder`].
//! - [`ResourceType`] - per-type configuration, including which template
//!   engine renders resources of that type (a [`PluginContext`] descriptor).
//! - [`TemplateEngine`] - the rendering plugin contract. Rendering yields a
//!   lazy stream of [`TemplateOutput`] records so a single template may expand
//!   into several outputs (pagination).
//! - [`Transformer`] - the pipeline-stage plugin contract: one resource in,
//!   a lazy stream of resources out.
//! - [`Environment`] - the plugin registries a project is wired up with.
//!
//! ## Context Injection Pattern
//!
//! Transformers receive their dependencies (the [`Environment`], the
//! [`ResourceType`]) through a [`TransformContext`] at call time rather than
//! capturing them at construction time. Plugins therefore stay stateless and
//! the environment can own the registered plugins without reference cycles.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockTemplateEngine`](mock::MockTemplateEngine)
//! that renders `{field}` placeholders in-memory, paginates, and injects
//! failures on demand, so plugin crates can test against the engine contract
//! without a real template engine.

pub mod environment;
pub mod error;
pub mod logging;
pub mod mock;
pub mod plugin;
pub mod registry;
pub mod resource;
pub mod resource_type;

// Re-export core types for convenience
pub use environment::Environment;
pub use error::CoreError;
pub use logging::setup_tracing;
pub use plugin::template_engine::{
    TemplateEngine, TemplateEngineContext, TemplateOutput, TemplateOutputStream,
};
pub use plugin::transformer::{ResourceStream, TransformContext, Transformer};
pub use registry::PluginRegistry;
pub use resource::{Resource, ResourceBuilder};
pub use resource_type::{PluginContext, ResourceType};
