//! # TemplateEngine Trait
//!
//! The contract template-engine plugins implement. An engine takes template
//! text (or the name of a stored template), a parameter source, and a small
//! context, and produces a lazy stream of rendered outputs. A single template
//! may expand into several outputs when the engine paginates.
//!
//! Engines are registered in the environment as `Arc<dyn TemplateEngine>`
//! and resolved by name, so the trait is object-safe and rendering returns a
//! boxed stream rather than an associated type.

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde_json::Value;

use crate::error::CoreError;
use crate::resource::Resource;

/// One rendered output produced by a template engine.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateOutput {
    /// Page identifier for paginated output. `None` when the engine produced
    /// a single, unpaginated output. Engines may use any JSON value here;
    /// consumers stringify it when they need a page key.
    pub page: Option<Value>,
    /// The rendered text.
    pub body: String,
}

/// Lazy stream of rendered outputs. Items are produced in the order the
/// engine emits them; a failed render surfaces as an `Err` item.
pub type TemplateOutputStream = BoxStream<'static, Result<TemplateOutput, CoreError>>;

/// The context handed to an engine for a single render: only the engine's
/// own registered name and configured options, nothing else from the
/// environment.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEngineContext {
    pub name: String,
    pub options: Value,
}

/// Contract for template-engine plugins.
#[async_trait]
pub trait TemplateEngine: Send + Sync {
    /// Renders inline template text against a parameter source.
    fn render_template_string(
        &self,
        template: &str,
        params: &Resource,
        context: &TemplateEngineContext,
    ) -> TemplateOutputStream;

    /// Renders a named template from the engine's template store.
    fn render_template(
        &self,
        name: &str,
        params: &Resource,
        context: &TemplateEngineContext,
    ) -> TemplateOutputStream;

    /// Drops any compiled-template cache the engine keeps. Engines without a
    /// cache need not override this.
    async fn clear_template_cache(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
