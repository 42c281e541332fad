//! The transformer itself: body in, rendered body (or bodies) out.

use futures::stream::{self, StreamExt};
use serde_json::Value;
use tracing::{debug, warn};

use sitegen_core::{
    CoreError, Resource, ResourceStream, TemplateEngineContext, TransformContext, Transformer,
};

/// Renders the template represented by the body of the source resource using
/// the template engine associated with the resource's type, and replaces the
/// body of each resulting resource with the engine's rendered output.
///
/// A resource without a body is passed through unchanged, without consulting
/// any engine. When the engine paginates, one output resource is emitted per
/// page, each carrying the stringified page identifier; engine failures
/// surface on the stream verbatim.
#[derive(Debug, Default)]
pub struct TemplateTransformer;

impl TemplateTransformer {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for TemplateTransformer {
    fn transform(&self, resource: Resource, context: &TransformContext) -> ResourceStream {
        // No body of template content to transform.
        let Some(template) = resource.body().map(str::to_owned) else {
            debug!("resource has no body, passing it through");
            return stream::once(async move { Ok(resource) }).boxed();
        };

        let Some(descriptor) = context.resource_type.template_engine.clone() else {
            warn!("resource type does not specify a template engine");
            return failed(CoreError::NoTemplateEngine);
        };

        let engine = match context.environment.template_engines.lookup(&descriptor.name) {
            Ok(engine) => engine,
            Err(err) => {
                warn!(engine = %descriptor.name, "template engine is not registered");
                return failed(err);
            }
        };

        debug!(engine = %descriptor.name, "rendering resource body");

        let engine_context = TemplateEngineContext {
            name: descriptor.name,
            options: descriptor.options,
        };

        engine
            .render_template_string(&template, &resource, &engine_context)
            .map(move |output| {
                let output = output?;
                let page = output.page.as_ref().map(page_string);
                Ok(resource.to_builder().body(output.body).page(page).build())
            })
            .boxed()
    }
}

/// One-element stream carrying a failure.
fn failed(err: CoreError) -> ResourceStream {
    stream::once(async move { Err(err) }).boxed()
}

/// Stringifies an engine-supplied page identifier. JSON strings become their
/// contents; any other value uses its JSON rendering.
fn page_string(page: &Value) -> String {
    match page {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
