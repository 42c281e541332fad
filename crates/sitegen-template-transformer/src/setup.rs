//! Registration glue: wires the transformer into an environment.

use std::sync::Arc;

use sitegen_core::Environment;

use crate::template_transformer::TemplateTransformer;

/// Name the transformer is registered under in the environment's transformer
/// registry.
pub const TRANSFORMER_NAME: &str = "template";

/// Registers a [`TemplateTransformer`] under [`TRANSFORMER_NAME`].
pub fn setup(env: &mut Environment) {
    env.transformers
        .set(TRANSFORMER_NAME, Arc::new(TemplateTransformer::new()));
}
