//! # Template Transformer
//!
//! Pipeline stage that renders the template markup in a resource's body
//! through the template engine configured for the resource's type, replacing
//! the body with the rendered output. When the engine paginates, one input
//! resource expands into several output resources, one per page.
//!
//! The transformer is a thin adapter over two seams owned by
//! [`sitegen_core`]: the environment's template-engine registry and the
//! [`TemplateEngine`](sitegen_core::TemplateEngine) plugin contract. It adds
//! no caching, no concurrency, and no error recovery of its own.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use futures::StreamExt;
//! use sitegen_core::mock::MockTemplateEngine;
//! use sitegen_core::{Environment, PluginContext, Resource, ResourceType, TransformContext, Transformer};
//! use sitegen_template_transformer::{setup, TemplateTransformer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut env = Environment::new();
//!     env.template_engines.set("mock", Arc::new(MockTemplateEngine::new()));
//!     setup(&mut env);
//!
//!     let context = TransformContext {
//!         environment: Arc::new(env),
//!         resource_type: ResourceType {
//!             template_engine: Some(PluginContext::new("mock")),
//!         },
//!     };
//!
//!     let resource = Resource::builder()
//!         .body("Hello, {name}.")
//!         .field("name", "Ada")
//!         .build();
//!
//!     let transformer = context
//!         .environment
//!         .transformers
//!         .lookup("template")
//!         .unwrap();
//!     let rendered: Vec<_> = transformer.transform(resource, &context).collect().await;
//!     assert_eq!(rendered[0].as_ref().unwrap().body(), Some("Hello, Ada."));
//! }
//! ```

pub mod setup;
pub mod template_transformer;

pub use setup::{setup, TRANSFORMER_NAME};
pub use template_transformer::TemplateTransformer;
