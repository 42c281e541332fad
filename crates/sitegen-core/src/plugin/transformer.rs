//! # Transformer Trait
//!
//! The contract pipeline-stage plugins implement: one resource in, a lazy
//! stream of resources out. A stage may pass a resource through unchanged,
//! rewrite it, or expand it into several resources (pagination).
//!
//! # Context Injection
//! A transformer's dependencies arrive through the [`TransformContext`] at
//! call time instead of being captured at construction time. Transformers
//! stay stateless, and the environment can own the registered transformers
//! without forming reference cycles with them.

use std::sync::Arc;

use futures::stream::BoxStream;

use crate::environment::Environment;
use crate::error::CoreError;
use crate::resource::Resource;
use crate::resource_type::ResourceType;

/// Lazy stream of transformed resources. Consumption order is emission
/// order; a failed transform surfaces as an `Err` item.
pub type ResourceStream = BoxStream<'static, Result<Resource, CoreError>>;

/// Per-call context injected into [`Transformer::transform`].
#[derive(Clone)]
pub struct TransformContext {
    /// The project environment, for resolving other plugins.
    pub environment: Arc<Environment>,
    /// The resource type of the resource being transformed.
    pub resource_type: ResourceType,
}

/// Contract for pipeline-stage plugins.
pub trait Transformer: Send + Sync {
    /// Transforms `resource` into zero or more output resources.
    fn transform(&self, resource: Resource, context: &TransformContext) -> ResourceStream;
}
