//! Plugin contracts: the traits external plugins implement to take part in
//! the pipeline.

pub mod template_engine;
pub mod transformer;

pub use template_engine::{
    TemplateEngine, TemplateEngineContext, TemplateOutput, TemplateOutputStream,
};
pub use transformer::{ResourceStream, TransformContext, Transformer};
