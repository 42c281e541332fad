//! # Mock Template Engine
//!
//! [`MockTemplateEngine`] implements the [`TemplateEngine`] contract entirely
//! in-memory so plugin crates can test against the engine seam without a real
//! template engine. It is deterministic and instant, and it records enough
//! about each call for tests to assert on.
//!
//! ## Behavior
//!
//! - `{field}` placeholders in the template are substituted with the matching
//!   field of the parameter resource. Unknown placeholders are left as-is.
//! - A `pageCount` field on the parameter resource paginates the render: one
//!   output per page, with the current page number exposed both as the
//!   `{page}` parameter and as [`TemplateOutput::page`].
//! - A `throwError` string field makes the render fail with exactly that
//!   message, for exercising failure paths.
//!
//! ## Call Recording
//!
//! The engine counts `render_template_string` invocations
//! ([`MockTemplateEngine::render_calls`]) and keeps the most recent
//! [`TemplateEngineContext`] ([`MockTemplateEngine::last_context`]), so tests
//! can assert both that the engine was (or wasn't) consulted and what context
//! it was handed.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use futures::stream::{self, StreamExt};
use serde_json::Value;

use crate::error::CoreError;
use crate::plugin::template_engine::{
    TemplateEngine, TemplateEngineContext, TemplateOutput, TemplateOutputStream,
};
use crate::resource::Resource;

/// In-memory [`TemplateEngine`] for tests.
#[derive(Debug, Default)]
pub struct MockTemplateEngine {
    render_calls: AtomicUsize,
    last_context: Mutex<Option<TemplateEngineContext>>,
}

impl MockTemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `render_template_string` has been invoked.
    pub fn render_calls(&self) -> usize {
        self.render_calls.load(Ordering::SeqCst)
    }

    /// The context handed to the most recent render, if any.
    pub fn last_context(&self) -> Option<TemplateEngineContext> {
        self.last_context.lock().unwrap().clone()
    }
}

impl TemplateEngine for MockTemplateEngine {
    fn render_template_string(
        &self,
        template: &str,
        params: &Resource,
        context: &TemplateEngineContext,
    ) -> TemplateOutputStream {
        self.render_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_context.lock().unwrap() = Some(context.clone());

        // Forced failure with a specific message?
        if let Some(message) = params.field("throwError").and_then(Value::as_str) {
            let err = CoreError::engine(message.to_owned());
            return stream::once(async move { Err(err) }).boxed();
        }

        let paginated = params.field("pageCount").is_some();
        let page_count = params
            .field("pageCount")
            .and_then(Value::as_u64)
            .unwrap_or(1);

        let mut outputs = Vec::new();
        for page in 1..=page_count {
            let mut values = params.fields().clone();
            values.insert("page".to_string(), Value::from(page));
            outputs.push(Ok(TemplateOutput {
                page: paginated.then(|| Value::String(page.to_string())),
                body: substitute(template, &values),
            }));
        }

        stream::iter(outputs).boxed()
    }

    fn render_template(
        &self,
        name: &str,
        _params: &Resource,
        _context: &TemplateEngineContext,
    ) -> TemplateOutputStream {
        let err = CoreError::engine(format!(
            "mock engine does not render named templates (requested {name:?})"
        ));
        stream::once(async move { Err(err) }).boxed()
    }
}

/// Replaces `{key}` placeholders with the matching value. Unknown keys stay
/// in place; JSON strings substitute without quotes.
fn substitute(template: &str, values: &BTreeMap<String, Value>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match values.get(key) {
                    Some(Value::String(s)) => rendered.push_str(s),
                    Some(other) => rendered.push_str(&other.to_string()),
                    None => {
                        rendered.push('{');
                        rendered.push_str(key);
                        rendered.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            // Unclosed placeholder, keep the tail literally.
            None => {
                rendered.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    rendered.push_str(rest);
    rendered
}
