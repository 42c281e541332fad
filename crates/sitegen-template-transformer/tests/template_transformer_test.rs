use std::sync::Arc;

use futures::StreamExt;
use serde_json::json;

use sitegen_core::mock::MockTemplateEngine;
use sitegen_core::{
    setup_tracing, Environment, PluginContext, Resource, ResourceType, TransformContext,
    Transformer,
};
use sitegen_template_transformer::{setup, TemplateTransformer, TRANSFORMER_NAME};

/// Builds a transform context wired to the given mock engine, registered
/// under the name "mock".
fn mock_context(engine: Arc<MockTemplateEngine>) -> TransformContext {
    mock_context_with_descriptor(engine, PluginContext::new("mock"))
}

fn mock_context_with_descriptor(
    engine: Arc<MockTemplateEngine>,
    descriptor: PluginContext,
) -> TransformContext {
    setup_tracing();
    let mut env = Environment::new();
    env.template_engines.set("mock", engine);
    TransformContext {
        environment: Arc::new(env),
        resource_type: ResourceType {
            template_engine: Some(descriptor),
        },
    }
}

#[tokio::test]
async fn passes_resource_through_when_it_has_no_body() {
    let engine = Arc::new(MockTemplateEngine::new());
    let context = mock_context(engine.clone());

    let source = Resource::builder().field("name", "Bob").build();
    let outputs: Vec<_> = TemplateTransformer::new()
        .transform(source.clone(), &context)
        .collect()
        .await;

    assert_eq!(outputs.len(), 1);
    let passed_through = outputs[0].as_ref().expect("pass-through should succeed");
    assert_eq!(passed_through, &source);

    // The engine must not have been consulted at all.
    assert_eq!(engine.render_calls(), 0);
}

#[tokio::test]
async fn replaces_body_with_rendered_template() {
    let engine = Arc::new(MockTemplateEngine::new());
    let context = mock_context(engine.clone());

    let source = Resource::builder()
        .body("Hello, {name}. {message}")
        .field("name", "Bob")
        .field("message", "How are you?")
        .build();

    let outputs: Vec<_> = TemplateTransformer::new()
        .transform(source, &context)
        .collect()
        .await;

    assert_eq!(outputs.len(), 1);
    let rendered = outputs[0].as_ref().expect("render should succeed");
    assert_eq!(rendered.body(), Some("Hello, Bob. How are you?"));
    assert_eq!(rendered.page(), None);
    // Non-body fields survive the clone.
    assert_eq!(rendered.field("name"), Some(&json!("Bob")));
    assert_eq!(engine.render_calls(), 1);
}

#[tokio::test]
async fn yields_one_resource_per_page_when_template_is_paginated() {
    let engine = Arc::new(MockTemplateEngine::new());
    let context = mock_context(engine);

    let source = Resource::builder()
        .body("Hello, {name}. Page {page}")
        .field("name", "Bob")
        .field("pageCount", 2)
        .build();

    let outputs: Vec<_> = TemplateTransformer::new()
        .transform(source, &context)
        .collect()
        .await;

    assert_eq!(outputs.len(), 2);

    let first = outputs[0].as_ref().expect("page 1 should render");
    assert_eq!(first.body(), Some("Hello, Bob. Page 1"));
    assert_eq!(first.page(), Some("1"));

    let second = outputs[1].as_ref().expect("page 2 should render");
    assert_eq!(second.body(), Some("Hello, Bob. Page 2"));
    assert_eq!(second.page(), Some("2"));
}

#[tokio::test]
async fn surfaces_engine_error_with_its_exact_message() {
    let engine = Arc::new(MockTemplateEngine::new());
    let context = mock_context(engine);

    let source = Resource::builder()
        .body("Empty")
        .field("throwError", "test error")
        .build();

    let outputs: Vec<_> = TemplateTransformer::new()
        .transform(source, &context)
        .collect()
        .await;

    assert_eq!(outputs.len(), 1);
    let err = outputs[0].as_ref().expect_err("render should fail");
    assert_eq!(err.to_string(), "test error");
}

#[tokio::test]
async fn hands_engine_its_own_name_and_options() {
    let engine = Arc::new(MockTemplateEngine::new());
    let descriptor = PluginContext::with_options("mock", json!({ "trim": true }));
    let context = mock_context_with_descriptor(engine.clone(), descriptor);

    let source = Resource::builder().body("x").build();
    let _: Vec<_> = TemplateTransformer::new()
        .transform(source, &context)
        .collect()
        .await;

    let engine_context = engine.last_context().expect("engine should be invoked");
    assert_eq!(engine_context.name, "mock");
    assert_eq!(engine_context.options, json!({ "trim": true }));
}

#[tokio::test]
async fn setup_registers_transformer_under_template() {
    let mut env = Environment::new();
    setup(&mut env);

    assert_eq!(TRANSFORMER_NAME, "template");
    assert!(env.transformers.lookup("template").is_ok());
}

#[tokio::test]
async fn registered_transformer_is_usable_through_the_environment() {
    let engine = Arc::new(MockTemplateEngine::new());

    let mut env = Environment::new();
    env.template_engines.set("mock", engine);
    setup(&mut env);
    let environment = Arc::new(env);

    let context = TransformContext {
        environment: environment.clone(),
        resource_type: ResourceType {
            template_engine: Some(PluginContext::new("mock")),
        },
    };

    let transformer = environment
        .transformers
        .lookup(TRANSFORMER_NAME)
        .expect("transformer should be registered");

    let source = Resource::builder()
        .body("Hi {name}")
        .field("name", "Ada")
        .build();

    let outputs: Vec<_> = transformer.transform(source, &context).collect().await;
    assert_eq!(
        outputs[0].as_ref().expect("render should succeed").body(),
        Some("Hi Ada")
    );
}
