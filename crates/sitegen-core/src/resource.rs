//! # Resource
//!
//! A [`Resource`] is a single content unit flowing through the pipeline: an
//! optional text body plus arbitrary named fields (front-matter values, data
//! attributes, whatever the source format carried).
//!
//! Resources are value objects. Pipeline stages never mutate the resource
//! they were handed; they clone it with overrides through [`ResourceBuilder`]
//! and emit the clone downstream. [`Resource::to_builder`] seeds a builder
//! with every field of an existing resource so a stage only states what it
//! changes.

use std::collections::BTreeMap;

use serde_json::Value;

/// A content unit flowing through the site-generation pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    body: Option<String>,
    page: Option<String>,
    fields: BTreeMap<String, Value>,
}

impl Resource {
    /// Starts building a resource from scratch.
    pub fn builder() -> ResourceBuilder {
        ResourceBuilder::default()
    }

    /// Starts building a clone of this resource; unset overrides keep the
    /// original values.
    pub fn to_builder(&self) -> ResourceBuilder {
        ResourceBuilder {
            body: self.body.clone(),
            page: self.page.clone(),
            fields: self.fields.clone(),
        }
    }

    /// The text payload, if the resource has one.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The page identifier assigned by a paginating stage, if any.
    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    /// Looks up a named field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All named fields, in key order.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}

/// Builder for [`Resource`] values.
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder {
    body: Option<String>,
    page: Option<String>,
    fields: BTreeMap<String, Value>,
}

impl ResourceBuilder {
    /// Sets the text payload.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets or clears the page identifier.
    pub fn page(mut self, page: Option<String>) -> Self {
        self.page = page;
        self
    }

    /// Sets a named field, replacing any existing value under that name.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Resource {
        Resource {
            body: self.body,
            page: self.page,
            fields: self.fields,
        }
    }
}
