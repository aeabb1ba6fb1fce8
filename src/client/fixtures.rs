//! Test fixtures and builders for API Gateway model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{ApiSummary, RawMethod, RawResource};

// ============================================================================
// ApiSummaryBuilder
// ============================================================================

/// Builder for creating test ApiSummary instances.
///
/// # Example
/// ```ignore
/// let api = ApiSummaryBuilder::new("a1")
///     .name("Shop")
///     .endpoint_type("REGIONAL")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ApiSummaryBuilder {
    id: String,
    name: String,
    endpoint_types: Vec<String>,
}

impl ApiSummaryBuilder {
    /// Create a new builder with the given ID and a REGIONAL endpoint.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("API {}", &id),
            id,
            endpoint_types: vec!["REGIONAL".to_string()],
        }
    }

    /// Set the API name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the endpoint types with a single type.
    pub fn endpoint_type(mut self, endpoint_type: impl Into<String>) -> Self {
        self.endpoint_types = vec![endpoint_type.into()];
        self
    }

    /// Replace the endpoint types.
    pub fn endpoint_types(mut self, types: &[&str]) -> Self {
        self.endpoint_types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Build the ApiSummary.
    pub fn build(self) -> ApiSummary {
        ApiSummary {
            id: self.id,
            name: self.name,
            endpoint_types: self.endpoint_types,
        }
    }
}

// ============================================================================
// RawResourceBuilder
// ============================================================================

/// Builder for creating test RawResource instances.
///
/// A resource built without calling [`method`](Self::method) or
/// [`raw_method`](Self::raw_method) has no `resourceMethods` at all.
///
/// # Example
/// ```ignore
/// let resource = RawResourceBuilder::new("/items")
///     .method("GET", "NONE", false)
///     .method("POST", "AWS_IAM", true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RawResourceBuilder {
    path: String,
    methods: Option<Vec<RawMethod>>,
}

impl RawResourceBuilder {
    /// Create a new builder for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: None,
        }
    }

    /// Add a complete method entry.
    pub fn method(self, http_method: &str, authorization_type: &str, api_key_required: bool) -> Self {
        self.raw_method(RawMethod::new(http_method, authorization_type, api_key_required))
    }

    /// Add a method entry as-is, possibly with missing attributes.
    pub fn raw_method(mut self, method: RawMethod) -> Self {
        self.methods.get_or_insert_with(Vec::new).push(method);
        self
    }

    /// Mark the resource as carrying an empty `resourceMethods` map.
    pub fn empty_methods(mut self) -> Self {
        self.methods = Some(Vec::new());
        self
    }

    /// Build the RawResource.
    pub fn build(self) -> RawResource {
        RawResource {
            path: self.path,
            resource_methods: self.methods,
        }
    }
}
