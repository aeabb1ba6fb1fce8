//! Normalized audit report model

use serde::{Deserialize, Serialize};

/// Security contract of one HTTP verb on one resource path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSecurity {
    /// HTTP verb (GET, POST, ...)
    #[serde(rename = "method")]
    pub http_method: String,

    /// Authorization mechanism (NONE, AWS_IAM, CUSTOM, COGNITO_USER_POOLS)
    pub authorization_type: String,

    /// Whether callers must present an API key
    pub api_key_required: bool,
}

/// A resource path with at least one audited method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub path: String,
    pub methods: Vec<MethodSecurity>,
}

/// Audit result for one REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiAudit {
    pub api_id: String,

    pub name: String,

    #[serde(rename = "endpoint_type")]
    pub endpoint_types: Vec<String>,

    /// Resources with at least one method left after filtering.
    ///
    /// `None` (key omitted) when nothing qualified; never an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
}

impl ApiAudit {
    /// Iterate over every (resource, method) pair, in report order.
    pub fn methods(&self) -> impl Iterator<Item = (&Resource, &MethodSecurity)> {
        self.resources
            .iter()
            .flatten()
            .flat_map(|resource| resource.methods.iter().map(move |method| (resource, method)))
    }
}

/// One [`ApiAudit`] per API, in provider order
pub type AuditReport = Vec<ApiAudit>;
