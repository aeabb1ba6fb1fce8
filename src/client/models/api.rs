//! REST API summary model

/// One deployed REST API as returned by `GetRestApis`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSummary {
    /// API identifier (`restApiId`)
    pub id: String,

    /// Display name
    pub name: String,

    /// Endpoint types from `endpointConfiguration.types` (EDGE, REGIONAL, PRIVATE)
    pub endpoint_types: Vec<String>,
}
